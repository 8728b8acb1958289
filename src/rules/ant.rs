//! Langton's ant, generalized to an arbitrary turn-rule string.
//!
//! A rule string over `L`/`R` defines one machine state per symbol. Every
//! tick the single agent moves one cell in its heading (wrapping at the
//! world edges), advances the state of the cell it lands on, and turns by
//! the direction bound to that new state. `"RL"` is the classic two-color
//! ant.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::automaton::Automaton;
use crate::boundary::wrap_step;
use crate::config::ConfigError;
use crate::grid::Grid;
use crate::palette::{random_state_color, Pixel};

/// Marker color of the agent itself.
pub const AGENT_COLOR: Pixel = Pixel::rgb(0xff, 0x40, 0x40);

const TWO_STATE_COLORS: [Pixel; 2] = [Pixel::rgb(0xff, 0xff, 0xff), Pixel::rgb(0x40, 0x40, 0x40)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Quarter turn.
    pub fn turned(self, turn: Turn) -> Self {
        match (turn, self) {
            (Turn::Right, Heading::North) => Heading::East,
            (Turn::Right, Heading::East) => Heading::South,
            (Turn::Right, Heading::South) => Heading::West,
            (Turn::Right, Heading::West) => Heading::North,
            (Turn::Left, Heading::North) => Heading::West,
            (Turn::Left, Heading::West) => Heading::South,
            (Turn::Left, Heading::South) => Heading::East,
            (Turn::Left, Heading::East) => Heading::North,
        }
    }

    /// One-cell displacement, y growing downward.
    fn delta(self) -> (isize, isize) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    pub fn parse(arg: &str) -> Result<Self, ConfigError> {
        match arg.trim() {
            "N" | "n" => Ok(Heading::North),
            "E" | "e" => Ok(Heading::East),
            "S" | "s" => Ok(Heading::South),
            "W" | "w" => Ok(Heading::West),
            other => Err(ConfigError::BadHeading(other.to_string())),
        }
    }
}

/// One machine state: the color cells of this state are painted with, and
/// the turn the agent makes on entering it.
#[derive(Debug, Clone, Copy)]
pub struct StateDef {
    pub color: Pixel,
    pub turn: Turn,
}

/// Immutable table of machine states; a cell's grid value is its index here.
pub struct StateTable {
    states: Vec<StateDef>,
}

impl StateTable {
    /// Builds the table from a turn-rule string of at least two `L`/`R`
    /// symbols. The two-state table keeps the classic white/dark palette;
    /// larger tables get colors drawn from `seed`.
    pub fn from_rules(rules: &str, seed: u64) -> Result<Self, ConfigError> {
        if rules.len() < 2 {
            return Err(ConfigError::RuleTooShort(rules.len()));
        }
        let mut turns = Vec::with_capacity(rules.len());
        for symbol in rules.chars() {
            turns.push(match symbol {
                'L' | 'l' => Turn::Left,
                'R' | 'r' => Turn::Right,
                other => return Err(ConfigError::BadTurnSymbol(other)),
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let states = turns
            .into_iter()
            .enumerate()
            .map(|(id, turn)| {
                let color = if rules.len() == 2 {
                    TWO_STATE_COLORS[id]
                } else {
                    random_state_color(&mut rng)
                };
                StateDef { color, turn }
            })
            .collect();
        Ok(Self { states })
    }

    /// The classic two-color machine: white turns right, dark turns left.
    pub fn classic() -> Self {
        Self::from_rules("RL", 0).expect("classic rule string is valid")
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn get(&self, state: u8) -> StateDef {
        self.states[state as usize]
    }

    /// Logs one line per state, the startup banner of the demo.
    pub fn log_summary(&self) {
        for (id, state) in self.states.iter().enumerate() {
            let [r, g, b, _] = state.color.0;
            log::info!("state {id}: turn {:?}, color #{r:02x}{g:02x}{b:02x}", state.turn);
        }
    }
}

/// The single mobile agent. Updated in place each tick, synchronously with
/// the cell it lands on.
pub struct Ant {
    pub x: usize,
    pub y: usize,
    pub heading: Heading,
}

pub struct Langton {
    grid: Grid<u8>,
    table: StateTable,
    ant: Ant,
}

impl Langton {
    /// Every cell starts in state 0; the agent starts at the grid center.
    pub fn new(width: usize, height: usize, table: StateTable, heading: Heading) -> Self {
        let grid = Grid::new(width, height);
        let ant = Ant {
            x: width / 2,
            y: height / 2,
            heading,
        };
        Self { grid, table, ant }
    }

    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    pub fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// One tick: move onto the next cell (wrapping at the edges), advance
    /// that cell's state, then turn by the new state's binding. The grid is
    /// touched at exactly one cell, so the update is in place rather than
    /// double-buffered.
    pub fn step(&mut self) {
        let (dx, dy) = self.ant.heading.delta();
        self.ant.x = wrap_step(self.ant.x, dx, self.grid.width());
        self.ant.y = wrap_step(self.ant.y, dy, self.grid.height());

        let state = (self.grid.get(self.ant.x, self.ant.y) + 1) % self.table.len() as u8;
        self.grid.set(self.ant.x, self.ant.y, state);
        self.ant.heading = self.ant.heading.turned(self.table.get(state).turn);
    }
}

impl Automaton for Langton {
    fn width(&self) -> usize {
        self.grid.width()
    }

    fn height(&self) -> usize {
        self.grid.height()
    }

    fn tick(&mut self) {
        self.step();
    }

    fn draw(&self, frame: &mut [Pixel]) {
        for (pixel, &state) in frame.iter_mut().zip(self.grid.cells()) {
            *pixel = self.table.get(state).color;
        }
        frame[self.ant.y * self.grid.width() + self.ant.x] = AGENT_COLOR;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_wraps_at_both_axes() {
        let mut ant = Langton::new(6, 4, StateTable::classic(), Heading::West);
        ant.ant.x = 0;
        ant.ant.y = 0;
        ant.step();
        assert_eq!(ant.ant().x, 5);

        let mut ant = Langton::new(6, 4, StateTable::classic(), Heading::North);
        ant.ant.x = 3;
        ant.ant.y = 0;
        ant.step();
        assert_eq!(ant.ant().y, 3);
    }

    #[test]
    fn classic_ant_first_ten_positions() {
        let mut ant = Langton::new(11, 11, StateTable::classic(), Heading::North);
        let expected = [
            (5, 4),
            (4, 4),
            (4, 5),
            (5, 5),
            (5, 4),
            (6, 4),
            (6, 3),
            (5, 3),
            (5, 4),
            (6, 4),
        ];
        for (i, &(x, y)) in expected.iter().enumerate() {
            ant.step();
            assert_eq!((ant.ant().x, ant.ant().y), (x, y), "move {}", i + 1);
        }
    }

    #[test]
    fn entered_cells_cycle_through_the_state_table() {
        let table = StateTable::from_rules("RRLL", 7).unwrap();
        let mut ant = Langton::new(9, 9, table, Heading::East);
        let (x, y) = (ant.ant().x + 1, ant.ant().y);
        for expected in [1u8, 2, 3, 0, 1] {
            ant.step();
            assert_eq!(ant.grid().get(x, y), expected);
            // Walk one cell back so the next step re-enters the same cell.
            ant.ant.x = x - 1;
            ant.ant.y = y;
            ant.ant.heading = Heading::East;
        }
    }

    #[test]
    fn state_colors_are_reproducible_for_a_seed() {
        let a = StateTable::from_rules("RLLR", 42).unwrap();
        let b = StateTable::from_rules("RLLR", 42).unwrap();
        for state in 0..a.len() as u8 {
            assert_eq!(a.get(state).color, b.get(state).color);
            assert_eq!(a.get(state).turn, b.get(state).turn);
        }
    }

    #[test]
    fn rule_strings_are_validated() {
        assert!(matches!(
            StateTable::from_rules("R", 0),
            Err(ConfigError::RuleTooShort(1))
        ));
        assert!(matches!(
            StateTable::from_rules("RLX", 0),
            Err(ConfigError::BadTurnSymbol('X'))
        ));
    }

    #[test]
    fn heading_parse_accepts_compass_letters() {
        assert_eq!(Heading::parse("N").unwrap(), Heading::North);
        assert_eq!(Heading::parse("w").unwrap(), Heading::West);
        assert!(Heading::parse("up").is_err());
    }
}
