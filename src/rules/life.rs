//! Conway's Game of Life.
//!
//! Standard rules:
//! 1. Any live cell with fewer than two live neighbors dies (underpopulation)
//! 2. Any live cell with two or three live neighbors lives (survival)
//! 3. Any live cell with more than three live neighbors dies (overpopulation)
//! 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
//!
//! Interior cells count the full Moore neighborhood. Border cells use a
//! reduced, per-case neighbor set (see [`live_neighbors`]) instead of a torus
//! wrap; the demo's steady state along the window edges depends on that
//! enumeration.

use crate::automaton::Automaton;
use crate::grid::Grid;
use crate::palette::Pixel;

pub const DEAD_COLOR: Pixel = Pixel::rgb(0xff, 0xff, 0xff);
pub const ALIVE_COLOR: Pixel = Pixel::rgb(0x40, 0x40, 0x40);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

/// Life-like rule parameters.
#[derive(Debug, Clone, Copy)]
pub struct GameRules {
    /// Minimum neighbors for a live cell to survive
    pub survival_min: u32,
    /// Maximum neighbors for a live cell to survive
    pub survival_max: u32,
    /// Number of neighbors for a dead cell to become alive
    pub birth_count: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        // Classic Conway's Game of Life rules
        Self {
            survival_min: 2,
            survival_max: 3,
            birth_count: 3,
        }
    }
}

impl GameRules {
    pub fn new(survival_min: u32, survival_max: u32, birth_count: u32) -> Self {
        Self {
            survival_min,
            survival_max,
            birth_count,
        }
    }

    /// Conway's classic Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::default()
    }

    /// HighLife variant (B6/S23) - has a self-replicating pattern
    pub fn high_life() -> Self {
        Self {
            survival_min: 2,
            survival_max: 3,
            birth_count: 6,
        }
    }

    /// Day & Night variant approximated as B3/S3-8
    pub fn day_and_night() -> Self {
        Self {
            survival_min: 3,
            survival_max: 8,
            birth_count: 3,
        }
    }
}

/// Small seed patterns.
pub enum Pattern {
    /// A period-2 oscillator, placed horizontally
    Blinker,
    /// A period-2 oscillator
    Toad,
    /// A 2x2 still life
    Block,
    /// A diagonal spaceship
    Glider,
}

impl Pattern {
    /// Cell offsets relative to the anchor position.
    fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Pattern::Blinker => &[(-1, 0), (0, 0), (1, 0)],
            Pattern::Toad => &[(-1, 0), (0, 0), (1, 0), (-2, 1), (-1, 1), (0, 1)],
            Pattern::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        }
    }
}

/// Live-neighbor count with the reduced border neighborhoods.
///
/// Interior cells sum all eight neighbors. A border cell only counts the
/// enumerated inward neighbor for each edge it touches, plus the inward
/// diagonal when it sits in a corner; everything beyond the border behaves
/// as permanently dead.
fn live_neighbors(grid: &Grid<Cell>, x: usize, y: usize) -> u32 {
    let w = grid.width();
    let h = grid.height();
    let alive = |x: usize, y: usize| (grid.get(x, y) == Cell::Alive) as u32;

    if x > 0 && y > 0 && x < w - 1 && y < h - 1 {
        return alive(x - 1, y - 1)
            + alive(x, y - 1)
            + alive(x + 1, y - 1)
            + alive(x + 1, y)
            + alive(x + 1, y + 1)
            + alive(x, y + 1)
            + alive(x - 1, y)
            + alive(x - 1, y + 1);
    }

    let mut count = 0;
    // West border
    if x == 0 {
        count += alive(x + 1, y);
    }
    // East border
    if x == w - 1 {
        count += alive(x - 1, y);
    }
    // North border
    if y == 0 {
        count += alive(x, y + 1);
    }
    // South border
    if y == h - 1 {
        count += alive(x, y - 1);
    }
    // Corners additionally count their inward diagonal
    if x == 0 && y == 0 {
        count += alive(x + 1, y + 1);
    }
    if x == 0 && y == h - 1 {
        count += alive(x + 1, y - 1);
    }
    if x == w - 1 && y == 0 {
        count += alive(x - 1, y + 1);
    }
    if x == w - 1 && y == h - 1 {
        count += alive(x - 1, y - 1);
    }
    count
}

fn transition(rules: &GameRules, cell: Cell, neighbors: u32) -> Cell {
    match cell {
        Cell::Alive if neighbors < rules.survival_min || neighbors > rules.survival_max => {
            Cell::Dead
        }
        Cell::Dead if neighbors == rules.birth_count => Cell::Alive,
        unchanged => unchanged,
    }
}

pub struct Life {
    grid: Grid<Cell>,
    rules: GameRules,
}

impl Life {
    pub fn new(width: usize, height: usize, rules: GameRules) -> Self {
        Self {
            grid: Grid::new(width, height),
            rules,
        }
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Fills the middle half of the grid with live cells, the demo's default
    /// start state.
    pub fn seed_center_block(&mut self) {
        let dx = self.grid.width() / 4;
        let dy = self.grid.height() / 4;
        for y in dy..self.grid.height() - dy {
            for x in dx..self.grid.width() - dx {
                self.grid.set(x, y, Cell::Alive);
            }
        }
    }

    /// Places a pattern anchored at (x, y); cells falling outside the grid
    /// are skipped.
    pub fn place(&mut self, pattern: &Pattern, x: usize, y: usize) {
        let w = self.grid.width() as isize;
        let h = self.grid.height() as isize;
        for &(dx, dy) in pattern.offsets() {
            let px = x as isize + dx;
            let py = y as isize + dy;
            if (0..w).contains(&px) && (0..h).contains(&py) {
                self.grid.set(px as usize, py as usize, Cell::Alive);
            }
        }
    }

    /// One full generation: every cell is read from the current buffer,
    /// written to the next, then the buffers swap.
    pub fn step(&mut self) {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let next = transition(
                    &self.rules,
                    self.grid.get(x, y),
                    live_neighbors(&self.grid, x, y),
                );
                self.grid.set_next(x, y, next);
            }
        }
        self.grid.commit();
    }
}

impl Automaton for Life {
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
        for (pixel, cell) in frame.iter_mut().zip(self.grid.cells()) {
            *pixel = match cell {
                Cell::Dead => DEAD_COLOR,
                Cell::Alive => ALIVE_COLOR,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_cells(life: &Life) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..life.grid.height() {
            for x in 0..life.grid.width() {
                if life.grid.get(x, y) == Cell::Alive {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn block_is_a_still_life() {
        let mut life = Life::new(8, 8, GameRules::conway());
        life.place(&Pattern::Block, 3, 3);
        let before = live_cells(&life);
        for _ in 0..10 {
            life.step();
        }
        assert_eq!(live_cells(&life), before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        // Also exercises buffer isolation: updating cells in place during the
        // sweep would kill the whole line in one step instead of rotating it.
        let mut life = Life::new(7, 7, GameRules::conway());
        life.place(&Pattern::Blinker, 3, 3);
        let horizontal = live_cells(&life);
        assert_eq!(horizontal, vec![(2, 3), (3, 3), (4, 3)]);

        life.step();
        assert_eq!(live_cells(&life), vec![(3, 2), (3, 3), (3, 4)]);

        life.step();
        assert_eq!(live_cells(&life), horizontal);
    }

    #[test]
    fn corner_counts_two_edges_plus_diagonal() {
        let mut life = Life::new(5, 5, GameRules::conway());
        life.grid.set(1, 0, Cell::Alive);
        life.grid.set(0, 1, Cell::Alive);
        life.grid.set(1, 1, Cell::Alive);
        assert_eq!(live_neighbors(life.grid(), 0, 0), 3);
        life.step();
        // Three contributions birth the corner cell.
        assert_eq!(life.grid.get(0, 0), Cell::Alive);
    }

    #[test]
    fn edge_cell_sees_only_its_inward_neighbor() {
        let mut life = Life::new(5, 5, GameRules::conway());
        // Diagonal and along-edge neighbors of (0, 2) that the reduced
        // neighborhood ignores.
        life.grid.set(0, 1, Cell::Alive);
        life.grid.set(0, 3, Cell::Alive);
        life.grid.set(1, 1, Cell::Alive);
        life.grid.set(1, 3, Cell::Alive);
        assert_eq!(live_neighbors(life.grid(), 0, 2), 0);
        life.grid.set(1, 2, Cell::Alive);
        assert_eq!(live_neighbors(life.grid(), 0, 2), 1);
    }

    #[test]
    fn high_life_births_on_six() {
        let mut life = Life::new(5, 5, GameRules::high_life());
        for &(x, y) in &[(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (2, 3)] {
            life.grid.set(x, y, Cell::Alive);
        }
        assert_eq!(live_neighbors(life.grid(), 2, 2), 6);
        life.step();
        assert_eq!(life.grid.get(2, 2), Cell::Alive);
    }
}
