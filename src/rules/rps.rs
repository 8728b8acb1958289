//! Stochastic rock-paper-scissors spatial game.
//!
//! Every tick each cell samples one randomly-offset neighbor and fights it:
//! wins grow the cell's strength toward a cap, losses drain it, and a cell
//! drained to nothing is captured by the sampled neighbor's species. Empty
//! cells adopt the first occupied neighbor they sample. Runs are only
//! reproducible when the sampler is built from a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::automaton::Automaton;
use crate::boundary::reflect_into;
use crate::grid::Grid;
use crate::palette::Pixel;

pub const STRENGTH_CAP: u8 = 5;

pub const EMPTY_COLOR: Pixel = Pixel::rgb(0xff, 0xff, 0xff);
pub const ROCK_COLOR: Pixel = Pixel::rgb(0x40, 0x40, 0x40);
pub const PAPER_COLOR: Pixel = Pixel::rgb(0x8c, 0x8c, 0x8c);
pub const SCISSOR_COLOR: Pixel = Pixel::rgb(0xd9, 0xd9, 0xd9);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Rock,
    Paper,
    Scissor,
}

impl Species {
    /// Cyclic dominance; facing the same species counts as a win.
    pub fn beats(self, other: Species) -> bool {
        matches!(
            (self, other),
            (Species::Scissor, Species::Paper)
                | (Species::Paper, Species::Rock)
                | (Species::Rock, Species::Scissor)
        ) || self == other
    }

    fn color(self) -> Pixel {
        match self {
            Species::Rock => ROCK_COLOR,
            Species::Paper => PAPER_COLOR,
            Species::Scissor => SCISSOR_COLOR,
        }
    }
}

/// A grid cell: unoccupied, or a species holding `1..=STRENGTH_CAP`
/// strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub species: Option<Species>,
    pub strength: u8,
}

/// Which neighbor offsets the sampler may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Offsets from {-1, 0, 1} on each axis; the (0, 0) pair is nudged to
    /// the southern neighbor so a cell never fights itself.
    Any,
    /// Diagonal neighbors only, which gives the fronts a checkerboard grain.
    Diagonal,
}

pub struct Rps {
    grid: Grid<Cell>,
    sampling: Sampling,
    rng: StdRng,
}

impl Rps {
    pub fn new(width: usize, height: usize, sampling: Sampling, seed: u64) -> Self {
        Self {
            grid: Grid::new(width, height),
            sampling,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    fn occupy(&mut self, x: usize, y: usize, species: Species) {
        self.grid.set(
            x,
            y,
            Cell {
                species: Some(species),
                strength: 1,
            },
        );
    }

    /// Seeds one cell of each species at the corners of a centered triangle.
    pub fn seed_triangle(&mut self) {
        let cx = self.grid.width() / 2;
        let cy = self.grid.height() / 2;
        let dx = self.grid.width() / 4;
        let dy = self.grid.height() / 4;
        self.occupy(cx - dx, cy - dy, Species::Rock);
        self.occupy(cx + dx, cy - dy, Species::Paper);
        self.occupy(cx, cy + dy, Species::Scissor);
    }

    /// Scatters `cells` random cells of random species across the grid.
    pub fn seed_random(&mut self, cells: usize) {
        for _ in 0..cells {
            let x = self.rng.gen_range(0..self.grid.width());
            let y = self.rng.gen_range(0..self.grid.height());
            let species = match self.rng.gen_range(0..3) {
                0 => Species::Rock,
                1 => Species::Paper,
                _ => Species::Scissor,
            };
            self.occupy(x, y, species);
        }
    }

    fn sample_offset(&mut self) -> (isize, isize) {
        match self.sampling {
            Sampling::Any => {
                const D: [isize; 3] = [-1, 0, 1];
                let dx = D[self.rng.gen_range(0..3)];
                let mut dy = D[self.rng.gen_range(0..3)];
                if dx == 0 && dy == 0 {
                    dy = 1;
                }
                (dx, dy)
            }
            Sampling::Diagonal => {
                const D: [isize; 2] = [-1, 1];
                (D[self.rng.gen_range(0..2)], D[self.rng.gen_range(0..2)])
            }
        }
    }

    fn next_cell(&mut self, x: usize, y: usize) -> Cell {
        let (dx, dy) = self.sample_offset();
        // Offsets that leave the grid reflect to the second-to-last index.
        let nx = reflect_into(x as isize + dx, self.grid.width());
        let ny = reflect_into(y as isize + dy, self.grid.height());

        let current = self.grid.get(x, y);
        let neighbor = self.grid.get(nx, ny);

        let Some(neighbor_species) = neighbor.species else {
            return current;
        };

        let mut next = current;
        match current.species {
            None => {
                next.species = Some(neighbor_species);
                next.strength = 1;
            }
            Some(species) if species.beats(neighbor_species) => {
                next.strength = (next.strength + 1).min(STRENGTH_CAP);
            }
            Some(_) if current.strength <= 1 => {
                // Drained: the sampled neighbor captures the cell.
                next.species = Some(neighbor_species);
                next.strength = 1;
            }
            Some(_) => {
                next.strength -= 1;
            }
        }
        next
    }

    /// One generation: every cell fights once, reading only pre-sweep state.
    pub fn step(&mut self) {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let next = self.next_cell(x, y);
                self.grid.set_next(x, y, next);
            }
        }
        self.grid.commit();
    }
}

impl Automaton for Rps {
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
            *pixel = match cell.species {
                None => EMPTY_COLOR,
                Some(species) => species.color(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(rps: &mut Rps, species: Species, strength: u8) {
        for y in 0..rps.grid.height() {
            for x in 0..rps.grid.width() {
                rps.grid.set(
                    x,
                    y,
                    Cell {
                        species: Some(species),
                        strength,
                    },
                );
            }
        }
    }

    #[test]
    fn dominance_is_cyclic_and_ties_win() {
        assert!(Species::Scissor.beats(Species::Paper));
        assert!(Species::Paper.beats(Species::Rock));
        assert!(Species::Rock.beats(Species::Scissor));
        assert!(Species::Rock.beats(Species::Rock));
        assert!(!Species::Paper.beats(Species::Scissor));
    }

    #[test]
    fn strength_never_exceeds_the_cap() {
        // Uniform species: every sample is a tie, every tie is a win.
        let mut rps = Rps::new(6, 6, Sampling::Any, 3);
        fill(&mut rps, Species::Rock, STRENGTH_CAP);
        for _ in 0..4 {
            rps.step();
        }
        for cell in rps.grid().cells() {
            assert_eq!(cell.strength, STRENGTH_CAP);
        }
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut rps = Rps::new(8, 6, Sampling::Any, 9);
        for _ in 0..10 {
            rps.step();
        }
        assert!(rps.grid().cells().iter().all(|c| c.species.is_none()));
    }

    #[test]
    fn lone_species_only_spreads_itself() {
        let mut rps = Rps::new(7, 7, Sampling::Any, 21);
        rps.occupy(3, 3, Species::Scissor);
        rps.step();
        for cell in rps.grid().cells() {
            match cell.species {
                None => {}
                Some(species) => {
                    assert_eq!(species, Species::Scissor);
                    assert_eq!(cell.strength, 1);
                }
            }
        }
        assert_eq!(rps.grid().get(3, 3).species, Some(Species::Scissor));
    }

    #[test]
    fn drained_cell_is_captured() {
        // A strength-1 rock surrounded by paper loses whatever it samples.
        let mut rps = Rps::new(5, 5, Sampling::Any, 17);
        fill(&mut rps, Species::Paper, STRENGTH_CAP);
        rps.occupy(2, 2, Species::Rock);
        rps.step();
        assert_eq!(rps.grid().get(2, 2).species, Some(Species::Paper));
        assert_eq!(rps.grid().get(2, 2).strength, 1);
    }

    #[test]
    fn triangle_seeder_places_all_three_species() {
        let mut rps = Rps::new(8, 8, Sampling::Diagonal, 0);
        rps.seed_triangle();
        assert_eq!(rps.grid().get(2, 2).species, Some(Species::Rock));
        assert_eq!(rps.grid().get(6, 2).species, Some(Species::Paper));
        assert_eq!(rps.grid().get(4, 6).species, Some(Species::Scissor));
    }

    #[test]
    fn fixed_seed_replays_identically() {
        let run = |seed: u64| {
            let mut rps = Rps::new(10, 8, Sampling::Any, seed);
            rps.seed_random(12);
            for _ in 0..20 {
                rps.step();
            }
            rps.grid().cells().to_vec()
        };
        assert_eq!(run(5), run(5));
        assert_ne!(run(5), run(6));
    }
}
