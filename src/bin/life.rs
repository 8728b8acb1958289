//! Conway's Game of Life seeded with a centered block of live cells.

use pixel_automata::rules::life::{GameRules, Life};
use pixel_automata::{app, config};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let size = config::grid_size(4)?;
    let mut life = Life::new(size.width, size.height, GameRules::conway());
    life.seed_center_block();

    app::launch("Game of Life", Box::new(life), 30)
}
