//! Spatial rock-paper-scissors. Optional arguments: `diagonal` restricts
//! neighbor sampling to diagonals, `triangle` seeds three single cells
//! instead of a random scatter.

use pixel_automata::rules::rps::{Rps, Sampling};
use pixel_automata::{app, config};

const SCATTER_CELLS: usize = 50;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sampling = if args.iter().any(|a| a == "diagonal") {
        Sampling::Diagonal
    } else {
        Sampling::Any
    };

    let size = config::grid_size(4)?;
    let mut game = Rps::new(size.width, size.height, sampling, rand::random());
    if args.iter().any(|a| a == "triangle") {
        game.seed_triangle();
    } else {
        game.seed_random(SCATTER_CELLS);
    }

    app::launch("Rock Paper Scissors", Box::new(game), 120)
}
