//! Langton's ant. Takes the turn-rule string ("RL", "RRLL", ...) as the
//! first argument and an initial heading (N/E/S/W) as the second.

use pixel_automata::rules::ant::{Heading, Langton, StateTable};
use pixel_automata::{app, config};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let rules = args.get(1).map(String::as_str).unwrap_or("RL");
    let heading = match args.get(2) {
        Some(arg) => Heading::parse(arg)?,
        None => Heading::North,
    };

    let table = StateTable::from_rules(rules, rand::random())?;
    table.log_summary();

    let size = config::grid_size(4)?;
    let ant = Langton::new(size.width, size.height, table, heading);

    app::launch("Langton's Ant", Box::new(ant), 120)
}
