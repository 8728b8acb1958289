//! Elementary cellular automaton. Takes the Wolfram rule number as the
//! first argument, defaulting to rule 150.

use pixel_automata::rules::wolfram::Wolfram;
use pixel_automata::{app, config};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let rule = match std::env::args().nth(1) {
        Some(arg) => config::parse_rule_number(&arg)?,
        None => 150,
    };
    let size = config::grid_size(2)?;
    let ca = Wolfram::new(size.width, size.height, rule);

    app::launch(&format!("Cellular Automaton - Rule {rule}"), Box::new(ca), 120)
}
