//! `demo` mode: a fixed mix of random and greedy players.

use std::io::Write;

use sevens_ai::{StrategyKind, create_strategy};

use super::{labels, new_game, play_and_report, player_seed, write_roster};
use crate::config::Config;
use crate::error::CliError;

const LINEUP: [StrategyKind; 4] = [
    StrategyKind::Random,
    StrategyKind::Random,
    StrategyKind::Greedy,
    StrategyKind::Greedy,
];

pub fn handle_demo_command(
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut game = new_game(config)?;
    for (id, kind) in (0u64..).zip(LINEUP) {
        game.register(id, create_strategy(kind, player_seed(config.seed, id)))?;
    }

    let labels = labels(&game);
    writeln!(out, "Running DEMO:")?;
    write_roster(out, &labels)?;
    play_and_report(&mut game, &labels, out, err)?;
    Ok(())
}
