//! `internal` mode: built-in random players only.

use std::io::Write;

use sevens_ai::{StrategyKind, create_strategy};
use tracing::info;

use super::{labels, new_game, play_and_report, player_seed, write_roster};
use crate::config::Config;
use crate::error::CliError;

pub fn handle_internal_command(
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut game = new_game(config)?;
    for id in 0..u64::from(config.players) {
        game.register(id, create_strategy(StrategyKind::Random, player_seed(config.seed, id)))?;
    }
    info!(players = config.players, "internal game starting");

    let labels = labels(&game);
    writeln!(out, "Running INTERNAL:")?;
    write_roster(out, &labels)?;
    play_and_report(&mut game, &labels, out, err)?;
    Ok(())
}
