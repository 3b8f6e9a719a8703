//! `competition` mode: strategies loaded from shared libraries.

use std::io::Write;
use std::path::PathBuf;

use sevens_ai::Strategy;
use sevens_ai::loader::load_strategy;

use super::{labels, new_game, play_and_report};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::rank_of;
use crate::ui;

/// Loads every library in order and seats its strategy with id = position.
///
/// The first library that fails to load aborts the whole run. The argument
/// parser guarantees `libs` is non-empty.
pub fn handle_competition_command(
    libs: &[PathBuf],
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut game = new_game(config)?;
    for (id, lib) in (0u64..).zip(libs) {
        writeln!(out, "Loading strategy from {}...", lib.display())?;
        let strategy = load_strategy(lib)?;
        let label = format!("{}-{}", strategy.name(), id);
        game.register(id, Box::new(strategy))?;
        writeln!(out, "Registered {} successfully.", label)?;
    }
    if libs.len() == 1 {
        ui::display_warning(err, "only one player registered")?;
    }

    let labels = labels(&game);
    writeln!(out, "\nStarting competition with {} players...", labels.len())?;
    let standings = play_and_report(&mut game, &labels, out, err)?;

    writeln!(out, "\nCompetition Results:")?;
    for (id, label) in &labels {
        let rank = rank_of(&standings, *id).unwrap_or(0);
        writeln!(out, "  {} -> Final Rank {}", label, rank)?;
    }
    Ok(())
}
