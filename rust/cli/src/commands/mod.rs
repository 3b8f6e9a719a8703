//! Handlers for the three game modes.
//!
//! Each handler registers its players, runs one full game and prints the
//! results. Output streams are passed in; errors propagate as [`CliError`].

mod competition;
mod demo;
mod internal;

pub use competition::handle_competition_command;
pub use demo::handle_demo_command;
pub use internal::handle_internal_command;

use std::io::Write;

use sevens_engine::engine::Engine;
use sevens_engine::errors::GameError;
use sevens_engine::game::{Game, GameOutcome};
use sevens_engine::logger::RoundLogger;
use sevens_engine::player::PlayerId;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{Standing, format_score, format_standing, rank_players};
use crate::ui;

/// Engine and game set up from the resolved configuration.
pub(crate) fn new_game(config: &Config) -> Result<Game, CliError> {
    let mut game = Game::new(Engine::new(config.seed))
        .with_threshold(config.threshold)
        .with_round_limit(config.max_rounds);
    if let Some(path) = &config.round_log {
        game = game.with_logger(RoundLogger::create(path)?);
    }
    Ok(game)
}

/// Per-player seed for built-in random strategies, derived from the game seed.
pub(crate) fn player_seed(seed: Option<u64>, id: PlayerId) -> Option<u64> {
    seed.map(|s| s ^ (id + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

pub(crate) fn labels(game: &Game) -> Vec<(PlayerId, String)> {
    game.participants()
        .iter()
        .map(|p| (p.id, p.label()))
        .collect()
}

fn label_of(labels: &[(PlayerId, String)], id: PlayerId) -> &str {
    labels
        .iter()
        .find(|(pid, _)| *pid == id)
        .map(|(_, label)| label.as_str())
        .unwrap_or("?")
}

pub(crate) fn write_roster(out: &mut dyn Write, labels: &[(PlayerId, String)]) -> Result<(), CliError> {
    for (seat, (_, label)) in labels.iter().enumerate() {
        writeln!(out, "  P{} -> {}", seat, label)?;
    }
    Ok(())
}

/// Runs the game to completion and prints final scores and standings.
///
/// A game cut short by the round limit is still reported, with a warning.
pub(crate) fn play_and_report(
    game: &mut Game,
    labels: &[(PlayerId, String)],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Vec<Standing>, CliError> {
    let GameOutcome { scores, rounds } = match game.run() {
        Ok(outcome) => outcome,
        Err(GameError::RoundLimit(rounds)) => {
            ui::display_warning(
                err,
                &format!(
                    "no player reached {} points within {} rounds; reporting current scores",
                    game.threshold(),
                    rounds
                ),
            )?;
            GameOutcome {
                scores: game.scores().entries().to_vec(),
                rounds,
            }
        }
        Err(e) => return Err(e.into()),
    };

    writeln!(out, "\nFinal scores after {} rounds:", rounds)?;
    for &(id, score) in &scores {
        writeln!(out, "{}", format_score(label_of(labels, id), score))?;
    }

    let standings = rank_players(&scores);
    writeln!(out, "\nResults (lower pts = better):")?;
    for standing in &standings {
        writeln!(out, "{}", format_standing(standing, label_of(labels, standing.player_id)))?;
    }
    Ok(standings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_seeds_differ_per_seat() {
        assert_eq!(player_seed(None, 0), None);
        let a = player_seed(Some(1), 0);
        let b = player_seed(Some(1), 1);
        assert!(a.is_some() && a != b);
        assert_eq!(player_seed(Some(1), 1), b);
    }
}
