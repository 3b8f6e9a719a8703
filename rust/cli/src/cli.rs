//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CliOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "sevens",
    version,
    about = "Sevens card game simulator",
    long_about = "Plays full games of Sevens between built-in or dynamically loaded strategies \
                  and ranks the players by accumulated leftover cards (lower is better)."
)]
pub struct SevensCli {
    /// Seed for dealing and for built-in random players
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Score at which the game ends
    #[arg(long, global = true)]
    pub threshold: Option<u32>,
    /// Append one JSON line per round to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub round_log: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Commands,
}

impl SevensCli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            seed: self.seed,
            threshold: self.threshold,
            round_log: self.round_log.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Built-in random players only
    Internal,
    /// Two random and two greedy players
    Demo,
    /// Players loaded from shared libraries, seated in argument order
    Competition {
        #[arg(required = true, value_name = "LIB")]
        libs: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_follow_the_mode() {
        let cli = SevensCli::try_parse_from(["sevens", "demo", "--seed", "5"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Demo));
        assert_eq!(cli.overrides().seed, Some(5));
    }

    #[test]
    fn competition_requires_a_library() {
        assert!(SevensCli::try_parse_from(["sevens", "competition"]).is_err());
        let cli = SevensCli::try_parse_from(["sevens", "competition", "a.so", "b.so"]).unwrap();
        match cli.cmd {
            Commands::Competition { libs } => assert_eq!(libs.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}
