//! # Sevens CLI Library
//!
//! Command-line front end for the Sevens engine: runs one full game in one
//! of three modes and prints the ranked results.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the selected mode.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["sevens", "demo", "--seed", "42"];
//! let code = sevens_cli::run(args, &mut io::sink(), &mut io::sink());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Modes
//!
//! - `internal`: built-in random players (count from configuration)
//! - `demo`: two random and two greedy players
//! - `competition <lib>...`: players loaded from shared libraries

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;

use cli::{Commands, SevensCli};
use commands::{handle_competition_command, handle_demo_command, handle_internal_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for game output (typically `stdout`)
/// * `err` - Output stream for usage and error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `1` for usage errors, `2` for runtime errors
///
/// # Example
///
/// ```
/// use std::io;
/// let mut err = Vec::new();
/// let code = sevens_cli::run(vec!["sevens", "tournament"], &mut io::sink(), &mut err);
/// assert_eq!(code, 1);
/// assert!(String::from_utf8(err).unwrap().contains("Usage:"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SevensCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    if ui::write_usage(err).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::USAGE
                }
            };
        }
    };

    let resolved = match config::resolve(&cli.overrides()) {
        Ok(resolved) => resolved,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::from(e).to_string());
            return exit_code::ERROR;
        }
    };
    let config = resolved.config;
    tracing::debug!(?config, sources = ?resolved.sources, "configuration resolved");

    let result = match &cli.cmd {
        Commands::Internal => handle_internal_command(&config, out, err),
        Commands::Demo => handle_demo_command(&config, out, err),
        Commands::Competition { libs } => handle_competition_command(libs, &config, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
