//! UI helper functions for terminal output formatting.

use std::io::Write;

pub const USAGE: &str = "Usage:
  sevens internal
  sevens demo
  sevens competition <lib1> [<lib2> ...]";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

pub fn write_usage(err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", USAGE)?;
    writeln!(err, "\nFor full help, run: sevens --help")
}
