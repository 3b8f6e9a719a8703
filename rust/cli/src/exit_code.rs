//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Unknown or missing mode, or missing mode arguments.
pub const USAGE: i32 = 1;

/// Runtime failure: configuration, plugin loading, I/O.
pub const ERROR: i32 = 2;
