//! Stable exit codes for buildlint commands.

/// Every manifest passed, or the command has nothing to report.
pub const OK: i32 = 0;
/// At least one rule fired.
pub const VIOLATIONS: i32 = 1;
/// A manifest or the configuration could not be read.
pub const ERROR: i32 = 2;
