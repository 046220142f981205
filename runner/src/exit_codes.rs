//! Stable exit codes for the `sonar-runner` binary.

/// Properties resolved and the launcher completed.
pub const OK: i32 = 0;
/// Invalid arguments or settings, or the launcher failed.
pub const FAILURE: i32 = 1;
