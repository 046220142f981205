//! Property bag and execution template for code-analysis launchers.
//!
//! A [`runner::Runner`] accumulates string properties on top of a fixed set of
//! defaults, then runs a two-phase sequence: resolve the source encoding
//! (falling back to the platform default and logging the decision), and hand
//! the final properties to a [`launcher::Launcher`] exactly once.
//!
//! - **[`core`]**: Pure, deterministic logic (property store, locale parsing,
//!   encoding resolution). No I/O.
//! - **[`io`]**: Environment and settings file access.
//!
//! [`cli`] and [`logging`] back the `sonar-runner` binary.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod launcher;
pub mod logging;
pub mod runner;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod version;
