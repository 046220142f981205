//! I/O helpers: environment and settings file access.

pub mod platform;
pub mod settings;
