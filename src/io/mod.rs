//! Command-line surface, input sources and error handling

/// Command-line interface and subcommand runner
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Line-oriented input sources
pub mod input;
/// Console spinner for long-running commands
pub mod progress;
