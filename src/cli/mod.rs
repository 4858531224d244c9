//! CLI module - Command-line interface for the settings.
//!
//! Provides commands for:
//! - `show` - Print resolved settings
//! - `check` - Validate settings
//! - `check-file` - Test upload file names
//! - `init` - Create the upload folder

pub mod args;

pub use args::{Cli, Commands};
