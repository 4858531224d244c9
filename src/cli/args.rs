//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// CNPM settings - inspect and prepare the backend configuration
#[derive(Parser, Debug)]
#[command(name = "cnpm-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved settings (secrets redacted)
    Show(ShowArgs),

    /// Validate the settings
    Check,

    /// Check file names against the upload allow-list
    CheckFile(CheckFileArgs),

    /// Create the upload folder
    Init,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check-file command
#[derive(Parser, Debug)]
pub struct CheckFileArgs {
    /// File names to check (e.g., "slides.pdf")
    #[arg(required = true)]
    pub filenames: Vec<String>,
}
