//! CNPM settings - CLI entry point
//!
//! Loads the process-wide settings and dispatches to a command.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cnpm_config::{
    cli::{Cli, Commands},
    commands,
    config::settings,
    errors::AppResult,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> AppResult<()> {
    let settings = settings()?;
    tracing::debug!("Configuration loaded");

    match command {
        Commands::Show(args) => commands::show::execute(args, settings),
        Commands::Check => commands::check::execute(settings),
        Commands::CheckFile(args) => commands::check::execute_files(args, settings),
        Commands::Init => commands::init::execute(settings),
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
