//! Storefront CLI
//!
//! Validates storefront settings and prints the configuration each
//! downstream module is bootstrapped with.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Check { settings } => commands::run_check(&settings.settings),
        Commands::Resolve { settings, build } => commands::run_resolve(&settings, &build),
        Commands::Bundle {
            settings,
            build,
            module,
        } => commands::run_bundle(&settings, &build, module.as_deref()),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_writer(std::io::stderr);
    let result = if verbose {
        builder
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .try_init()
    } else {
        builder
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_target(false)
            .try_init()
    };
    result.map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}
