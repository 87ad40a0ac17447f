//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Storefront - validate settings and assemble module configuration
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Location of the base settings document
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SettingsArgs {
    /// Settings document (.json, .toml, .yaml)
    #[arg(short, long, env = "STOREFRONT_SETTINGS")]
    pub settings: PathBuf,
}

/// Build flags layered over the environment
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildArgs {
    /// Treat this as a production build
    #[arg(long)]
    pub production: bool,

    /// Enable editor mode
    #[arg(long)]
    pub editor: bool,

    /// Preview overrides file, read only in editor mode
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Fail instead of falling back when the preview cannot be read
    #[arg(long, requires = "preview")]
    pub require_preview: bool,

    /// Preview timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub preview_timeout_ms: u64,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load and validate a settings document
    Check {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Print the resolved settings model as JSON
    ///
    /// Environment and preview overrides are applied the same way as for
    /// `bundle`.
    Resolve {
        #[command(flatten)]
        settings: SettingsArgs,

        #[command(flatten)]
        build: BuildArgs,
    },

    /// Print the configuration bundle for every module as JSON
    ///
    /// Examples:
    ///   storefront bundle -s settings.json --production
    ///   storefront bundle -s settings.json --editor --preview preview.json
    Bundle {
        #[command(flatten)]
        settings: SettingsArgs,

        #[command(flatten)]
        build: BuildArgs,

        /// Print only this module's configuration
        #[arg(short, long)]
        module: Option<String>,
    },
}
