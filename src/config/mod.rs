pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ksa-signup")]
#[command(about = "Validate and mask institutional sign-up form data")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a filled-in form and hand it to the log sink
    Submit {
        /// Path to the TOML form file
        #[arg(short, long)]
        form: String,

        /// Optional TOML file with field limits
        #[arg(short, long)]
        rules: Option<String>,

        /// Only report field issues, do not deliver
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the live-typing mask of a value
    Mask {
        kind: MaskKind,
        value: String,
    },
    /// Check a single value, exits 1 when invalid
    Check {
        kind: CheckKind,
        value: String,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MaskKind {
    TaxId,
    Phone,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CheckKind {
    TaxId,
    Phone,
    Email,
    State,
}
