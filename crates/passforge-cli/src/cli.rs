//! CLI structure and command definitions.

use clap::{Args, Parser, Subcommand};
use anyhow::Result;
use passforge_types::{LogLevel, PasswordLength};

#[derive(Parser)]
#[command(name = "passforge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate strong random passwords locally", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress everything but the passwords
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Show password security tips
    Tips,

    /// Show the effective generator settings
    Config {
        /// Write a settings file with the current values if none exists
        #[arg(long)]
        init: bool,
    },

    /// Show version information
    Version,
}

/// Options shared by `passforge` and `passforge generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (8-64)
    #[arg(short, long)]
    pub length: Option<PasswordLength>,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols (!@#$...)
    #[arg(long)]
    pub no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Copy the last password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl Cli {
    /// Log level implied by the global flags.
    pub fn log_level(&self) -> LogLevel {
        if self.debug {
            LogLevel::Debug
        } else if self.verbose {
            LogLevel::Info
        } else if self.quiet {
            LogLevel::Error
        } else {
            LogLevel::Warn
        }
    }

    pub async fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            None => {
                generate::execute(&self.generate, self.quiet).await
            }
            Some(Commands::Generate(args)) => {
                generate::execute(args, self.quiet).await
            }
            Some(Commands::Tips) => {
                tips::execute().await
            }
            Some(Commands::Config { init }) => {
                config::execute(*init).await
            }
            Some(Commands::Version) => {
                version::execute(self.verbose).await
            }
        }
    }
}
