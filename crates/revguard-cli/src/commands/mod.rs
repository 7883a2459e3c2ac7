//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod blacklist;
pub mod config;
pub mod list;
pub mod submit;
pub mod validate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use revguard_core::config::{Config, DEFAULT_CONFIG_PATH};

/// revguard - review submission guard and range retrieval
#[derive(Debug, Parser)]
#[command(name = "revguard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REVGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a review would be admissible
    Validate(validate::ValidateArgs),

    /// Validate and store a review
    Submit(submit::SubmitArgs),

    /// List a product's reviews within a range, newest first
    List(list::ListArgs),

    /// Inspect the configured blacklist
    #[command(subcommand)]
    Blacklist(blacklist::BlacklistCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    // Dispatch to command handler
    match cli.command {
        Commands::Validate(args) => validate::execute(args, &config),
        Commands::Submit(args) => submit::execute(args, &config),
        Commands::List(args) => list::execute(args, &config),
        Commands::Blacklist(cmd) => blacklist::execute(cmd, &config),
        Commands::Config(cmd) => config::execute(cmd, &config_path, &config),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_negative_rating_parses() {
        let cli = Cli::try_parse_from([
            "revguard",
            "validate",
            "--rating",
            "-1",
            "--comment",
            "fine",
        ])
        .unwrap();

        match cli.command {
            Commands::Validate(args) => assert_eq!(args.rating, -1.0),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
