//! Config command
//!
//! Manage revguard configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::Path;

use revguard_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, path: &Path, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(path, config, json),
        ConfigCommand::Init { force } => init_config(path, force),
    }
}

fn show_config(path: &Path, config: &Config, as_json: bool) -> Result<()> {
    use colored::Colorize;

    if as_json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if path.exists() {
        println!("{}", path.display().to_string().dimmed());
    } else {
        println!("{}", "(defaults, no configuration file)".dimmed());
    }
    println!();
    println!("{}", config.to_toml_string()?);
    println!(
        "{} {}",
        "data_dir:".dimmed(),
        config.storage.resolve_data_dir().display()
    );

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if path.exists() && !force {
        eprintln!(
            "{} Configuration already exists at {}. Use {} to overwrite.",
            "⚠".yellow(),
            path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}
