//! Blacklist command
//!
//! Inspect the configured blacklist file.

use anyhow::{Context, Result};
use clap::Subcommand;

use revguard_core::config::Config;
use revguard_core::validation::{fingerprint, FileBlacklist};

/// Blacklist subcommands
#[derive(Debug, Subcommand)]
pub enum BlacklistCommand {
    /// Load the blacklist and report its size and fingerprint
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the blacklist command
pub fn execute(cmd: BlacklistCommand, config: &Config) -> Result<()> {
    match cmd {
        BlacklistCommand::Check { json } => check_blacklist(config, json),
    }
}

fn check_blacklist(config: &Config, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let blacklist = FileBlacklist::new(&config.validation.blacklist_path);
    let entries = blacklist
        .load_all()
        .context("Blacklist could not be loaded")?;
    let fingerprint = fingerprint(entries.as_slice());

    if as_json {
        let report = serde_json::json!({
            "path": blacklist.path(),
            "entries": entries.len(),
            "fingerprint": fingerprint,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} ({} entries, fingerprint {})",
        "✓".green(),
        blacklist.path().display(),
        entries.len(),
        fingerprint.cyan()
    );
    Ok(())
}
