//! Validate command
//!
//! Check a candidate review without storing it.

use anyhow::{Context, Result};
use clap::Args;

use revguard_core::config::Config;
use revguard_core::validation::ReviewValidator;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Numeric rating (must be zero or greater)
    #[arg(long, allow_negative_numbers = true)]
    pub rating: f64,

    /// Review comment text
    #[arg(long, default_value = "")]
    pub comment: String,
}

/// Execute the validate command
pub fn execute(args: ValidateArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let validator = ReviewValidator::from_config(&config.validation)
        .context("Failed to set up validator")?;

    if let Err(err) = validator.validate_review(args.rating, &args.comment) {
        let context = if err.is_rejection() {
            "Review rejected"
        } else {
            "Validation could not complete"
        };
        return Err(anyhow::Error::new(err).context(context));
    }

    println!("{} Review is admissible.", "✓".green());
    Ok(())
}
