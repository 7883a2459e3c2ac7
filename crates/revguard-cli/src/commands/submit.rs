//! Submit command
//!
//! Validate a review and store it when admissible.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use revguard_core::config::Config;
use revguard_core::review::ReviewDraft;
use revguard_core::submission::ReviewSubmission;
use revguard_core::types::ProductRef;
use revguard_core::validation::ReviewValidator;
use revguard_storage::FileSystemStore;

/// Arguments for the submit command
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Product the review belongs to
    #[arg(long, short)]
    pub product: String,

    /// Numeric rating (must be zero or greater)
    #[arg(long, allow_negative_numbers = true)]
    pub rating: f64,

    /// Review comment text
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Optional headline
    #[arg(long)]
    pub headline: Option<String>,

    /// Range-classification value stored on the review
    #[arg(long, allow_negative_numbers = true, default_value = "0")]
    pub range: f64,

    /// Data directory (overrides configuration)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Output the stored review as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the submit command
pub fn execute(args: SubmitArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let validator = ReviewValidator::from_config(&config.validation)
        .context("Failed to set up validator")?;

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| config.storage.resolve_data_dir());
    let store = FileSystemStore::new(&data_dir)
        .with_context(|| format!("Failed to open store at {}", data_dir.display()))?;

    let mut draft = ReviewDraft::new(ProductRef::new(args.product), args.rating, args.comment)
        .with_range(args.range);
    if let Some(headline) = args.headline {
        draft = draft.with_headline(headline);
    }

    let review = match ReviewSubmission::new(validator, store).submit(draft) {
        Ok(review) => review,
        Err(err) if err.is_rejection() => {
            return Err(anyhow::Error::new(err).context("Review rejected"))
        }
        Err(err) => return Err(anyhow::Error::new(err).context("Failed to submit review")),
    };
    tracing::info!("Review {} stored under {:?}", review.id, data_dir);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&review)?);
    } else {
        println!("{} Stored review {}", "✓".green(), review.id.to_string().cyan());
    }

    Ok(())
}
