//! List command
//!
//! Show a product's reviews whose classification lies in a range.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use revguard_core::config::Config;
use revguard_core::query::RangeQueryFilter;
use revguard_core::review::Range;
use revguard_core::types::ProductRef;
use revguard_storage::FileSystemStore;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Product to list reviews for
    #[arg(long, short)]
    pub product: String,

    /// Lower bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub start: f64,

    /// Upper bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub end: f64,

    /// Data directory (overrides configuration)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| config.storage.resolve_data_dir());
    let store = FileSystemStore::new(&data_dir)
        .with_context(|| format!("Failed to open store at {}", data_dir.display()))?;

    let product = ProductRef::new(args.product);
    let range = Range::new(args.start, args.end);
    let reviews = RangeQueryFilter::new(store)
        .find_reviews_in_range(&product, &range)
        .context("Failed to list reviews")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reviews)?);
        return Ok(());
    }

    if reviews.is_empty() {
        println!("No reviews found.");
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Reviews for {} in [{}, {}]:",
            product, range.start_point, range.end_point
        )
        .bold()
        .underline()
    );
    println!();

    for review in &reviews {
        let age = chrono::Utc::now().signed_duration_since(review.created_at);
        let age_str = if age.num_days() > 0 {
            format!("{}d ago", age.num_days())
        } else if age.num_hours() > 0 {
            format!("{}h ago", age.num_hours())
        } else {
            format!("{}m ago", age.num_minutes())
        };

        println!(
            "  {} rating {} range {} {}",
            review.id.to_string().green(),
            review.rating,
            review.range,
            age_str.dimmed()
        );
        if let Some(headline) = &review.headline {
            println!("    {}", headline.bold());
        }
        if !review.comment.is_empty() {
            println!("    {}", review.comment);
        }
    }

    Ok(())
}
