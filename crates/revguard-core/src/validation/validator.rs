//! Rating and comment validation for review submissions

use super::blacklist::{BlacklistProvider, FileBlacklist};
use super::cache::CachedBlacklist;
use crate::config::{BlacklistMode, ValidationConfig};
use crate::error::{ReviewGuardError, Result};
use crate::review::ReviewDraft;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Lowest admissible rating (inclusive)
pub const MIN_RATING: f64 = 0.0;

/// Validator for review submissions
#[derive(Clone)]
pub struct ReviewValidator {
    blacklist: Arc<dyn BlacklistProvider>,
}

impl ReviewValidator {
    /// Create a validator screening comments with `blacklist`
    pub fn new(blacklist: impl BlacklistProvider + 'static) -> Self {
        Self {
            blacklist: Arc::new(blacklist),
        }
    }

    /// Create a validator with a shared blacklist provider
    pub fn with_provider(blacklist: Arc<dyn BlacklistProvider>) -> Self {
        Self { blacklist }
    }

    /// Build the validator described by configuration
    pub fn from_config(config: &ValidationConfig) -> Result<Self> {
        let validator = match config.blacklist_mode {
            BlacklistMode::Fresh => Self::new(FileBlacklist::new(&config.blacklist_path)),
            BlacklistMode::Cached => {
                let interval = match config.refresh_interval_secs {
                    0 => None,
                    secs => Some(Duration::from_secs(secs)),
                };
                Self::new(CachedBlacklist::load(&config.blacklist_path, interval)?)
            }
        };
        Ok(validator)
    }

    /// Check the rating alone.
    ///
    /// Anything not `>= 0`, including NaN, is rejected.
    pub fn validate_rating(rating: f64) -> Result<bool> {
        if rating >= MIN_RATING {
            debug!("Rating {} accepted", rating);
            Ok(true)
        } else {
            debug!("Rating {} rejected", rating);
            Err(ReviewGuardError::InvalidRating { rating })
        }
    }

    /// Check the comment alone against the blacklist
    pub fn validate_comment(&self, comment: &str) -> Result<bool> {
        match self.blacklist.find_match(comment)? {
            Some(index) => {
                debug!("Comment rejected by blacklist entry #{}", index);
                Err(ReviewGuardError::ProfanityDetected)
            }
            None => Ok(true),
        }
    }

    /// Validate a candidate review. `Ok(true)` means it may be persisted.
    ///
    /// The rating is checked first; a bad rating skips the blacklist scan.
    pub fn validate_review(&self, rating: f64, comment: &str) -> Result<bool> {
        let rating_ok = Self::validate_rating(rating)?;
        let comment_ok = self.validate_comment(comment)?;
        Ok(rating_ok && comment_ok)
    }

    /// Validate a draft
    pub fn validate_draft(&self, draft: &ReviewDraft) -> Result<bool> {
        self.validate_review(draft.rating, &draft.comment)
    }
}

impl std::fmt::Debug for ReviewValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewValidator").finish_non_exhaustive()
    }
}
