//! Review data models

use crate::types::{ProductRef, ReviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted product review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review identifier
    pub id: ReviewId,
    /// Product this review belongs to
    pub product: ProductRef,
    /// Numeric rating
    pub rating: f64,
    /// Optional short headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Free-text comment
    pub comment: String,
    /// Range-classification value, matched by range queries
    pub range: f64,
    /// When the review was created
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Materialize a draft into a review stamped with the current time
    pub fn from_draft(draft: ReviewDraft) -> Self {
        Self {
            id: ReviewId::new(),
            product: draft.product,
            rating: draft.rating,
            headline: draft.headline,
            comment: draft.comment,
            range: draft.range,
            created_at: Utc::now(),
        }
    }
}

/// A candidate review that has not been validated or stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub product: ProductRef,
    pub rating: f64,
    #[serde(default)]
    pub headline: Option<String>,
    pub comment: String,
    pub range: f64,
}

impl ReviewDraft {
    /// Create a draft for a product
    pub fn new(product: ProductRef, rating: f64, comment: impl Into<String>) -> Self {
        Self {
            product,
            rating,
            headline: None,
            comment: comment.into(),
            range: 0.0,
        }
    }

    /// Set the headline
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    /// Set the range-classification value
    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }
}
