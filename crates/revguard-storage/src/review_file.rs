//! On-disk review envelope

use revguard_core::error::{ReviewGuardError, Result};
use revguard_core::review::Review;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current schema version
pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

/// Review file format with schema version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewFile {
    /// Schema version
    pub schema_version: String,
    /// The review data
    pub review: Review,
    /// Extra fields for forward compatibility
    #[serde(flatten, default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ReviewFile {
    /// Wrap a review with the current schema version
    pub fn new(review: Review) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            review,
            extra: HashMap::new(),
        }
    }

    /// Unwrap the review, rejecting files from another major version
    pub fn into_review(self) -> Result<Review> {
        let major = self.schema_version.split('.').next().unwrap_or_default();
        let current = CURRENT_SCHEMA_VERSION.split('.').next().unwrap_or_default();
        if major != current {
            return Err(ReviewGuardError::UnsupportedSchemaVersion(self.schema_version));
        }
        Ok(self.review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revguard_core::review::ReviewDraft;
    use revguard_core::types::ProductRef;

    fn review() -> Review {
        Review::from_draft(ReviewDraft::new(ProductRef::from("p"), 3.0, "ok"))
    }

    #[test]
    fn test_minor_versions_accepted() {
        let mut file = ReviewFile::new(review());
        file.schema_version = "1.3".to_string();
        assert!(file.into_review().is_ok());
    }

    #[test]
    fn test_other_major_rejected() {
        let mut file = ReviewFile::new(review());
        file.schema_version = "2.0".to_string();
        assert!(matches!(
            file.into_review(),
            Err(ReviewGuardError::UnsupportedSchemaVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let json = serde_json::to_value(ReviewFile::new(review())).unwrap();
        let mut json = json.as_object().unwrap().clone();
        json.insert("moderation".to_string(), serde_json::json!({"flag": true}));

        let file: ReviewFile = serde_json::from_value(serde_json::Value::Object(json)).unwrap();
        assert!(file.extra.contains_key("moderation"));
    }
}
