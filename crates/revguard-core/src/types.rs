//! Core type definitions for revguard

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a stored review
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    /// Generate a new ReviewId
    pub fn new() -> Self {
        ReviewId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(ReviewId(Uuid::parse_str(s)?))
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to a product in the catalog.
///
/// Existence is never checked here; that is the store's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRef(pub String);

impl ProductRef {
    /// Create a ProductRef from a string key
    pub fn new(key: impl Into<String>) -> Self {
        ProductRef(key.into())
    }

    /// Borrow the underlying key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductRef {
    fn from(s: &str) -> Self {
        ProductRef(s.to_string())
    }
}
