//! Review store capability and query description

use crate::error::Result;
use crate::review::{Range, Review};
use crate::types::ProductRef;
use std::fmt;

/// Lookup over stored reviews.
///
/// Results are restricted to `product`, optionally to reviews whose own
/// `range` value lies in the closed `range` bounds, and are always ordered by
/// creation time, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewQuery {
    /// Product equality filter
    pub product: ProductRef,
    /// Closed range filter on the classification field
    pub range: Option<Range>,
}

impl ReviewQuery {
    /// Query every review of a product
    pub fn for_product(product: ProductRef) -> Self {
        Self {
            product,
            range: None,
        }
    }

    /// Restrict to a classification range
    pub fn within(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    /// Check if a review satisfies the filters
    pub fn matches(&self, review: &Review) -> bool {
        if review.product != self.product {
            return false;
        }
        match self.range {
            Some(range) => range.contains(review.range),
            None => true,
        }
    }

    /// Sort newest first. Stable, so equal timestamps keep input order.
    pub fn sort(&self, reviews: &mut [Review]) {
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    /// Filter and order an in-memory collection
    pub fn apply(&self, reviews: impl IntoIterator<Item = Review>) -> Vec<Review> {
        let mut matched: Vec<Review> = reviews.into_iter().filter(|r| self.matches(r)).collect();
        self.sort(&mut matched);
        matched
    }
}

impl fmt::Display for ReviewQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product = '{}'", self.product)?;
        if let Some(range) = &self.range {
            write!(
                f,
                " AND range BETWEEN {} AND {}",
                range.start_point, range.end_point
            )?;
        }
        write!(f, " ORDER BY created_at DESC")
    }
}

/// Backing store able to answer a [`ReviewQuery`]
pub trait ReviewStore: Send + Sync {
    /// Execute the query. Failures should be reported as `QueryFailed`.
    fn search(&self, query: &ReviewQuery) -> Result<Vec<Review>>;
}
