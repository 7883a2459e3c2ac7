//! Range-bounded review retrieval

use super::store::{ReviewQuery, ReviewStore};
use crate::error::{ReviewGuardError, Result};
use crate::review::{Range, Review};
use crate::types::ProductRef;
use std::sync::Arc;
use tracing::debug;

/// Lists a product's reviews whose classification falls in a range
#[derive(Clone)]
pub struct RangeQueryFilter {
    store: Arc<dyn ReviewStore>,
}

impl RangeQueryFilter {
    /// Create a filter over the given store
    pub fn new(store: impl ReviewStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a filter over a shared store
    pub fn with_store(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Reviews of `product` with `range.start_point <= review.range <= range.end_point`,
    /// newest first.
    ///
    /// A reversed range is rejected with `InvalidRange` before the store is
    /// queried. An empty match is not an error.
    pub fn find_reviews_in_range(&self, product: &ProductRef, range: &Range) -> Result<Vec<Review>> {
        range.ensure_well_formed()?;

        let query = ReviewQuery::for_product(product.clone()).within(*range);
        debug!("Range query - {}", query);

        let reviews = self.store.search(&query).map_err(into_query_failed)?;
        debug!("Range query returned {} reviews", reviews.len());
        Ok(reviews)
    }
}

fn into_query_failed(err: ReviewGuardError) -> ReviewGuardError {
    match err {
        ReviewGuardError::QueryFailed(_) => err,
        other => ReviewGuardError::QueryFailed(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::store::memory::{MemoryStore, UnreachableStore};
    use crate::review::ReviewDraft;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn review(product: &str, range: f64, age_secs: i64) -> Review {
        let mut review = Review::from_draft(
            ReviewDraft::new(ProductRef::from(product), 4.0, "fine").with_range(range),
        );
        review.created_at = Utc::now() - Duration::seconds(age_secs);
        review
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.insert(review("P", 5.0, 40));
        store.insert(review("P", 20.0, 30));
        store.insert(review("P", 15.0, 10));
        store.insert(review("P", 25.0, 5));
        store.insert(review("Q", 15.0, 1));
        store
    }

    #[test]
    fn test_bounds_inclusive_newest_first() {
        let filter = RangeQueryFilter::new(seeded_store());
        let result = filter
            .find_reviews_in_range(&ProductRef::from("P"), &Range::new(10.0, 20.0))
            .unwrap();

        let ranges: Vec<f64> = result.iter().map(|r| r.range).collect();
        assert_eq!(ranges, vec![15.0, 20.0]);
        assert!(result.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_other_products_excluded() {
        let filter = RangeQueryFilter::new(seeded_store());
        let result = filter
            .find_reviews_in_range(&ProductRef::from("Q"), &Range::new(0.0, 100.0))
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].product, ProductRef::from("Q"));
    }

    #[test]
    fn test_empty_match_is_ok() {
        let filter = RangeQueryFilter::new(seeded_store());
        let result = filter
            .find_reviews_in_range(&ProductRef::from("P"), &Range::new(100.0, 200.0))
            .unwrap();
        assert!(result.is_empty());

        let result = filter
            .find_reviews_in_range(&ProductRef::from("unknown"), &Range::new(0.0, 100.0))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let filter = RangeQueryFilter::new(seeded_store());
        let err = filter
            .find_reviews_in_range(&ProductRef::from("P"), &Range::new(20.0, 10.0))
            .unwrap_err();
        assert!(matches!(err, ReviewGuardError::InvalidRange { .. }));
    }

    #[test]
    fn test_store_failure_is_query_failed() {
        let filter = RangeQueryFilter::new(UnreachableStore);
        let err = filter
            .find_reviews_in_range(&ProductRef::from("P"), &Range::new(0.0, 1.0))
            .unwrap_err();

        match err {
            ReviewGuardError::QueryFailed(message) => assert!(message.contains("store offline")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
