//! Guarded review creation

use crate::error::Result;
use crate::review::{Review, ReviewDraft};
use crate::validation::ReviewValidator;
use std::sync::Arc;
use tracing::info;

/// Destination for reviews that passed validation
pub trait ReviewSink: Send + Sync {
    /// Persist a new review
    fn save(&self, review: &Review) -> Result<()>;
}

/// Validates drafts and persists only the admissible ones
pub struct ReviewSubmission {
    validator: ReviewValidator,
    sink: Arc<dyn ReviewSink>,
}

impl ReviewSubmission {
    /// Create a submission pipeline
    pub fn new(validator: ReviewValidator, sink: impl ReviewSink + 'static) -> Self {
        Self {
            validator,
            sink: Arc::new(sink),
        }
    }

    /// Create a submission pipeline with a shared sink
    pub fn with_sink(validator: ReviewValidator, sink: Arc<dyn ReviewSink>) -> Self {
        Self { validator, sink }
    }

    /// Validate and store a draft, returning the stored review
    pub fn submit(&self, draft: ReviewDraft) -> Result<Review> {
        self.validator.validate_draft(&draft)?;

        let review = Review::from_draft(draft);
        self.sink.save(&review)?;
        info!("Stored review {} for product {}", review.id, review.product);
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductRef;
    use crate::validation::StaticBlacklist;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        saved: Mutex<Vec<Review>>,
    }

    impl ReviewSink for Arc<RecordingSink> {
        fn save(&self, review: &Review) -> Result<()> {
            self.saved.lock().unwrap().push(review.clone());
            Ok(())
        }
    }

    fn pipeline() -> (ReviewSubmission, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let validator = ReviewValidator::new(StaticBlacklist::new(["damn"]));
        (ReviewSubmission::new(validator, Arc::clone(&sink)), sink)
    }

    #[test]
    fn test_admissible_review_is_saved() {
        let (submission, sink) = pipeline();
        let review = submission
            .submit(ReviewDraft::new(ProductRef::from("p"), 5.0, "great").with_range(3.0))
            .unwrap();

        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, review.id);
    }

    #[test]
    fn test_rejected_review_is_not_saved() {
        let (submission, sink) = pipeline();

        assert!(submission
            .submit(ReviewDraft::new(ProductRef::from("p"), -1.0, "great"))
            .is_err());
        assert!(submission
            .submit(ReviewDraft::new(ProductRef::from("p"), 1.0, "damn"))
            .is_err());

        assert!(sink.saved.lock().unwrap().is_empty());
    }
}
