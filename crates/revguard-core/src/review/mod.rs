//! Review data model
//!
//! Stored reviews, submission drafts and the range value object used by
//! retrieval queries.

mod model;
mod range;

pub use model::{Review, ReviewDraft};
pub use range::Range;
