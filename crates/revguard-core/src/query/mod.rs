//! Review retrieval
//!
//! The store is reached only through [`ReviewStore`], which needs three
//! primitives: product equality, a closed range on the classification field
//! and a newest-first sort.

mod filter;
mod store;

pub use filter::RangeQueryFilter;
pub use store::{ReviewQuery, ReviewStore};
