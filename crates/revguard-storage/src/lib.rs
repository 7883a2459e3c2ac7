//! revguard-storage - Storage library for revguard
//!
//! This crate provides a file-system review store implementing the
//! `ReviewStore` and `ReviewSink` capabilities from `revguard-core`.

mod review_file;
mod review_store;

pub use review_file::{ReviewFile, CURRENT_SCHEMA_VERSION};
pub use review_store::FileSystemStore;
