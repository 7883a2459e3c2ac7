//! revguard-core - Core library for revguard
//!
//! This crate provides the review submission guard (rating and blacklist
//! validation) and the range-bounded, newest-first review retrieval filter.

pub mod error;
pub mod types;
pub mod config;
pub mod review;
pub mod validation;
pub mod query;
pub mod submission;

pub use error::{ReviewGuardError, Result};
pub use types::*;
