//! Review validation
//!
//! Rating bound-checking and blacklist-based comment screening. The
//! blacklist comes from a [`BlacklistProvider`]: a file re-read on every
//! call, an in-memory cache with explicit reload, or a fixed list.

mod blacklist;
mod cache;
mod validator;

pub use blacklist::{
    fingerprint, BlacklistEntries, BlacklistProvider, FileBlacklist, StaticBlacklist,
    DEFAULT_BLACKLIST_FILE,
};
pub use cache::CachedBlacklist;
pub use validator::{ReviewValidator, MIN_RATING};
