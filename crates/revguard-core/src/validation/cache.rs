//! In-memory blacklist with explicit reload

use super::blacklist::{first_match, fingerprint, BlacklistProvider, FileBlacklist};
use crate::error::{ReviewGuardError, Result};
use std::path::Path;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, info};

struct Snapshot {
    entries: Arc<Vec<String>>,
    fingerprint: String,
    loaded_at: Instant,
}

impl Snapshot {
    fn capture(entries: Vec<String>) -> Self {
        Self {
            fingerprint: fingerprint(entries.as_slice()),
            entries: Arc::new(entries),
            loaded_at: Instant::now(),
        }
    }
}

/// Process-wide, read-mostly copy of a file blacklist.
///
/// Refreshes itself once `refresh_interval` has elapsed; `reload` forces it.
pub struct CachedBlacklist {
    source: FileBlacklist,
    refresh_interval: Option<Duration>,
    state: RwLock<Snapshot>,
}

impl CachedBlacklist {
    /// Load the file now; fails if it cannot be read
    pub fn load(path: impl AsRef<Path>, refresh_interval: Option<Duration>) -> Result<Self> {
        let source = FileBlacklist::new(path.as_ref());
        let snapshot = Snapshot::capture(source.load_all()?);
        info!(
            "Cached {} blacklist entries (fingerprint {})",
            snapshot.entries.len(),
            snapshot.fingerprint
        );

        Ok(Self {
            source,
            refresh_interval,
            state: RwLock::new(snapshot),
        })
    }

    /// Re-read the file. Returns true when the content changed.
    ///
    /// On failure the previous snapshot stays in place.
    pub fn reload(&self) -> Result<bool> {
        let fresh = Snapshot::capture(self.source.load_all()?);
        let mut state = self
            .state
            .write()
            .map_err(|_| ReviewGuardError::Validation("Blacklist cache lock poisoned".to_string()))?;

        let changed = state.fingerprint != fresh.fingerprint;
        if changed {
            info!(
                "Blacklist changed: {} -> {} ({} entries)",
                state.fingerprint,
                fresh.fingerprint,
                fresh.entries.len()
            );
        } else {
            debug!("Blacklist unchanged ({})", fresh.fingerprint);
        }
        *state = fresh;
        Ok(changed)
    }

    /// Whether the refresh interval has elapsed since the last load
    pub fn is_stale(&self) -> bool {
        match (self.refresh_interval, self.state.read()) {
            (Some(interval), Ok(state)) => state.loaded_at.elapsed() >= interval,
            _ => false,
        }
    }

    /// Current entries
    pub fn entries(&self) -> Arc<Vec<String>> {
        match self.state.read() {
            Ok(state) => Arc::clone(&state.entries),
            Err(poisoned) => Arc::clone(&poisoned.into_inner().entries),
        }
    }

    /// Fingerprint of the current entries
    pub fn fingerprint(&self) -> String {
        match self.state.read() {
            Ok(state) => state.fingerprint.clone(),
            Err(poisoned) => poisoned.into_inner().fingerprint.clone(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.source.path()
    }
}

impl BlacklistProvider for CachedBlacklist {
    fn find_match(&self, comment: &str) -> Result<Option<usize>> {
        if self.is_stale() {
            self.reload()?;
        }
        let entries = self.entries();
        first_match(entries.iter().map(Ok::<_, ReviewGuardError>), comment)
    }
}
