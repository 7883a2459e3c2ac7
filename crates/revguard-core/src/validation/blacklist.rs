//! Blacklist sources and substring screening

use crate::error::{ReviewGuardError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default blacklist file name, resolved against the working directory
pub const DEFAULT_BLACKLIST_FILE: &str = "cursewords.txt";

/// Something that can screen a comment against a list of forbidden terms
pub trait BlacklistProvider: Send + Sync {
    /// Index of the first entry (in list order) contained in `comment`,
    /// or `None` when the comment is clean.
    fn find_match(&self, comment: &str) -> Result<Option<usize>>;
}

/// Scan entries in order and stop at the first literal, case-sensitive hit.
pub(crate) fn first_match<I, S>(entries: I, comment: &str) -> Result<Option<usize>>
where
    I: IntoIterator<Item = Result<S>>,
    S: AsRef<str>,
{
    for (index, entry) in entries.into_iter().enumerate() {
        if comment.contains(entry?.as_ref()) {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Short content hash of a list of entries
pub fn fingerprint<S: AsRef<str>>(entries: &[S]) -> String {
    let mut hasher = blake3::Hasher::new();
    for entry in entries {
        hasher.update(entry.as_ref().as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize().to_hex()[..16].to_string()
}

/// Blacklist backed by a text file, re-read on every call
#[derive(Debug, Clone)]
pub struct FileBlacklist {
    path: PathBuf,
}

impl FileBlacklist {
    /// Create a blacklist reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and return a lazy iterator over its entries
    pub fn entries(&self) -> Result<BlacklistEntries> {
        let file = File::open(&self.path).map_err(|source| ReviewGuardError::BlacklistUnavailable {
            path: self.path.clone(),
            source,
        })?;

        Ok(BlacklistEntries {
            path: self.path.clone(),
            lines: BufReader::new(file).lines(),
        })
    }

    /// Read every entry into memory
    pub fn load_all(&self) -> Result<Vec<String>> {
        let entries = self.entries()?.collect::<Result<Vec<_>>>()?;
        debug!("Loaded {} blacklist entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }
}

impl BlacklistProvider for FileBlacklist {
    fn find_match(&self, comment: &str) -> Result<Option<usize>> {
        first_match(self.entries()?, comment)
    }
}

/// Lazy sequence of trimmed, non-blank blacklist lines
pub struct BlacklistEntries {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl Iterator for BlacklistEntries {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let entry = line.trim();
                    // An empty entry would match every comment
                    if entry.is_empty() {
                        continue;
                    }
                    return Some(Ok(entry.to_string()));
                }
                Err(source) => {
                    return Some(Err(ReviewGuardError::BlacklistUnavailable {
                        path: self.path.clone(),
                        source,
                    }))
                }
            }
        }
    }
}

/// Fixed in-memory blacklist
#[derive(Debug, Clone, Default)]
pub struct StaticBlacklist {
    entries: Vec<String>,
}

impl StaticBlacklist {
    /// Build from terms; entries are trimmed and blanks dropped
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(Into::into)
            .map(|e: String| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Entries in list order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl BlacklistProvider for StaticBlacklist {
    fn find_match(&self, comment: &str) -> Result<Option<usize>> {
        first_match(self.entries.iter().map(Ok::<_, ReviewGuardError>), comment)
    }
}
