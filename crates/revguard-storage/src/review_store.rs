//! File system storage for reviews

use crate::review_file::ReviewFile;
use revguard_core::error::{ReviewGuardError, Result};
use revguard_core::query::{ReviewQuery, ReviewStore};
use revguard_core::review::Review;
use revguard_core::submission::ReviewSink;
use revguard_core::types::ReviewId;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File system based review storage, one JSON file per review
pub struct FileSystemStore {
    /// Base directory for storage
    base_dir: PathBuf,
    /// Reviews subdirectory
    reviews_dir: PathBuf,
}

impl FileSystemStore {
    /// Create a new file system store
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let reviews_dir = base_dir.join("reviews");

        let store = Self {
            base_dir,
            reviews_dir,
        };

        store.ensure_dirs()?;
        Ok(store)
    }

    /// Ensure required directories exist
    fn ensure_dirs(&self) -> Result<()> {
        if !self.reviews_dir.exists() {
            fs::create_dir_all(&self.reviews_dir).map_err(|e| {
                ReviewGuardError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create reviews directory: {}", e),
                ))
            })?;
            debug!("Created reviews directory: {:?}", self.reviews_dir);
        }
        Ok(())
    }

    /// Get the path for a review file
    fn review_path(&self, id: &ReviewId) -> PathBuf {
        self.reviews_dir.join(format!("{}.json", id))
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self, id: &ReviewId) -> PathBuf {
        self.reviews_dir.join(format!(".{}.json.tmp", id))
    }

    /// Write review atomically (write to temp, then rename)
    fn atomic_write(&self, review: &Review) -> Result<()> {
        let temp_path = self.temp_path(&review.id);
        let final_path = self.review_path(&review.id);

        let file = ReviewFile::new(review.clone());

        let written = Self::write_file(&temp_path, &file).and_then(|()| {
            fs::rename(&temp_path, &final_path).map_err(|e| {
                ReviewGuardError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to rename temp file: {}", e),
                ))
            })
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        debug!("Saved review {} to {:?}", review.id, final_path);
        Ok(())
    }

    /// Serialize a review file to `path`
    fn write_file(path: &Path, file: &ReviewFile) -> Result<()> {
        let temp_file = fs::File::create(path).map_err(|e| {
            ReviewGuardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, file)?;
        writer.flush()?;
        Ok(())
    }

    /// Read and parse a review file
    fn read_review(&self, path: &Path) -> Result<Review> {
        let file = fs::File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                let id = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown");
                ReviewGuardError::ReviewNotFound(id.to_string())
            } else {
                ReviewGuardError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        let review_file: ReviewFile = serde_json::from_reader(reader)?;
        review_file.into_review()
    }

    /// Persist a review
    pub fn save(&self, review: &Review) -> Result<()> {
        self.atomic_write(review)
    }

    /// Load a review by ID
    pub fn load(&self, id: &ReviewId) -> Result<Review> {
        self.read_review(&self.review_path(id))
    }

    /// Check if a review exists
    pub fn exists(&self, id: &ReviewId) -> bool {
        self.review_path(id).exists()
    }

    /// Load every stored review, skipping unreadable files
    pub fn list(&self) -> Result<Vec<Review>> {
        self.collect_reviews(false)
    }

    /// Load stored reviews. When `strict`, the first unreadable entry or
    /// review file aborts the scan instead of being skipped.
    fn collect_reviews(&self, strict: bool) -> Result<Vec<Review>> {
        let mut reviews = Vec::new();

        let entries = fs::read_dir(&self.reviews_dir).map_err(|e| {
            ReviewGuardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read reviews directory: {}", e),
            ))
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) if strict => return Err(ReviewGuardError::Io(e)),
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();

            // Skip non-json files and temp files
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with('.'))
                .unwrap_or(false)
            {
                continue;
            }

            match self.read_review(&path) {
                Ok(review) => reviews.push(review),
                Err(e) if strict => {
                    return Err(e.with_context(format!("Failed to read review file {:?}", path)))
                }
                Err(e) => {
                    warn!("Failed to read review file {:?}: {}", path, e);
                }
            }
        }

        Ok(reviews)
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get reviews directory
    pub fn reviews_dir(&self) -> &PathBuf {
        &self.reviews_dir
    }
}

impl ReviewStore for FileSystemStore {
    fn search(&self, query: &ReviewQuery) -> Result<Vec<Review>> {
        let reviews = self
            .collect_reviews(true)
            .map_err(|e| ReviewGuardError::QueryFailed(e.to_string()))?;
        Ok(query.apply(reviews))
    }
}

impl ReviewSink for FileSystemStore {
    fn save(&self, review: &Review) -> Result<()> {
        self.atomic_write(review)
    }
}
