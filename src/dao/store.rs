//! File-backed persistence for the application document.
//!
//! One JSON file holds the entire state. `load` never fails: missing, corrupt,
//! or partial files all produce a complete [`AppDocument`] through field-level
//! defaulting, so downstream code never sees a malformed state. `save` writes
//! the whole document atomically (temp file + rename); there are no
//! partial-field writes.
//!
//! The schema version lives in the file name. Bumping the version points the
//! store at a fresh file and lets the defaulting rules re-seed it, which is
//! the entire migration mechanism.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{info, warn};

use crate::dao::models::AppDocument;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised when persisting the document fails.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document could not be serialized.
    #[error("failed to serialize state document: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Writing the document to disk failed.
    #[error("failed to write state document to `{path}`: {source}")]
    Write {
        /// Path the store attempted to write.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Store for the single persisted JSON document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store bound to the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, recovering silently from any malformed input.
    ///
    /// A missing file is the normal first-run case; corrupt JSON is logged and
    /// replaced by defaults rather than surfaced, matching the recovery policy
    /// for persisted input.
    pub fn load(&self) -> AppDocument {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<AppDocument>(&contents) {
                Ok(document) => document,
                Err(err) => {
                    warn!(
                        path = %self.path.display(),
                        error = %err,
                        "state document is corrupt; starting from defaults"
                    );
                    AppDocument::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %self.path.display(),
                    "no state document found; starting from defaults"
                );
                AppDocument::default()
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read state document; starting from defaults"
                );
                AppDocument::default()
            }
        }
    }

    /// Persist the full document in a single atomic write.
    pub fn save(&self, document: &AppDocument) -> StoreResult<()> {
        let payload = serde_json::to_vec_pretty(document)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &payload).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("state.json"))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), AppDocument::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), b"{not json at all").unwrap();
        assert_eq!(store.load(), AppDocument::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = AppDocument::default();
        doc.community.name = "Garden Grove".into();
        doc.session.active = true;
        doc.session.id = "s1".into();
        doc.session.cap = 3;

        store.save(&doc).unwrap();
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deep/state.json"));
        store.save(&AppDocument::default()).unwrap();
        assert_eq!(store.load(), AppDocument::default());
    }

    #[test]
    fn partial_file_is_upgraded_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), br#"{"session":{"active":true,"id":"s9","cap":2}}"#).unwrap();

        let doc = store.load();
        assert!(doc.session.active);
        assert_eq!(doc.session.id, "s9");
        assert_eq!(doc.session.cap, 2);
        assert_eq!(doc.session.claimed, 0);
        assert!(doc.settings.daily_limit_enabled);
    }
}
