//! JSON-file-backed accent store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AccentStore, StoreError};

/// On-disk shape of the persisted preference.
#[derive(Debug, Serialize, Deserialize)]
struct StoredAccent {
    accent: String,
}

/// Accent store persisting to a JSON file.
///
/// A missing file reads as no value; the parent directory is created on the
/// first write.
///
/// # Example
///
/// ```rust,no_run
/// use accentuate::{AccentStore, JsonFileStore};
///
/// let mut store = JsonFileStore::new("~/.config/app/accent.json");
/// store.set("tesla").unwrap();
/// assert_eq!(store.get().unwrap().as_deref(), Some("tesla"));
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccentStore for JsonFileStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };
        let stored: StoredAccent =
            serde_json::from_str(&raw).map_err(|err| StoreError::Malformed {
                path: self.path.clone(),
                source: err,
            })?;
        Ok(Some(stored.accent))
    }

    fn set(&mut self, accent: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| StoreError::Io {
                    path: self.path.clone(),
                    source: err,
                })?;
            }
        }
        let stored = StoredAccent {
            accent: accent.to_string(),
        };
        let raw = serde_json::to_string_pretty(&stored).map_err(|err| StoreError::Malformed {
            path: self.path.clone(),
            source: err,
        })?;
        fs::write(&self.path, raw).map_err(|err| StoreError::Io {
            path: self.path.clone(),
            source: err,
        })
    }
}
