//! Persistence capability for the selected accent.
//!
//! This module provides:
//!
//! - [`AccentStore`]: the `get`/`set` capability the picker is built against
//! - [`JsonFileStore`]: JSON-file-backed implementation
//! - [`MemoryStore`]: in-memory implementation, also usable as a test double
//! - [`StoreError`]: errors store backends can report
//!
//! The picker treats every store failure as non-fatal: read failures degrade
//! to the default accent, write failures skip persistence, and both are
//! logged rather than propagated.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use thiserror::Error;

/// Error returned by accent store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("failed to access accent store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file exists but does not parse.
    #[error("accent store at {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The backend is unavailable for reads or writes.
    #[error("accent store unavailable: {0}")]
    Unavailable(String),
}

/// Storage capability for the single persisted accent id.
///
/// Implementations persist one string value. They do not validate the id
/// against the palette registry; that is the picker's job.
pub trait AccentStore {
    /// Reads the persisted accent id, if any.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Persists the accent id, replacing any previous value.
    fn set(&mut self, accent: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/accent.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/accent.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_display_unavailable() {
        let err = StoreError::Unavailable("reads disabled".to_string());
        assert!(err.to_string().contains("reads disabled"));
    }
}
