//! In-memory accent store.

use super::{AccentStore, StoreError};

/// Accent store holding its value in memory.
///
/// Useful as a test double and for hosts that manage persistence themselves.
/// The failure switches emulate an unavailable backend, the way a browser
/// profile can deny storage access.
///
/// # Example
///
/// ```rust
/// use accentuate::{AccentStore, MemoryStore};
///
/// let mut store = MemoryStore::with_value("tesla");
/// assert_eq!(store.get().unwrap().as_deref(), Some("tesla"));
///
/// let broken = MemoryStore::new().fail_reads(true);
/// assert!(broken.get().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with an accent id.
    pub fn with_value(accent: impl Into<String>) -> Self {
        Self {
            value: Some(accent.into()),
            ..Self::default()
        }
    }

    /// Makes every read fail, returning an updated store for chaining.
    pub fn fail_reads(mut self, fail: bool) -> Self {
        self.fail_reads = fail;
        self
    }

    /// Makes every write fail, returning an updated store for chaining.
    pub fn fail_writes(mut self, fail: bool) -> Self {
        self.fail_writes = fail;
        self
    }

    /// The currently held value, bypassing the failure switches.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl AccentStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.value.clone())
    }

    fn set(&mut self, accent: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        self.value = Some(accent.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reads_none() {
        assert_eq!(MemoryStore::new().get().unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("nike").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("nike"));
    }

    #[test]
    fn test_fail_reads() {
        let store = MemoryStore::with_value("nike").fail_reads(true);
        assert!(matches!(store.get(), Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_fail_writes_keeps_value() {
        let mut store = MemoryStore::with_value("nike").fail_writes(true);
        assert!(store.set("tesla").is_err());
        assert_eq!(store.value(), Some("nike"));
    }
}
