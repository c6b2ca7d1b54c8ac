use std::sync::{Arc, RwLock};

use super::{decode, encode, StorageAdapter};
use crate::domain::JobSite;
use crate::error::StorageError;

/// In-memory slot holding the serialized collection.
///
/// Clones share the same slot, so a test can keep a handle and inspect what a
/// repository wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<RwLock<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with arbitrary content.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&self) -> Vec<JobSite> {
        match self.raw() {
            Some(raw) => decode(&raw, "memory"),
            None => Vec::new(),
        }
    }

    fn save(&self, sites: &[JobSite]) -> Result<(), StorageError> {
        let content = encode(sites)?;
        let mut slot = self
            .slot
            .write()
            .map_err(|_| std::io::Error::other("memory slot lock poisoned"))?;
        *slot = Some(content);
        Ok(())
    }
}
