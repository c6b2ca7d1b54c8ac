//! Persistence of the whole job-site collection in a single named slot.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::domain::JobSite;
use crate::error::StorageError;

/// Name of the slot holding the serialized job-site collection.
pub const JOB_SITES_SLOT: &str = "jobSites";

/// Reads and writes the entire job-site collection at once.
///
/// Implementations never fail on `load`: absent, unreadable or malformed data
/// is reported through `tracing` and treated as an empty collection.
pub trait StorageAdapter {
    fn load(&self) -> Vec<JobSite>;

    /// Replaces the stored collection with `sites`.
    fn save(&self, sites: &[JobSite]) -> Result<(), StorageError>;
}

impl<S: StorageAdapter + ?Sized> StorageAdapter for &S {
    fn load(&self) -> Vec<JobSite> {
        (**self).load()
    }

    fn save(&self, sites: &[JobSite]) -> Result<(), StorageError> {
        (**self).save(sites)
    }
}

pub(crate) fn decode(raw: &str, source: &str) -> Vec<JobSite> {
    if raw.trim().is_empty() {
        tracing::debug!(source, "job site slot is empty");
        return Vec::new();
    }
    match serde_json::from_str::<Vec<JobSite>>(raw) {
        Ok(sites) => {
            tracing::debug!(source, count = sites.len(), "loaded job sites");
            sites
        }
        Err(e) => {
            tracing::warn!(source, error = %e, "ignoring malformed job site data");
            Vec::new()
        }
    }
}

pub(crate) fn encode(sites: &[JobSite]) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(sites)?)
}
