use std::io::Write;
use std::path::{Path, PathBuf};

use super::{decode, encode, StorageAdapter, JOB_SITES_SLOT};
use crate::domain::JobSite;
use crate::error::StorageError;

/// Stores the collection as a JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at `<dir>/jobSites.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{JOB_SITES_SLOT}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| JOB_SITES_SLOT.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StorageAdapter for JsonFileStorage {
    fn load(&self) -> Vec<JobSite> {
        let source = self.path.display().to_string();
        if !self.path.exists() {
            tracing::debug!(source, "no job site file yet");
            return Vec::new();
        }
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw, &source),
            Err(e) => {
                tracing::warn!(source, error = %e, "failed to read job site file");
                Vec::new()
            }
        }
    }

    fn save(&self, sites: &[JobSite]) -> Result<(), StorageError> {
        let content = encode(sites)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Readers only ever see a complete collection: write aside, then rename.
        let temp = self.temp_path();
        let written = write_file(&temp, &content).and_then(|_| std::fs::rename(&temp, &self.path));
        if let Err(e) = written {
            if temp.exists() {
                let _ = std::fs::remove_file(&temp);
            }
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), count = sites.len(), "saved job sites");
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
