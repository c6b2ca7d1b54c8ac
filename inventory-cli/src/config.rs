use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding where job sites are stored.
pub const DATA_PATH_ENV: &str = "SITE_INVENTORY_DATA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// File holding the job site collection. Defaults to the platform data
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set, e.g. "info" or "inventory_core=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            log_level: default_log_level(),
        }
    }
}

impl InventoryConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("site-inventory")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Write the default config if none exists yet; returns the config path.
    pub fn ensure_default() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let raw = toml::to_string_pretty(&Self::default())?;
            std::fs::write(&path, raw)?;
        }
        Ok(path)
    }

    /// Where the job site file lives: `override_path`, then the environment,
    /// then the config file, then the platform data directory.
    pub fn resolve_data_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path);
        }
        if let Some(path) = std::env::var_os(DATA_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.data_path {
            return Ok(path.clone());
        }
        Ok(dirs::data_dir()
            .context("Cannot determine data directory")?
            .join("site-inventory")
            .join("jobSites.json"))
    }
}
