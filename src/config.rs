//! Configuration handling for the wizard

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_BUCKET: &str = "onboarding-documents";
const DEFAULT_TABLE: &str = "onboarding_submissions";
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 60;
const DEFAULT_PERSIST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILE: &str = "clinic-onboarding.log";

/// User configuration, read from `config.json` in the platform config dir
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WizardConfig {
    /// Base URL of the storage/database service
    pub store_url: Option<String>,
    /// Public API key sent with every store request
    pub api_key: Option<String>,
    /// Object bucket receiving uploaded documents
    pub bucket: Option<String>,
    /// Table receiving submission records
    pub table: Option<String>,
    pub upload_timeout_secs: Option<u64>,
    pub persist_timeout_secs: Option<u64>,
    /// Log file; relative paths resolve against the data dir
    pub log_file: Option<PathBuf>,
}

impl WizardConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "ciaodott", "clinic-onboarding")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir, defaulting when absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: WizardConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn bucket(&self) -> &str {
        self.bucket.as_deref().unwrap_or(DEFAULT_BUCKET)
    }

    pub fn table(&self) -> &str {
        self.table.as_deref().unwrap_or(DEFAULT_TABLE)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(
            self.upload_timeout_secs
                .unwrap_or(DEFAULT_UPLOAD_TIMEOUT_SECS),
        )
    }

    pub fn persist_timeout(&self) -> Duration {
        Duration::from_secs(
            self.persist_timeout_secs
                .unwrap_or(DEFAULT_PERSIST_TIMEOUT_SECS),
        )
    }

    /// Where the log is written, or None when no data dir can be resolved
    pub fn log_path(&self) -> Option<PathBuf> {
        let data_dir = Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf());
        match &self.log_file {
            Some(path) if path.is_absolute() => Some(path.clone()),
            Some(path) => data_dir.map(|dir| dir.join(path)),
            None => data_dir.map(|dir| dir.join(DEFAULT_LOG_FILE)),
        }
    }
}
