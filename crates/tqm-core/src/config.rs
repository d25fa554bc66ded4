//! Configuration
//!
//! Resolution order for every key: environment variable, then the JSON config
//! file, then the built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::DashboardSnapshot;
use crate::services::dashboard::DEFAULT_RECENT_LIMIT;

pub const DATA_PATH_ENV: &str = "TQM_DATA_PATH";
pub const EXPORT_DIR_ENV: &str = "TQM_EXPORT_DIR";
pub const CONFIG_PATH_ENV: &str = "TQM_CONFIG_PATH";

/// Where a configuration value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Env,
    File,
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Env => write!(f, "env"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Default => write!(f, "default"),
        }
    }
}

/// On-disk config file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub recent_limit: Option<usize>,
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

/// Effective configuration with the source of each value
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: (PathBuf, ConfigSource),
    pub export_dir: (PathBuf, ConfigSource),
    pub recent_limit: (usize, ConfigSource),
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load from the default config file location and the environment.
    ///
    /// A config file that cannot be read or parsed is skipped with a warning,
    /// so `tqm config path` still works while the file needs fixing.
    pub fn load() -> Result<Self> {
        let path = config_file_path().ok();
        let file = path.as_deref().map(load_config_file).unwrap_or_default();
        Self::resolve(file, path, |key| std::env::var(key).ok())
    }

    /// Merge a config file with environment lookups
    pub fn resolve<F>(file: ConfigFile, config_path: Option<PathBuf>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = match (env(DATA_PATH_ENV), file.data_path) {
            (Some(p), _) => (PathBuf::from(p), ConfigSource::Env),
            (None, Some(p)) => (p, ConfigSource::File),
            (None, None) => (default_data_path()?, ConfigSource::Default),
        };

        let export_dir = match (env(EXPORT_DIR_ENV), file.export_dir) {
            (Some(p), _) => (PathBuf::from(p), ConfigSource::Env),
            (None, Some(p)) => (p, ConfigSource::File),
            (None, None) => (default_export_dir(), ConfigSource::Default),
        };

        let recent_limit = match file.recent_limit {
            Some(0) => return Err(Error::config("recent_limit must be at least 1")),
            Some(n) => (n, ConfigSource::File),
            None => (DEFAULT_RECENT_LIMIT, ConfigSource::Default),
        };

        Ok(Self {
            data_path,
            export_dir,
            recent_limit,
            config_path,
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path.0
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir.0
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit.0
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "tqm", "Tqm")
        .ok_or_else(|| Error::config("Could not determine project directories"))
}

/// Path of the JSON config file
pub fn config_file_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(project_dirs()?.config_dir().join("config.json"))
}

/// Default dashboard snapshot location
pub fn default_data_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join("dashboard.json"))
}

/// The user's download folder, else the working directory
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

pub fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path)?;
    let file = serde_json::from_str(&raw)?;
    log::debug!("[config] Loaded {:?}", path);
    Ok(file)
}

/// Config file contents, or defaults when the file is absent or unusable
pub fn load_config_file(path: &Path) -> ConfigFile {
    if !path.exists() {
        return ConfigFile::default();
    }
    match read_config_file(path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("[config] Ignoring {:?}: {}", path, e);
            ConfigFile::default()
        }
    }
}

/// Load the dashboard snapshot the host provides
pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot> {
    if !path.exists() {
        return Err(Error::not_found(format!(
            "dashboard data file {} (set {} or pass --data)",
            path.display(),
            DATA_PATH_ENV
        )));
    }
    let raw = fs::read_to_string(path)?;
    let snapshot: DashboardSnapshot = serde_json::from_str(&raw)?;
    log::debug!(
        "[config] Loaded {} products and {} performance records from {:?}",
        snapshot.products.len(),
        snapshot.kpi_data.len(),
        path
    );
    Ok(snapshot)
}
