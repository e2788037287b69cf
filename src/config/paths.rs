//! Path management for cashflow
//!
//! ## Path Resolution Order
//!
//! 1. `CASHFLOW_DATA_DIR` environment variable (if set)
//! 2. The platform config directory plus `cashflow`
//!    (`~/.config/cashflow`, `~/Library/Application Support/cashflow`,
//!    `%APPDATA%\cashflow`)

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{ForecastError, ForecastResult};

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CASHFLOW_DATA_DIR";

const APP_DIR_NAME: &str = "cashflow";

/// Manages all paths used by cashflow
#[derive(Debug, Clone)]
pub struct ForecastPaths {
    base_dir: PathBuf,
}

impl ForecastPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> ForecastResult<Self> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Catalog used when neither the command line nor settings name one
    pub fn default_catalog_file(&self) -> PathBuf {
        self.base_dir.join("catalog.yaml")
    }

    /// Key-value store holding saved scenarios
    pub fn scenarios_file(&self) -> PathBuf {
        self.base_dir.join("scenarios.json")
    }

    /// Resolve a path from settings; relative paths are taken from the base dir
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> ForecastResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            ForecastError::Io(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// Check if settings have ever been saved
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> ForecastResult<PathBuf> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ForecastError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
