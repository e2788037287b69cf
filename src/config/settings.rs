//! User settings for cashflow
//!
//! Forecast defaults (horizon and low-balance threshold), display preferences
//! and where to find the rule catalog.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::ForecastPaths;
use crate::engine::SimulationOptions;
use crate::error::{ForecastError, ForecastResult};
use crate::models::{Money, DEFAULT_HORIZON_DAYS, DEFAULT_LOW_BALANCE_THRESHOLD};

/// User settings for cashflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Days simulated when the command line does not say
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    /// Closing balances below this (and above zero) are flagged LOW, in cents
    #[serde(default = "default_low_balance_threshold")]
    pub low_balance_threshold: Money,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Catalog file; relative paths resolve against the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,

    /// Scenario applied when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scenario: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

fn default_low_balance_threshold() -> Money {
    DEFAULT_LOW_BALANCE_THRESHOLD
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            horizon_days: default_horizon_days(),
            low_balance_threshold: default_low_balance_threshold(),
            currency_symbol: default_currency(),
            catalog_file: None,
            default_scenario: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ForecastPaths) -> ForecastResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ForecastError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ForecastError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ForecastPaths) -> ForecastResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ForecastError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ForecastError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Simulation options with an optional horizon override
    pub fn simulation_options(&self, horizon_days: Option<u32>) -> SimulationOptions {
        SimulationOptions::default()
            .with_horizon(horizon_days.unwrap_or(self.horizon_days))
            .with_threshold(self.low_balance_threshold)
    }

    /// Catalog path: explicit argument, then settings, then the default file
    pub fn catalog_path(&self, paths: &ForecastPaths, explicit: Option<&Path>) -> PathBuf {
        match (explicit, &self.catalog_file) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(configured)) => paths.resolve(configured),
            (None, None) => paths.default_catalog_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.horizon_days, 42);
        assert_eq!(settings.low_balance_threshold, Money::from_units(500));
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.catalog_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.horizon_days = 90;
        settings.default_scenario = Some("lean".into());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"horizon_days": 30}"#).unwrap();
        assert_eq!(settings.horizon_days, 30);
        assert_eq!(settings.low_balance_threshold, Money::from_units(500));
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_threshold_stored_in_cents() {
        let settings: Settings =
            serde_json::from_str(r#"{"low_balance_threshold": 25000}"#).unwrap();
        assert_eq!(settings.low_balance_threshold, Money::from_units(250));
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ForecastError::Config(_)));
    }

    #[test]
    fn test_simulation_options() {
        let settings = Settings {
            low_balance_threshold: Money::from_units(100),
            ..Settings::default()
        };
        let options = settings.simulation_options(None);
        assert_eq!(options.horizon_days, 42);
        assert_eq!(options.low_balance_threshold, Money::from_units(100));
        assert_eq!(settings.simulation_options(Some(7)).horizon_days, 7);
    }

    #[test]
    fn test_catalog_path_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(
            settings.catalog_path(&paths, None),
            temp_dir.path().join("catalog.yaml")
        );

        settings.catalog_file = Some(PathBuf::from("bills.yaml"));
        assert_eq!(
            settings.catalog_path(&paths, None),
            temp_dir.path().join("bills.yaml")
        );

        let explicit = PathBuf::from("/tmp/other.json");
        assert_eq!(settings.catalog_path(&paths, Some(&explicit)), explicit);
    }
}
