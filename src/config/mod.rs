//! Configuration module for cashflow
//!
//! Path resolution for the settings, catalog and scenario files, plus the
//! persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::ForecastPaths;
pub use settings::Settings;
