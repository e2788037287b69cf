//! Export module for cashflow
//!
//! - CSV: one row per day (spreadsheet-compatible)
//! - JSON: summary plus rows, for other tools

pub mod csv;
pub mod json;

pub use self::csv::{export_forecast_csv, ForecastRow};
pub use self::json::{export_forecast_json, ForecastExport, EXPORT_SCHEMA_VERSION};

use std::io::Write;

use crate::error::ForecastResult;
use crate::models::Forecast;

/// Machine-readable output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn write<W: Write>(self, forecast: &Forecast, writer: &mut W) -> ForecastResult<()> {
        match self {
            Self::Csv => export_forecast_csv(forecast, writer),
            Self::Json => export_forecast_json(forecast, writer),
        }
    }
}
