//! JSON export of a forecast
//!
//! The document carries the headline summary alongside the per-day rows so a
//! consumer does not have to recompute totals.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::csv::ForecastRow;
use crate::engine::ForecastSummary;
use crate::error::{ForecastError, ForecastResult};
use crate::models::Forecast;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full forecast export structure
#[derive(Debug, Clone, Serialize)]
pub struct ForecastExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub summary: ForecastSummary,
    pub days: Vec<ForecastRow>,
}

impl ForecastExport {
    pub fn new(forecast: &Forecast) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: ForecastSummary::generate(forecast),
            days: forecast.days().iter().map(ForecastRow::from).collect(),
        }
    }
}

/// Write the forecast as pretty-printed JSON
pub fn export_forecast_json<W: Write>(forecast: &Forecast, writer: &mut W) -> ForecastResult<()> {
    let export = ForecastExport::new(forecast);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ForecastError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| ForecastError::Export(e.to_string()))?;
    Ok(())
}
