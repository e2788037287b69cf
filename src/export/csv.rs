//! CSV export of a forecast
//!
//! One row per simulated day. Amounts are plain decimal strings so
//! spreadsheets read them as numbers.

use std::io::Write;

use serde::Serialize;

use crate::error::ForecastResult;
use crate::models::{Forecast, ForecastDay};

/// Separator used when several rules land on the same day
pub const NAME_SEPARATOR: &str = "; ";

/// Flat, serializable view of one forecast day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastRow {
    pub date: String,
    pub start_balance: String,
    pub credits: String,
    pub debits: String,
    pub end_balance: String,
    pub flag: String,
    pub credit_names: String,
    pub debit_names: String,
}

impl From<&ForecastDay> for ForecastRow {
    fn from(day: &ForecastDay) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            start_balance: day.start_balance.to_decimal_string(),
            credits: day.credits.to_decimal_string(),
            debits: day.debits.to_decimal_string(),
            end_balance: day.end_balance.to_decimal_string(),
            flag: day.flag.to_string(),
            credit_names: day.credit_names.join(NAME_SEPARATOR),
            debit_names: day.debit_names.join(NAME_SEPARATOR),
        }
    }
}

/// Write the forecast as CSV with a header row
pub fn export_forecast_csv<W: Write>(forecast: &Forecast, writer: W) -> ForecastResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for day in forecast.days() {
        csv_writer.serialize(ForecastRow::from(day))?;
    }
    csv_writer.flush()?;
    Ok(())
}
