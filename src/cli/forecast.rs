//! `cashflow forecast`
//!
//! Runs one simulation and prints it as a table, CSV or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::{load_catalog, resolve_disabled, RunArgs};
use crate::config::{ForecastPaths, Settings};
use crate::display::{format_alerts, format_forecast_table, format_summary};
use crate::engine::{alerts, ForecastSummary};
use crate::error::{ForecastError, ForecastResult};
use crate::export::ExportFormat;
use crate::models::Forecast;

/// Output format for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Arguments for `cashflow forecast`
#[derive(Args, Debug, Clone)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only list days with low or negative balances
    #[arg(long)]
    pub alerts: bool,
}

/// Handle the forecast command
pub fn handle_forecast_command(
    paths: &ForecastPaths,
    settings: &Settings,
    args: ForecastArgs,
) -> ForecastResult<()> {
    let catalog = load_catalog(paths, settings, args.run.catalog.as_deref())?;
    let disabled = resolve_disabled(
        paths,
        settings,
        &catalog,
        args.run.scenario.as_deref(),
        &args.run.disable,
    )?;
    let forecast = args.run.request(settings, disabled)?.run(&catalog)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ForecastError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_forecast(&forecast, &args, settings, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ForecastError::Export(e.to_string()))?;
            println!("Wrote {} days to {}", forecast.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_forecast(&forecast, &args, settings, &mut handle)?;
        }
    }

    Ok(())
}

fn write_forecast<W: Write>(
    forecast: &Forecast,
    args: &ForecastArgs,
    settings: &Settings,
    writer: &mut W,
) -> ForecastResult<()> {
    let symbol = settings.currency_symbol.as_str();
    match args.format {
        OutputFormat::Csv => ExportFormat::Csv.write(forecast, writer),
        OutputFormat::Json => ExportFormat::Json.write(forecast, writer),
        OutputFormat::Table => {
            let body = if args.alerts {
                format_alerts(&alerts(forecast), symbol)
            } else {
                format_forecast_table(forecast, symbol)
            };
            let summary = format_summary(&ForecastSummary::generate(forecast), symbol);
            writeln!(writer, "{}\n{}", summary, body.trim_end())
                .map_err(|e| ForecastError::Export(e.to_string()))
        }
    }
}
