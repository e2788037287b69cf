//! `cashflow compare`
//!
//! Runs the same inputs twice, with and without the disabled rules, and
//! reports what the scenario changes.

use clap::Args;

use super::{load_catalog, resolve_disabled, RunArgs};
use crate::config::{ForecastPaths, Settings};
use crate::display::format_comparison;
use crate::engine::{removed_rules, ForecastComparison};
use crate::error::ForecastResult;
use crate::models::DisabledSet;

/// Arguments for `cashflow compare`
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub run: RunArgs,
}

/// Handle the compare command
pub fn handle_compare_command(
    paths: &ForecastPaths,
    settings: &Settings,
    args: CompareArgs,
) -> ForecastResult<()> {
    let catalog = load_catalog(paths, settings, args.run.catalog.as_deref())?;
    let disabled = resolve_disabled(
        paths,
        settings,
        &catalog,
        args.run.scenario.as_deref(),
        &args.run.disable,
    )?;

    let baseline_request = args.run.request(settings, DisabledSet::new())?;
    let modified_request = baseline_request.clone().with_disabled(disabled.clone());

    let baseline = baseline_request.run(&catalog)?;
    let modified = modified_request.run(&catalog)?;
    let comparison = ForecastComparison::compare(&baseline, &modified)?;
    let removed = removed_rules(&catalog, &disabled);

    println!(
        "Scenario vs baseline: {} to {} ({} days)",
        baseline.start_date,
        baseline
            .last_day()
            .map(|d| d.date.to_string())
            .unwrap_or_default(),
        baseline.len()
    );
    println!();
    print!(
        "{}",
        format_comparison(&comparison, &removed, &settings.currency_symbol)
    );

    Ok(())
}
