//! CLI command handlers
//!
//! Bridges clap argument parsing with the catalog, engine and scenario store.
//! Handlers print to stdout and return errors to `main`.

pub mod compare;
pub mod forecast;
pub mod rules;
pub mod scenario;

pub use compare::{handle_compare_command, CompareArgs};
pub use forecast::{handle_forecast_command, ForecastArgs};
pub use rules::{handle_rules_command, RulesCommands};
pub use scenario::{handle_scenario_command, ScenarioCommands};

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Args;

use crate::catalog::RuleCatalog;
use crate::config::{ForecastPaths, Settings};
use crate::engine::{parse_start_date, ForecastRequest};
use crate::error::{ForecastError, ForecastResult};
use crate::models::{DisabledSet, Money};
use crate::storage::open_scenarios;

/// Inputs shared by every command that runs a simulation
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// First simulated day (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub start: Option<String>,

    /// Balance at the start of the first day
    #[arg(short, long, allow_hyphen_values = true)]
    pub balance: String,

    /// Number of days to simulate (defaults to the configured horizon)
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Rule catalog (YAML, or JSON by extension)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Saved scenario whose disabled rules to apply
    #[arg(long)]
    pub scenario: Option<String>,

    /// Disable an outflow rule for this run (repeatable)
    #[arg(long = "disable", value_name = "ID")]
    pub disable: Vec<String>,
}

impl RunArgs {
    /// Build the simulation request from the command line and settings
    pub fn request(&self, settings: &Settings, disabled: DisabledSet) -> ForecastResult<ForecastRequest> {
        let start_date = match &self.start {
            Some(raw) => parse_start_date(raw)?,
            None => Local::now().date_naive(),
        };
        let start_balance = Money::parse(&self.balance).map_err(|_| {
            ForecastError::Validation(format!(
                "invalid start balance '{}' (expected a decimal amount)",
                self.balance.trim()
            ))
        })?;

        Ok(ForecastRequest::new(start_date, start_balance)
            .with_disabled(disabled)
            .with_options(settings.simulation_options(self.days)))
    }
}

/// Load the catalog the command line or settings point at
pub fn load_catalog(
    paths: &ForecastPaths,
    settings: &Settings,
    explicit: Option<&Path>,
) -> ForecastResult<RuleCatalog> {
    RuleCatalog::load(settings.catalog_path(paths, explicit))
}

/// Merge the selected scenario with ad-hoc `--disable` ids
///
/// A scenario named on the command line must exist; the configured default
/// scenario is optional. Ids that match no outflow rule are reported and kept,
/// since they have no effect on the simulation.
pub fn resolve_disabled(
    paths: &ForecastPaths,
    settings: &Settings,
    catalog: &RuleCatalog,
    scenario: Option<&str>,
    extra: &[String],
) -> ForecastResult<DisabledSet> {
    let mut disabled = match (scenario, settings.default_scenario.as_deref()) {
        (Some(name), _) => open_scenarios(paths)?.require(name)?,
        (None, Some(name)) => open_scenarios(paths)?.load(name)?,
        (None, None) => DisabledSet::new(),
    };
    for id in extra {
        disabled.insert(id.as_str());
    }

    warn_ineffective(catalog, &disabled);
    Ok(disabled)
}

/// Report disabled ids that will not change a forecast
pub fn warn_ineffective(catalog: &RuleCatalog, disabled: &DisabledSet) {
    for id in disabled {
        match catalog.get(id.as_str()) {
            None => tracing::warn!(rule = %id, "Disabled rule is not in the catalog"),
            Some(rule) if rule.is_inflow() => {
                tracing::warn!(rule = %id, "Inflow rules cannot be disabled; ignoring")
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rule;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn run_args() -> RunArgs {
        RunArgs {
            start: Some("2025-11-21".into()),
            balance: "800".into(),
            days: None,
            catalog: None,
            scenario: None,
            disable: vec!["lunch".into()],
        }
    }

    fn catalog() -> RuleCatalog {
        RuleCatalog::new(
            vec![
                Rule::weekdays("lunch", "Lunch", Money::from_cents(1250)),
                Rule::fridays("savings", "Savings", Money::from_units(50)),
            ],
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_request_uses_settings_horizon() {
        let settings = Settings {
            horizon_days: 10,
            ..Settings::default()
        };
        let request = run_args().request(&settings, DisabledSet::new()).unwrap();
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2025, 11, 21).unwrap());
        assert_eq!(request.options.horizon_days, 10);

        let mut args = run_args();
        args.days = Some(3);
        args.balance = "-12.50".into();
        let request = args.request(&settings, DisabledSet::new()).unwrap();
        assert_eq!(request.options.horizon_days, 3);
        assert_eq!(request.start_balance, Money::from_cents(-1250));
    }

    #[test]
    fn test_request_rejects_bad_balance() {
        let mut args = run_args();
        args.balance = "lots".into();
        assert!(args
            .request(&Settings::default(), DisabledSet::new())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_resolve_disabled_merges_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());
        open_scenarios(&paths)
            .unwrap()
            .disable("lean", ["savings"])
            .unwrap();

        let disabled = resolve_disabled(
            &paths,
            &Settings::default(),
            &catalog(),
            Some("lean"),
            &["lunch".to_string()],
        )
        .unwrap();
        assert!(disabled.contains("savings"));
        assert!(disabled.contains("lunch"));
    }

    #[test]
    fn test_resolve_disabled_missing_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ForecastPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = resolve_disabled(&paths, &Settings::default(), &catalog(), Some("nope"), &[])
            .unwrap_err();
        assert!(err.is_not_found());

        // A missing default scenario is not an error
        let settings = Settings {
            default_scenario: Some("nope".into()),
            ..Settings::default()
        };
        let disabled = resolve_disabled(&paths, &settings, &catalog(), None, &[]).unwrap();
        assert!(disabled.is_empty());
    }
}
