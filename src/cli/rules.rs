//! `cashflow rules`
//!
//! Inspect and validate the rule catalog.

use std::path::PathBuf;

use clap::Subcommand;

use super::load_catalog;
use crate::config::{ForecastPaths, Settings};
use crate::display::{format_adjustment_table, format_rule_table};
use crate::error::ForecastResult;
use crate::models::DisabledSet;
use crate::storage::open_scenarios;

/// Rule catalog subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum RulesCommands {
    /// List rules and adjustments
    List {
        /// Rule catalog (YAML, or JSON by extension)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// Mark the rules this saved scenario disables
        #[arg(long)]
        scenario: Option<String>,
    },
    /// Validate the catalog without running a forecast
    Check {
        /// Rule catalog (YAML, or JSON by extension)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

/// Handle a rules command
pub fn handle_rules_command(
    paths: &ForecastPaths,
    settings: &Settings,
    cmd: RulesCommands,
) -> ForecastResult<()> {
    match cmd {
        RulesCommands::List { catalog, scenario } => {
            let catalog = load_catalog(paths, settings, catalog.as_deref())?;
            let disabled = match scenario {
                Some(name) => open_scenarios(paths)?.require(&name)?,
                None => DisabledSet::new(),
            };

            println!(
                "{}",
                format_rule_table(&catalog, &disabled, &settings.currency_symbol)
            );
            if catalog.adjustment_count() > 0 {
                println!();
                println!(
                    "{}",
                    format_adjustment_table(&catalog, &settings.currency_symbol)
                );
            }
        }

        RulesCommands::Check { catalog } => {
            let path = settings.catalog_path(paths, catalog.as_deref());
            let catalog = load_catalog(paths, settings, Some(&path))?;
            println!(
                "{}: OK ({} rules: {} inflows, {} outflows; {} adjustments)",
                path.display(),
                catalog.len(),
                catalog.inflows().count(),
                catalog.outflows().count(),
                catalog.adjustment_count()
            );
        }
    }

    Ok(())
}
