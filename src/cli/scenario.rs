//! `cashflow scenario`
//!
//! Manage named disabled sets in the scenario store.

use std::path::PathBuf;

use clap::Subcommand;

use super::{load_catalog, warn_ineffective};
use crate::config::{ForecastPaths, Settings};
use crate::error::ForecastResult;
use crate::storage::open_scenarios;

/// Scenario subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ScenarioCommands {
    /// List saved scenarios
    List,
    /// Show the rules a scenario disables
    Show {
        /// Scenario name
        name: String,
        /// Rule catalog used to describe the disabled rules
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Disable outflow rules in a scenario (created if missing)
    Disable {
        /// Scenario name
        name: String,
        /// Rule IDs to disable
        #[arg(required = true)]
        ids: Vec<String>,
        /// Rule catalog used to check the IDs
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Re-enable rules in a scenario
    Enable {
        /// Scenario name
        name: String,
        /// Rule IDs to enable
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Delete a scenario
    Clear {
        /// Scenario name
        name: String,
    },
}

/// Handle a scenario command
pub fn handle_scenario_command(
    paths: &ForecastPaths,
    settings: &Settings,
    cmd: ScenarioCommands,
) -> ForecastResult<()> {
    let scenarios = open_scenarios(paths)?;

    match cmd {
        ScenarioCommands::List => {
            let names = scenarios.names()?;
            if names.is_empty() {
                println!("No saved scenarios.");
                return Ok(());
            }
            for name in &names {
                let disabled = scenarios.load(name)?;
                let marker = if settings.default_scenario.as_deref() == Some(name.as_str()) {
                    " (default)"
                } else {
                    ""
                };
                println!("{}{}: {} disabled", name, marker, disabled.len());
            }
        }

        ScenarioCommands::Show { name, catalog } => {
            let disabled = scenarios.require(&name)?;
            if disabled.is_empty() {
                println!("Scenario '{}' disables nothing.", name);
                return Ok(());
            }

            // Describe rules when the catalog is available; ids alone otherwise
            let catalog = match load_catalog(paths, settings, catalog.as_deref()) {
                Ok(catalog) => Some(catalog),
                Err(e) => {
                    tracing::debug!(error = %e, "Showing scenario without catalog");
                    None
                }
            };

            println!("Scenario '{}' disables:", name);
            for id in &disabled {
                match catalog.as_ref().and_then(|c| c.get(id.as_str())) {
                    Some(rule) => println!(
                        "  {:<16} {:<24} {:>12}  {}",
                        id,
                        rule.name,
                        rule.amount.format_with_symbol(&settings.currency_symbol),
                        rule.schedule
                    ),
                    None => println!("  {}", id),
                }
            }
        }

        ScenarioCommands::Disable { name, ids, catalog } => {
            let disabled = scenarios.disable(&name, &ids)?;
            if let Ok(catalog) = load_catalog(paths, settings, catalog.as_deref()) {
                warn_ineffective(&catalog, &disabled);
            }
            println!(
                "Scenario '{}' now disables {} rule(s).",
                name,
                disabled.len()
            );
        }

        ScenarioCommands::Enable { name, ids } => {
            let disabled = scenarios.enable(&name, &ids)?;
            println!(
                "Scenario '{}' now disables {} rule(s).",
                name,
                disabled.len()
            );
        }

        ScenarioCommands::Clear { name } => {
            if scenarios.clear(&name)? {
                println!("Cleared scenario '{}'.", name);
            } else {
                println!("No scenario named '{}'.", name);
            }
        }
    }

    Ok(())
}
