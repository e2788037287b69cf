use anyhow::Result;
use clap::{Parser, Subcommand};

use cashflow_forecast::cli::{
    handle_compare_command, handle_forecast_command, handle_rules_command,
    handle_scenario_command, CompareArgs, ForecastArgs, RulesCommands, ScenarioCommands,
};
use cashflow_forecast::config::{ForecastPaths, Settings};
use cashflow_forecast::logging::init_tracing;

const SAMPLE_CATALOG: &str = include_str!("../demos/catalog.yaml");

#[derive(Parser)]
#[command(
    name = "cashflow",
    version,
    about = "Daily cash-flow forecasting from recurring bills and income",
    long_about = "cashflow simulates your account balance day by day from a catalog \
                  of recurring bills and income, flags days that run low or go \
                  negative, and shows what changes when you skip a bill."
)]
struct Cli {
    /// Log debug output to stderr (CASHFLOW_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the balance day by day
    #[command(alias = "run")]
    Forecast(ForecastArgs),

    /// Compare a scenario with disabled rules against the baseline
    Compare(CompareArgs),

    /// Inspect and validate the rule catalog
    #[command(subcommand)]
    Rules(RulesCommands),

    /// Manage saved scenarios
    #[command(subcommand)]
    Scenario(ScenarioCommands),

    /// Write default settings and a sample catalog
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = ForecastPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Forecast(args)) => handle_forecast_command(&paths, &settings, args)?,
        Some(Commands::Compare(args)) => handle_compare_command(&paths, &settings, args)?,
        Some(Commands::Rules(cmd)) => handle_rules_command(&paths, &settings, cmd)?,
        Some(Commands::Scenario(cmd)) => handle_scenario_command(&paths, &settings, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing cashflow at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            let catalog_path = settings.catalog_path(&paths, None);
            if catalog_path.exists() {
                println!("Keeping existing catalog: {}", catalog_path.display());
            } else {
                std::fs::write(&catalog_path, SAMPLE_CATALOG)?;
                println!("Wrote sample catalog: {}", catalog_path.display());
            }
            println!();
            println!("Edit the catalog, then run 'cashflow forecast --balance <amount>'.");
        }
        Some(Commands::Config) => {
            println!("cashflow Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!(
                "Catalog file:    {}",
                settings.catalog_path(&paths, None).display()
            );
            println!("Scenarios file:  {}", paths.scenarios_file().display());
            println!();
            println!("Settings:");
            println!("  Horizon days:          {}", settings.horizon_days);
            println!(
                "  Low-balance threshold: {}",
                settings
                    .low_balance_threshold
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!(
                "  Default scenario:      {}",
                settings.default_scenario.as_deref().unwrap_or("(none)")
            );
        }
        None => {
            println!("cashflow - daily cash-flow forecasting");
            println!();
            println!("Run 'cashflow --help' for usage information.");
            println!("Run 'cashflow init' to create a sample catalog.");
        }
    }

    Ok(())
}
