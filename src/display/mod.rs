//! Display formatting for terminal output
//!
//! Formats forecasts, comparisons and the rule catalog as plain-text tables.

pub mod comparison;
pub mod forecast;
pub mod format;
pub mod rules;

pub use comparison::format_comparison;
pub use forecast::{format_alerts, format_forecast_table, format_summary};
pub use rules::{format_adjustment_table, format_rule_table};
