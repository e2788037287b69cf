//! Forecast display formatting
//!
//! The day-by-day ledger, the headline summary and the alert list.

use super::format::{flag_marker, format_nonzero, separator, truncate};
use crate::engine::{Alert, ForecastSummary};
use crate::models::Forecast;

const ACTIVITY_WIDTH: usize = 40;

/// Format the forecast as a ledger table, one line per day
pub fn format_forecast_table(forecast: &Forecast, symbol: &str) -> String {
    if forecast.is_empty() {
        return "No days to show.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<3}  {:>12}  {:>12}  {:>12}  {:<5}  {}\n",
        "Date", "Day", "Credits", "Debits", "Balance", "Flag", "Activity"
    ));
    output.push_str(&format!("{}\n", separator(68 + ACTIVITY_WIDTH)));

    for day in forecast.days() {
        let activity: Vec<String> = day
            .credit_names
            .iter()
            .map(|name| format!("+{}", name))
            .chain(day.debit_names.iter().map(|name| format!("-{}", name)))
            .collect();

        output.push_str(&format!(
            "{:<10}  {:<3}  {:>12}  {:>12}  {:>12}  {:<5}  {}\n",
            day.date.format("%Y-%m-%d"),
            day.date.format("%a"),
            format_nonzero(day.credits, symbol),
            format_nonzero(day.debits, symbol),
            day.end_balance.format_with_symbol(symbol),
            flag_marker(day.flag),
            truncate(&activity.join(", "), ACTIVITY_WIDTH),
        ));
    }

    output
}

/// Format the headline figures shown above or below the ledger
pub fn format_summary(summary: &ForecastSummary, symbol: &str) -> String {
    let mut output = String::new();

    let end = summary
        .end_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    output.push_str(&format!(
        "Forecast: {} to {} ({} days)\n",
        summary.start_date, end, summary.days
    ));
    output.push_str(&format!(
        "  Starting balance: {:>12}\n",
        summary.start_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total credits:    {:>12}\n",
        summary.total_credits.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total debits:     {:>12}\n",
        summary.total_debits.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Ending balance:   {:>12}  {}\n",
        summary.ending_balance.format_with_symbol(symbol),
        summary.status
    ));

    if let Some(date) = summary.lowest_balance_date {
        output.push_str(&format!(
            "  Lowest balance:   {:>12}  on {}\n",
            summary.lowest_balance.format_with_symbol(symbol),
            date
        ));
    }

    match summary.first_negative_date {
        Some(date) => output.push_str(&format!(
            "  Goes negative on {} ({} negative day(s), {} low day(s))\n",
            date, summary.negative_days, summary.low_days
        )),
        None if summary.low_days > 0 => output.push_str(&format!(
            "  {} low day(s), never negative\n",
            summary.low_days
        )),
        None => {}
    }

    output
}

/// Format the flagged days
pub fn format_alerts(alerts: &[Alert], symbol: &str) -> String {
    if alerts.is_empty() {
        return "No low or negative balances in this forecast.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<10}  {:<4}  {:>12}\n", "Date", "Flag", "Balance"));
    output.push_str(&format!("{}\n", separator(30)));
    for alert in alerts {
        output.push_str(&format!(
            "{:<10}  {:<4}  {:>12}\n",
            alert.date.format("%Y-%m-%d"),
            alert.flag,
            alert.balance.format_with_symbol(symbol)
        ));
    }
    output
}
