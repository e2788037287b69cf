//! Scenario comparison display

use super::format::{format_signed, separator};
use crate::engine::ForecastComparison;
use crate::models::Rule;

/// Format the impact of disabling rules against the baseline
pub fn format_comparison(comparison: &ForecastComparison, removed: &[&Rule], symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<24}  {:>12}  {:>12}  {:>12}\n",
        "", "Baseline", "Scenario", "Change"
    ));
    output.push_str(&format!("{}\n", separator(66)));
    output.push_str(&format!(
        "{:<24}  {:>12}  {:>12}  {:>12}\n",
        "Total debits",
        comparison.baseline_debits.format_with_symbol(symbol),
        comparison.modified_debits.format_with_symbol(symbol),
        format_signed(-comparison.total_removed(), symbol),
    ));
    output.push_str(&format!(
        "{:<24}  {:>12}  {:>12}  {:>12}\n",
        "Ending balance",
        comparison.baseline_ending.format_with_symbol(symbol),
        comparison.modified_ending.format_with_symbol(symbol),
        format_signed(comparison.ending_balance_delta(), symbol),
    ));
    output.push_str(&format!(
        "{:<24}  {:>12}  {:>12}  {:>+12}\n",
        "Negative days", "", "", comparison.negative_days_delta
    ));
    output.push_str(&format!(
        "{:<24}  {:>12}  {:>12}  {:>+12}\n",
        "Low days", "", "", comparison.low_days_delta
    ));
    output.push_str(&format!("\nFinal status: {}\n", comparison.status_change));

    if removed.is_empty() {
        output.push_str("No rules removed.\n");
    } else {
        output.push_str(&format!(
            "\nRemoved rules (saves {} over the window):\n",
            comparison.total_removed().format_with_symbol(symbol)
        ));
        for rule in removed {
            output.push_str(&format!(
                "  {:<24}  {:>12}  {}\n",
                rule.name,
                rule.amount.format_with_symbol(symbol),
                rule.schedule
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StatusChange;
    use crate::models::{BalanceStatus, Money};

    fn comparison() -> ForecastComparison {
        ForecastComparison {
            baseline_debits: Money::from_units(300),
            modified_debits: Money::from_units(150),
            baseline_ending: Money::from_units(-50),
            modified_ending: Money::from_units(100),
            negative_days_delta: -3,
            low_days_delta: 2,
            status_change: StatusChange::Changed {
                from: BalanceStatus::Negative,
                to: BalanceStatus::Low,
            },
        }
    }

    #[test]
    fn test_format_comparison() {
        let rule = Rule::fridays("savings", "Savings", Money::from_units(50));
        let output = format_comparison(&comparison(), &[&rule], "$");

        assert!(output.contains("-$150.00"));
        assert!(output.contains("+$150.00"));
        assert!(output.contains("-3"));
        assert!(output.contains("+2"));
        assert!(output.contains("Final status: NEGATIVE → LOW"));
        assert!(output.contains("saves $150.00"));
        assert!(output.contains("Savings"));
    }

    #[test]
    fn test_format_comparison_without_removed_rules() {
        let output = format_comparison(&comparison(), &[], "$");
        assert!(output.contains("No rules removed."));
    }
}
