//! Scenario comparison
//!
//! Diffs a baseline forecast against a modified one (typically the same inputs
//! with some bills disabled) and summarizes the impact.

use std::fmt;

use crate::catalog::RuleCatalog;
use crate::error::{ForecastError, ForecastResult};
use crate::models::{BalanceFlag, BalanceStatus, DisabledSet, Forecast, Money, Rule};

/// Movement of the final-day status bucket between two forecasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Unchanged(BalanceStatus),
    Changed {
        from: BalanceStatus,
        to: BalanceStatus,
    },
}

impl StatusChange {
    pub fn between(from: BalanceStatus, to: BalanceStatus) -> Self {
        if from == to {
            Self::Unchanged(from)
        } else {
            Self::Changed { from, to }
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged(_) => write!(f, "UNCHANGED"),
            Self::Changed { from, to } => write!(f, "{} → {}", from, to),
        }
    }
}

/// Impact summary of a modified forecast against its baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastComparison {
    pub baseline_debits: Money,
    pub modified_debits: Money,
    pub baseline_ending: Money,
    pub modified_ending: Money,
    /// Modified minus baseline count of negative days
    pub negative_days_delta: i64,
    /// Modified minus baseline count of low days
    pub low_days_delta: i64,
    pub status_change: StatusChange,
}

impl ForecastComparison {
    /// Compare two forecasts over the same window
    ///
    /// Both forecasts must start on the same date and cover the same number of
    /// days; anything else is rejected.
    pub fn compare(baseline: &Forecast, modified: &Forecast) -> ForecastResult<Self> {
        if baseline.len() != modified.len() {
            return Err(ForecastError::Validation(format!(
                "cannot compare forecasts of {} and {} days",
                baseline.len(),
                modified.len()
            )));
        }
        if baseline.start_date != modified.start_date {
            return Err(ForecastError::Validation(format!(
                "cannot compare forecasts starting {} and {}",
                baseline.start_date, modified.start_date
            )));
        }

        Ok(Self {
            baseline_debits: baseline.total_debits(),
            modified_debits: modified.total_debits(),
            baseline_ending: baseline.ending_balance(),
            modified_ending: modified.ending_balance(),
            negative_days_delta: flag_delta(baseline, modified, BalanceFlag::Neg),
            low_days_delta: flag_delta(baseline, modified, BalanceFlag::Low),
            status_change: StatusChange::between(baseline.status(), modified.status()),
        })
    }

    /// Sum of debits the modified run no longer pays
    pub fn total_removed(&self) -> Money {
        self.baseline_debits - self.modified_debits
    }

    /// How much higher (or lower) the modified run ends
    pub fn ending_balance_delta(&self) -> Money {
        self.modified_ending - self.baseline_ending
    }

    pub fn is_unchanged(&self) -> bool {
        self.total_removed().is_zero()
            && self.ending_balance_delta().is_zero()
            && self.negative_days_delta == 0
            && self.low_days_delta == 0
            && !self.status_change.is_changed()
    }
}

fn flag_delta(baseline: &Forecast, modified: &Forecast, flag: BalanceFlag) -> i64 {
    modified.count_flag(flag) as i64 - baseline.count_flag(flag) as i64
}

/// Disabled outflow rules that exist in the catalog, largest amount first
///
/// Ids with no matching rule, and inflows (which are never disabled), are
/// skipped. Ties keep catalog order.
pub fn removed_rules<'a>(catalog: &'a RuleCatalog, disabled: &DisabledSet) -> Vec<&'a Rule> {
    let mut rules: Vec<&Rule> = catalog
        .outflows()
        .filter(|rule| disabled.contains(rule.id.as_str()))
        .collect();
    rules.sort_by(|a, b| b.amount.cmp(&a.amount));
    rules
}
