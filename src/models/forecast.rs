//! Forecast output model
//!
//! A forecast is a contiguous run of days, each carrying the balance going in,
//! the credits and debits that landed, the balance coming out and a flag.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Default number of simulated days
pub const DEFAULT_HORIZON_DAYS: u32 = 42;

/// Default low-balance threshold (500.00)
pub const DEFAULT_LOW_BALANCE_THRESHOLD: Money = Money::from_units(500);

/// Per-day balance classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum BalanceFlag {
    #[default]
    None,
    /// Positive but under the low-balance threshold
    Low,
    /// Below zero
    Neg,
}

impl BalanceFlag {
    /// Classify an end-of-day balance
    ///
    /// Below zero is `Neg`. Strictly between zero and the threshold is `Low`.
    /// Exactly zero and anything at or above the threshold is `None`.
    pub fn classify(balance: Money, threshold: Money) -> Self {
        if balance.is_negative() {
            Self::Neg
        } else if balance.is_positive() && balance < threshold {
            Self::Low
        } else {
            Self::None
        }
    }

    pub fn is_flagged(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Low => "LOW",
            Self::Neg => "NEG",
        }
    }
}

impl fmt::Display for BalanceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Qualitative health of a forecast's final day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BalanceStatus {
    Negative,
    Low,
    Healthy,
}

impl BalanceStatus {
    /// Bucket a balance: `Negative` below zero, `Low` under the threshold
    pub fn classify(balance: Money, threshold: Money) -> Self {
        if balance.is_negative() {
            Self::Negative
        } else if balance < threshold {
            Self::Low
        } else {
            Self::Healthy
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "NEGATIVE"),
            Self::Low => write!(f, "LOW"),
            Self::Healthy => write!(f, "HEALTHY"),
        }
    }
}

/// One simulated day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub start_balance: Money,
    pub credits: Money,
    pub debits: Money,
    pub end_balance: Money,
    pub flag: BalanceFlag,
    pub credit_names: Vec<String>,
    pub debit_names: Vec<String>,
}

impl ForecastDay {
    /// Net movement for the day
    pub fn net(&self) -> Money {
        self.credits - self.debits
    }

    pub fn has_activity(&self) -> bool {
        !self.credits.is_zero() || !self.debits.is_zero()
    }
}

/// A complete simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forecast {
    pub start_date: NaiveDate,
    pub start_balance: Money,
    pub low_balance_threshold: Money,
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }

    pub fn day(&self, date: NaiveDate) -> Option<&ForecastDay> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn last_day(&self) -> Option<&ForecastDay> {
        self.days.last()
    }

    /// Last day's closing balance, or the starting balance for an empty run
    pub fn ending_balance(&self) -> Money {
        self.days
            .last()
            .map(|d| d.end_balance)
            .unwrap_or(self.start_balance)
    }

    pub fn total_credits(&self) -> Money {
        self.days.iter().map(|d| d.credits).sum()
    }

    pub fn total_debits(&self) -> Money {
        self.days.iter().map(|d| d.debits).sum()
    }

    pub fn count_flag(&self, flag: BalanceFlag) -> usize {
        self.days.iter().filter(|d| d.flag == flag).count()
    }

    /// Final-day status bucket
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::classify(self.ending_balance(), self.low_balance_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_boundaries() {
        let threshold = DEFAULT_LOW_BALANCE_THRESHOLD;
        assert_eq!(
            BalanceFlag::classify(Money::from_cents(-1), threshold),
            BalanceFlag::Neg
        );
        assert_eq!(BalanceFlag::classify(Money::zero(), threshold), BalanceFlag::None);
        assert_eq!(
            BalanceFlag::classify(Money::from_cents(1), threshold),
            BalanceFlag::Low
        );
        assert_eq!(
            BalanceFlag::classify(Money::from_cents(49_999), threshold),
            BalanceFlag::Low
        );
        assert_eq!(
            BalanceFlag::classify(Money::from_units(500), threshold),
            BalanceFlag::None
        );
    }

    #[test]
    fn test_status_boundaries() {
        let threshold = DEFAULT_LOW_BALANCE_THRESHOLD;
        assert_eq!(
            BalanceStatus::classify(Money::from_cents(-1), threshold),
            BalanceStatus::Negative
        );
        assert_eq!(
            BalanceStatus::classify(Money::zero(), threshold),
            BalanceStatus::Low
        );
        assert_eq!(
            BalanceStatus::classify(Money::from_units(500), threshold),
            BalanceStatus::Healthy
        );
    }

    #[test]
    fn test_empty_forecast_aggregates() {
        let forecast = Forecast {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            start_balance: Money::from_units(100),
            low_balance_threshold: DEFAULT_LOW_BALANCE_THRESHOLD,
            days: Vec::new(),
        };
        assert!(forecast.is_empty());
        assert_eq!(forecast.ending_balance(), Money::from_units(100));
        assert_eq!(forecast.total_debits(), Money::zero());
        assert_eq!(forecast.status(), BalanceStatus::Low);
    }
}
