//! Balance alerts
//!
//! Derived views over a forecast: which days are flagged and the headline
//! numbers a dashboard shows above the ledger.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{BalanceFlag, BalanceStatus, Forecast, Money};

/// A flagged day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub date: NaiveDate,
    pub flag: BalanceFlag,
    pub balance: Money,
}

/// Every day whose closing balance is low or negative, in date order
pub fn alerts(forecast: &Forecast) -> Vec<Alert> {
    forecast
        .days()
        .iter()
        .filter(|day| day.flag.is_flagged())
        .map(|day| Alert {
            date: day.date,
            flag: day.flag,
            balance: day.end_balance,
        })
        .collect()
}

/// Headline figures for a forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastSummary {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub days: usize,
    pub start_balance: Money,
    pub ending_balance: Money,
    pub total_credits: Money,
    pub total_debits: Money,
    pub lowest_balance: Money,
    pub lowest_balance_date: Option<NaiveDate>,
    pub first_negative_date: Option<NaiveDate>,
    pub negative_days: usize,
    pub low_days: usize,
    pub status: BalanceStatus,
}

impl ForecastSummary {
    pub fn generate(forecast: &Forecast) -> Self {
        // Earliest day wins ties for the lowest balance
        let lowest = forecast
            .days()
            .iter()
            .fold(None, |acc: Option<(Money, NaiveDate)>, day| match acc {
                Some((balance, _)) if balance <= day.end_balance => acc,
                _ => Some((day.end_balance, day.date)),
            });

        Self {
            start_date: forecast.start_date,
            end_date: forecast.last_day().map(|d| d.date),
            days: forecast.len(),
            start_balance: forecast.start_balance,
            ending_balance: forecast.ending_balance(),
            total_credits: forecast.total_credits(),
            total_debits: forecast.total_debits(),
            lowest_balance: lowest
                .map(|(balance, _)| balance)
                .unwrap_or(forecast.start_balance),
            lowest_balance_date: lowest.map(|(_, date)| date),
            first_negative_date: forecast
                .days()
                .iter()
                .find(|day| day.flag == BalanceFlag::Neg)
                .map(|day| day.date),
            negative_days: forecast.count_flag(BalanceFlag::Neg),
            low_days: forecast.count_flag(BalanceFlag::Low),
            status: forecast.status(),
        }
    }

    pub fn has_alerts(&self) -> bool {
        self.negative_days > 0 || self.low_days > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleCatalog;
    use crate::engine::simulator::{simulate, SimulationOptions};
    use crate::models::{DisabledSet, Rule};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn forecast() -> Forecast {
        let catalog = RuleCatalog::new(
            vec![
                Rule::monthly("rent", "Rent", Money::from_units(700), 1),
                Rule::monthly("deposit", "Deposit", Money::from_units(1000), 2).inflow(),
            ],
            Vec::new(),
        )
        .unwrap();
        simulate(
            &catalog,
            date(2025, 11, 29),
            Money::from_units(600),
            &DisabledSet::new(),
            &SimulationOptions::default().with_horizon(5),
        )
        .unwrap()
    }

    #[test]
    fn test_alerts_list_flagged_days() {
        // 11-29 600, 11-30 600, 12-01 -100, 12-02 900, 12-03 900
        let alerts = alerts(&forecast());
        assert_eq!(
            alerts,
            vec![Alert {
                date: date(2025, 12, 1),
                flag: BalanceFlag::Neg,
                balance: Money::from_units(-100),
            }]
        );
    }

    #[test]
    fn test_summary() {
        let summary = ForecastSummary::generate(&forecast());
        assert_eq!(summary.days, 5);
        assert_eq!(summary.end_date, Some(date(2025, 12, 3)));
        assert_eq!(summary.total_debits, Money::from_units(700));
        assert_eq!(summary.total_credits, Money::from_units(1000));
        assert_eq!(summary.ending_balance, Money::from_units(900));
        assert_eq!(summary.lowest_balance, Money::from_units(-100));
        assert_eq!(summary.lowest_balance_date, Some(date(2025, 12, 1)));
        assert_eq!(summary.first_negative_date, Some(date(2025, 12, 1)));
        assert_eq!(summary.negative_days, 1);
        assert_eq!(summary.low_days, 0);
        assert_eq!(summary.status, BalanceStatus::Healthy);
        assert!(summary.has_alerts());
    }

    #[test]
    fn test_lowest_balance_prefers_earliest_day() {
        let summary = ForecastSummary::generate(&forecast());
        let flat = simulate(
            &RuleCatalog::default(),
            date(2025, 1, 1),
            Money::from_units(50),
            &DisabledSet::new(),
            &SimulationOptions::default().with_horizon(3),
        )
        .unwrap();
        let flat_summary = ForecastSummary::generate(&flat);
        assert_eq!(flat_summary.lowest_balance_date, Some(date(2025, 1, 1)));
        assert_eq!(flat_summary.low_days, 3);
        assert!(summary.first_negative_date.is_some());
        assert_eq!(flat_summary.first_negative_date, None);
    }
}
