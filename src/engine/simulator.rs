//! Forecast simulation
//!
//! Walks consecutive calendar days from a start date, collects what every rule
//! contributes on each day, and carries the closing balance into the next day.
//! The run is pure: the same catalog, start, balance and disabled set always
//! produce the same forecast.

use chrono::NaiveDate;

use super::recurrence::{evaluate, extra_credits};
use crate::catalog::RuleCatalog;
use crate::error::{ForecastError, ForecastResult};
use crate::models::{
    BalanceFlag, DisabledSet, Forecast, ForecastDay, Money, DEFAULT_HORIZON_DAYS,
    DEFAULT_LOW_BALANCE_THRESHOLD,
};

/// Upper bound on the simulated window (ten years)
pub const MAX_HORIZON_DAYS: u32 = 3660;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Tunables for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    pub horizon_days: u32,
    pub low_balance_threshold: Money,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            low_balance_threshold: DEFAULT_LOW_BALANCE_THRESHOLD,
        }
    }
}

impl SimulationOptions {
    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn with_threshold(mut self, threshold: Money) -> Self {
        self.low_balance_threshold = threshold;
        self
    }

    fn validate(&self) -> ForecastResult<()> {
        if self.horizon_days == 0 {
            return Err(ForecastError::Validation(
                "horizon must be at least one day".into(),
            ));
        }
        if self.horizon_days > MAX_HORIZON_DAYS {
            return Err(ForecastError::Validation(format!(
                "horizon of {} days exceeds the maximum of {}",
                self.horizon_days, MAX_HORIZON_DAYS
            )));
        }
        if self.low_balance_threshold.is_negative() {
            return Err(ForecastError::Validation(
                "low-balance threshold cannot be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Inputs of a single run, as supplied by a form or command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub start_date: NaiveDate,
    pub start_balance: Money,
    pub disabled: DisabledSet,
    pub options: SimulationOptions,
}

impl ForecastRequest {
    pub fn new(start_date: NaiveDate, start_balance: Money) -> Self {
        Self {
            start_date,
            start_balance,
            disabled: DisabledSet::new(),
            options: SimulationOptions::default(),
        }
    }

    /// Build a request from raw text, rejecting unparsable input
    pub fn parse(start_date: &str, start_balance: &str) -> ForecastResult<Self> {
        let date = parse_start_date(start_date)?;
        let balance = Money::parse(start_balance).map_err(|_| {
            ForecastError::Validation(format!(
                "invalid start balance '{}' (expected a decimal amount)",
                start_balance.trim()
            ))
        })?;
        Ok(Self::new(date, balance))
    }

    pub fn with_disabled(mut self, disabled: DisabledSet) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_options(mut self, options: SimulationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self, catalog: &RuleCatalog) -> ForecastResult<Forecast> {
        simulate(
            catalog,
            self.start_date,
            self.start_balance,
            &self.disabled,
            &self.options,
        )
    }
}

/// Parse a `YYYY-MM-DD` start date
pub fn parse_start_date(raw: &str) -> ForecastResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        ForecastError::Validation(format!(
            "invalid start date '{}' (expected YYYY-MM-DD)",
            raw.trim()
        ))
    })
}

/// Run the day-by-day simulation
///
/// Credits come from every inflow rule that fires (with same-day overrides
/// applied) plus standalone credit adjustments. Debits come from every outflow
/// rule that fires and is not in `disabled`. Inflows are never disabled.
pub fn simulate(
    catalog: &RuleCatalog,
    start_date: NaiveDate,
    start_balance: Money,
    disabled: &DisabledSet,
    options: &SimulationOptions,
) -> ForecastResult<Forecast> {
    options.validate()?;

    tracing::debug!(
        start = %start_date,
        balance = %start_balance,
        horizon = options.horizon_days,
        disabled = disabled.len(),
        "Simulating forecast"
    );

    let mut days = Vec::with_capacity(options.horizon_days as usize);
    let mut balance = start_balance;
    let mut date = start_date;

    for index in 0..options.horizon_days {
        if index > 0 {
            date = date.succ_opt().ok_or_else(|| {
                ForecastError::Validation(format!(
                    "forecast starting {} runs past the last representable date",
                    start_date
                ))
            })?;
        }

        let day = simulate_day(catalog, date, balance, disabled, options.low_balance_threshold)?;
        balance = day.end_balance;
        days.push(day);
    }

    tracing::debug!(ending = %balance, "Forecast complete");

    Ok(Forecast {
        start_date,
        start_balance,
        low_balance_threshold: options.low_balance_threshold,
        days,
    })
}

/// Compute a single day given the balance carried in
///
/// Fails with a validation error when the amounts involved exceed what
/// `Money` can hold.
pub fn simulate_day(
    catalog: &RuleCatalog,
    date: NaiveDate,
    start_balance: Money,
    disabled: &DisabledSet,
    threshold: Money,
) -> ForecastResult<ForecastDay> {
    let overflow = || ForecastError::Validation(format!("balance overflow on {}", date));
    let adjustments = catalog.adjustments_on(date);

    let mut credits = Money::zero();
    let mut credit_names = Vec::new();
    for rule in catalog.inflows() {
        if let Some(hit) = evaluate(rule, date, adjustments) {
            credits = credits.checked_add(hit.amount).ok_or_else(overflow)?;
            credit_names.push(hit.name);
        }
    }
    for (name, amount) in extra_credits(adjustments) {
        credits = credits.checked_add(amount).ok_or_else(overflow)?;
        credit_names.push(name.to_string());
    }

    let mut debits = Money::zero();
    let mut debit_names = Vec::new();
    for rule in catalog
        .outflows()
        .filter(|rule| !disabled.contains(rule.id.as_str()))
    {
        if let Some(hit) = evaluate(rule, date, adjustments) {
            debits = debits.checked_add(hit.amount).ok_or_else(overflow)?;
            debit_names.push(hit.name);
        }
    }

    let end_balance = start_balance
        .checked_add(credits)
        .and_then(|balance| balance.checked_sub(debits))
        .ok_or_else(overflow)?;

    Ok(ForecastDay {
        date,
        start_balance,
        credits,
        debits,
        end_balance,
        flag: BalanceFlag::classify(end_balance, threshold),
        credit_names,
        debit_names,
    })
}
