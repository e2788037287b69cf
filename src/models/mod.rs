//! Core data models for cashflow-forecast
//!
//! Rules and adjustments describe what the catalog declares; forecasts and
//! forecast days describe what a simulation run produced.

pub mod adjustment;
pub mod disabled;
pub mod forecast;
pub mod ids;
pub mod money;
pub mod rule;

pub use adjustment::{Adjustment, AdjustmentEffect};
pub use disabled::DisabledSet;
pub use forecast::{
    BalanceFlag, BalanceStatus, Forecast, ForecastDay, DEFAULT_HORIZON_DAYS,
    DEFAULT_LOW_BALANCE_THRESHOLD,
};
pub use ids::RuleId;
pub use money::{Money, MoneyParseError};
pub use rule::{Flow, Rule, RuleValidationError, Schedule};
