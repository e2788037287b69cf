//! Forecast engine
//!
//! Recurrence evaluation, the day-by-day simulator, derived alerts and the
//! scenario comparator. Everything here is pure and synchronous: no I/O, no
//! shared state between runs.

pub mod alerts;
pub mod comparator;
pub mod recurrence;
pub mod simulator;

pub use alerts::{alerts, Alert, ForecastSummary};
pub use comparator::{removed_rules, ForecastComparison, StatusChange};
pub use recurrence::{evaluate, is_biweekly_due, Occurrence};
pub use simulator::{
    parse_start_date, simulate, ForecastRequest, SimulationOptions, MAX_HORIZON_DAYS,
};
