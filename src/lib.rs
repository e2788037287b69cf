//! cashflow-forecast - daily cash-flow forecasting from recurring rules
//!
//! Given a catalog of recurring bills and income, a start date and a starting
//! balance, the engine simulates every calendar day over a horizon, tracking
//! credits, debits and the running balance, and flags days that run low or go
//! negative. Rules can be disabled per run to answer "what if I skip this
//! bill?", and a comparator summarizes the difference.
//!
//! # Architecture
//!
//! - `models`: money, rules, adjustments and forecast output types
//! - `catalog`: loading and validating the rule catalog
//! - `engine`: recurrence evaluation, simulation, alerts and comparison
//! - `storage`: key-value persistence and saved scenarios
//! - `config`: path resolution and user settings
//! - `export`: CSV and JSON output
//! - `display`: terminal tables
//! - `cli`: command handlers for the `cashflow` binary
//!
//! # Example
//!
//! ```rust
//! use cashflow_forecast::catalog::RuleCatalog;
//! use cashflow_forecast::engine::ForecastRequest;
//!
//! let catalog = RuleCatalog::from_yaml_str(
//!     "rules:\n  - { id: phone, name: Phone, amount: 39, schedule: monthly, day: 1 }\n",
//! )?;
//! let forecast = ForecastRequest::parse("2025-11-21", "800")?.run(&catalog)?;
//! assert_eq!(forecast.len(), 42);
//! # Ok::<(), cashflow_forecast::ForecastError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{ForecastError, ForecastResult};
