//! Recurring-transaction rule model
//!
//! A rule is a named amount that moves money in one direction on a fixed
//! recurrence: a day of the month, a 14-day cycle from an anchor date, every
//! weekday, or every Friday.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::ids::RuleId;
use super::money::Money;

/// Direction of a rule's cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Money arriving in the account (paychecks, transfers in)
    Inflow,
    /// Money leaving the account (bills, allocations)
    #[default]
    Outflow,
}

impl Flow {
    /// Parse a flow from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "inflow" | "in" | "credit" | "income" => Some(Self::Inflow),
            "outflow" | "out" | "debit" | "bill" | "expense" => Some(Self::Outflow),
            _ => None,
        }
    }

    pub fn is_inflow(&self) -> bool {
        matches!(self, Self::Inflow)
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inflow => write!(f, "Inflow"),
            Self::Outflow => write!(f, "Outflow"),
        }
    }
}

/// When a rule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Schedule {
    /// Fires on this day of every month; months without the day are skipped
    Monthly { day_of_month: u32 },
    /// Fires every 14 days starting at the anchor date
    Biweekly { anchor: NaiveDate },
    /// Fires Monday through Friday
    Weekdays,
    /// Fires on Fridays only
    Fridays,
}

impl Schedule {
    /// Short category name used in listings and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Monthly { .. } => "monthly",
            Self::Biweekly { .. } => "biweekly",
            Self::Weekdays => "weekdays",
            Self::Fridays => "fridays",
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { day_of_month } => write!(f, "Monthly on day {}", day_of_month),
            Self::Biweekly { anchor } => write!(f, "Every 2 weeks from {}", anchor),
            Self::Weekdays => write!(f, "Weekdays"),
            Self::Fridays => write!(f, "Fridays"),
        }
    }
}

/// A recurring cash movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub id: RuleId,
    pub name: String,
    /// Declared amount, always non-negative; `flow` carries the sign
    pub amount: Money,
    pub flow: Flow,
    pub schedule: Schedule,
}

impl Rule {
    /// Create an outflow rule
    pub fn new(
        id: impl Into<RuleId>,
        name: impl Into<String>,
        amount: Money,
        schedule: Schedule,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            flow: Flow::Outflow,
            schedule,
        }
    }

    /// Monthly bill on the given day
    pub fn monthly(
        id: impl Into<RuleId>,
        name: impl Into<String>,
        amount: Money,
        day_of_month: u32,
    ) -> Self {
        Self::new(id, name, amount, Schedule::Monthly { day_of_month })
    }

    /// Biweekly bill anchored on the given date
    pub fn biweekly(
        id: impl Into<RuleId>,
        name: impl Into<String>,
        amount: Money,
        anchor: NaiveDate,
    ) -> Self {
        Self::new(id, name, amount, Schedule::Biweekly { anchor })
    }

    /// Debit taken every weekday
    pub fn weekdays(id: impl Into<RuleId>, name: impl Into<String>, amount: Money) -> Self {
        Self::new(id, name, amount, Schedule::Weekdays)
    }

    /// Allocation taken every Friday
    pub fn fridays(id: impl Into<RuleId>, name: impl Into<String>, amount: Money) -> Self {
        Self::new(id, name, amount, Schedule::Fridays)
    }

    /// Turn this rule into an inflow
    pub fn inflow(mut self) -> Self {
        self.flow = Flow::Inflow;
        self
    }

    pub fn is_inflow(&self) -> bool {
        self.flow.is_inflow()
    }

    /// Check the rule's invariants
    pub fn validate(&self) -> Result<(), RuleValidationError> {
        if self.id.is_empty() {
            return Err(RuleValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(RuleValidationError::EmptyName(self.id.clone()));
        }
        if self.amount.is_negative() {
            return Err(RuleValidationError::NegativeAmount(self.id.clone()));
        }
        if let Schedule::Monthly { day_of_month } = self.schedule {
            if !(1..=31).contains(&day_of_month) {
                return Err(RuleValidationError::DayOutOfRange(
                    self.id.clone(),
                    day_of_month,
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.amount, self.schedule)
    }
}

/// Rule invariant violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValidationError {
    EmptyId,
    EmptyName(RuleId),
    NegativeAmount(RuleId),
    DayOutOfRange(RuleId, u32),
}

impl fmt::Display for RuleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "rule id cannot be empty"),
            Self::EmptyName(id) => write!(f, "rule '{}' has an empty name", id),
            Self::NegativeAmount(id) => write!(f, "rule '{}' has a negative amount", id),
            Self::DayOutOfRange(id, day) => write!(
                f,
                "rule '{}' has day_of_month {} (must be between 1 and 31)",
                id, day
            ),
        }
    }
}

impl std::error::Error for RuleValidationError {}
