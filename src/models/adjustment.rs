//! One-time adjustments
//!
//! An adjustment annotates a single calendar date. It either changes the amount
//! of a rule that fires that day (a reduced paycheck) or adds a standalone
//! credit (an early transfer). Adjustments never create recurrence.

use chrono::NaiveDate;
use serde::Serialize;

use super::ids::RuleId;
use super::money::Money;

/// What an adjustment does on its date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentEffect {
    /// Replace the amount of `rule` on this date, if it fires
    Override {
        rule: RuleId,
        amount: Money,
        /// Name shown instead of the rule's own name
        label: Option<String>,
    },
    /// Add an extra credit
    Credit { name: String, amount: Money },
}

impl AdjustmentEffect {
    pub fn amount(&self) -> Money {
        match self {
            Self::Override { amount, .. } | Self::Credit { amount, .. } => *amount,
        }
    }
}

/// An effect pinned to an exact date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub date: NaiveDate,
    pub effect: AdjustmentEffect,
}

impl Adjustment {
    pub fn override_rule(
        date: NaiveDate,
        rule: impl Into<RuleId>,
        amount: Money,
        label: Option<String>,
    ) -> Self {
        Self {
            date,
            effect: AdjustmentEffect::Override {
                rule: rule.into(),
                amount,
                label,
            },
        }
    }

    pub fn credit(date: NaiveDate, name: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            effect: AdjustmentEffect::Credit {
                name: name.into(),
                amount,
            },
        }
    }

    /// The rule this adjustment overrides, if any
    pub fn target(&self) -> Option<&RuleId> {
        match &self.effect {
            AdjustmentEffect::Override { rule, .. } => Some(rule),
            AdjustmentEffect::Credit { .. } => None,
        }
    }

    pub fn amount(&self) -> Money {
        self.effect.amount()
    }
}
