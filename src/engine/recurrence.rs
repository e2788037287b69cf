//! Recurrence evaluation
//!
//! Pure date checks deciding whether a rule fires on a given calendar day and
//! what amount it contributes once same-day adjustments are applied.
//! `NaiveDate` carries no time of day, so day differences are exact calendar
//! days and daylight-saving shifts cannot leak in.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{AdjustmentEffect, Money, Rule, Schedule};

/// Length of a biweekly cycle in days
pub const BIWEEKLY_CYCLE_DAYS: i64 = 14;

/// A biweekly rule is due on its anchor and every 14 days after, never before
pub fn is_biweekly_due(date: NaiveDate, anchor: NaiveDate) -> bool {
    let days = (date - anchor).num_days();
    days >= 0 && days % BIWEEKLY_CYCLE_DAYS == 0
}

/// Monthly rules match on day of month only; a day the month lacks never fires
pub fn is_monthly_due(date: NaiveDate, day_of_month: u32) -> bool {
    date.day() == day_of_month
}

pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_friday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Fri
}

impl Schedule {
    /// Whether this schedule fires on `date`
    pub fn fires_on(&self, date: NaiveDate) -> bool {
        match *self {
            Schedule::Monthly { day_of_month } => is_monthly_due(date, day_of_month),
            Schedule::Biweekly { anchor } => is_biweekly_due(date, anchor),
            Schedule::Weekdays => is_weekday(date),
            Schedule::Fridays => is_friday(date),
        }
    }
}

/// A rule firing on a specific date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Name to show in the ledger; an override label replaces the rule name
    pub name: String,
    pub amount: Money,
    /// True when a same-day adjustment replaced the declared amount
    pub adjusted: bool,
}

/// Evaluate `rule` on `date` against that date's adjustments
///
/// Returns `None` when the schedule does not fire. Adjustments that do not
/// target this rule are ignored, so callers can pass the full list for the day.
pub fn evaluate(
    rule: &Rule,
    date: NaiveDate,
    adjustments: &[AdjustmentEffect],
) -> Option<Occurrence> {
    if !rule.schedule.fires_on(date) {
        return None;
    }

    let adjustment = adjustments.iter().find_map(|effect| match effect {
        AdjustmentEffect::Override {
            rule: target,
            amount,
            label,
        } if *target == rule.id => Some((*amount, label.as_deref())),
        _ => None,
    });

    Some(match adjustment {
        Some((amount, label)) => Occurrence {
            name: label.unwrap_or(&rule.name).to_string(),
            amount,
            adjusted: true,
        },
        None => Occurrence {
            name: rule.name.clone(),
            amount: rule.amount,
            adjusted: false,
        },
    })
}

/// Standalone credits injected by adjustments on a date
pub fn extra_credits(adjustments: &[AdjustmentEffect]) -> impl Iterator<Item = (&str, Money)> {
    adjustments.iter().filter_map(|effect| match effect {
        AdjustmentEffect::Credit { name, amount } => Some((name.as_str(), *amount)),
        AdjustmentEffect::Override { .. } => None,
    })
}
