//! On-disk catalog document
//!
//! The file format is deliberately loose (every field optional, amounts as
//! numbers or strings) so that validation can name exactly which entry is
//! broken instead of surfacing a bare serde error.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ForecastError, ForecastResult};
use crate::models::{Adjustment, Flow, Money, Rule, RuleId, Schedule};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
    #[serde(default)]
    pub adjustments: Vec<AdjustmentEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub amount: Option<AmountValue>,
    pub flow: Option<String>,
    pub schedule: Option<String>,
    pub day: Option<i64>,
    pub anchor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustmentEntry {
    pub date: Option<String>,
    #[serde(rename = "override")]
    pub override_rule: Option<String>,
    pub credit: Option<String>,
    pub amount: Option<AmountValue>,
    pub label: Option<String>,
}

/// Amounts may be written as `39`, `12.5` or `"2,100.00"`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(f64),
    Text(String),
}

impl AmountValue {
    fn to_money(&self) -> Option<Money> {
        match self {
            Self::Number(n) => Money::from_decimal(*n),
            Self::Text(s) => Money::parse(s).ok(),
        }
    }
}

impl CatalogDocument {
    pub fn from_yaml_str(s: &str) -> ForecastResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> ForecastResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Convert every entry, failing on the first malformed one
    pub fn into_parts(self) -> ForecastResult<(Vec<Rule>, Vec<Adjustment>)> {
        let rules = self
            .rules
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_rule(index))
            .collect::<ForecastResult<Vec<_>>>()?;

        let adjustments = self
            .adjustments
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_adjustment(index))
            .collect::<ForecastResult<Vec<_>>>()?;

        Ok((rules, adjustments))
    }
}

impl RuleEntry {
    fn into_rule(self, index: usize) -> ForecastResult<Rule> {
        let id = match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => RuleId::new(id),
            _ => return Err(invalid(format!("rules[{}]: missing id", index))),
        };
        let at = |msg: &str| invalid(format!("rules[{}] '{}': {}", index, id, msg));

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| id.to_string());

        let amount = parse_amount(self.amount.as_ref()).map_err(|msg| at(&msg))?;

        let flow = match self.flow.as_deref() {
            None => Flow::default(),
            Some(raw) => Flow::parse(raw).ok_or_else(|| {
                at(&format!(
                    "unknown flow '{}' (expected inflow or outflow)",
                    raw
                ))
            })?,
        };

        let kind = self
            .schedule
            .as_deref()
            .ok_or_else(|| at("missing schedule"))?;

        let schedule = match kind.trim().to_lowercase().as_str() {
            "monthly" => {
                let day = self.day.ok_or_else(|| at("monthly rule is missing day"))?;
                if !(1..=31).contains(&day) {
                    return Err(at(&format!("day {} is outside 1-31", day)));
                }
                Schedule::Monthly {
                    day_of_month: day as u32,
                }
            }
            "biweekly" | "bi-weekly" | "fortnightly" => {
                let raw = self
                    .anchor
                    .as_deref()
                    .ok_or_else(|| at("biweekly rule is missing anchor"))?;
                let anchor = parse_date(raw).map_err(|msg| at(&msg))?;
                Schedule::Biweekly { anchor }
            }
            "weekdays" | "weekday" => Schedule::Weekdays,
            "fridays" | "friday" => Schedule::Fridays,
            other => {
                return Err(at(&format!(
                    "unknown schedule '{}' (expected monthly, biweekly, weekdays or fridays)",
                    other
                )))
            }
        };

        if self.day.is_some() && !matches!(schedule, Schedule::Monthly { .. }) {
            return Err(at("day is only valid for monthly rules"));
        }
        if self.anchor.is_some() && !matches!(schedule, Schedule::Biweekly { .. }) {
            return Err(at("anchor is only valid for biweekly rules"));
        }

        let rule = Rule {
            id: id.clone(),
            name,
            amount,
            flow,
            schedule,
        };
        rule.validate().map_err(|e| at(&e.to_string()))?;
        Ok(rule)
    }
}

impl AdjustmentEntry {
    fn into_adjustment(self, index: usize) -> ForecastResult<Adjustment> {
        let at = |msg: &str| invalid(format!("adjustments[{}]: {}", index, msg));

        let raw_date = self.date.as_deref().ok_or_else(|| at("missing date"))?;
        let date = parse_date(raw_date).map_err(|msg| at(&msg))?;
        let amount = parse_amount(self.amount.as_ref()).map_err(|msg| at(&msg))?;

        match (self.override_rule, self.credit) {
            (Some(rule), None) => {
                let rule = RuleId::new(rule);
                if rule.is_empty() {
                    return Err(at("override names an empty rule id"));
                }
                let label = self
                    .label
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty());
                Ok(Adjustment::override_rule(date, rule, amount, label))
            }
            (None, Some(name)) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(at("credit name cannot be empty"));
                }
                if self.label.is_some() {
                    return Err(at("label is only valid for overrides"));
                }
                Ok(Adjustment::credit(date, name, amount))
            }
            (Some(_), Some(_)) => Err(at("set either override or credit, not both")),
            (None, None) => Err(at("missing override or credit")),
        }
    }
}

fn parse_amount(value: Option<&AmountValue>) -> Result<Money, String> {
    let value = value.ok_or_else(|| "missing amount".to_string())?;
    let amount = value
        .to_money()
        .ok_or_else(|| format!("invalid amount {:?}", value))?;
    if amount.is_negative() {
        return Err(format!("amount {} is negative", amount));
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", raw.trim()))
}

fn invalid(msg: String) -> ForecastError {
    ForecastError::Validation(msg)
}
