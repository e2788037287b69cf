//! Rule catalog
//!
//! The catalog is the read-only set of rules and one-time adjustments that
//! every forecast run walks. It is loaded once from a YAML or JSON file and
//! validated up front, so the simulator can assume well-formed input.

pub mod document;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{ForecastError, ForecastResult};
use crate::models::{Adjustment, AdjustmentEffect, Rule};

pub use document::CatalogDocument;

/// Validated, immutable set of rules and adjustments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    adjustments: BTreeMap<NaiveDate, Vec<AdjustmentEffect>>,
}

impl RuleCatalog {
    /// Build a catalog, checking every rule and adjustment
    ///
    /// Rule ids must be unique across the whole catalog, and overrides must
    /// target a rule that exists. A rule may be overridden at most once per
    /// date.
    pub fn new(rules: Vec<Rule>, adjustments: Vec<Adjustment>) -> ForecastResult<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            rule.validate()
                .map_err(|e| ForecastError::Validation(e.to_string()))?;
            if !seen.insert(rule.id.as_str()) {
                return Err(ForecastError::Validation(format!(
                    "duplicate rule id '{}'",
                    rule.id
                )));
            }
        }

        let mut by_date: BTreeMap<NaiveDate, Vec<AdjustmentEffect>> = BTreeMap::new();
        for adjustment in adjustments {
            if adjustment.amount().is_negative() {
                return Err(ForecastError::Validation(format!(
                    "adjustment on {} has a negative amount",
                    adjustment.date
                )));
            }
            if let Some(target) = adjustment.target() {
                if !seen.contains(target.as_str()) {
                    return Err(ForecastError::Validation(format!(
                        "adjustment on {} overrides unknown rule '{}'",
                        adjustment.date, target
                    )));
                }
                let already = by_date
                    .get(&adjustment.date)
                    .map(|effects| {
                        effects.iter().any(|e| {
                            matches!(e, AdjustmentEffect::Override { rule, .. } if rule == target)
                        })
                    })
                    .unwrap_or(false);
                if already {
                    return Err(ForecastError::Validation(format!(
                        "rule '{}' is overridden more than once on {}",
                        target, adjustment.date
                    )));
                }
            }
            by_date
                .entry(adjustment.date)
                .or_default()
                .push(adjustment.effect);
        }

        Ok(Self {
            rules,
            adjustments: by_date,
        })
    }

    /// Load a catalog file; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> ForecastResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ForecastError::Config(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ForecastError::Io(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let catalog = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
        .map_err(|e| match e {
            ForecastError::Validation(msg) => {
                ForecastError::Validation(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            rules = catalog.rules.len(),
            adjustment_dates = catalog.adjustments.len(),
            "Loaded rule catalog"
        );

        Ok(catalog)
    }

    pub fn from_yaml_str(s: &str) -> ForecastResult<Self> {
        let (rules, adjustments) = CatalogDocument::from_yaml_str(s)?.into_parts()?;
        Self::new(rules, adjustments)
    }

    pub fn from_json_str(s: &str) -> ForecastResult<Self> {
        let (rules, adjustments) = CatalogDocument::from_json_str(s)?.into_parts()?;
        Self::new(rules, adjustments)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by id
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id.as_str() == id)
    }

    /// Look up a rule by id, failing if it does not exist
    pub fn require(&self, id: &str) -> ForecastResult<&Rule> {
        self.get(id).ok_or_else(|| ForecastError::rule_not_found(id))
    }

    pub fn inflows(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| r.is_inflow())
    }

    pub fn outflows(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(|r| !r.is_inflow())
    }

    /// Adjustments pinned to `date`; empty when there are none
    pub fn adjustments_on(&self, date: NaiveDate) -> &[AdjustmentEffect] {
        self.adjustments
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All adjustments in date order
    pub fn adjustments(&self) -> impl Iterator<Item = (NaiveDate, &AdjustmentEffect)> {
        self.adjustments
            .iter()
            .flat_map(|(date, effects)| effects.iter().map(move |e| (*date, e)))
    }

    pub fn adjustment_count(&self) -> usize {
        self.adjustments.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let rules = vec![
            Rule::monthly("gym", "Gym", Money::from_units(25), 3),
            Rule::fridays("gym", "Gym again", Money::from_units(5)),
        ];
        let err = RuleCatalog::new(rules, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("duplicate rule id 'gym'"));
    }

    #[test]
    fn test_override_unknown_rule_rejected() {
        let rules = vec![Rule::monthly("rent", "Rent", Money::from_units(1200), 1)];
        let adjustments = vec![Adjustment::override_rule(
            date(2025, 12, 1),
            "pay",
            Money::from_units(10),
            None,
        )];
        let err = RuleCatalog::new(rules, adjustments).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("unknown rule 'pay'"));
    }

    #[test]
    fn test_double_override_rejected() {
        let rules = vec![Rule::monthly("rent", "Rent", Money::from_units(1200), 1)];
        let adjustments = vec![
            Adjustment::override_rule(date(2025, 12, 1), "rent", Money::from_units(10), None),
            Adjustment::override_rule(date(2025, 12, 1), "rent", Money::from_units(20), None),
        ];
        assert!(RuleCatalog::new(rules, adjustments).is_err());
    }

    #[test]
    fn test_lookups() {
        let catalog = RuleCatalog::new(
            vec![
                Rule::monthly("rent", "Rent", Money::from_units(1200), 1),
                Rule::biweekly("pay", "Paycheck", Money::from_units(2000), date(2025, 1, 3))
                    .inflow(),
            ],
            vec![Adjustment::credit(date(2025, 1, 10), "Gift", Money::from_units(50))],
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("rent").map(|r| r.amount), Some(Money::from_units(1200)));
        assert!(catalog.require("nope").unwrap_err().is_not_found());
        assert_eq!(catalog.inflows().count(), 1);
        assert_eq!(catalog.outflows().count(), 1);
        assert_eq!(catalog.adjustments_on(date(2025, 1, 10)).len(), 1);
        assert!(catalog.adjustments_on(date(2025, 1, 11)).is_empty());
        assert_eq!(catalog.adjustment_count(), 1);
    }

    #[test]
    fn test_load_yaml_and_json_files() {
        let temp_dir = TempDir::new().unwrap();

        let yaml_path = temp_dir.path().join("catalog.yaml");
        fs::write(
            &yaml_path,
            "rules:\n  - { id: phone, name: Phone, amount: 39, schedule: monthly, day: 1 }\n",
        )
        .unwrap();
        let catalog = RuleCatalog::load(&yaml_path).unwrap();
        assert_eq!(catalog.rules()[0].id.as_str(), "phone");

        let json_path = temp_dir.path().join("catalog.json");
        fs::write(
            &json_path,
            r#"{"rules":[{"id":"phone","name":"Phone","amount":39,"schedule":"monthly","day":1}]}"#,
        )
        .unwrap();
        assert_eq!(RuleCatalog::load(&json_path).unwrap(), catalog);
    }

    #[test]
    fn test_load_reports_path_on_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "rules:\n  - { id: rent, name: Rent, schedule: monthly, day: 1 }\n")
            .unwrap();

        let err = RuleCatalog::load(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("broken.yaml"));
        assert!(msg.contains("missing amount"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = RuleCatalog::load(temp_dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ForecastError::Config(_)));
    }
}
