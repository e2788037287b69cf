//! Rule catalog display, rendered with `tabled`

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::RuleCatalog;
use crate::models::{AdjustmentEffect, DisabledSet, Rule};

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Flow")]
    flow: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Schedule")]
    schedule: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl RuleRow {
    fn new(rule: &Rule, disabled: &DisabledSet, symbol: &str) -> Self {
        let status = if rule.is_inflow() || !disabled.contains(rule.id.as_str()) {
            "active"
        } else {
            "disabled"
        };
        Self {
            id: rule.id.to_string(),
            name: rule.name.clone(),
            flow: rule.flow.to_string(),
            amount: rule.amount.format_with_symbol(symbol),
            schedule: rule.schedule.to_string(),
            status: status.to_string(),
        }
    }
}

#[derive(Tabled)]
struct AdjustmentRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the catalog's rules, marking those a scenario disables
pub fn format_rule_table(catalog: &RuleCatalog, disabled: &DisabledSet, symbol: &str) -> String {
    if catalog.is_empty() {
        return "No rules in catalog.".to_string();
    }

    let rows: Vec<RuleRow> = catalog
        .rules()
        .iter()
        .map(|rule| RuleRow::new(rule, disabled, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format the catalog's dated adjustments
pub fn format_adjustment_table(catalog: &RuleCatalog, symbol: &str) -> String {
    if catalog.adjustment_count() == 0 {
        return "No adjustments in catalog.".to_string();
    }

    let rows: Vec<AdjustmentRow> = catalog
        .adjustments()
        .map(|(date, effect)| {
            let (kind, target) = match effect {
                AdjustmentEffect::Override { rule, label, .. } => (
                    "override",
                    match label {
                        Some(label) => format!("{} ({})", rule, label),
                        None => rule.to_string(),
                    },
                ),
                AdjustmentEffect::Credit { name, .. } => ("credit", name.clone()),
            };
            AdjustmentRow {
                date: date.to_string(),
                kind: kind.to_string(),
                target,
                amount: effect.amount().format_with_symbol(symbol),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
