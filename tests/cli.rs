use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "cashflow";

const CATALOG: &str = r#"
rules:
  - { id: pay, name: Paycheck, amount: 2100, flow: inflow, schedule: biweekly, anchor: 2025-11-14 }
  - { id: phone, name: Phone, amount: 39, schedule: monthly, day: 1 }
  - { id: savings, name: Savings, amount: 50, schedule: fridays }
adjustments:
  - { date: 2025-11-28, override: pay, amount: 1800, label: Reduced pay }
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    fn write_catalog(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write catalog");
        path
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env("CASHFLOW_DATA_DIR", self.dir.path());
        cmd.env_remove("CASHFLOW_LOG");
        cmd
    }

    fn forecast(&self, catalog: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("forecast")
            .args(["--start", "2025-11-21", "--balance", "800", "--catalog"])
            .arg(catalog);
        cmd
    }
}

#[test]
fn forecast_csv_has_one_row_per_day() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    let output = ws
        .forecast(&catalog)
        .args(["--format", "csv"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 43);
    assert_eq!(lines[1], "2025-11-21,800.00,0.00,50.00,750.00,NONE,,Savings");
    assert!(stdout.contains("2025-11-28,750.00,1800.00,50.00,2500.00,NONE,Reduced pay,Savings"));
    assert!(lines[42].starts_with("2026-01-01,"));
}

#[test]
fn forecast_disable_removes_debits() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.forecast(&catalog)
        .args(["--format", "csv", "--disable", "savings"])
        .assert()
        .success()
        .stdout(contains("2025-11-21,800.00,0.00,0.00,800.00,NONE,,"));
}

#[test]
fn forecast_table_shows_summary() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.forecast(&catalog)
        .args(["--days", "14"])
        .assert()
        .success()
        .stdout(contains("Forecast: 2025-11-21 to 2025-12-04 (14 days)"))
        .stdout(contains("Reduced pay"))
        .stdout(contains("HEALTHY"));
}

#[test]
fn forecast_alerts_lists_negative_days() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.cmd()
        .arg("forecast")
        .args(["--start", "2025-11-21", "--balance", "10", "--days", "3", "--alerts"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("2025-11-21  NEG"))
        .stdout(contains("Goes negative on 2025-11-21"));
}

#[test]
fn forecast_json_output() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.json", r#"{"rules":[{"id":"gym","name":"Gym","amount":"25","schedule":"monthly","day":1}]}"#);

    let output = ws
        .forecast(&catalog)
        .args(["--format", "json", "--days", "11"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["days"].as_array().unwrap().len(), 11);
    assert_eq!(value["days"][10]["date"], "2025-12-01");
    assert_eq!(value["days"][10]["debits"], "25.00");
}

#[test]
fn forecast_writes_output_file() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);
    let out = ws.path().join("forecast.csv");

    ws.forecast(&catalog)
        .args(["--format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Wrote 42 days"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("date,start_balance,credits,debits,end_balance,flag"));
}

#[test]
fn forecast_warns_about_unknown_disabled_rule() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.forecast(&catalog)
        .args(["--format", "csv", "--disable", "ghost"])
        .assert()
        .success()
        .stderr(contains("not in the catalog"));
}

#[test]
fn forecast_rejects_bad_start_date() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.cmd()
        .arg("forecast")
        .args(["--start", "11/21/2025", "--balance", "800", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(contains("invalid start date"));
}

#[test]
fn forecast_without_catalog_fails() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("forecast")
        .args(["--start", "2025-11-21", "--balance", "800"])
        .assert()
        .failure()
        .stderr(contains("Catalog file not found"));
}

#[test]
fn compare_reports_removed_rules() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.cmd()
        .arg("compare")
        .args(["--start", "2025-11-21", "--balance", "800", "--disable", "savings", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("saves $300.00"))
        .stdout(contains("Savings"))
        .stdout(contains("Final status: UNCHANGED"));
}

#[test]
fn scenario_round_trip() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.cmd()
        .args(["scenario", "disable", "lean", "savings"])
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("now disables 1 rule(s)"));

    ws.cmd()
        .args(["scenario", "show", "lean", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("savings").and(contains("Savings")));

    ws.forecast(&catalog)
        .args(["--format", "csv", "--scenario", "lean"])
        .assert()
        .success()
        .stdout(contains("2025-11-21,800.00,0.00,0.00,800.00,NONE,,"));

    ws.cmd()
        .args(["scenario", "clear", "lean"])
        .assert()
        .success()
        .stdout(contains("Cleared scenario 'lean'"));

    ws.cmd()
        .args(["scenario", "list"])
        .assert()
        .success()
        .stdout(contains("No saved scenarios."));
}

#[test]
fn scenario_show_unknown_fails() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["scenario", "show", "nope"])
        .assert()
        .failure()
        .stderr(contains("Scenario not found: nope"));
}

#[test]
fn rules_check_reports_counts() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.cmd()
        .args(["rules", "check", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("OK (3 rules: 1 inflows, 2 outflows; 1 adjustments)"));
}

#[test]
fn rules_check_rejects_invalid_catalog() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog(
        "broken.yaml",
        "rules:\n  - { id: rent, name: Rent, schedule: monthly, day: 1 }\n",
    );

    ws.cmd()
        .args(["rules", "check", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(contains("missing amount"));
}

#[test]
fn rules_list_marks_disabled() {
    let ws = Workspace::new();
    let catalog = ws.write_catalog("catalog.yaml", CATALOG);

    ws.cmd()
        .args(["scenario", "disable", "lean", "phone"])
        .assert()
        .success();

    ws.cmd()
        .args(["rules", "list", "--scenario", "lean", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("disabled"))
        .stdout(contains("Reduced pay"));
}

#[test]
fn init_writes_sample_catalog_used_by_default() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Wrote sample catalog"));
    assert!(ws.path().join("catalog.yaml").exists());
    assert!(ws.path().join("config.json").exists());

    ws.cmd()
        .args(["forecast", "--start", "2025-11-21", "--balance", "800"])
        .assert()
        .success()
        .stdout(contains("Forecast: 2025-11-21 to 2026-01-01 (42 days)"));
}

#[test]
fn config_shows_paths() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Horizon days:          42"))
        .stdout(contains("$500.00"));
}
