//! End-to-end tests for the fehu-eval binary.
//!
//! Tests:
//! - Missing (gold, pred) pairs fail with the "No tasks evaluated" message
//! - JSON report on stdout, optionally written to --out
//! - Underscore flag spellings and --config files
//! - Markdown output and per-label breakdown
//! - Malformed inputs map to ERROR lines and a failing exit code

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const GOLD_TASK1: &str = r#"[
  {"guid": "d1", "article_human_values": [
    {"actor": "a1", "l2_value": 3, "direction": 0, "l1_value": 5},
    {"actor": "a1", "l2_value": 4, "direction": 1, "l1_value": 9}
  ]},
  {"guid": "d2", "article_human_values": [
    {"actor": "a2", "l2_value": 7, "direction": 0, "l1_value": 30}
  ]}
]"#;

const PRED_TASK1A: &str = r#"[
  {"guid": "d1", "article_human_values": [{"actor": "a1", "l2_value": "3"}]},
  {"guid": "d2", "article_human_values": [{"actor": "a2", "l2_value": "7"}]}
]"#;

const PRED_TASK1B: &str = r#"[
  {"guid": "d1", "article_human_values": [
    {"actor": "a1", "direction": 1, "l1_value": 5},
    {"actor": "a1", "direction": 1, "l1_value": 9}
  ]}
]"#;

const GOLD_TASK2: &str = r#"[
  {"guid": 1, "subevents_human_values": [
    {"subevent_id": 0, "subevent_human_values": [
      {"actor": "x", "l2_value": 12, "direction": 0, "l1_value": 40}
    ]}
  ]}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        fixture.write("gold_task1.json", GOLD_TASK1);
        fixture.write("pred_task1a.json", PRED_TASK1A);
        fixture.write("pred_task1b.json", PRED_TASK1B);
        fixture.write("gold_task2.json", GOLD_TASK2);
        fixture.write("pred_task2a.json", GOLD_TASK2);
        fixture
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn fehu_eval() -> Command {
    let mut cmd = Command::cargo_bin("fehu-eval").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_no_tasks_is_an_error() {
    fehu_eval()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No tasks evaluated. Provide at least one (gold, pred) pair.",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_gold_without_pred_is_not_a_task() {
    let fx = Fixture::new();
    fehu_eval()
        .args(["--gold-task1", arg(&fx.path("gold_task1.json"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tasks evaluated"));
}

#[test]
fn test_task1_report_on_stdout() {
    let fx = Fixture::new();
    let assert = fehu_eval()
        .args([
            "--gold-task1",
            arg(&fx.path("gold_task1.json")),
            "--pred-task1a",
            arg(&fx.path("pred_task1a.json")),
            "--pred-task1b",
            arg(&fx.path("pred_task1b.json")),
        ])
        .assert()
        .success();

    let report = stdout_json(&assert.get_output().stdout);
    let tasks: Vec<&String> = report.as_object().unwrap().keys().collect();
    assert_eq!(tasks, ["task1a", "task1b"]);

    // 1a: tp=2 fp=0 fn=1
    assert_eq!(report["task1a"]["micro_precision"], 1.0);
    assert_eq!(report["task1a"]["support_instances"], 2);
    assert_eq!(report["task1a"]["support_gold_labels"], 3);
    assert_eq!(report["task1a"]["support_pred_labels"], 2);

    // 1b: "0:5" reversed, "1:9" kept, d2 value unpredicted
    assert_eq!(report["task1b"]["direction_reverse_count"], 1);
    assert_eq!(report["task1b"]["direction_reverse_denom_gold_excl"], 3);
    assert_eq!(report["task1b"]["ambiguous_gold_values_filtered"], 0);
    assert!(report["task1a"].get("direction_reverse_rate").is_none());
}

#[test]
fn test_underscore_flags_and_out_file() {
    let fx = Fixture::new();
    let out = fx.path("results/evaluation_results.json");

    let assert = fehu_eval()
        .args([
            "--gold_task2",
            arg(&fx.path("gold_task2.json")),
            "--pred_task2a",
            arg(&fx.path("pred_task2a.json")),
            "--out",
            arg(&out),
        ])
        .assert()
        .success();

    let stdout = stdout_json(&assert.get_output().stdout);
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(stdout, written);
    assert_eq!(written["task2a"]["micro_f1"], 1.0);
    assert_eq!(written["task2a"]["macro_f1"], 1.0);
}

#[test]
fn test_config_file_with_flag_override() {
    let fx = Fixture::new();
    let empty_pred = fx.write("empty_pred.json", "[]");
    let config = fx.write(
        "run.json",
        &serde_json::json!({
            "gold_task1": fx.path("gold_task1.json"),
            "pred_task1a": empty_pred,
        })
        .to_string(),
    );

    let assert = fehu_eval()
        .args([
            "--config",
            arg(&config),
            "--pred-task1a",
            arg(&fx.path("pred_task1a.json")),
        ])
        .assert()
        .success();

    let report = stdout_json(&assert.get_output().stdout);
    assert_eq!(report["task1a"]["micro_precision"], 1.0);
}

#[test]
fn test_human_format_with_per_label() {
    let fx = Fixture::new();
    fehu_eval()
        .args([
            "--gold-task1",
            arg(&fx.path("gold_task1.json")),
            "--pred-task1a",
            arg(&fx.path("pred_task1a.json")),
            "--format",
            "human",
            "--per-label",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("| task1a |"))
        .stdout(predicate::str::contains("task1a per label"));
}

#[test]
fn test_per_label_in_json() {
    let fx = Fixture::new();
    let assert = fehu_eval()
        .args([
            "--gold-task1",
            arg(&fx.path("gold_task1.json")),
            "--pred-task1a",
            arg(&fx.path("pred_task1a.json")),
            "--per_label",
        ])
        .assert()
        .success();

    let report = stdout_json(&assert.get_output().stdout);
    let per_label = report["task1a"]["per_label"].as_object().unwrap();
    let labels: Vec<&String> = per_label.keys().collect();
    assert_eq!(labels, ["3", "4", "7"]);
    assert_eq!(per_label["4"]["recall"], 0.0);
}

#[test]
fn test_missing_file_reports_error() {
    let fx = Fixture::new();
    fehu_eval()
        .args([
            "--gold-task1",
            arg(&fx.path("gold_task1.json")),
            "--pred-task1a",
            arg(&fx.path("does_not_exist.json")),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("ERROR: read input - "))
        .stderr(predicate::str::contains("does_not_exist.json"));
}

#[test]
fn test_invalid_json_reports_error() {
    let fx = Fixture::new();
    let broken = fx.write("broken.json", "[{\"guid\": ");
    fehu_eval()
        .args([
            "--gold-task1",
            arg(&fx.path("gold_task1.json")),
            "--pred-task1a",
            arg(&broken),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("ERROR: parse input - "));
}

#[test]
fn test_help_lists_tasks() {
    fehu_eval()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--gold-task1"))
        .stdout(predicate::str::contains("task2b"));
}
