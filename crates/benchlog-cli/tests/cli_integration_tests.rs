// Benchlog - Benchmark Log Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use benchlog_test::fixtures::{self, errors};
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, NamedTempFile};

// Test helper to create a benchlog command
fn benchlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("benchlog").expect("Failed to find benchlog binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("temp path is UTF-8")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    benchlog_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchmark log analysis"))
        .stdout(predicate::str::contains("leaderboard"))
        .stdout(predicate::str::contains("records"));
}

#[test]
fn test_version_output() {
    benchlog_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchlog"));
}

#[test]
fn test_no_subcommand_fails() {
    benchlog_cmd().assert().failure();
}

#[test]
fn test_files_required() {
    benchlog_cmd().arg("summary").assert().failure();
}

// ===== Leaderboard Tests =====

#[test]
fn test_leaderboard() {
    let log = create_temp_file(&fixtures::tpcc_log(), ".log");

    benchlog_cmd()
        .arg("leaderboard")
        .arg(path_of(&log))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Bench TPCC threads 1\n"))
        .stdout(predicate::str::contains("    0: abtree Brown (LLX/SCX) 3.000\n"))
        .stdout(predicate::str::contains("    2: BST Unbalanced External (cg-htm) 1.000\n"))
        .stdout(predicate::str::contains("Bench TPCC threads 16\n"));
}

#[test]
fn test_leaderboard_by_component() {
    let log = create_temp_file(&fixtures::tpcc_log(), ".log");

    benchlog_cmd()
        .args(["leaderboard", "--component", "DISTRICT_IDX"])
        .arg(path_of(&log))
        .assert()
        .success()
        .stdout(predicate::str::contains("    0: abtree Brown (LLX/SCX) 6.000\n"));
}

#[test]
fn test_leaderboard_files_in_argument_order() {
    let tpcc = create_temp_file(&fixtures::tpcc_log(), ".log");
    let ycsb = create_temp_file(&fixtures::ycsb_log(), ".log");

    benchlog_cmd()
        .arg("leaderboard")
        .arg(path_of(&ycsb))
        .arg(path_of(&tpcc))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Bench YCSB threads 1\n"))
        .stdout(predicate::str::contains("Bench TPCC threads 1\n"));
}

// ===== Records Tests =====

#[test]
fn test_records_json_to_file() {
    let log = create_temp_file(&fixtures::tpcc_log(), ".log");
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("runs.json");

    benchlog_cmd()
        .args(["records", "--format", "json", "--output"])
        .arg(&out)
        .arg(path_of(&log))
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("output written"))
            .expect("valid JSON");
    let runs = value.as_array().expect("array of runs");
    assert_eq!(runs.len(), 9);
    assert!(runs.iter().all(|r| r["kind"] == "TPCC"));
    assert!(runs.iter().any(|r| r["close_to_max"] == 100.0));
}

#[test]
fn test_records_csv() {
    let log = create_temp_file(&fixtures::micro_log(), ".log");

    benchlog_cmd()
        .args(["records", "--format", "csv"])
        .arg(path_of(&log))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kind,variant,threads,throughput,"))
        .stdout(predicate::str::contains("MICRO,bst-avl-bronson (cg-htm),1,8.0,50,"));
}

#[test]
fn test_records_yaml() {
    let log = create_temp_file(&fixtures::ycsb_log(), ".log");

    benchlog_cmd()
        .args(["records", "-f", "yaml"])
        .arg(path_of(&log))
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: YCSB"));
}

#[test]
fn test_records_rejects_unknown_format() {
    let log = create_temp_file(&fixtures::tpcc_log(), ".log");

    benchlog_cmd()
        .args(["records", "--format", "xml"])
        .arg(path_of(&log))
        .assert()
        .failure();
}

// ===== Best Tests =====

#[test]
fn test_best_writes_charts() {
    let tpcc = create_temp_file(&fixtures::tpcc_log(), ".log");
    let ycsb = create_temp_file(&fixtures::ycsb_log(), ".log");
    let dir = tempdir().expect("Failed to create temp dir");

    benchlog_cmd()
        .args(["best", "--highlight", "RCU-HTM", "--out-dir"])
        .arg(dir.path())
        .arg(path_of(&tpcc))
        .arg(path_of(&ycsb))
        .assert()
        .success()
        .stdout(predicate::str::contains("best-TPCC\n  best\n"))
        .stdout(predicate::str::contains("  abtree (RCU-HTM)\n"));

    assert!(dir.path().join("best-TPCC.json").exists());
    assert!(dir.path().join("best-YCSB.json").exists());
}

// ===== Closeness Tests =====

#[test]
fn test_closeness_by_workload() {
    let log = create_temp_file(&fixtures::micro_log(), ".log");

    benchlog_cmd()
        .args(["closeness", "--by", "workload"])
        .arg(path_of(&log))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "50: min=25.00 q1=25.00 median=62.50 q3=100.00 max=100.00 (n=6)",
        ))
        .stdout(predicate::str::contains("90: "));
}

#[test]
fn test_closeness_filter() {
    let log = create_temp_file(&fixtures::micro_log(), ".log");

    benchlog_cmd()
        .args(["closeness", "--filter", "rcu-htm"])
        .arg(path_of(&log))
        .assert()
        .success()
        .stdout(predicate::str::contains("treap (rcu-htm): min=25.00"))
        .stdout(predicate::str::contains("bronson").not());
}

#[test]
fn test_closeness_rejects_unknown_grouping() {
    let log = create_temp_file(&fixtures::micro_log(), ".log");

    benchlog_cmd()
        .args(["closeness", "--by", "colour"])
        .arg(path_of(&log))
        .assert()
        .failure();
}

// ===== Summary Tests =====

#[test]
fn test_summary() {
    let log = create_temp_file(&fixtures::tpcc_log(), ".log");

    benchlog_cmd()
        .arg("summary")
        .arg(path_of(&log))
        .assert()
        .success()
        .stdout(predicate::str::contains("Benchmark Log Summary"))
        .stdout(predicate::str::contains("Runs per variant:"))
        .stdout(predicate::str::contains("Runs per thread count:"));
}

// ===== Error Handling Tests =====

#[test]
fn test_missing_file() {
    benchlog_cmd()
        .args(["summary", "/nonexistent/bench.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}

#[test]
fn test_malformed_runs_skipped_unless_strict() {
    let (_, sample) = errors::malformed_runs()
        .into_iter()
        .find(|(name, _)| *name == "non_numeric_threads")
        .expect("sample exists");
    let log = create_temp_file(&sample, ".log");

    benchlog_cmd()
        .arg("leaderboard")
        .arg(path_of(&log))
        .assert()
        .success()
        .stdout(predicate::str::contains("Bench YCSB threads 2\n"));

    benchlog_cmd()
        .args(["--strict", "leaderboard"])
        .arg(path_of(&log))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Parse error"));
}

#[test]
fn test_dropped_run_logged_as_warning() {
    let (_, sample) = errors::malformed_runs()
        .into_iter()
        .find(|(name, _)| *name == "non_numeric_threads")
        .expect("sample exists");
    let log = create_temp_file(&sample, ".log");

    benchlog_cmd()
        .arg("summary")
        .arg(path_of(&log))
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"));
}

#[test]
fn test_file_size_limit() {
    let log = create_temp_file(&fixtures::tpcc_log(), ".log");

    benchlog_cmd()
        .env("BENCHLOG_MAX_FILE_SIZE", "10")
        .arg("summary")
        .arg(path_of(&log))
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}
