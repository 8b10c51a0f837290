// AlgoTrace - Instrumented Algorithm Catalog
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use tracing::info;

/// A command whose config file lives in a fresh temporary directory
fn algotrace(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("algotrace").unwrap();
    cmd.env("ALGOTRACE_CONFIG", config_dir.path().join("algotrace.toml"))
        .env_remove("ALGOTRACE_FORMAT")
        .env_remove("ALGOTRACE_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_command() {
    algotrace_utils::logging::ensure_test_logging(None);
    info!("Testing CLI help command");

    let dir = TempDir::new().unwrap();
    algotrace(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step-by-step execution traces"));
}

#[test]
fn test_version_command() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir).arg("--version").assert().success().stdout(predicate::str::contains("algotrace"));
}

#[test]
fn test_missing_subcommand() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir).assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_list_groups_by_category() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dynamic Programming"))
        .stdout(predicate::str::contains("word-search-ii"));
}

#[test]
fn test_list_single_category() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir)
        .args(["list", "--category", "graphs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("course-schedule"))
        .stdout(predicate::str::contains("two-sum").not());

    algotrace(&dir).args(["list", "--category", "sorting"]).assert().failure();
}

#[test]
fn test_show_prints_listing() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir)
        .args(["show", "binary-search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O(log n)"))
        .stdout(predicate::str::contains("   1 | pub fn binary_search"));
}

#[test]
fn test_run_default_input_as_json() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    let output = algotrace(&dir).args(["run", "two-sum"]).output().unwrap();
    assert!(output.status.success());

    let trace: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = trace.as_array().unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last["state"]["result"], serde_json::json!([0, 1]));
    assert_eq!(last["highlights"], serde_json::json!([0, 1]));
    assert_eq!(last["action"], "found");
    assert!(dir.path().join("algotrace.toml").exists());
}

#[test]
fn test_run_custom_input_pretty() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir)
        .args(["run", "coin-change", "--format", "pretty"])
        .args(["--input", r#"{"coins": [2], "amount": 3}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("result: -1"));
}

#[test]
fn test_run_input_file() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.json");
    std::fs::write(&input, r#"{"n": 4}"#).unwrap();

    algotrace(&dir)
        .args(["run", "counting-bits", "--format", "pretty", "--input-file"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("result: [0,1,1,2,1]"));
}

#[test]
fn test_run_summary_from_config() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("algotrace.toml"),
        "[output]\nformat = \"summary\"\npretty_json = false\n\n[logging]\nfile = false\n",
    )
    .unwrap();

    algotrace(&dir)
        .args(["run", "subsets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXECUTION TRACE"));
}

#[test]
fn test_run_rejects_bad_input() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir)
        .args(["run", "two-sum", "--input", r#"{"nums": "oops"}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("two-sum"));

    algotrace(&dir).args(["run", "bogo-sort"]).assert().failure();
}

#[test]
fn test_check_passes() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 14 algorithms produced valid traces"));
}

#[test]
fn test_config_creation_is_logged() {
    algotrace_utils::logging::ensure_test_logging(None);
    let dir = TempDir::new().unwrap();
    algotrace(&dir)
        .args(["--log-level", "info", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file not found"));

    algotrace(&dir)
        .args(["--log-level", "info", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file not found").not());
}
