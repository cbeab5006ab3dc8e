//! End-to-end integration tests demonstrating the test harness.
//!
//! These tests exercise the CLI through the harness API, showing how to set
//! up test environments, add memos, and make assertions across several runs.

mod common;

use common::harness::TestEnv;
use predicates::prelude::*;

#[test]
fn test_day_lifecycle() {
    let env = TestEnv::new();

    env.cmd().write("2024-06-01", "first draft").assert().success();
    env.cmd().write("2024-06-01", "second draft").assert().success();
    assert_eq!(env.read_memo("2024-06-01").as_deref(), Some("second draft"));

    env.cmd()
        .history()
        .assert()
        .success()
        .stdout(predicate::str::contains("second draft"))
        .stdout(predicate::str::contains("first draft").not());

    env.cmd().write("2024-06-01", "").assert().success();
    assert_eq!(env.read_memo("2024-06-01"), None);

    env.cmd()
        .history()
        .assert()
        .success()
        .stdout(predicate::str::contains("メモはまだありません。"));
}

#[test]
fn test_history_sees_files_written_outside_the_app() {
    let env = TestEnv::new();
    env.add_memo("2023-12-31", "大晦日");
    env.add_memo("2024-01-01", "元日");
    env.add_memo("2024-1-2", "not a memo");
    std::fs::create_dir(env.memos_dir().join("2024-01-03.txt")).unwrap();

    let output: serde_json::Value = env.cmd().history().format_json().output_json();

    let dates: Vec<_> = output["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2024-01-01", "2023-12-31"]);
}

#[test]
fn test_relative_dates() {
    let env = TestEnv::new();

    env.cmd()
        .args(["write", "--date", "yesterday", "昨日のこと"])
        .assert()
        .success();

    env.cmd()
        .show("1d")
        .assert()
        .success()
        .stdout(predicate::str::contains("昨日のこと"));
}

#[test]
fn test_corrupt_store_falls_back_to_unselected() {
    let env = TestEnv::new();
    env.write_home_file("store.json", "{ not json");

    env.bare_cmd()
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("フォルダ: エラー"));
}
