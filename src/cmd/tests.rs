// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::apply::run_apply_command;
use super::report::{ApplyReport, FailureReport};
use crate::cli::apply::ApplyArgs;
use crate::editor::{DesiredState, Outcome};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn apply_args(temp: &TempDir, key: &str, value: &str, state: DesiredState) -> ApplyArgs {
    ApplyArgs {
        user: "alice".to_string(),
        key: key.to_string(),
        value: value.to_string(),
        state,
        file: Some(temp.path().join(".bashrc")),
    }
}

#[test]
fn test_insert_report_shape() {
    let report = ApplyReport::from(Outcome::inserted());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"changed": true, "meta": {"info": "inserted"}})
    );
}

#[test]
fn test_replace_report_carries_detail() {
    let outcome = Outcome::replaced("EDITOR=vim".to_string(), "EDITOR=nano".to_string());
    let json = serde_json::to_value(ApplyReport::from(outcome)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "changed": false,
            "meta": {
                "info": "value replaced",
                "old_line": "EDITOR=vim",
                "new_line": "EDITOR=nano",
            }
        })
    );
}

#[test]
fn test_removed_multiple_report_counts_instances() {
    let json = serde_json::to_value(ApplyReport::from(Outcome::removed(3))).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "changed": true,
            "meta": {"info": "removed multiple", "instances": 3}
        })
    );
}

#[test]
fn test_failure_report_shape() {
    let report = FailureReport {
        msg: "file error: file not found: /home/alice/.bashrc".to_string(),
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"msg": "file error: file not found: /home/alice/.bashrc"})
    );
}

#[test]
fn test_run_apply_command_with_file_override() {
    let temp = temp_dir();
    std::fs::write(temp.path().join(".bashrc"), "PATH=/usr/bin\n").unwrap();

    let args = apply_args(&temp, "EDITOR", "vim", DesiredState::Present);
    let outcome = run_apply_command(&args).unwrap();

    assert!(outcome.changed);
    assert_eq!(
        std::fs::read_to_string(temp.path().join(".bashrc")).unwrap(),
        "PATH=/usr/bin\nEDITOR=vim\n"
    );
}

#[test]
fn test_run_apply_command_invalid_key() {
    let temp = temp_dir();
    std::fs::write(temp.path().join(".bashrc"), "").unwrap();

    let args = apply_args(&temp, "BAD KEY", "x", DesiredState::Present);
    assert!(run_apply_command(&args).is_err());
}
