// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests for the variable editor pipeline.
//!
//! Drives the full apply path (request validation -> editor -> atomic
//! rewrite) against real temp files, covering the documented contract:
//! idempotence in both states, word-boundary matching, whitespace
//! tolerance, duplicate removal, and the asymmetric changed reporting
//! on overwrite.

use entourage_rs::editor::{DesiredState, VariableRequest, apply};
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn bashrc_with(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join(".bashrc");
    std::fs::write(&path, content).unwrap();
    path
}

fn request(key: &str, value: &str, state: DesiredState) -> VariableRequest {
    VariableRequest::new(key, value, state).unwrap()
}

// =============================================================================
// Present
// =============================================================================

#[test]
fn editor_inserts_missing_variable() {
    let temp = temp_dir();
    let path = bashrc_with(&temp, "PATH=/usr/bin\n");

    let outcome = apply(&request("EDITOR", "vim", DesiredState::Present), &path).unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.info, "inserted");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "PATH=/usr/bin\nEDITOR=vim\n"
    );
}

#[test]
fn editor_present_is_idempotent() {
    let temp = temp_dir();
    let path = bashrc_with(&temp, "");

    let req = request("GOPATH", "/home/alice/go", DesiredState::Present);
    let first = apply(&req, &path).unwrap();
    let content_after_first = std::fs::read_to_string(&path).unwrap();
    let second = apply(&req, &path).unwrap();

    assert!(first.changed);
    assert!(!second.changed);
    assert_eq!(second.info, "already present with same value");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content_after_first);
}

#[test]
fn editor_overwrite_contract() {
    // Overwriting a differing value mutates the file but reports
    // changed=false with the old and new line text.
    let temp = temp_dir();
    let path = bashrc_with(&temp, "EDITOR=vim\n");

    let outcome = apply(&request("EDITOR", "nano", DesiredState::Present), &path).unwrap();

    assert!(!outcome.changed);
    assert_eq!(outcome.info, "value replaced");
    assert_eq!(outcome.detail.old_line.as_deref(), Some("EDITOR=vim"));
    assert_eq!(outcome.detail.new_line.as_deref(), Some("EDITOR=nano"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "EDITOR=nano\n");
}

#[test]
fn editor_word_boundary_leaves_longer_key_alone() {
    let temp = temp_dir();
    let path = bashrc_with(&temp, "FOOBAR=1\n");

    let outcome = apply(&request("FOO", "2", DesiredState::Present), &path).unwrap();

    assert!(outcome.changed, "FOO must not match FOOBAR");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "FOOBAR=1\nFOO=2\n");
}

#[test]
fn editor_recognizes_whitespace_tolerant_definition() {
    let temp = temp_dir();
    let path = bashrc_with(&temp, "  KEY = value  \n");

    let outcome = apply(&request("KEY", "value", DesiredState::Present), &path).unwrap();

    assert!(!outcome.changed);
    assert_eq!(outcome.info, "already present with same value");
}

// =============================================================================
// Absent
// =============================================================================

#[test]
fn editor_absent_is_idempotent() {
    let temp = temp_dir();
    let path = bashrc_with(&temp, "EDITOR=vim\n");

    let req = request("EDITOR", "unused", DesiredState::Absent);
    let first = apply(&req, &path).unwrap();
    let second = apply(&req, &path).unwrap();

    assert!(first.changed);
    assert_eq!(first.info, "removed");
    assert!(!second.changed);
    assert_eq!(second.info, "absent");
}

#[test]
fn editor_absent_removes_every_duplicate() {
    let temp = temp_dir();
    let path = bashrc_with(&temp, "KEY=1\nKEY=2\n# keep\nKEY=3\n");

    let outcome = apply(&request("KEY", "unused", DesiredState::Absent), &path).unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.info, "removed multiple");
    assert_eq!(outcome.detail.instances, Some(3));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "\n\n# keep\n\n");
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn editor_round_trip_leaves_no_definition() {
    let temp = temp_dir();
    let path = bashrc_with(&temp, "# setup\n");

    apply(&request("CARGO_HOME", "/opt/cargo", DesiredState::Present), &path).unwrap();
    apply(&request("CARGO_HOME", "unused", DesiredState::Absent), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(
        content.lines().all(|l| !l.trim_start().starts_with("CARGO_HOME")),
        "definition survived round trip: {content:?}"
    );
}
