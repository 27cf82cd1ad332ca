// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON marshalling of the invocation result.
//!
//! ```text
//! success: {"changed": bool, "meta": {"info": "...", ...detail}}
//! failure: {"msg": "<error chain>"}
//! ```
//!
//! Exactly one report object is printed to stdout per invocation; the
//! exit code carries success/failure for shell callers.

use serde::Serialize;

use crate::editor::{Outcome, OutcomeDetail};
use crate::error::Result;

/// Successful invocation report.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReport {
    pub changed: bool,
    pub meta: Meta,
}

/// The `meta` payload: the outcome's info plus its optional detail.
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub info: String,
    #[serde(flatten)]
    pub detail: OutcomeDetail,
}

impl From<Outcome> for ApplyReport {
    fn from(outcome: Outcome) -> Self {
        Self {
            changed: outcome.changed,
            meta: Meta {
                info: outcome.info,
                detail: outcome.detail,
            },
        }
    }
}

/// Failed invocation report.
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub msg: String,
}

/// Prints the success report for an outcome to stdout.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn emit_success(outcome: Outcome) -> Result<()> {
    let report = ApplyReport::from(outcome);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Prints the failure report for an error to stdout.
pub fn emit_failure(error: &anyhow::Error) {
    let report = FailureReport {
        msg: format!("{error:#}"),
    };
    // Serialization of a plain string field cannot fail
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{{\"msg\": \"unreportable error\"}}"),
    }
}
