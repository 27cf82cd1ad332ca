// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core data types for the variable editor.
//!
//! ```text
//! VariableRequest: key + value + DesiredState (validated input)
//! DesiredState:    Present | Absent
//! Outcome:         changed + info + OutcomeDetail (old/new line, instances)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Desired end state for a variable's definition (`present` or `absent`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    #[default]
    Present,
    Absent,
}

impl std::fmt::Display for DesiredState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

impl std::str::FromStr for DesiredState {
    type Err = InputError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            _ => Err(InputError::UnknownState {
                state: s.to_string(),
            }),
        }
    }
}

/// Validated request to bring one variable to a desired state.
///
/// Immutable once constructed; one request is created per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRequest {
    key: String,
    value: String,
    state: DesiredState,
}

impl VariableRequest {
    /// Validates and builds a request.
    ///
    /// The key must be non-empty and must not contain `=` or whitespace,
    /// since either would make the definition pattern ambiguous.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] describing the first violated constraint.
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        state: DesiredState,
    ) -> std::result::Result<Self, InputError> {
        let key = key.into();

        if key.is_empty() {
            return Err(InputError::EmptyKey);
        }
        if key.contains('=') {
            return Err(InputError::KeyContainsEquals { key });
        }
        if key.chars().any(char::is_whitespace) {
            return Err(InputError::KeyContainsWhitespace { key });
        }

        Ok(Self {
            key,
            value: value.into(),
            state,
        })
    }

    /// The variable name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value to assign in Present mode (unused in Absent mode).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The desired end state.
    #[must_use]
    pub const fn state(&self) -> DesiredState {
        self.state
    }

    /// The canonical `key=value` line written on insert or overwrite.
    #[must_use]
    pub fn definition_line(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

/// How a single line relates to a given key and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClassification {
    /// The line does not define the key at all.
    NotAVariableLine,
    /// The line defines the key with a different value.
    DefinesKeyWithDifferentValue,
    /// The line defines the key with exactly the requested value.
    DefinesKeyWithMatchingValue,
}

/// Auxiliary fields attached to an [`Outcome`].
///
/// Serialized flattened into the report's `meta` object; absent fields
/// are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeDetail {
    /// The line text that was overwritten, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line: Option<String>,
    /// The line text that replaced it, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line: Option<String>,
    /// Number of definition lines removed, when more than one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<usize>,
}

/// Structured result of one editor invocation.
///
/// `changed` reports whether a line was newly added or removed. An
/// in-place overwrite of a differing value reports `changed=false` with
/// old/new detail; this mirrors the established contract of the module's
/// consumers (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub changed: bool,
    pub info: String,
    #[serde(flatten)]
    pub detail: OutcomeDetail,
}

impl Outcome {
    /// The variable already has the requested definition; no mutation.
    #[must_use]
    pub fn already_present() -> Self {
        Self {
            changed: false,
            info: "already present with same value".to_string(),
            detail: OutcomeDetail::default(),
        }
    }

    /// A new definition line was appended.
    #[must_use]
    pub fn inserted() -> Self {
        Self {
            changed: true,
            info: "inserted".to_string(),
            detail: OutcomeDetail::default(),
        }
    }

    /// An existing definition was overwritten with a new value.
    #[must_use]
    pub fn replaced(old_line: String, new_line: String) -> Self {
        Self {
            changed: false,
            info: "value replaced".to_string(),
            detail: OutcomeDetail {
                old_line: Some(old_line),
                new_line: Some(new_line),
                instances: None,
            },
        }
    }

    /// No definition of the key exists; nothing to remove.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            changed: false,
            info: "absent".to_string(),
            detail: OutcomeDetail::default(),
        }
    }

    /// Definition line(s) were removed; `instances` is reported when
    /// more than one line defined the key.
    #[must_use]
    pub fn removed(instances: usize) -> Self {
        if instances > 1 {
            Self {
                changed: true,
                info: "removed multiple".to_string(),
                detail: OutcomeDetail {
                    old_line: None,
                    new_line: None,
                    instances: Some(instances),
                },
            }
        } else {
            Self {
                changed: true,
                info: "removed".to_string(),
                detail: OutcomeDetail::default(),
            }
        }
    }
}
