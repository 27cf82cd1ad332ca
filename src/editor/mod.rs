// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The variable editor: idempotent line-level edits on a bashrc file.
//!
//! ```text
//! apply(request, path)
//!   Present -> ensure_present   first definition wins
//!                already there?   no-op
//!                different value? overwrite that line index
//!                nowhere?         append (create file if missing)
//!   Absent  -> ensure_absent    every definition blanked, counted
//!
//! All mutations go through utility::fs::write_lines_atomic, so the
//! file on disk is always either the old or the new content.
//! ```

pub mod pattern;
pub mod types;


use std::path::Path;

use tracing::{debug, info};

use crate::error::{EnvResult, FileError};
use crate::utility::fs::{read_lines, write_lines_atomic};

pub use pattern::DefinitionPattern;
pub use types::{DesiredState, LineClassification, Outcome, OutcomeDetail, VariableRequest};

/// Dispatches a request to [`ensure_present`] or [`ensure_absent`].
///
/// # Errors
///
/// Propagates pattern-construction and file-access errors from the
/// underlying operation.
pub fn apply(request: &VariableRequest, path: &Path) -> EnvResult<Outcome> {
    match request.state() {
        DesiredState::Present => ensure_present(request, path),
        DesiredState::Absent => ensure_absent(request, path),
    }
}

/// Ensures the file contains exactly `key=value` for the requested key.
///
/// Scans lines in order and acts on the first definition of the key:
/// a matching value is a no-op, a differing value is overwritten in
/// place at that line index. If no line defines the key, `key=value`
/// is appended; a missing file is created. Later duplicate definitions
/// are deliberately left untouched.
///
/// # Errors
///
/// Returns a file error if the target cannot be read (other than not
/// existing) or the rewrite fails.
pub fn ensure_present(request: &VariableRequest, path: &Path) -> EnvResult<Outcome> {
    let pattern = DefinitionPattern::for_key(request.key())?;

    let mut lines = match read_lines(path) {
        Ok(lines) => lines,
        // Insertion creates the file
        Err(FileError::NotFound(_)) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    let mut first_definition = None;
    for (index, line) in lines.iter().enumerate() {
        match pattern.classify(line, request.value()) {
            LineClassification::NotAVariableLine => {}
            classification => {
                first_definition = Some((index, classification));
                break;
            }
        }
    }

    match first_definition {
        Some((_, LineClassification::DefinesKeyWithMatchingValue)) => {
            debug!(key = request.key(), "definition already up to date");
            Ok(Outcome::already_present())
        }
        Some((index, _)) => {
            let old_line = std::mem::replace(&mut lines[index], request.definition_line());
            write_lines_atomic(path, &lines)?;
            info!(
                key = request.key(),
                line = index + 1,
                "overwrote differing definition"
            );
            Ok(Outcome::replaced(old_line, request.definition_line()))
        }
        None => {
            lines.push(request.definition_line());
            write_lines_atomic(path, &lines)?;
            info!(key = request.key(), "inserted definition");
            Ok(Outcome::inserted())
        }
    }
}

/// Ensures no line in the file defines the requested key.
///
/// Every definition line is replaced by a blank line, preserving the
/// file's line count, and the removals are counted. The value carried
/// by the request is ignored.
///
/// # Errors
///
/// Returns a file error if the target does not exist, cannot be read,
/// or the rewrite fails.
pub fn ensure_absent(request: &VariableRequest, path: &Path) -> EnvResult<Outcome> {
    let pattern = DefinitionPattern::for_key(request.key())?;

    let mut lines = read_lines(path)?;

    let mut instances = 0;
    for line in &mut lines {
        if pattern.is_definition(line) {
            line.clear();
            instances += 1;
        }
    }

    if instances == 0 {
        debug!(key = request.key(), "no definition to remove");
        return Ok(Outcome::absent());
    }

    write_lines_atomic(path, &lines)?;
    info!(key = request.key(), instances, "removed definition(s)");
    Ok(Outcome::removed(instances))
}
