// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Whole-file read and atomic rewrite primitives.
//!
//! ```text
//! read_lines()          file -> Vec<String> (newlines stripped)
//! write_lines_atomic()  NamedTempFile in parent dir -> persist (rename)
//! ```
//!
//! The rewrite never touches the target until the full replacement
//! content is on disk: the temp file is staged in the target's parent
//! directory and renamed over it, so a failure mid-write leaves the
//! original file intact and the temp file is removed on drop.

use std::io::Write;
use std::path::Path;

use crate::error::FileError;

/// Reads a text file into a vector of lines, without line terminators.
///
/// # Errors
///
/// Returns [`FileError::NotFound`] if the file does not exist, or
/// [`FileError::ReadFailed`] for any other read failure.
pub fn read_lines(path: &Path) -> Result<Vec<String>, FileError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(FileError::NotFound(path.display().to_string()));
        }
        Err(source) => {
            return Err(FileError::ReadFailed {
                path: path.display().to_string(),
                source,
            });
        }
    };

    Ok(content.lines().map(str::to_owned).collect())
}

/// Atomically replaces the contents of `path` with the given lines.
///
/// Each line is terminated with `\n`; an empty slice produces an empty
/// file. The content is staged in a temporary file next to the target
/// and renamed into place, so readers never observe a partial write.
///
/// # Errors
///
/// Returns [`FileError::NoParentDirectory`] if `path` has no parent to
/// stage the temp file in, [`FileError::WriteFailed`] if the staging
/// write fails, or [`FileError::PersistFailed`] if the final rename fails.
pub fn write_lines_atomic(path: &Path, lines: &[String]) -> Result<(), FileError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| FileError::NoParentDirectory(path.display().to_string()))?;

    let mut content = lines.join("\n");
    if !lines.is_empty() {
        content.push('\n');
    }

    let write_failed = |source: std::io::Error| FileError::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(write_failed)?;
    staged.write_all(content.as_bytes()).map_err(write_failed)?;

    staged
        .persist(path)
        .map_err(|e| FileError::PersistFailed {
            path: path.display().to_string(),
            message: e.error.to_string(),
        })?;

    Ok(())
}
