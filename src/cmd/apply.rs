// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Apply command implementation.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::apply::ApplyArgs;
use crate::editor::{self, Outcome, VariableRequest};
use crate::error::Result;
use crate::locate::{RcFileLocator, SystemLocator};

/// Main handler for the apply command.
///
/// Resolves the target file (an explicit `--file` wins over the user's
/// bashrc), validates the request, and runs the editor.
///
/// # Errors
///
/// Returns an error for invalid input or any file-access failure; the
/// caller converts it into the structured failure report.
pub fn run_apply_command(args: &ApplyArgs) -> Result<Outcome> {
    let path: PathBuf = args
        .file
        .clone()
        .unwrap_or_else(|| SystemLocator.bashrc_path(&args.user));

    let request = VariableRequest::new(&args.key, &args.value, args.state)?;

    debug!(
        user = %args.user,
        key = request.key(),
        state = %request.state(),
        path = %path.display(),
        "applying variable request"
    );

    let outcome = editor::apply(&request, &path)?;
    Ok(outcome)
}
