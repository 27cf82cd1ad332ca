// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the apply command.

use clap::Args;
use std::path::PathBuf;

use crate::editor::DesiredState;

/// Arguments for `entourage apply`.
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// User whose ~/.bashrc is edited ("root" maps to /root/.bashrc,
    /// anyone else to /home/<user>/.bashrc).
    #[arg(short = 'u', long, value_name = "USER")]
    pub user: String,

    /// Name of the environment variable. Must not contain '=' or
    /// whitespace.
    #[arg(short = 'k', long, value_name = "KEY")]
    pub key: String,

    /// Value to assign. Required even with --state absent, where it is
    /// ignored.
    #[arg(short = 'v', long, value_name = "VALUE")]
    pub value: String,

    /// Desired end state for the variable's definition.
    #[arg(long, value_enum, default_value_t = DesiredState::Present)]
    pub state: DesiredState,

    /// Edit this file instead of resolving the user's bashrc path.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}
