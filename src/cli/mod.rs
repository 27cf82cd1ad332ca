// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for entourage-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! entourage [global options] <command>
//! apply --user USER --key KEY --value VALUE [--state present|absent] [--file PATH]
//! version
//! ```

pub mod apply;
pub mod global;


use crate::cli::apply::ApplyArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Bashrc Environment Variable Manager
///
/// Idempotently manages `KEY=VALUE` lines in a user's `~/.bashrc`.
#[derive(Debug, Parser)]
#[command(
    name = "entourage",
    author,
    version,
    about = "Bashrc Environment Variable Manager",
    long_about = "entourage-rs Copyright (C) 2026 entourage-rs contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Idempotently manages environment variable definitions in a\n\
                  user's ~/.bashrc: inserts a missing definition, overwrites a\n\
                  differing one, skips one that already matches, and removes\n\
                  every definition when asked for the absent state.",
    after_help = "OUTPUT:\n\n\
                  The result is printed to stdout as a single JSON object:\n\
                  {\"changed\": bool, \"meta\": {...}} on success, or\n\
                  {\"msg\": \"...\"} with a non-zero exit code on failure.\n\
                  Diagnostics go to stderr (see --log-level) so stdout can be\n\
                  consumed by an orchestration layer."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Brings one variable definition to the desired state.
    Apply(ApplyArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
