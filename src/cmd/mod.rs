// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_apply_command --> editor
//!                      |
//!                      v
//!              cmd::report (JSON on stdout)
//! ```

pub mod apply;
pub mod report;

#[cfg(test)]
mod tests;
