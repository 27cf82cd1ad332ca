// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                main.rs
//!                   |
//!          +--------+--------+
//!          v                 v
//!       cli (clap)      cmd (handlers)
//!          |            apply / report
//!          +--------+--------+
//!                   v
//!        ,---------------------,
//!        |       editor        |
//!        |  pattern + types +  |
//!        |  ensure_* edits     |
//!        '----+-----------+----'
//!             |           |
//!             v           v
//!          locate    utility::fs
//!        user->path  atomic rewrite
//!
//!   +------------------------------------+
//!   |  foundation     error, logging     |
//!   +------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod editor;
pub mod error;
pub mod locate;
pub mod logging;
pub mod utility;
