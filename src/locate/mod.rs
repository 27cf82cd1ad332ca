// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution of a user name to their bashrc path.
//!
//! ```text
//! "root"  -> /root/.bashrc
//! <user>  -> /home/<user>/.bashrc
//! ```
//!
//! The editor itself only ever sees an already-resolved path; this
//! trait is the adapter-level seam so tests and alternative layouts
//! can inject their own policy.

use std::path::{Path, PathBuf};

/// Maps a user name to the shell startup file to edit.
pub trait RcFileLocator {
    /// Path of the bashrc for `user`.
    fn bashrc_path(&self, user: &str) -> PathBuf;
}

/// Standard Linux home-directory layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocator;

impl RcFileLocator for SystemLocator {
    fn bashrc_path(&self, user: &str) -> PathBuf {
        if user == "root" {
            PathBuf::from("/root/.bashrc")
        } else {
            Path::new("/home").join(user).join(".bashrc")
        }
    }
}
