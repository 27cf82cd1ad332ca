// entourage-rs: Bashrc Environment Variable Manager
//
// SPDX-FileCopyrightText: 2026 entourage-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              EnvError (~24 bytes)
//!                     |
//!          +-----+----+-----+------+
//!          |     |          |      |
//!          v     v          v      v
//!        Bail  Input       File  Io/Other
//!              Box         Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Input  EmptyKey, KeyContainsEquals, KeyContainsWhitespace,
//!          UnknownState, InvalidLogLevel, BadPattern
//!   File   NotFound, ReadFailed, WriteFailed, PersistFailed,
//!          NoParentDirectory
//!
//! All variants boxed => EnvError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Invalid request input.
    #[error("input error: {0}")]
    Input(#[from] Box<InputError>),

    /// Target file access error.
    #[error("file error: {0}")]
    File(#[from] Box<FileError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`EnvError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> EnvError {
    EnvError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvError {
                fn from(err: $error) -> Self {
                    EnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    InputError => Input,
    FileError => File,
    std::io::Error => Io,
}

// --- Input Errors ---

/// Validation errors for the incoming variable request.
///
/// These are surfaced before any file access is attempted.
#[derive(Debug, Error)]
pub enum InputError {
    /// The variable name is empty.
    #[error("variable name must not be empty")]
    EmptyKey,

    /// The variable name contains a literal `=`.
    #[error("variable name '{key}' must not contain '='")]
    KeyContainsEquals { key: String },

    /// The variable name contains whitespace.
    #[error("variable name '{key}' must not contain whitespace")]
    KeyContainsWhitespace { key: String },

    /// The desired state string is not `present` or `absent`.
    #[error("unknown state '{state}', expected 'present' or 'absent'")]
    UnknownState { state: String },

    /// The log level is outside the supported 0-5 range.
    #[error("log level must be 0-5, got {level}")]
    InvalidLogLevel { level: u8 },

    /// The definition pattern for the key failed to compile.
    #[error("cannot build definition pattern for '{key}': {message}")]
    BadPattern { key: String, message: String },
}

// --- File Errors ---

/// Target file access errors.
#[derive(Debug, Error)]
pub enum FileError {
    /// Target file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// Target file could not be read.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The replacement content could not be written.
    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be renamed over the target.
    #[error("failed to persist '{path}': {message}")]
    PersistFailed { path: String, message: String },

    /// Target path has no parent directory to stage the rewrite in.
    #[error("no parent directory for '{0}'")]
    NoParentDirectory(String),
}
