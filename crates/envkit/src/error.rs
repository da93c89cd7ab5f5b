//! Error types for `.env` loading.
//!
//! Responsibilities:
//! - Define error variants for file read and parse failures.
//! - Classify I/O errors so "not found" can be treated as empty content.
//!
//! Does NOT handle:
//! - Accessor failures. `get`/`set`/`has`/`delete` are total and never error.
//!
//! Invariants:
//! - Error messages NEVER include raw `.env` line contents or values to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = EnvError> = std::result::Result<T, E>;

/// Why a line was rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLine {
    /// The line has no `=` separator.
    MissingSeparator,
    /// The name is empty after trimming.
    EmptyKey,
    /// The name or value contains a NUL character.
    NulCharacter,
}

impl std::fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            MalformedLine::MissingSeparator => "missing '=' separator",
            MalformedLine::EmptyKey => "empty variable name",
            MalformedLine::NulCharacter => "NUL character in name or value",
        };
        f.write_str(reason)
    }
}

/// Errors that can occur while loading an env file.
#[derive(Error, Debug)]
pub enum EnvError {
    /// The file exists but could not be read.
    ///
    /// "Not found" is never reported through this variant; the loader treats it as empty content.
    #[error("Failed to read env file at {path}: {kind}")]
    Io { path: PathBuf, kind: ErrorKind },

    /// A line could not be parsed in strict mode.
    ///
    /// SAFETY: only the line number is reported, NOT the offending line content.
    #[error("Failed to parse env file at line {line}: {reason}")]
    Parse { line: usize, reason: MalformedLine },
}

impl EnvError {
    /// Build an [`EnvError::Io`] from a read failure on `path`.
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        EnvError::Io {
            path: path.into(),
            kind: err.kind(),
        }
    }
}

/// Check if an I/O error indicates the file was not found.
pub(crate) fn is_not_found(err: &std::io::Error) -> bool {
    err.kind() == ErrorKind::NotFound
}
