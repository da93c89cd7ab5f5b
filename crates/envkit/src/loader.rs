//! `.env` file loader.
//!
//! Responsibilities:
//! - Read an env file asynchronously and parse it into a [`ParsedEnv`].
//! - Apply the parsed variables to an [`EnvStore`] in file order.
//! - Optionally honor the `DOTENV_DISABLED` gate so loading can be switched off per process.
//!
//! Does NOT handle:
//! - Line-level parsing rules (see `parser.rs`).
//! - Reading variables back (see `facade.rs`).
//!
//! Invariants / Assumptions:
//! - A missing file is treated as empty content, not an error.
//! - Every other read failure propagates as `EnvError::Io`.
//! - The `DOTENV_DISABLED` gate is off unless enabled with `respect_disable_var(true)`.
//!   When on, it is checked in the target store before the file is read.
//! - Values are never logged; only paths, counts, and names.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_ENV_FILE, DOTENV_DISABLED_VAR};
use crate::error::{EnvError, Result, is_not_found};
use crate::facade::Env;
use crate::parser::{ParsedEnv, parse_env_content, parse_env_content_strict};
use crate::store::EnvStore;

/// Builder that reads an env file and applies it to a store.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    path: PathBuf,
    strict: bool,
    respect_disable_var: bool,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// Create a loader for `.env` in the current directory.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ENV_FILE),
            strict: false,
            respect_disable_var: false,
        }
    }

    /// Override the file to load.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Fail on malformed lines instead of skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether `DOTENV_DISABLED=1|true` in the target store turns loading into a no-op.
    ///
    /// Off by default.
    pub fn respect_disable_var(mut self, respect: bool) -> Self {
        self.respect_disable_var = respect;
        self
    }

    /// The file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if loading is disabled via the target store.
    fn dotenv_disabled<S: EnvStore + ?Sized>(store: &S) -> bool {
        matches!(
            store.get(DOTENV_DISABLED_VAR).as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Read and parse the file without touching any store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read (`EnvError::Io`)
    /// - Strict mode is on and a line is malformed (`EnvError::Parse`)
    ///
    /// A missing file yields an empty [`ParsedEnv`].
    pub async fn read(&self) -> Result<ParsedEnv> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if is_not_found(&e) => {
                tracing::debug!(path = %self.path.display(), "Env file not found, nothing to load");
                return Ok(ParsedEnv::new());
            }
            Err(e) => return Err(EnvError::io(&self.path, &e)),
        };

        if self.strict {
            parse_env_content_strict(&content)
        } else {
            Ok(parse_env_content(&content))
        }
    }

    /// Read the file and set every parsed variable on `store`, in file order.
    ///
    /// Returns the number of variables applied. Existing values are overwritten.
    /// The batch is not atomic: a store observed mid-load may be partially updated.
    pub async fn apply_to<S: EnvStore + ?Sized>(&self, store: &S) -> Result<usize> {
        if self.respect_disable_var && Self::dotenv_disabled(store) {
            tracing::debug!(
                var = DOTENV_DISABLED_VAR,
                "Env file loading disabled, skipping"
            );
            return Ok(0);
        }

        let parsed = self.read().await?;
        let applied = Env::new(store).apply(&parsed);

        tracing::debug!(
            path = %self.path.display(),
            count = applied,
            "Loaded env file"
        );
        Ok(applied)
    }
}
