//! Centralized constants for the envkit crate.

/// File loaded by [`crate::init_env`] and [`crate::EnvLoader::new`] when no path is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Variable that disables `.env` loading when set to `1` or `true`.
///
/// Checked against the target store, not the file being loaded.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Line comment marker.
pub(crate) const COMMENT_PREFIX: char = '#';

/// Separator between a variable name and its value.
pub(crate) const KEY_VALUE_SEPARATOR: char = '=';

/// Quote characters that may wrap a value.
pub(crate) const QUOTE_CHARS: [char; 2] = ['\'', '"'];
