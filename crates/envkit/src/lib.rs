//! Load `.env` files into the process environment and access variables.
//!
//! This crate provides a small line parser for `KEY=VALUE` files, an
//! [`EnvStore`] abstraction over the process environment, and accessor
//! functions that work on one name or a batch of names.
//!
//! The free functions operate on the real process environment. Mutating the
//! process environment is only sound while no other thread reads or writes it,
//! so call [`init_env`] early at startup before spawning threads.
//!
//! ```no_run
//! # async fn run() -> envkit::Result<()> {
//! envkit::init_env().await?;
//!
//! let host = envkit::get_env("DB_HOST");
//! let creds = envkit::get_env_many(["DB_USER", "DB_PASS"]);
//! assert_eq!(creds.len(), 2);
//! # let _ = host;
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod error;
mod facade;
mod loader;
mod parser;
mod store;

use std::path::Path;

pub use error::{EnvError, MalformedLine, Result};
pub use facade::{Env, Values};
pub use loader::EnvLoader;
pub use parser::{ParsedEnv, env_value_uses_quotes, parse_env_content, parse_env_content_strict};
pub use store::{EnvStore, MemoryStore, ProcessEnv};

/// Load `.env` from the current directory into the process environment.
///
/// A missing file applies nothing. Returns the number of variables applied.
pub async fn init_env() -> Result<usize> {
    EnvLoader::new().apply_to(&ProcessEnv).await
}

/// Load the env file at `path` into the process environment.
pub async fn init_env_from(path: impl AsRef<Path>) -> Result<usize> {
    Env::process().load(path).await
}

/// Set a process environment variable, overwriting any existing value.
pub fn set_env(name: &str, value: &str) {
    Env::process().set(name, value)
}

/// Get a process environment variable.
pub fn get_env(name: &str) -> Option<String> {
    Env::process().get(name)
}

/// Get several process environment variables, in input order.
pub fn get_env_many<I>(names: I) -> Vec<Option<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Env::process().get_many(names)
}

/// Check if a process environment variable is set.
pub fn has_env(name: &str) -> bool {
    Env::process().has(name)
}

/// Check several process environment variables, in input order.
pub fn has_env_many<I>(names: I) -> Vec<bool>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Env::process().has_many(names)
}

/// Check that every variable is set. Vacuously true for no names.
pub fn has_env_all<I>(names: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Env::process().has_all(names)
}

/// Remove a process environment variable. Removing an unset name is a no-op.
pub fn del_env(name: &str) {
    Env::process().delete(name)
}

/// Remove several process environment variables.
pub fn del_env_many<I>(names: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Env::process().delete_many(names)
}
