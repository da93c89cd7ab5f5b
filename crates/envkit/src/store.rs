//! Environment store abstraction.
//!
//! Responsibilities:
//! - Define the [`EnvStore`] capability the façade reads and writes.
//! - Bind it to the real process environment ([`ProcessEnv`]).
//! - Provide an in-memory store for tests and sandboxed loading ([`MemoryStore`]).
//!
//! Does NOT handle:
//! - Parsing or file I/O.
//! - Batch semantics (see `facade.rs`).
//!
//! Invariants:
//! - Every operation is total: unrepresentable names read as absent and writes to them are no-ops.
//! - Stores are never cached by callers; each call hits the backing map directly.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A string-keyed mutable variable namespace.
pub trait EnvStore {
    /// Read the current value of `name`, or `None` if unset.
    fn get(&self, name: &str) -> Option<String>;

    /// Write `value` for `name`, replacing any existing value.
    fn set(&self, name: &str, value: &str);

    /// Remove `name`. Removing an unset name is a no-op.
    fn delete(&self, name: &str);

    /// Report whether `name` is set.
    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<S: EnvStore + ?Sized> EnvStore for &S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) {
        (**self).set(name, value)
    }

    fn delete(&self, name: &str) {
        (**self).delete(name)
    }

    fn has(&self, name: &str) -> bool {
        (**self).has(name)
    }
}

/// The operating-system environment of the current process.
///
/// Writes go through [`std::env::set_var`] and [`std::env::remove_var`], which are only
/// sound while no other thread reads or writes the environment concurrently. Callers
/// that mutate through this store must serialize access themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

/// Names the OS environment cannot hold: empty, or containing `=` or NUL.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

impl EnvStore for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        if !is_valid_name(name) {
            return None;
        }
        // Non-UTF-8 values are still present; decode lossily so `has` and `get` agree.
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&self, name: &str, value: &str) {
        if !is_valid_name(name) || value.contains('\0') {
            tracing::warn!(
                name = %name.replace('\0', "\\0"),
                "Ignoring environment write the OS cannot represent"
            );
            return;
        }
        // SAFETY: ProcessEnv requires callers to serialize environment access (see type docs).
        unsafe { std::env::set_var(name, value) };
    }

    fn delete(&self, name: &str) {
        if !is_valid_name(name) {
            return;
        }
        // SAFETY: ProcessEnv requires callers to serialize environment access (see type docs).
        unsafe { std::env::remove_var(name) };
    }
}

/// An isolated in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    vars: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy all variables into an owned map.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.lock().clone()
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if no variables are set.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Mutex::new(vars),
        }
    }
}

impl EnvStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.lock().insert(name.to_string(), value.to_string());
    }

    fn delete(&self, name: &str) {
        self.lock().remove(name);
    }

    fn has(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }
}
