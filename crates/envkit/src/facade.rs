//! Accessor façade over an [`EnvStore`].
//!
//! Responsibilities:
//! - Load env files into a store.
//! - Expose get/set/has/has_all/delete for one name or a batch of names.
//! - Provide arity-sensitive entry points that return [`Values::One`] for a single name.
//!
//! Does NOT handle:
//! - Parsing (see `parser.rs`) or reading files (see `loader.rs`).
//!
//! Invariants:
//! - Nothing is cached; every call reads or writes the store directly.
//! - Batch results preserve the order of the input names.
//! - Batch writes are not atomic.

use std::path::Path;

use crate::error::Result;
use crate::loader::EnvLoader;
use crate::parser::ParsedEnv;
use crate::store::{EnvStore, ProcessEnv};

/// Result of a lookup that may cover one or many names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Values<T> {
    /// Exactly one name was requested.
    One(T),
    /// Zero or several names were requested, in input order.
    Many(Vec<T>),
}

impl<T> Values<T> {
    /// Flatten into a vector regardless of arity.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Values::One(value) => vec![value],
            Values::Many(values) => values,
        }
    }

    /// The single value, if exactly one name was requested.
    pub fn into_one(self) -> Option<T> {
        match self {
            Values::One(value) => Some(value),
            Values::Many(_) => None,
        }
    }

    fn from_vec(mut values: Vec<T>) -> Self {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return Values::One(value);
            }
        }
        Values::Many(values)
    }
}

/// Accessors bound to a store.
#[derive(Debug, Default)]
pub struct Env<S> {
    store: S,
}

impl Env<ProcessEnv> {
    /// Accessors over the current process environment.
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvStore> Env<S> {
    /// Accessors over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the accessors and return the backing store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load the env file at `path` into the store.
    ///
    /// A missing file applies nothing. Returns the number of variables applied.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Io` if the file exists but cannot be read.
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<usize> {
        let parsed = EnvLoader::new().with_path(path.as_ref()).read().await?;
        let applied = self.apply(&parsed);

        tracing::debug!(
            path = %path.as_ref().display(),
            count = applied,
            "Loaded env file"
        );
        Ok(applied)
    }

    /// Set every variable of `parsed` on the store, in order.
    pub fn apply(&self, parsed: &ParsedEnv) -> usize {
        for (name, value) in parsed.iter() {
            self.set(name, value);
        }
        parsed.len()
    }

    /// Set a variable, overwriting any existing value.
    pub fn set(&self, name: &str, value: &str) {
        self.store.set(name, value);
    }

    /// Get a variable, or `None` if unset.
    pub fn get(&self, name: &str) -> Option<String> {
        self.store.get(name)
    }

    /// Get several variables; unset names yield `None` at their position.
    pub fn get_many<I>(&self, names: I) -> Vec<Option<String>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.store.get(name.as_ref()))
            .collect()
    }

    /// Get one variable as [`Values::One`], or several as [`Values::Many`].
    pub fn get_vars<N: AsRef<str>>(&self, names: &[N]) -> Values<Option<String>> {
        Values::from_vec(self.get_many(names))
    }

    /// Check if a variable is set.
    pub fn has(&self, name: &str) -> bool {
        self.store.has(name)
    }

    /// Check several variables, in input order.
    pub fn has_many<I>(&self, names: I) -> Vec<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.store.has(name.as_ref()))
            .collect()
    }

    /// Check one variable as [`Values::One`], or several as [`Values::Many`].
    pub fn has_vars<N: AsRef<str>>(&self, names: &[N]) -> Values<bool> {
        Values::from_vec(self.has_many(names))
    }

    /// True if every name is set. Vacuously true for no names.
    pub fn has_all<I>(&self, names: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names.into_iter().all(|name| self.store.has(name.as_ref()))
    }

    /// Remove a variable. Removing an unset name is a no-op.
    pub fn delete(&self, name: &str) {
        self.store.delete(name);
    }

    /// Remove several variables, in input order.
    pub fn delete_many<I>(&self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            self.store.delete(name.as_ref());
        }
    }

    /// Remove one variable or several. Deletion returns nothing, so arity only
    /// selects between [`Env::delete`] and [`Env::delete_many`].
    pub fn delete_vars<N: AsRef<str>>(&self, names: &[N]) {
        match names {
            [name] => self.delete(name.as_ref()),
            _ => self.delete_many(names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn env_with(vars: &[(&str, &str)]) -> Env<MemoryStore> {
        Env::new(vars.iter().copied().collect())
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let env = env_with(&[]);
        env.set("SIMPLY_UY", "first");
        assert_eq!(env.get("SIMPLY_UY").as_deref(), Some("first"));
        env.set("SIMPLY_UY", "second");
        assert_eq!(env.get("SIMPLY_UY").as_deref(), Some("second"));
    }

    #[test]
    fn test_get_missing_is_none() {
        let env = env_with(&[]);
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_get_many_preserves_order() {
        let env = env_with(&[("Y", "valueOfY")]);
        assert_eq!(
            env.get_many(["X", "Y"]),
            vec![None, Some("valueOfY".to_string())]
        );
        assert!(env.get_many(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_get_vars_shape_follows_arity() {
        let env = env_with(&[("A", "1"), ("B", "2")]);

        assert_eq!(env.get_vars(&["A"]), Values::One(Some("1".to_string())));
        assert_eq!(
            env.get_vars(&["B", "A"]),
            Values::Many(vec![Some("2".to_string()), Some("1".to_string())])
        );
        assert_eq!(env.get_vars::<&str>(&[]), Values::Many(vec![]));
    }

    #[test]
    fn test_has_and_has_many() {
        let env = env_with(&[("PRESENT", "1")]);
        assert!(env.has("PRESENT"));
        assert!(!env.has("ABSENT"));
        assert_eq!(env.has_many(["PRESENT", "ABSENT"]), vec![true, false]);
        assert_eq!(env.has_vars(&["PRESENT"]), Values::One(true));
        assert_eq!(
            env.has_vars(&["ABSENT", "PRESENT"]),
            Values::Many(vec![false, true])
        );
    }

    #[test]
    fn test_has_all() {
        let env = env_with(&[("X", "1"), ("Y", "2")]);
        assert!(env.has_all(Vec::<&str>::new()), "no names is vacuously true");
        assert!(env.has_all(["X", "Y"]));
        assert!(!env.has_all(["X", "Z"]));
    }

    #[test]
    fn test_delete_existing_and_absent() {
        let env = env_with(&[("A", "1"), ("B", "2"), ("C", "3")]);

        env.delete("A");
        assert!(!env.has("A"));

        env.delete("NEVER_SET");
        assert!(!env.has("NEVER_SET"));

        env.delete_many(["B", "NEVER_SET", "C"]);
        assert!(env.store().is_empty());
    }

    #[test]
    fn test_delete_vars_one_and_many() {
        let env = env_with(&[("A", "1"), ("B", "2"), ("C", "3"), ("KEEP", "4")]);

        env.delete_vars(&["A"]);
        assert!(!env.has("A"));
        assert!(env.has_all(["B", "C", "KEEP"]));

        env.delete_vars(&["B", "ABSENT", "C"]);
        assert_eq!(env.has_many(["B", "C", "KEEP"]), vec![false, false, true]);

        env.delete_vars::<&str>(&[]);
        assert_eq!(env.store().len(), 1);
    }

    #[test]
    fn test_delete_absent_leaves_store_unchanged() {
        let env = env_with(&[("KEEP", "1")]);
        env.delete("ABSENT");
        assert_eq!(env.store().snapshot().len(), 1);
        assert_eq!(env.get("KEEP").as_deref(), Some("1"));
    }

    #[test]
    fn test_apply_parsed_env() {
        let env = env_with(&[("A", "old")]);
        let parsed: ParsedEnv = [("A", "new"), ("B", "2")].into_iter().collect();

        assert_eq!(env.apply(&parsed), 2);
        assert_eq!(
            env.get_many(["A", "B"]),
            vec![Some("new".to_string()), Some("2".to_string())]
        );
    }

    #[test]
    fn test_values_conversions() {
        assert_eq!(Values::One(1).into_vec(), vec![1]);
        assert_eq!(Values::Many(vec![1, 2]).into_vec(), vec![1, 2]);
        assert_eq!(Values::One(1).into_one(), Some(1));
        assert_eq!(Values::Many(vec![1]).into_one(), None);
    }

    #[tokio::test]
    async fn test_load_missing_file_applies_nothing() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let env = env_with(&[]);

        let applied = env.load(temp_dir.path().join(".env")).await.unwrap();

        assert_eq!(applied, 0);
        assert!(env.store().is_empty());
    }

    #[tokio::test]
    async fn test_load_ignores_dotenv_disabled_in_store() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        std::fs::write(&path, "A=1\nB=2\n").unwrap();
        let env = env_with(&[(crate::constants::DOTENV_DISABLED_VAR, "1")]);

        let applied = env.load(&path).await.unwrap();

        assert_eq!(applied, 2);
        assert_eq!(
            env.get_many(["A", "B"]),
            vec![Some("1".to_string()), Some("2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_load_applies_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        std::fs::write(&path, "API_URL=\"https://api.example.com\"\n").unwrap();
        let env = env_with(&[]);

        assert_eq!(env.load(&path).await.unwrap(), 1);
        assert_eq!(
            env.get("API_URL").as_deref(),
            Some("https://api.example.com")
        );
    }
}
