//! Line parser for `.env` file content.
//!
//! Responsibilities:
//! - Turn raw file text into an ordered [`ParsedEnv`] mapping.
//! - Skip blank lines and `#` comments.
//! - Strip one matching pair of `'` or `"` quotes from values.
//!
//! Does NOT handle:
//! - File I/O (see `loader.rs`).
//! - Applying values to a store (see `facade.rs`).
//! - Multi-line values, interpolation, escape sequences, or `export` prefixes.
//!
//! Invariants:
//! - Keys and values are trimmed of surrounding whitespace.
//! - Later duplicate keys overwrite earlier values but keep the first position.
//! - Lines are split on the FIRST `=` only; the value may contain `=`.
//! - Malformed lines are reported by line number only, never by content.

use std::collections::HashMap;

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR, QUOTE_CHARS};
use crate::error::{EnvError, MalformedLine, Result};

/// Ordered mapping of variable names to values produced by one parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEnv {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ParsedEnv {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse optional content leniently. `None` is treated as empty content.
    pub fn parse(content: Option<&str>) -> Self {
        parse_env_content(content.unwrap_or_default())
    }

    /// Insert a variable, overwriting any previous value for the same name.
    ///
    /// An overwritten name keeps the position of its first insertion.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Look up the value parsed for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Check if `key` was parsed.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no variables were parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Variable names in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl IntoIterator for ParsedEnv {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParsedEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = ParsedEnv::new();
        for (k, v) in iter {
            env.insert(k, v);
        }
        env
    }
}

/// Check if the value is wrapped in a matching pair of `'` or `"` quotes.
///
/// A lone quote character is not a quoted value.
pub fn env_value_uses_quotes(value: &str) -> bool {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => first == last && QUOTE_CHARS.contains(&first),
        _ => false,
    }
}

/// Parse `.env` content, skipping malformed lines with a warning.
pub fn parse_env_content(content: &str) -> ParsedEnv {
    let mut env = ParsedEnv::new();
    for (idx, raw) in content.split('\n').enumerate() {
        match parse_line(raw) {
            Line::Skip => {}
            Line::Entry(key, value) => env.insert(key, value),
            Line::Malformed(reason) => {
                tracing::warn!(line = idx + 1, %reason, "Skipping malformed env line");
            }
        }
    }
    env
}

/// Parse `.env` content, failing on the first malformed line.
///
/// # Errors
///
/// Returns [`EnvError::Parse`] with the 1-based line number of the first malformed line.
pub fn parse_env_content_strict(content: &str) -> Result<ParsedEnv> {
    let mut env = ParsedEnv::new();
    for (idx, raw) in content.split('\n').enumerate() {
        match parse_line(raw) {
            Line::Skip => {}
            Line::Entry(key, value) => env.insert(key, value),
            Line::Malformed(reason) => {
                return Err(EnvError::Parse {
                    line: idx + 1,
                    reason,
                });
            }
        }
    }
    Ok(env)
}

enum Line<'a> {
    Skip,
    Entry(&'a str, &'a str),
    Malformed(MalformedLine),
}

fn parse_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Line::Skip;
    }

    let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
        return Line::Malformed(MalformedLine::MissingSeparator);
    };

    // Quote detection runs on the untrimmed value.
    let value = if env_value_uses_quotes(value) {
        &value[1..value.len() - 1]
    } else {
        value
    };

    let key = key.trim();
    let value = value.trim();

    if key.is_empty() {
        return Line::Malformed(MalformedLine::EmptyKey);
    }
    if key.contains('\0') || value.contains('\0') {
        return Line::Malformed(MalformedLine::NulCharacter);
    }

    Line::Entry(key, value)
}
