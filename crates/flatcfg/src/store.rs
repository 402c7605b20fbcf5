//! The [`ConfigStore`]: a loaded configuration file plus typed accessors.
//!
//! # Default-on-error (for beginners)
//!
//! Every typed accessor takes a default value and always returns a usable
//! value.  The second element of the returned tuple tells you *why* you got
//! the value you got:
//!
//! | Situation                       | Value returned | Error  |
//! |---------------------------------|----------------|--------|
//! | key present, parses             | parsed value   | `None` |
//! | key absent                      | default        | `None` |
//! | key present, does not parse     | default        | `Some` |
//!
//! Absence is therefore not an error: a missing key simply means "use the
//! default".  A present-but-wrong value *is* reported, because it usually
//! means a typo in the file.
//!
//! Values are kept as strings and re-parsed on every call.  Nothing is cached.

use std::collections::hash_map;
use std::collections::HashMap;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ConfigError, ValueKind};
use crate::parser::parse_properties;
use crate::tokens::parse_bool_token;

/// An immutable, string-keyed view of a flat configuration file.
///
/// `ConfigStore` is `Send + Sync`; wrap it in an `Arc` to share one loaded
/// store across threads.
///
/// # Examples
///
/// ```rust
/// use flatcfg::ConfigStore;
///
/// let store = ConfigStore::parse("port = 8080\nverbose = ON\n");
/// assert_eq!(store.get_int("port", 80).0, 8080);
/// assert!(store.get_bool("verbose", false).0);
/// assert_eq!(store.get_string("host", "localhost"), "localhost");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    properties: HashMap<String, String>,
}

impl ConfigStore {
    /// Loads the file at `path`.
    ///
    /// Always returns a usable store.  If the file cannot be read the store
    /// is empty and the second element carries a [`ConfigError::Load`], so
    /// callers can carry on with their defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatcfg::ConfigStore;
    ///
    /// let (store, err) = ConfigStore::load("does/not/exist.cfg");
    /// assert!(err.is_some());
    /// assert!(store.is_empty());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::try_load(path) {
            Ok(store) => (store, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Loads the file at `path`, propagating read failures.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file cannot be read.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| {
            debug!(path = %path.display(), error = %source, "failed to read configuration file");
            ConfigError::Load {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let store = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!(
            path = %path.display(),
            entries = store.len(),
            "loaded configuration file"
        );
        Ok(store)
    }

    /// Builds a store from in-memory text using the same rules as [`load`].
    ///
    /// [`load`]: ConfigStore::load
    pub fn parse(content: &str) -> Self {
        Self {
            properties: parse_properties(content),
        }
    }

    /// Returns `true` if `key` was present in the file.
    pub fn has_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns the stored value for `key`, or `default` if absent.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.properties
            .get(key)
            .map_or_else(|| default.to_string(), Clone::clone)
    }

    /// Returns the value for `key` parsed as a base-10 signed integer.
    ///
    /// An optional leading `+` or `-` is accepted; whitespace, fractions and
    /// digit separators are not.
    pub fn get_int(&self, key: &str, default: i64) -> (i64, Option<ConfigError>) {
        self.get_parsed(key, default, ValueKind::Integer)
    }

    /// Returns the value for `key` parsed as a double-precision float.
    ///
    /// `inf`, `infinity` and `nan` are accepted as written.  A finite literal
    /// too large for an `f64` (e.g. `1e400`) is out of range and falls back
    /// to `default` like any other conversion failure.
    pub fn get_float(&self, key: &str, default: f64) -> (f64, Option<ConfigError>) {
        match self.get_parsed(key, default, ValueKind::Float) {
            (value, None) if value.is_infinite() && !self.is_infinity_literal(key) => (
                default,
                Some(ConfigError::conversion(key, ValueKind::Float, default)),
            ),
            result => result,
        }
    }

    /// Returns the value for `key` interpreted as a boolean token.
    ///
    /// Recognised words (ASCII case-insensitive) are `on`/`off`,
    /// `true`/`false`, `yes`/`no`, `enable`/`disable`, `enabled`/`disabled`
    /// and `1`/`0`.  See [`crate::tokens`].
    pub fn get_bool(&self, key: &str, default: bool) -> (bool, Option<ConfigError>) {
        let Some(raw) = self.properties.get(key) else {
            return (default, None);
        };
        match parse_bool_token(raw) {
            Some(value) => (value, None),
            None => (
                default,
                Some(ConfigError::conversion(key, ValueKind::Bool, default)),
            ),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over stored keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.properties.iter(),
        }
    }

    fn is_infinity_literal(&self, key: &str) -> bool {
        self.properties.get(key).is_some_and(|raw| {
            let unsigned = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
            unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
        })
    }

    fn get_parsed<T>(&self, key: &str, default: T, kind: ValueKind) -> (T, Option<ConfigError>)
    where
        T: FromStr + std::fmt::Display,
    {
        let Some(raw) = self.properties.get(key) else {
            return (default, None);
        };
        match raw.parse::<T>() {
            Ok(value) => (value, None),
            Err(_) => {
                let err = ConfigError::conversion(key, kind, &default);
                (default, Some(err))
            }
        }
    }
}

impl FromStr for ConfigStore {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Iterator returned by [`ConfigStore::iter`].
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
