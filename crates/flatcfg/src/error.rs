//! Error types returned by [`crate::ConfigStore`].
//!
//! Neither variant is fatal.  A failed load still hands back an empty store,
//! and a failed conversion still hands back the caller's default, so the
//! error is purely informational: the caller decides whether to log it,
//! surface it, or ignore it.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The typed view an accessor tried to apply to a stored string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// Error type for configuration loading and typed lookups.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("unable to load properties from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be interpreted as the requested type.
    ///
    /// `default` is the rendered default value that was returned instead.
    #[error("property {key} does not have a valid {kind} value, using default {default}")]
    Conversion {
        key: String,
        kind: ValueKind,
        default: String,
    },
}

impl ConfigError {
    pub(crate) fn conversion(key: &str, kind: ValueKind, default: impl fmt::Display) -> Self {
        ConfigError::Conversion {
            key: key.to_string(),
            kind,
            default: default.to_string(),
        }
    }

    /// Returns the key involved in a conversion failure, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::Conversion { key, .. } => Some(key),
            ConfigError::Load { .. } => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
