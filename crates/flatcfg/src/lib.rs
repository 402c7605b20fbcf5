//! # flatcfg
//!
//! A small loader for flat `key = value` configuration files with typed,
//! default-on-error accessors.
//!
//! ```text
//! # This is a comment
//! listen_port = 8080
//! ratio       = 0.75
//! verbose     = on
//! ```
//!
//! # How it fits together (for beginners)
//!
//! - **`parser`** – Turns text into a `HashMap<String, String>`.  Comments,
//!   blank lines and lines without `=` are skipped silently.
//!
//! - **`store`** – [`ConfigStore`] owns the map and exposes `get_string`,
//!   `get_int`, `get_float` and `get_bool`.  Every getter takes a default and
//!   always returns a value; a conversion failure is reported alongside it
//!   instead of replacing it.
//!
//! - **`tokens`** – The fixed word lists that count as `true` / `false`.
//!
//! - **`error`** – [`ConfigError`], covering unreadable files and values
//!   that do not parse as the requested type.
//!
//! The crate emits `tracing` events at `debug` / `trace` level but never
//! installs a subscriber; binaries decide where logs go.

pub mod error;
pub mod parser;
pub mod store;
pub mod tokens;

// Re-export the most-used types at the crate root so callers can write
// `flatcfg::ConfigStore` instead of `flatcfg::store::ConfigStore`.
pub use error::{ConfigError, ValueKind};
pub use store::ConfigStore;
