//! Error types for rule list construction and rule table loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::condition::ParseError;
use crate::rule::Category;

/// Errors raised while building or consulting plural rule lists.
#[derive(Debug, Error)]
pub enum PluralError {
    /// A rule description in the table failed to parse.
    #[error("invalid '{category}' rule for locale '{locale}': {source}")]
    Parse {
        locale: String,
        category: Category,
        #[source]
        source: ParseError,
    },

    /// The rule table has no entry for the requested locale key.
    #[error("no plural rules for locale '{key}'")]
    UnknownLocale { key: String },

    /// No rule in the list matched the quantity.
    ///
    /// Well-formed tables end with an unconditional "other" rule, so this
    /// indicates broken rule data rather than an unusual quantity.
    #[error("no plural rule matches {quantity} in locale '{locale}'")]
    NoMatchingRule { locale: String, quantity: i64 },

    /// A category name outside zero/one/two/few/many/other.
    #[error("unknown plural category '{name}'")]
    UnknownCategory { name: String },
}

/// Errors that occur while loading a rule table from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the table.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid JSON rule table.
    #[error("failed to parse '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
