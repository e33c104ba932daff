//! Rule tables: the locale-keyed source data rule lists are built from.
//!
//! A table maps a locale key (`"ru"`, `"pt_PT"`) to the ordered
//! `(category, description)` pairs of that locale. The built-in table
//! ([`RuleTable::cldr`]) carries CLDR cardinal rules; custom tables can be
//! loaded from JSON:
//!
//! ```json
//! {
//!   "en": [
//!     { "category": "one", "rule": "i = 1 and v = 0" },
//!     { "category": "other", "rule": "" }
//!   ]
//! }
//! ```

mod cldr;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::rule::Category;

/// Read access to locale-keyed rule descriptions.
///
/// Implementations must be shareable across threads because rule lists are
/// built on whichever thread first asks for a locale.
pub trait RuleSource: Send + Sync {
    /// Ordered rule entries for a locale key.
    fn rules(&self, key: &str) -> Option<&[RuleEntry]>;

    /// Whether the table knows a locale key.
    fn contains(&self, key: &str) -> bool {
        self.rules(key).is_some()
    }
}

/// One `(category, description)` pair of a locale's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub category: Category,
    /// CLDR rule description; empty for the unconditional fallback.
    #[serde(default)]
    pub rule: String,
}

impl RuleEntry {
    pub fn new(category: Category, rule: impl Into<String>) -> Self {
        Self {
            category,
            rule: rule.into(),
        }
    }
}

/// An in-memory rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    locales: BTreeMap<String, Vec<RuleEntry>>,
}

impl RuleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in CLDR cardinal rules.
    pub fn cldr() -> Self {
        let mut table = Self::new();
        for (key, rules) in cldr::CARDINAL_RULES {
            table.insert(
                *key,
                rules
                    .iter()
                    .map(|(category, rule)| RuleEntry::new(*category, *rule))
                    .collect(),
            );
        }
        table
    }

    /// Parse a table from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Insert or replace the rules of a locale key.
    pub fn insert(&mut self, key: impl Into<String>, rules: Vec<RuleEntry>) {
        self.locales.insert(key.into(), rules);
    }

    /// Locale keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl RuleSource for RuleTable {
    fn rules(&self, key: &str) -> Option<&[RuleEntry]> {
        self.locales.get(key).map(Vec::as_slice)
    }

    fn contains(&self, key: &str) -> bool {
        self.locales.contains_key(key)
    }
}
