//! Locale-keyed, build-once cache of rule lists.
//!
//! Each locale key owns a [`OnceCell`]. Looking the cell up (or inserting an
//! empty one) happens under a short mutex; the rule list itself is built
//! outside that lock through [`OnceCell::get_or_try_init`], so:
//!
//! - concurrent callers for the same key wait for a single build and share
//!   the resulting [`Arc`],
//! - building one locale never blocks callers resolving another,
//! - a failed build leaves the cell empty, and the next caller retries.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bon::Builder;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::PluralError;
use crate::rule_list::{RuleList, build_instance, resolve_locale_key};
use crate::table::RuleSource;

type Entry = Arc<OnceCell<Arc<RuleList>>>;

/// Build-once cache of rule lists over a [`RuleSource`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use plurals::{Category, RuleListCache, RuleTable};
///
/// let cache = RuleListCache::builder().source(RuleTable::cldr()).build();
///
/// let polish = cache.get_instance("pl", "PL").unwrap();
/// assert_eq!(polish.locale(), Some("pl"));
/// assert_eq!(polish.category(22).unwrap(), Category::Few);
///
/// // Later lookups share the same instance.
/// assert!(Arc::ptr_eq(&polish, &cache.get_instance("pl", "").unwrap()));
/// ```
#[derive(Builder)]
pub struct RuleListCache<S: RuleSource> {
    /// Table the rule lists are built from.
    source: S,

    /// Per-key cells. Entries are never removed except by [`clear`].
    ///
    /// [`clear`]: RuleListCache::clear
    #[builder(skip)]
    entries: Mutex<HashMap<String, Entry>>,

    /// Shared list returned for locales the source does not know.
    #[builder(skip = Arc::new(RuleList::empty()))]
    empty: Arc<RuleList>,
}

impl<S: RuleSource> RuleListCache<S> {
    /// The rule list for a locale, building it on first use.
    ///
    /// Locales unknown to the source resolve to a shared list that always
    /// yields "other". Parse failures are returned to the caller and are not
    /// cached.
    pub fn get_instance(&self, language: &str, region: &str) -> Result<Arc<RuleList>, PluralError> {
        let Some(key) = self.resolve_locale_key(language, region) else {
            debug!(language, region, "no plural rules for locale, using fallback");
            return Ok(Arc::clone(&self.empty));
        };

        let entry = self.entry(&key);
        entry
            .get_or_try_init(|| {
                build_instance(&self.source, &key)
                    .map(Arc::new)
                    .inspect_err(|error| warn!(locale = %key, %error, "failed to build plural rules"))
            })
            .map(Arc::clone)
    }

    /// Resolve the table key for a locale against this cache's source.
    pub fn resolve_locale_key(&self, language: &str, region: &str) -> Option<String> {
        resolve_locale_key(&self.source, language, region)
    }

    /// The fallback list for unresolved locales.
    pub fn empty(&self) -> Arc<RuleList> {
        Arc::clone(&self.empty)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Keys whose rule lists have been built, sorted.
    pub fn cached_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .lock()
            .iter()
            .filter(|(_, entry)| entry.get().is_some())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Drop every cached rule list.
    ///
    /// Instances already handed out stay valid; later lookups rebuild.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Fetch the cell for a key, inserting an empty one if needed.
    fn entry(&self, key: &str) -> Entry {
        let mut entries = self.lock();
        Arc::clone(entries.entry(key.to_string()).or_default())
    }

    /// The map only ever gains whole entries, so a poisoned lock is safe to
    /// keep using.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
