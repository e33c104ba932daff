//! Process-wide cache over the built-in CLDR table.

use std::sync::{Arc, LazyLock};

use crate::cache::RuleListCache;
use crate::error::PluralError;
use crate::rule::Category;
use crate::rule_list::RuleList;
use crate::table::RuleTable;

static GLOBAL_CACHE: LazyLock<RuleListCache<RuleTable>> =
    LazyLock::new(|| RuleListCache::builder().source(RuleTable::cldr()).build());

/// The shared cache used by [`rule_list`] and [`plural_category`].
pub fn global_cache() -> &'static RuleListCache<RuleTable> {
    &GLOBAL_CACHE
}

/// The built-in CLDR rule list for a locale.
pub fn rule_list(language: &str, region: &str) -> Result<Arc<RuleList>, PluralError> {
    GLOBAL_CACHE.get_instance(language, region)
}

/// The CLDR plural category of an integer quantity in a locale.
///
/// Negative quantities use their absolute value.
pub fn plural_category(language: &str, region: &str, quantity: i64) -> Result<Category, PluralError> {
    rule_list(language, region)?.category(quantity)
}
