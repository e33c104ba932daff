//! Built-in CLDR data, checked through the global API and against ICU4X.

use std::sync::Arc;

use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use plurals::{Category, RuleTable, build_instance, global_cache, plural_category, rule_list};

// =========================================================================
// Global API
// =========================================================================

#[test]
fn english_one_and_other() {
    assert_eq!(plural_category("en", "US", 1).unwrap(), Category::One);
    assert_eq!(plural_category("en", "US", 0).unwrap(), Category::Other);
    assert_eq!(plural_category("en", "US", 2).unwrap(), Category::Other);
    assert_eq!(plural_category("en", "US", -1).unwrap(), Category::One);
}

#[test]
fn russian_categories() {
    let cases = [
        (1, Category::One),
        (21, Category::One),
        (2, Category::Few),
        (24, Category::Few),
        (5, Category::Many),
        (11, Category::Many),
        (12, Category::Many),
        (111, Category::Many),
        (0, Category::Many),
    ];
    for (n, expected) in cases {
        assert_eq!(plural_category("ru", "RU", n).unwrap(), expected, "n = {n}");
    }
}

#[test]
fn polish_categories() {
    assert_eq!(plural_category("pl", "", 1).unwrap(), Category::One);
    assert_eq!(plural_category("pl", "", 2).unwrap(), Category::Few);
    assert_eq!(plural_category("pl", "", 12).unwrap(), Category::Many);
    assert_eq!(plural_category("pl", "", 22).unwrap(), Category::Few);
    assert_eq!(plural_category("pl", "", 21).unwrap(), Category::Many);
}

#[test]
fn arabic_uses_all_six_categories() {
    assert_eq!(plural_category("ar", "EG", 0).unwrap(), Category::Zero);
    assert_eq!(plural_category("ar", "EG", 1).unwrap(), Category::One);
    assert_eq!(plural_category("ar", "EG", 2).unwrap(), Category::Two);
    assert_eq!(plural_category("ar", "EG", 3).unwrap(), Category::Few);
    assert_eq!(plural_category("ar", "EG", 11).unwrap(), Category::Many);
    assert_eq!(plural_category("ar", "EG", 100).unwrap(), Category::Other);
}

#[test]
fn french_millions_are_many() {
    assert_eq!(plural_category("fr", "FR", 0).unwrap(), Category::One);
    assert_eq!(plural_category("fr", "FR", 2).unwrap(), Category::Other);
    assert_eq!(plural_category("fr", "FR", 1_000_000).unwrap(), Category::Many);
    assert_eq!(plural_category("fr", "FR", 1_000_001).unwrap(), Category::Other);
}

#[test]
fn portuguese_region_override() {
    assert_eq!(rule_list("pt", "BR").unwrap().locale(), Some("pt"));
    assert_eq!(rule_list("pt", "PT").unwrap().locale(), Some("pt_PT"));
    assert_eq!(plural_category("pt", "BR", 0).unwrap(), Category::One);
    assert_eq!(plural_category("pt", "PT", 0).unwrap(), Category::Other);
}

#[test]
fn unknown_locale_is_always_other() {
    let list = rule_list("tlh", "").unwrap();
    assert_eq!(list.locale(), None);
    for n in -5..=5 {
        assert_eq!(list.category(n).unwrap(), Category::Other);
    }
}

#[test]
fn global_cache_reuses_instances() {
    let first = rule_list("uk", "UA").unwrap();
    let second = rule_list("uk", "").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(global_cache().cached_keys().contains(&"uk".to_string()));
}

// =========================================================================
// ICU4X oracle
// =========================================================================

/// Locales whose integer rules are checked against ICU4X's compiled data.
const ORACLE_LOCALES: &[&str] = &[
    "ar", "be", "bs", "cs", "cy", "de", "en", "es", "fr", "ga", "hi", "hr", "it", "ja", "lt",
    "lv", "nl", "pl", "pt", "pt_PT", "ru", "sk", "sl", "sr", "uk", "zh",
];

fn from_icu(category: PluralCategory) -> Category {
    match category {
        PluralCategory::Zero => Category::Zero,
        PluralCategory::One => Category::One,
        PluralCategory::Two => Category::Two,
        PluralCategory::Few => Category::Few,
        PluralCategory::Many => Category::Many,
        PluralCategory::Other => Category::Other,
    }
}

#[test]
fn builtin_rules_agree_with_icu() {
    let table = RuleTable::cldr();
    for key in ORACLE_LOCALES {
        let ours = build_instance(&table, key).unwrap();
        let locale = Locale::try_from_str(&key.replace('_', "-")).unwrap();
        let icu = PluralRules::try_new(locale.into(), PluralRuleType::Cardinal.into()).unwrap();

        for n in (-25i64..=1000).chain([10_000, 100_000, 1_000_000]) {
            assert_eq!(
                ours.category(n).unwrap(),
                from_icu(icu.category_for(n)),
                "locale {key}, n = {n}"
            );
        }
    }
}
