//! Ordered per-locale rule lists and locale key resolution.

use tracing::debug;

use crate::condition::Condition;
use crate::error::PluralError;
use crate::rule::{Category, Rule};
use crate::table::RuleSource;

/// Locale name reported for the fallback list in errors.
const ROOT_LOCALE: &str = "root";

/// The plural rules of one locale, in evaluation order.
///
/// A rule list is immutable once built; [`RuleList::category`] returns the
/// category of the first rule whose condition holds.
///
/// # Example
///
/// ```
/// use plurals::{Category, Condition, Rule, RuleList};
///
/// let rules = RuleList::new(
///     Some("en".to_string()),
///     vec![
///         Rule::parse(Category::One, "i = 1 and v = 0").unwrap(),
///         Rule::new(Category::Other, Condition::NoCondition),
///     ],
/// );
/// assert_eq!(rules.category(1).unwrap(), Category::One);
/// assert_eq!(rules.category(7).unwrap(), Category::Other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleList {
    locale: Option<String>,
    rules: Vec<Rule>,
}

impl RuleList {
    pub fn new(locale: Option<String>, rules: Vec<Rule>) -> Self {
        Self { locale, rules }
    }

    /// The list used for unresolved locales: a single unconditional "other".
    pub fn empty() -> Self {
        Self::new(None, vec![Rule::new(Category::Other, Condition::NoCondition)])
    }

    /// The locale key this list was built for, or `None` for the fallback.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Categories in table order.
    pub fn categories(&self) -> Vec<Category> {
        self.rules.iter().map(Rule::category).collect()
    }

    /// Whether the last rule is unconditional, so every quantity matches.
    pub fn has_fallback(&self) -> bool {
        self.rules
            .last()
            .is_some_and(|rule| *rule.condition() == Condition::NoCondition)
    }

    /// The plural category for a quantity.
    ///
    /// Fails with [`PluralError::NoMatchingRule`] when the list has no
    /// catch-all rule and nothing matched.
    pub fn category(&self, quantity: i64) -> Result<Category, PluralError> {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(quantity))
            .map(Rule::category)
            .ok_or_else(|| PluralError::NoMatchingRule {
                locale: self.locale().unwrap_or(ROOT_LOCALE).to_string(),
                quantity,
            })
    }
}

/// Resolve the table key for a locale.
///
/// Tries `"{language}_{region}"` first and then `"{language}"`. An empty
/// region skips the first probe. Keys are matched exactly.
pub fn resolve_locale_key<S: RuleSource + ?Sized>(
    source: &S,
    language: &str,
    region: &str,
) -> Option<String> {
    if !region.is_empty() {
        let key = format!("{language}_{region}");
        if source.contains(&key) {
            return Some(key);
        }
    }
    source.contains(language).then(|| language.to_string())
}

/// Build the rule list for a resolved locale key.
///
/// Every description is parsed; the first failure aborts the build.
pub fn build_instance<S: RuleSource + ?Sized>(
    source: &S,
    key: &str,
) -> Result<RuleList, PluralError> {
    let entries = source.rules(key).ok_or_else(|| PluralError::UnknownLocale {
        key: key.to_string(),
    })?;

    let rules = entries
        .iter()
        .map(|entry| {
            Rule::parse(entry.category, &entry.rule).map_err(|source| PluralError::Parse {
                locale: key.to_string(),
                category: entry.category,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(locale = key, rules = rules.len(), "built plural rule list");
    Ok(RuleList::new(Some(key.to_string()), rules))
}
