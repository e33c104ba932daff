//! CLDR plural rules for integer quantities.
//!
//! Rule descriptions written in the CLDR plural rule syntax are parsed into
//! [`Condition`] trees, paired with a [`Category`] to form [`Rule`]s, and
//! collected per locale into [`RuleList`]s. A [`RuleListCache`] builds each
//! locale's list at most once, no matter how many threads ask for it.
//!
//! # Example
//!
//! ```
//! use plurals::{Category, plural_category};
//!
//! assert_eq!(plural_category("ru", "RU", 1).unwrap(), Category::One);
//! assert_eq!(plural_category("ru", "RU", 3).unwrap(), Category::Few);
//! assert_eq!(plural_category("ru", "RU", 11).unwrap(), Category::Many);
//!
//! // Unknown locales fall back to a list that only knows "other".
//! assert_eq!(plural_category("xx", "", 1).unwrap(), Category::Other);
//! ```

pub mod cache;
pub mod condition;
mod error;
mod global;
pub mod operand;
pub mod rule;
pub mod rule_list;
pub mod table;

pub use cache::RuleListCache;
pub use condition::{Condition, ParseError, Relation};
pub use error::{LoadError, PluralError};
pub use global::{global_cache, plural_category, rule_list};
pub use operand::Operand;
pub use rule::{Category, Rule};
pub use rule_list::{RuleList, build_instance, resolve_locale_key};
pub use table::{RuleEntry, RuleSource, RuleTable};
