//! Plural categories and the rules that select them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, ParseError};
use crate::error::PluralError;

/// A CLDR plural category.
///
/// English uses "one" and "other", Russian adds "few" and "many", and Arabic
/// uses all six.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl Category {
    /// Every category, in CLDR order.
    pub const ALL: [Category; 6] = [
        Category::Zero,
        Category::One,
        Category::Two,
        Category::Few,
        Category::Many,
        Category::Other,
    ];

    /// The lowercase CLDR name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl FromStr for Category {
    type Err = PluralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| PluralError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plural category guarded by a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    category: Category,
    condition: Condition,
}

impl Rule {
    pub fn new(category: Category, condition: Condition) -> Self {
        Self {
            category,
            condition,
        }
    }

    /// Parse a rule description for a category.
    pub fn parse(category: Category, description: &str) -> Result<Self, ParseError> {
        Ok(Self::new(category, Condition::parse(description)?))
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Whether this rule selects its category for the quantity.
    pub fn applies_to(&self, quantity: i64) -> bool {
        self.condition.is_fulfilled(quantity)
    }
}
