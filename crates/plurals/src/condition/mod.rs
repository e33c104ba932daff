//! Plural conditions: the boolean expression half of a plural rule.
//!
//! A condition is a disjunction of conjunctions of relations, written in the
//! CLDR rule syntax:
//!
//! ```text
//! condition     = and_condition ( 'or' and_condition )*
//! and_condition = relation ( 'and' relation )*
//! relation      = operand ( '%' value )? ( '=' | '!=' ) range_list
//! range_list    = (range | value) ( ',' range_list )*
//! range         = value '..' value
//! ```
//!
//! The empty description is [`Condition::NoCondition`], which always holds.

mod error;
mod parser;

use std::fmt;
use std::num::NonZeroU64;
use std::ops::RangeInclusive;

use crate::operand::Operand;

pub use error::ParseError;

/// A parsed plural condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Both sides must hold.
    And(Box<Condition>, Box<Condition>),
    /// Either side must hold.
    Or(Box<Condition>, Box<Condition>),
    /// A single comparison.
    Relation(Relation),
    /// The empty condition, true for every quantity.
    NoCondition,
}

/// A single comparison: `operand [% divisor] (= | !=) range_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub operand: Operand,
    pub divisor: Option<NonZeroU64>,
    /// `true` for `!=`.
    pub negated: bool,
    /// Inclusive ranges; a bare value `v` is stored as `v..=v`. Never empty.
    pub ranges: Vec<RangeInclusive<u64>>,
}

impl Condition {
    /// Parse a CLDR rule description.
    ///
    /// Sample annotations (`@integer ...`, `@decimal ...`) are ignored. An
    /// empty or all-whitespace description yields [`Condition::NoCondition`].
    ///
    /// # Example
    ///
    /// ```
    /// use plurals::Condition;
    ///
    /// let few = Condition::parse("n % 10 = 2..4 and n % 100 != 12..14").unwrap();
    /// assert!(few.is_fulfilled(22));
    /// assert!(!few.is_fulfilled(12));
    /// ```
    pub fn parse(description: &str) -> Result<Self, ParseError> {
        parser::parse_condition(description)
    }

    /// Combine two conditions with `and`.
    pub fn and(left: Condition, right: Condition) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Combine two conditions with `or`.
    pub fn or(left: Condition, right: Condition) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Whether the condition holds for an integer quantity.
    pub fn is_fulfilled(&self, quantity: i64) -> bool {
        match self {
            Self::And(left, right) => left.is_fulfilled(quantity) && right.is_fulfilled(quantity),
            Self::Or(left, right) => left.is_fulfilled(quantity) || right.is_fulfilled(quantity),
            Self::Relation(relation) => relation.is_fulfilled(quantity),
            Self::NoCondition => true,
        }
    }
}

impl Relation {
    /// Whether the relation holds for an integer quantity.
    pub fn is_fulfilled(&self, quantity: i64) -> bool {
        let mut value = self.operand.value(quantity);
        if let Some(divisor) = self.divisor {
            value %= divisor.get();
        }
        let contained = self.ranges.iter().any(|range| range.contains(&value));
        contained != self.negated
    }
}

impl fmt::Display for Condition {
    /// Writes the canonical rule syntax.
    ///
    /// The grammar has no parentheses, so only trees in sum-of-products shape
    /// (which is everything [`Condition::parse`] produces) read back
    /// unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(left, right) => write!(f, "{left} and {right}"),
            Self::Or(left, right) => write!(f, "{left} or {right}"),
            Self::Relation(relation) => write!(f, "{relation}"),
            Self::NoCondition => Ok(()),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operand)?;
        if let Some(divisor) = self.divisor {
            write!(f, " % {divisor}")?;
        }
        f.write_str(if self.negated { " != " } else { " = " })?;
        for (index, range) in self.ranges.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}..{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}
