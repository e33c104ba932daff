//! Plural operands.
//!
//! CLDR defines each operand as a numeric facet of the source number:
//!
//! | Operand | Meaning                                         |
//! |---------|-------------------------------------------------|
//! | `n`     | absolute value                                  |
//! | `i`     | integer digits                                  |
//! | `v`     | number of visible fraction digits, with zeros   |
//! | `w`     | number of visible fraction digits, without zeros|
//! | `f`     | visible fraction digits, with zeros             |
//! | `t`     | visible fraction digits, without zeros          |
//! | `c`/`e` | compact decimal exponent                        |
//!
//! Only integer quantities are supported, so `n` and `i` both evaluate to the
//! absolute value and every other operand evaluates to zero.

use std::fmt;

/// A CLDR plural operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    N,
    I,
    V,
    W,
    F,
    T,
    C,
}

impl Operand {
    /// Look up an operand by its rule-syntax letter.
    ///
    /// `e` is accepted as the CLDR synonym for `c`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Self::N),
            'i' => Some(Self::I),
            'v' => Some(Self::V),
            'w' => Some(Self::W),
            'f' => Some(Self::F),
            't' => Some(Self::T),
            'c' | 'e' => Some(Self::C),
            _ => None,
        }
    }

    /// The letter used for this operand in rule descriptions.
    pub fn as_char(self) -> char {
        match self {
            Self::N => 'n',
            Self::I => 'i',
            Self::V => 'v',
            Self::W => 'w',
            Self::F => 'f',
            Self::T => 't',
            Self::C => 'c',
        }
    }

    /// Value of this operand for an integer quantity.
    ///
    /// Fraction and exponent operands are always zero: decimal quantities are
    /// not supported.
    pub fn value(self, quantity: i64) -> u64 {
        match self {
            Self::N | Self::I => quantity.unsigned_abs(),
            Self::V | Self::W | Self::F | Self::T | Self::C => 0,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
