//! Parse error types for plural rule descriptions.

use thiserror::Error;

/// An error that occurred while parsing a rule description.
///
/// Both variants carry the full original description so the offending rule
/// can be located in the source table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error at a byte offset within the description.
    #[error("syntax error in '{description}' at offset {offset}: {message}")]
    Syntax {
        description: String,
        offset: usize,
        message: String,
    },

    /// The description ended in the middle of a relation.
    #[error("unexpected end of rule '{description}'")]
    UnexpectedEnd { description: String, offset: usize },
}

impl ParseError {
    /// The rule description that failed to parse.
    pub fn description(&self) -> &str {
        match self {
            Self::Syntax { description, .. } | Self::UnexpectedEnd { description, .. } => {
                description
            }
        }
    }

    /// Byte offset of the error within the description.
    pub fn offset(&self) -> usize {
        match self {
            Self::Syntax { offset, .. } | Self::UnexpectedEnd { offset, .. } => *offset,
        }
    }
}
