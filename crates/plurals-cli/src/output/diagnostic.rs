//! Miette diagnostic wrapper for plural rule parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use plurals::{Category, ParseError, PluralError};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a rule description.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid '{category}' rule for locale '{locale}': {message}")]
#[diagnostic(code(plurals::syntax))]
pub struct PluralDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    locale: String,

    category: Category,

    message: String,

    #[help]
    help: Option<String>,
}

impl PluralDiagnostic {
    /// Create a diagnostic from a ParseError with its locale and category.
    pub fn from_parse_error(locale: &str, category: Category, err: &ParseError) -> Self {
        let (message, help) = match err {
            ParseError::Syntax { message, .. } => (message.clone(), None),
            ParseError::UnexpectedEnd { .. } => (
                "unexpected end of rule".to_string(),
                Some("a relation needs an operand, '=' or '!=', and a value".to_string()),
            ),
        };
        let description = err.description();

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = err.offset().min(description.len());
        let len = usize::from(offset < description.len());

        PluralDiagnostic {
            src: NamedSource::new(format!("{locale}:{category}"), description.to_string()),
            span: (offset, len).into(),
            locale: locale.to_string(),
            category,
            message,
            help,
        }
    }
}

/// Convert a library error into a report, with source context for parse errors.
pub fn plural_error_report(err: PluralError) -> miette::Report {
    match err {
        PluralError::Parse {
            locale,
            category,
            source,
        } => PluralDiagnostic::from_parse_error(&locale, category, &source).into(),
        other => miette::miette!("{}", other),
    }
}
