//! Rule description parser using winnow.
//!
//! `and` and `or` are whitespace-delimited keywords. Relations are folded
//! left to right into `And` chains and the resulting groups into `Or` chains,
//! so `and` binds tighter than `or`.

use std::num::NonZeroU64;
use std::ops::RangeInclusive;

use winnow::ascii::{digit1, multispace0, multispace1};
use winnow::combinator::{alt, cut_err, opt, preceded, repeat, terminated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::any;

use super::error::ParseError;
use super::{Condition, Relation};
use crate::operand::Operand;

/// Parse a rule description into a condition.
pub(super) fn parse_condition(description: &str) -> Result<Condition, ParseError> {
    // Everything from the first '@' on is sample data.
    let without_samples = description
        .find('@')
        .map_or(description, |at| &description[..at]);
    let body = without_samples.trim();
    if body.is_empty() {
        return Ok(Condition::NoCondition);
    }
    let leading = without_samples.len() - without_samples.trim_start().len();

    let mut remaining = body;
    let result = condition(&mut remaining);
    let offset = leading + body.len() - remaining.len();
    match result {
        Ok(parsed) if remaining.is_empty() => Ok(parsed),
        Ok(_) => Err(ParseError::Syntax {
            description: description.to_string(),
            offset,
            message: format!("unexpected input '{}'", remaining.trim_start()),
        }),
        Err(_) if remaining.is_empty() => Err(ParseError::UnexpectedEnd {
            description: description.to_string(),
            offset,
        }),
        Err(error) => Err(ParseError::Syntax {
            description: description.to_string(),
            offset,
            message: error_message(error, remaining),
        }),
    }
}

/// Render a winnow error, falling back to the offending character.
fn error_message(error: ErrMode<ContextError>, remaining: &str) -> String {
    let message = match error {
        ErrMode::Backtrack(context) | ErrMode::Cut(context) => context.to_string(),
        ErrMode::Incomplete(_) => String::new(),
    };
    if message.is_empty() {
        format!(
            "unexpected character '{}'",
            remaining.chars().next().unwrap_or('?')
        )
    } else {
        message.replace('\n', "; ")
    }
}

/// condition = and_condition ( 'or' and_condition )*
fn condition(input: &mut &str) -> ModalResult<Condition> {
    let first = and_condition(input)?;
    let rest: Vec<Condition> =
        repeat(0.., preceded(or_keyword, cut_err(and_condition))).parse_next(input)?;
    Ok(rest.into_iter().fold(first, Condition::or))
}

/// and_condition = relation ( 'and' relation )*
fn and_condition(input: &mut &str) -> ModalResult<Condition> {
    let first = relation(input)?;
    let rest: Vec<Condition> =
        repeat(0.., preceded(and_keyword, cut_err(relation))).parse_next(input)?;
    Ok(rest.into_iter().fold(first, Condition::and))
}

/// `or` surrounded by mandatory whitespace.
fn or_keyword(input: &mut &str) -> ModalResult<()> {
    (multispace1, "or", multispace1).void().parse_next(input)
}

/// `and` surrounded by mandatory whitespace.
fn and_keyword(input: &mut &str) -> ModalResult<()> {
    (multispace1, "and", multispace1).void().parse_next(input)
}

/// relation = operand ( '%' value )? ( '=' | '!=' ) range_list
fn relation(input: &mut &str) -> ModalResult<Condition> {
    let operand = terminated(operand, multispace0).parse_next(input)?;
    let divisor = opt(terminated(divisor, multispace0)).parse_next(input)?;
    let negated = terminated(comparator, multispace0).parse_next(input)?;
    let ranges = range_list(input)?;
    Ok(Condition::Relation(Relation {
        operand,
        divisor,
        negated,
        ranges,
    }))
}

/// range_list = (range | value) ( ',' range_list )*
fn range_list(input: &mut &str) -> ModalResult<Vec<RangeInclusive<u64>>> {
    let first = range(input)?;
    let rest: Vec<RangeInclusive<u64>> =
        repeat(0.., preceded((multispace0, ',', multispace0), cut_err(range))).parse_next(input)?;
    let mut ranges = Vec::with_capacity(rest.len() + 1);
    ranges.push(first);
    ranges.extend(rest);
    Ok(ranges)
}

fn operand(input: &mut &str) -> ModalResult<Operand> {
    any.verify_map(Operand::from_char)
        .context(StrContext::Label("operand"))
        .context(StrContext::Expected(StrContextValue::Description(
            "one of n, i, v, w, f, t, c, e",
        )))
        .parse_next(input)
}

/// '%' followed by a positive integer.
fn divisor(input: &mut &str) -> ModalResult<NonZeroU64> {
    preceded(
        ('%', multispace0),
        cut_err(
            digit1
                .try_map(str::parse::<NonZeroU64>)
                .context(StrContext::Label("divisor"))
                .context(StrContext::Expected(StrContextValue::Description(
                    "a positive integer",
                ))),
        ),
    )
    .parse_next(input)
}

/// Returns `true` for `!=`.
fn comparator(input: &mut &str) -> ModalResult<bool> {
    alt(("!=".value(true), "=".value(false)))
        .context(StrContext::Label("comparator"))
        .context(StrContext::Expected(StrContextValue::StringLiteral("=")))
        .context(StrContext::Expected(StrContextValue::StringLiteral("!=")))
        .parse_next(input)
}

/// range = value '..' value | value
fn range(input: &mut &str) -> ModalResult<RangeInclusive<u64>> {
    (
        value,
        opt(preceded((multispace0, "..", multispace0), cut_err(value))),
    )
        .map(|(start, end)| start..=end.unwrap_or(start))
        .verify(|range: &RangeInclusive<u64>| range.start() <= range.end())
        .context(StrContext::Label("range"))
        .parse_next(input)
}

fn value(input: &mut &str) -> ModalResult<u64> {
    digit1
        .try_map(str::parse::<u64>)
        .context(StrContext::Label("value"))
        .context(StrContext::Expected(StrContextValue::Description("digits")))
        .parse_next(input)
}
