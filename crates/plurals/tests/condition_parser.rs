//! Integration tests for parsing plural rule descriptions.

use std::num::NonZeroU64;
use std::ops::RangeInclusive;

use plurals::{Condition, Operand, ParseError, Relation};

fn relation(
    operand: Operand,
    divisor: Option<u64>,
    negated: bool,
    ranges: Vec<RangeInclusive<u64>>,
) -> Condition {
    Condition::Relation(Relation {
        operand,
        divisor: divisor.and_then(NonZeroU64::new),
        negated,
        ranges,
    })
}

// =============================================================================
// Empty descriptions
// =============================================================================

#[test]
fn empty_description_is_no_condition() {
    assert_eq!(Condition::parse("").unwrap(), Condition::NoCondition);
}

#[test]
fn whitespace_description_is_no_condition() {
    assert_eq!(Condition::parse("  \t\n ").unwrap(), Condition::NoCondition);
}

#[test]
fn samples_only_description_is_no_condition() {
    let parsed = Condition::parse(" @integer 0, 2~16, 100, 1000, … @decimal 0.0~1.5").unwrap();
    assert_eq!(parsed, Condition::NoCondition);
}

// =============================================================================
// Relations
// =============================================================================

#[test]
fn single_value_relation() {
    let parsed = Condition::parse("i = 1").unwrap();
    assert_eq!(parsed, relation(Operand::I, None, false, vec![1..=1]));
}

#[test]
fn relation_with_divisor_and_negation() {
    let parsed = Condition::parse("n % 100 != 12..14").unwrap();
    assert_eq!(parsed, relation(Operand::N, Some(100), true, vec![12..=14]));
}

#[test]
fn relation_without_whitespace() {
    let parsed = Condition::parse("n%10=2..4").unwrap();
    assert_eq!(parsed, relation(Operand::N, Some(10), false, vec![2..=4]));
}

#[test]
fn range_list_mixes_values_and_ranges() {
    let parsed = Condition::parse("n = 1, 3,5..7").unwrap();
    assert_eq!(
        parsed,
        relation(Operand::N, None, false, vec![1..=1, 3..=3, 5..=7])
    );
}

#[test]
fn every_operand_letter_parses() {
    let cases = [
        ('n', Operand::N),
        ('i', Operand::I),
        ('v', Operand::V),
        ('w', Operand::W),
        ('f', Operand::F),
        ('t', Operand::T),
        ('c', Operand::C),
        ('e', Operand::C),
    ];
    for (letter, operand) in cases {
        let parsed = Condition::parse(&format!("{letter} = 0")).unwrap();
        assert_eq!(parsed, relation(operand, None, false, vec![0..=0]), "{letter}");
    }
}

#[test]
fn trailing_samples_are_ignored() {
    let with_samples = Condition::parse("i = 1 and v = 0 @integer 1").unwrap();
    let without = Condition::parse("i = 1 and v = 0").unwrap();
    assert_eq!(with_samples, without);
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn and_binds_tighter_than_or() {
    let parsed = Condition::parse("n = 1 and n = 1 or n = 2").unwrap();
    let one = || relation(Operand::N, None, false, vec![1..=1]);
    let expected = Condition::or(
        Condition::and(one(), one()),
        relation(Operand::N, None, false, vec![2..=2]),
    );
    assert_eq!(parsed, expected);
}

#[test]
fn chains_fold_left_to_right() {
    let parsed = Condition::parse("n = 1 or n = 2 or n = 3").unwrap();
    let value = |v| relation(Operand::N, None, false, vec![v..=v]);
    let expected = Condition::or(Condition::or(value(1), value(2)), value(3));
    assert_eq!(parsed, expected);
}

#[test]
fn keywords_are_not_substrings() {
    // "or" inside a longer token is not a keyword.
    assert!(Condition::parse("n = 1 orn = 2").is_err());
    assert!(Condition::parse("n = 1and n = 2").is_err());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_comparator_reports_description() {
    let err = Condition::parse("n ?? 1").unwrap_err();
    assert_eq!(err.description(), "n ?? 1");
    match &err {
        ParseError::Syntax { message, .. } => assert!(message.contains("comparator")),
        ParseError::UnexpectedEnd { .. } => panic!("expected syntax error, got {err:?}"),
    }
    assert!(err.to_string().contains("n ?? 1"));
}

#[test]
fn unknown_operand_is_error() {
    let err = Condition::parse("x = 1").unwrap_err();
    assert_eq!(err.description(), "x = 1");
    assert_eq!(err.offset(), 0);
}

#[test]
fn missing_comparator_is_error() {
    assert!(Condition::parse("n 1").is_err());
}

#[test]
fn non_digit_value_is_error() {
    assert!(Condition::parse("n = one").is_err());
}

#[test]
fn missing_range_list_is_unexpected_end() {
    let err = Condition::parse("n =").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }), "{err:?}");
}

#[test]
fn unterminated_range_is_unexpected_end() {
    let err = Condition::parse("n = 1..").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }), "{err:?}");
}

#[test]
fn reversed_range_is_error() {
    let err = Condition::parse("n = 5..3").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }), "{err:?}");
}

#[test]
fn zero_divisor_is_error() {
    assert!(Condition::parse("n % 0 = 1").is_err());
}

#[test]
fn overflowing_value_is_error() {
    assert!(Condition::parse("n = 99999999999999999999999").is_err());
}

#[test]
fn dangling_keyword_is_error() {
    assert!(Condition::parse("n = 1 or").is_err());
    assert!(Condition::parse("n = 1 and").is_err());
    assert!(Condition::parse("or n = 1").is_err());
}

#[test]
fn empty_relation_between_keywords_is_error() {
    let err = Condition::parse("n = 1 and or n = 2").unwrap_err();
    assert_eq!(err.offset(), 10);
}

#[test]
fn trailing_comma_is_error() {
    assert!(Condition::parse("n = 1,").is_err());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_normalizes_spacing() {
    let parsed = Condition::parse("n%10=2..4   and n % 100!=12..14").unwrap();
    insta::assert_snapshot!(parsed.to_string(), @"n % 10 = 2..4 and n % 100 != 12..14");
}

#[test]
fn display_writes_range_lists() {
    let parsed = Condition::parse("n = 1, 3, 5..7 or i != 0..0").unwrap();
    insta::assert_snapshot!(parsed.to_string(), @"n = 1,3,5..7 or i != 0");
}

#[test]
fn display_uses_canonical_exponent_operand() {
    let parsed = Condition::parse("e = 0 and i % 1000000 = 0 or e != 0..5").unwrap();
    insta::assert_snapshot!(parsed.to_string(), @"c = 0 and i % 1000000 = 0 or c != 0..5");
}

#[test]
fn display_of_no_condition_is_empty() {
    assert_eq!(Condition::NoCondition.to_string(), "");
}

#[test]
fn display_output_parses_to_same_tree() {
    let source = "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14";
    let parsed = Condition::parse(source).unwrap();
    assert_eq!(parsed.to_string(), source);
    assert_eq!(Condition::parse(&parsed.to_string()).unwrap(), parsed);
}
