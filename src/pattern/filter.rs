use std::cmp::Ordering;

use miette::{Result, miette};
use strum::{Display, EnumString};

use crate::{
    core::types::Value,
    source::scanner::{Scanner, is_name, is_word},
};

/// Comparison operators allowed in filter conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum CompareOp {
    #[strum(to_string = "=")]
    Equal,

    #[strum(to_string = "!=")]
    NotEqual,

    #[strum(to_string = ">")]
    GreaterThan,

    #[strum(to_string = "<")]
    LessThan,

    #[strum(to_string = ">=")]
    GreaterThanEqual,

    #[strum(to_string = "<=")]
    LessThanEqual,
}

impl CompareOp {
    /// Applies the operator to the ordering of a cell against a literal.
    ///
    /// Values without an ordering are only ever "not equal".
    pub fn holds(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (CompareOp::NotEqual, ordering) => ordering != Some(Ordering::Equal),
            (_, None) => false,
            (CompareOp::Equal, Some(ord)) => ord.is_eq(),
            (CompareOp::GreaterThan, Some(ord)) => ord.is_gt(),
            (CompareOp::LessThan, Some(ord)) => ord.is_lt(),
            (CompareOp::GreaterThanEqual, Some(ord)) => ord.is_ge(),
            (CompareOp::LessThanEqual, Some(ord)) => ord.is_le(),
        }
    }
}

/// A single `FIELD OP VALUE` condition with its literal already cast to the
/// field's column type.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

/// A condition as written, before its field is checked against the columns.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawCondition<'a> {
    pub field: String,
    pub op: CompareOp,
    pub literal: &'a str,
}

pub(crate) fn parse_condition(definition: &str) -> Result<RawCondition<'_>> {
    let mut scanner = Scanner::new(definition.trim());

    let field = scanner.take_while(is_name).trim();
    if field.is_empty() {
        return Err(miette!("No field name in case: {definition}"));
    }

    let symbol = scanner.take_while(|ch| matches!(ch, '=' | '<' | '>' | '!'));
    let op = symbol
        .parse::<CompareOp>()
        .map_err(|_| miette!("Unknown operation: \"{symbol}\" in case: {definition}"))?;

    scanner.skip_whitespace();
    if !scanner.peek().is_some_and(is_word) {
        return Err(miette!("No value in case: {definition}"));
    }
    let literal = scanner
        .take_while(|ch| is_word(ch) || ch.is_whitespace() || ch == '-' || ch == '.')
        .trim_end();

    if !scanner.is_empty() {
        return Err(miette!(
            "Unexpected \"{}\" at position {} in case: {definition}",
            scanner.rest,
            scanner.position
        ));
    }

    Ok(RawCondition {
        field: field.to_uppercase(),
        op,
        literal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operators() {
        for (text, op) in [
            ("a = 1", CompareOp::Equal),
            ("a != 1", CompareOp::NotEqual),
            ("a>1", CompareOp::GreaterThan),
            ("a <1", CompareOp::LessThan),
            ("a >= 1", CompareOp::GreaterThanEqual),
            ("a<= 1", CompareOp::LessThanEqual),
        ] {
            assert_eq!(parse_condition(text).unwrap().op, op, "{text}");
        }
    }

    #[test]
    fn test_parse_condition_parts() {
        let condition = parse_condition(" стоимость >= 20.5 ").unwrap();

        assert_eq!(condition.field, "СТОИМОСТЬ");
        assert_eq!(condition.op, CompareOp::GreaterThanEqual);
        assert_eq!(condition.literal, "20.5");
    }

    #[test]
    fn test_text_literal_with_spaces() {
        let condition = parse_condition("фио = Никольский А-А").unwrap();
        assert_eq!(condition.literal, "Никольский А-А");
    }

    #[test]
    fn test_rejected_conditions() {
        assert!(parse_condition("a == 1").is_err());
        assert!(parse_condition("a => 1").is_err());
        assert!(parse_condition("a 1").is_err());
        assert!(parse_condition("= 1").is_err());
        assert!(parse_condition("a = ").is_err());
        assert!(parse_condition("a = 'x'").is_err());
    }

    #[test]
    fn test_operator_semantics() {
        assert!(CompareOp::Equal.holds(Some(Ordering::Equal)));
        assert!(CompareOp::GreaterThanEqual.holds(Some(Ordering::Equal)));
        assert!(!CompareOp::LessThan.holds(Some(Ordering::Equal)));
        assert!(CompareOp::NotEqual.holds(None));
        assert!(!CompareOp::Equal.holds(None));
    }
}
