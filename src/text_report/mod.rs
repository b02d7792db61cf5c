//! Free-text reports: `{{NAME|WIDTH-ALIGN-UNIT}}` placeholders in a pattern
//! are replaced by values from a key-value data file.
//!
//! A placeholder written as `!!{{NAME}}` is kept literally (without the
//! `!!`). A placeholder with no value in the data is left as written.

use indexmap::IndexMap;
use miette::{Result, miette};
use tracing::warn;

use crate::{
    core::text::{Alignment, format_value},
    pattern::layout::{UnitSyntax, parse_layout},
    source::{
        fields::FIELD_DELIMITER,
        scanner::{Scanner, is_name},
    },
};

pub use inflect::{IdentityInflector, Inflector};

pub mod inflect;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ESCAPE: &str = "!!";

/// A parsed `{{...}}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder<'a> {
    pub name: String,
    pub width: Option<usize>,
    pub alignment: Alignment,
    pub unit: &'a str,
}

/// Fills a text pattern with `fields`.
pub struct TextRenderer<'a, I: Inflector + ?Sized> {
    fields: &'a IndexMap<String, String>,
    default_width: usize,
    inflector: &'a I,
}

impl<'a, I: Inflector + ?Sized> TextRenderer<'a, I> {
    pub fn new(fields: &'a IndexMap<String, String>, default_width: usize, inflector: &'a I) -> Self {
        Self {
            fields,
            default_width,
            inflector,
        }
    }

    /// Substitutes every placeholder. The `#` separators of the pattern are
    /// dropped from the output.
    pub fn render(&self, pattern: &str) -> String {
        pattern
            .split(FIELD_DELIMITER)
            .map(|piece| self.render_piece(piece))
            .collect()
    }

    fn render_piece(&self, piece: &str) -> String {
        let mut output = String::with_capacity(piece.len());
        let mut rest = piece;

        while let Some(open) = rest.find(OPEN) {
            let Some(close) = rest[open + OPEN.len()..].find(CLOSE) else {
                break;
            };
            let end = open + OPEN.len() + close + CLOSE.len();
            let literal = &rest[open..end];
            let prefix = &rest[..open];

            if let Some(prefix) = prefix.strip_suffix(ESCAPE) {
                output.push_str(prefix);
                output.push_str(literal);
            } else {
                output.push_str(prefix);
                output.push_str(&self.substitute(literal));
            }

            rest = &rest[end..];
        }

        output.push_str(rest);
        output
    }

    fn substitute(&self, literal: &str) -> String {
        let inner = &literal[OPEN.len()..literal.len() - CLOSE.len()];
        let placeholder = match parse_placeholder(inner) {
            Ok(placeholder) => placeholder,
            Err(err) => {
                warn!("{err}");
                return literal.to_owned();
            }
        };

        match self.fields.get(&placeholder.name) {
            Some(value) => self.format(value, &placeholder),
            None => {
                warn!("No value for name: {}", placeholder.name);
                literal.to_owned()
            }
        }
    }

    fn format(&self, value: &str, placeholder: &Placeholder<'_>) -> String {
        let mut unit = placeholder.unit.to_owned();
        if !unit.is_empty()
            && !value.is_empty()
            && value.chars().all(|ch| ch.is_ascii_digit())
            && let Ok(count) = value.parse::<i64>()
        {
            unit = self.inflector.inflect(count, &unit);
        }

        let value = if unit.is_empty() {
            value.to_owned()
        } else {
            format!("{value} {unit}")
        };

        format_value(
            &value,
            placeholder.width.unwrap_or(self.default_width),
            placeholder.alignment,
        )
    }
}

/// Parses the inside of `{{...}}`: a name, optionally followed by `|` and a
/// `WIDTH-ALIGN-UNIT` layout.
pub fn parse_placeholder(inner: &str) -> Result<Placeholder<'_>> {
    let mut scanner = Scanner::new(inner);

    let name = scanner.take_while(is_name).trim();
    if name.is_empty() {
        return Err(miette!("Placeholder without a name: {{{{{inner}}}}}"));
    }

    let mut placeholder = Placeholder {
        name: name.to_uppercase(),
        width: None,
        alignment: Alignment::default(),
        unit: "",
    };

    if scanner.is_empty() {
        return Ok(placeholder);
    }
    if !scanner.eat('|') {
        return Err(miette!("Expected \"|\" after {name}"));
    }

    let layout = parse_layout(&mut scanner, UnitSyntax::Phrase)?;
    if !scanner.is_empty() {
        return Err(miette!(
            "Unexpected \"{}\" at position {} in placeholder {name}",
            scanner.rest,
            scanner.position
        ));
    }

    placeholder.width = layout.width;
    placeholder.alignment = layout.alignment.unwrap_or_default();
    placeholder.unit = layout.unit;
    Ok(placeholder)
}
