use miette::{Result, miette};

use crate::{
    core::text::Alignment,
    source::scanner::{Scanner, is_name, is_word},
};

/// The optional `WIDTH-ALIGN-UNIT` tail shared by column definitions and
/// text placeholders. Every part may be omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Layout<'a> {
    pub width: Option<usize>,
    pub alignment: Option<Alignment>,
    pub unit: &'a str,
}

/// Which characters a unit may contain after its first word character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitSyntax {
    /// A single word (`руб`).
    Word,
    /// Words separated by spaces, hyphens or commas (`руб в месяц`).
    Phrase,
}

pub(crate) fn parse_layout<'a>(scanner: &mut Scanner<'a>, unit_syntax: UnitSyntax) -> Result<Layout<'a>> {
    let mut layout = Layout::default();

    skip_separator(scanner);
    let digits = scanner.take_while(|ch| ch.is_ascii_digit());
    if !digits.is_empty() {
        let width = digits
            .parse::<usize>()
            .map_err(|_| miette!("Width {digits} is too large"))?;
        if width == 0 {
            return Err(miette!("Width must be positive"));
        }
        layout.width = Some(width);
    }

    skip_separator(scanner);
    // A lone r/c/l is an alignment; followed by more letters it starts the unit.
    if let Some(ch) = scanner.peek()
        && !scanner.peek_second().is_some_and(is_word)
        && let Ok(alignment) = ch.to_string().parse::<Alignment>()
    {
        scanner.eat(ch);
        layout.alignment = Some(alignment);
    }

    skip_separator(scanner);
    if scanner.peek().is_some_and(is_word) {
        layout.unit = match unit_syntax {
            UnitSyntax::Word => scanner.take_while(is_word),
            UnitSyntax::Phrase => scanner.take_while(is_name).trim_end(),
        };
    }

    scanner.skip_whitespace();
    Ok(layout)
}

fn skip_separator(scanner: &mut Scanner<'_>) {
    scanner.skip_whitespace();
    scanner.eat('-');
    scanner.skip_whitespace();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(input: &str, unit_syntax: UnitSyntax) -> (Layout<'_>, &str) {
        let mut scanner = Scanner::new(input);
        let layout = parse_layout(&mut scanner, unit_syntax).unwrap();
        (layout, scanner.rest)
    }

    #[test]
    fn test_full_layout() {
        let (parsed, rest) = layout("-10-r-руб", UnitSyntax::Word);
        assert_eq!(parsed.width, Some(10));
        assert_eq!(parsed.alignment, Some(Alignment::Right));
        assert_eq!(parsed.unit, "руб");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_parts_may_be_omitted() {
        let (parsed, _) = layout("", UnitSyntax::Word);
        assert_eq!(parsed, Layout::default());

        let (parsed, _) = layout("-l", UnitSyntax::Word);
        assert_eq!(parsed.alignment, Some(Alignment::Left));
        assert_eq!(parsed.width, None);

        let (parsed, _) = layout("-20-руб", UnitSyntax::Word);
        assert_eq!(parsed.alignment, None);
        assert_eq!(parsed.unit, "руб");
    }

    #[test]
    fn test_letter_starting_a_word_is_unit() {
        let (parsed, _) = layout("-left", UnitSyntax::Word);
        assert_eq!(parsed.alignment, None);
        assert_eq!(parsed.unit, "left");
    }

    #[test]
    fn test_phrase_unit() {
        let (parsed, rest) = layout("25 - l - UuU lights ", UnitSyntax::Phrase);
        assert_eq!(parsed.width, Some(25));
        assert_eq!(parsed.alignment, Some(Alignment::Left));
        assert_eq!(parsed.unit, "UuU lights");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_word_unit_leaves_rest() {
        let (parsed, rest) = layout("-руб в месяц", UnitSyntax::Word);
        assert_eq!(parsed.unit, "руб");
        assert_eq!(rest, "в месяц");
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let mut scanner = Scanner::new("-0-c");
        assert!(parse_layout(&mut scanner, UnitSyntax::Word).is_err());
    }
}
