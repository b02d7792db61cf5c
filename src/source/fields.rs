use indexmap::IndexMap;
use miette::{Result, miette};
use tracing::warn;

use super::scanner::{Scanner, is_name};

/// Marker separating field definitions (and table rows) in input files.
pub const FIELD_DELIMITER: char = '#';

/// How a field block spells `name` / `value` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSyntax {
    /// `name = value`, as in key-value data files. Values are limited to
    /// word, space, hyphen and comma characters.
    Assignment,

    /// `name: value`, as in pattern files. The value is everything after the
    /// colon.
    Definition,
}

impl FieldSyntax {
    pub fn separator(self) -> char {
        match self {
            FieldSyntax::Assignment => '=',
            FieldSyntax::Definition => ':',
        }
    }
}

/// Parses a `#`-delimited field block into uppercased names and trimmed values.
///
/// Segments that do not match the syntax are logged and skipped; a repeated
/// name keeps its last value.
pub fn extract_fields(text: &str, syntax: FieldSyntax) -> IndexMap<String, String> {
    let mut fields = IndexMap::new();

    for segment in text.split(FIELD_DELIMITER) {
        if segment.trim().is_empty() {
            continue;
        }

        match parse_field(segment, syntax) {
            Ok((name, value)) => {
                fields.insert(name, value);
            }
            Err(err) => warn!("{err}. Can't extract data"),
        }
    }

    fields
}

fn parse_field(segment: &str, syntax: FieldSyntax) -> Result<(String, String)> {
    let mut scanner = Scanner::new(segment);
    let separator = syntax.separator();

    let name = scanner.take_while(is_name).trim();
    if name.is_empty() || !scanner.eat(separator) {
        return Err(miette!(
            "Line is not in right condition: \"{}\"",
            segment.trim()
        ));
    }

    let value = match syntax {
        FieldSyntax::Assignment => {
            scanner.skip_whitespace();
            let value = scanner.take_while(is_name).trim();
            if value.is_empty() {
                return Err(miette!("No value for field \"{}\"", name));
            }
            value
        }
        FieldSyntax::Definition => scanner.take_rest().trim(),
    };

    Ok((name.to_uppercase(), value.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_fields() {
        let fields = extract_fields("name = alex#\nсумма=11#", FieldSyntax::Assignment);

        assert_eq!(fields.get("NAME").map(String::as_str), Some("alex"));
        assert_eq!(fields.get("СУММА").map(String::as_str), Some("11"));
    }

    #[test]
    fn test_assignment_value_keeps_line_breaks() {
        let fields = extract_fields("address=home,\nsweet home\n#", FieldSyntax::Assignment);
        assert_eq!(
            fields.get("ADDRESS").map(String::as_str),
            Some("home,\nsweet home")
        );
    }

    #[test]
    fn test_assignment_value_stops_at_foreign_characters() {
        let fields = extract_fields("price = 12.50", FieldSyntax::Assignment);
        assert_eq!(fields.get("PRICE").map(String::as_str), Some("12"));
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let fields = extract_fields("just text#=value#a=#b=2", FieldSyntax::Assignment);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("B").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let fields = extract_fields("a=1#A=2", FieldSyntax::Assignment);
        assert_eq!(fields.get("A").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_definition_fields() {
        let text = "table name: Годовой отчет\n#\
                    table columns: ПОЛ|str; СТОИМОСТЬ|float-10-r\n#\
                    filter: СТОИМОСТЬ != 20.5\n";
        let fields = extract_fields(text, FieldSyntax::Definition);

        assert_eq!(
            fields.get("TABLE NAME").map(String::as_str),
            Some("Годовой отчет")
        );
        assert_eq!(
            fields.get("TABLE COLUMNS").map(String::as_str),
            Some("ПОЛ|str; СТОИМОСТЬ|float-10-r")
        );
        assert_eq!(
            fields.get("FILTER").map(String::as_str),
            Some("СТОИМОСТЬ != 20.5")
        );
    }
}
