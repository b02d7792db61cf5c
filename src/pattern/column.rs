use miette::{Result, miette};

use super::layout::{UnitSyntax, parse_layout};
use crate::{
    core::types::DataType,
    source::scanner::{Scanner, is_name, is_word},
    table::ColumnDef,
};

/// Parses one `NAME|TYPE-WIDTH-ALIGN-UNIT` column definition.
///
/// Width, alignment and unit are optional and default to `default_width`,
/// centered and no unit.
pub(crate) fn parse_column(definition: &str, default_width: usize) -> Result<ColumnDef> {
    let mut scanner = Scanner::new(definition.trim());

    let name = scanner.take_while(is_name).trim();
    if name.is_empty() || !scanner.eat('|') {
        return Err(miette!("Not valid column: \"{definition}\". Check it for correctness"));
    }

    scanner.skip_whitespace();
    let type_name = scanner.take_while(is_word);
    let data_type = type_name
        .parse::<DataType>()
        .map_err(|_| miette!("Unknown column type \"{type_name}\" in column \"{name}\""))?;

    let layout = parse_layout(&mut scanner, UnitSyntax::Word)?;
    if !scanner.is_empty() {
        return Err(miette!(
            "Unexpected \"{}\" at position {} in column \"{name}\"",
            scanner.rest,
            scanner.position
        ));
    }

    let column = ColumnDef::new(
        &name.to_uppercase(),
        data_type,
        layout.width.unwrap_or(default_width),
    )
    .with_alignment(layout.alignment.unwrap_or_default())
    .with_unit(layout.unit);

    Ok(column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::text::Alignment;

    #[test]
    fn test_defaults() {
        let column = parse_column("фио|str", 20).unwrap();

        assert_eq!(column.name, "ФИО");
        assert_eq!(column.data_type, DataType::Text);
        assert_eq!(column.width, 20);
        assert_eq!(column.alignment, Alignment::Center);
        assert_eq!(column.unit, "");
    }

    #[test]
    fn test_full_definition() {
        let column = parse_column(" Стоимость|float-10-r-руб ", 20).unwrap();

        assert_eq!(column.name, "СТОИМОСТЬ");
        assert_eq!(column.data_type, DataType::Float64);
        assert_eq!(column.width, 10);
        assert_eq!(column.alignment, Alignment::Right);
        assert_eq!(column.unit, "руб");
    }

    #[test]
    fn test_names_may_contain_spaces_and_commas() {
        let column = parse_column("номер счета, основной|int-12", 20).unwrap();
        assert_eq!(column.name, "НОМЕР СЧЕТА, ОСНОВНОЙ");
        assert_eq!(column.width, 12);
    }

    #[test]
    fn test_rejected_definitions() {
        assert!(parse_column("ПОЛ", 20).is_err());
        assert!(parse_column("|str", 20).is_err());
        assert!(parse_column("ПОЛ|text", 20).is_err());
        assert!(parse_column("ПОЛ|int20", 20).is_err());
        assert!(parse_column("ПОЛ|str-10-l-руб!", 20).is_err());
    }
}
