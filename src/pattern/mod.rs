//! Table patterns: the title, column definitions, group-by clause and filter
//! conditions of a table report.
//!
//! A pattern is a `#`-delimited block of `name: value` fields:
//!
//! ```text
//! table name: Годовой отчет#
//! table columns: ПОЛ|str; СТОИМОСТЬ|float-10-r-руб#
//! group: fields|ПОЛ; data|avg; СТОИМОСТЬ#
//! filter: СТОИМОСТЬ > 20
//! ```
//!
//! Every definition is validated on its own. One that does not parse, or
//! that names an undeclared column, is logged and left out; the rest of the
//! pattern still applies.

use std::path::Path;

use tracing::{debug, error, warn};

use crate::{
    ReportConfig, ReportError,
    source::{
        fields::{FieldSyntax, extract_fields},
        read_text,
    },
    table::Schema,
};

pub use filter::{CompareOp, FilterCondition};
pub use group::{Aggregate, GroupSpec};

pub(crate) mod column;
pub(crate) mod filter;
pub(crate) mod group;
pub(crate) mod layout;

pub const TABLE_NAME: &str = "TABLE NAME";
pub const TABLE_COLUMNS: &str = "TABLE COLUMNS";
pub const GROUP: &str = "GROUP";
pub const FILTER: &str = "FILTER";

const DEFINITION_DELIMITER: char = ';';

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePattern {
    pub title: Option<String>,
    pub schema: Schema,
    pub group_by: Option<GroupSpec>,
    pub filters: Vec<FilterCondition>,
}

impl TablePattern {
    /// Reads and parses a pattern file.
    pub fn load(path: impl AsRef<Path>, config: &ReportConfig) -> Result<Self, ReportError> {
        let text = read_text(path, config.pattern_encoding)?;
        Ok(Self::parse(&text, config))
    }

    /// Parses pattern text. Malformed definitions are logged and skipped.
    pub fn parse(text: &str, config: &ReportConfig) -> Self {
        let fields = extract_fields(text, FieldSyntax::Definition);

        let title = fields.get(TABLE_NAME).map(|title| title.trim().to_owned());
        let schema = match fields.get(TABLE_COLUMNS) {
            Some(columns) => parse_columns(columns, config.default_width),
            None => {
                error!("No columns entered in pattern!");
                Schema::default()
            }
        };
        let group_by = fields
            .get(GROUP)
            .and_then(|group| parse_group_spec(group, &schema));
        let filters = fields
            .get(FILTER)
            .map(|filter| parse_filters(filter, &schema))
            .unwrap_or_default();

        debug!(
            columns = schema.columns.len(),
            grouped = group_by.is_some(),
            filters = filters.len(),
            "parsed table pattern"
        );

        Self {
            title,
            schema,
            group_by,
            filters,
        }
    }
}

fn parse_columns(definitions: &str, default_width: usize) -> Schema {
    let columns = definitions
        .split(DEFINITION_DELIMITER)
        .filter(|definition| !definition.trim().is_empty())
        .filter_map(|definition| match column::parse_column(definition, default_width) {
            Ok(column) => Some(column),
            Err(err) => {
                warn!("{err}");
                None
            }
        })
        .collect();

    Schema::new(columns)
}

fn parse_group_spec(definition: &str, schema: &Schema) -> Option<GroupSpec> {
    let group = match group::parse_group(definition) {
        Ok(group) => group,
        Err(err) => {
            warn!("{err}");
            return None;
        }
    };

    if let Some(field) = group
        .fields
        .iter()
        .chain(std::iter::once(&group.target))
        .find(|field| !schema.contains(field))
    {
        warn!("Unknown table field: {field}");
        return None;
    }

    if let Some(column) = schema.get_column(&group.target)
        && !column.data_type.is_numeric()
    {
        warn!(
            "Can't {} column {} of type {}",
            group.aggregate, column.name, column.data_type
        );
        return None;
    }

    Some(group)
}

fn parse_filters(definitions: &str, schema: &Schema) -> Vec<FilterCondition> {
    let mut filters = Vec::new();

    for definition in definitions
        .split(DEFINITION_DELIMITER)
        .filter(|definition| !definition.trim().is_empty())
    {
        let condition = match filter::parse_condition(definition) {
            Ok(condition) => condition,
            Err(err) => {
                warn!("{err}");
                continue;
            }
        };

        let Some(column) = schema.get_column(&condition.field) else {
            warn!(
                "Unknown table field: {} in case: {}",
                condition.field,
                definition.trim()
            );
            continue;
        };

        match column.data_type.cast(condition.literal) {
            Ok(value) => filters.push(FilterCondition {
                field: condition.field,
                op: condition.op,
                value,
            }),
            Err(err) => warn!("{err} in case: {}", definition.trim()),
        }
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        text::Alignment,
        types::{DataType, Value},
    };

    const PATTERN: &str = "table name: Годовой отчет\n#\n\
        table columns: ФИО|str; ТАРИФ|str-25-l; СЧЕТ|int-10-r; ПОЛ|str; СТОИМОСТЬ|float\n#\n\
        group: fields|ПОЛ; data|avg; СТОИМОСТЬ\n#\n\
        filter: СТОИМОСТЬ > 20\n";

    fn parse(text: &str) -> TablePattern {
        TablePattern::parse(text, &ReportConfig::default())
    }

    #[test]
    fn test_parse_full_pattern() {
        let pattern = parse(PATTERN);

        assert_eq!(pattern.title.as_deref(), Some("Годовой отчет"));
        assert_eq!(
            pattern.schema.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["ФИО", "ТАРИФ", "СЧЕТ", "ПОЛ", "СТОИМОСТЬ"]
        );

        let tariff = pattern.schema.get_column("ТАРИФ").unwrap();
        assert_eq!(tariff.width, 25);
        assert_eq!(tariff.alignment, Alignment::Left);

        assert_eq!(
            pattern.group_by,
            Some(GroupSpec {
                fields: vec!["ПОЛ".to_string()],
                aggregate: Aggregate::Average,
                target: "СТОИМОСТЬ".to_string(),
            })
        );
        assert_eq!(
            pattern.filters,
            vec![FilterCondition {
                field: "СТОИМОСТЬ".to_string(),
                op: CompareOp::GreaterThan,
                value: Value::Float64(20.0),
            }]
        );
    }

    #[test]
    fn test_default_width_comes_from_config() {
        let config = ReportConfig::default().with_default_width(7);
        let pattern = TablePattern::parse("table columns: A|str; B|int-3", &config);

        assert_eq!(pattern.schema.get_column("A").map(|c| c.width), Some(7));
        assert_eq!(pattern.schema.get_column("B").map(|c| c.width), Some(3));
    }

    #[test]
    fn test_bad_column_skips_only_itself() {
        let pattern = parse("table columns: A|str; B|money; C|int");

        assert!(pattern.schema.contains("A"));
        assert!(!pattern.schema.contains("B"));
        assert_eq!(pattern.schema.get_column("C").map(|c| c.data_type), Some(DataType::Int64));
    }

    #[test]
    fn test_missing_columns_field() {
        let pattern = parse("table name: Пусто");

        assert_eq!(pattern.title.as_deref(), Some("Пусто"));
        assert!(pattern.schema.is_empty());
        assert!(pattern.group_by.is_none());
        assert!(pattern.filters.is_empty());
    }

    #[test]
    fn test_group_with_unknown_field_is_dropped() {
        let pattern = parse("table columns: A|str; B|int#group: fields|C; data|sum; B");
        assert!(pattern.group_by.is_none());

        let pattern = parse("table columns: A|str; B|int#group: fields|A; data|sum; C");
        assert!(pattern.group_by.is_none());
    }

    #[test]
    fn test_group_over_text_is_dropped() {
        let pattern = parse("table columns: A|str; B|str#group: fields|A; data|sum; B");
        assert!(pattern.group_by.is_none());
    }

    #[test]
    fn test_invalid_filters_are_dropped_individually() {
        let pattern = parse(
            "table columns: A|str; B|int#\
             filter: A = x; C = 1; B == 2; B >= 2; B < abc",
        );

        assert_eq!(
            pattern.filters,
            vec![
                FilterCondition {
                    field: "A".to_string(),
                    op: CompareOp::Equal,
                    value: Value::from("x"),
                },
                FilterCondition {
                    field: "B".to_string(),
                    op: CompareOp::GreaterThanEqual,
                    value: Value::Int64(2),
                },
            ]
        );
    }
}
