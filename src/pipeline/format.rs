use crate::{
    core::{text::format_value, types::Value},
    table::{Row, Schema},
};

/// Turns every cell into text fitted to its column's width and alignment.
///
/// Multi-line cells are fitted line by line.
pub fn format_rows(rows: Vec<Row>, schema: &Schema) -> Vec<Row> {
    rows.into_iter()
        .map(|row| {
            row.values
                .into_iter()
                .map(|(name, value)| {
                    let text = match schema.get_column(&name) {
                        Some(column) => {
                            format_value(&value.to_string(), column.width, column.alignment)
                        }
                        None => value.to_string(),
                    };
                    (name, Value::Text(text))
                })
                .collect::<Row>()
        })
        .collect()
}
