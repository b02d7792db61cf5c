use std::collections::HashSet;

use tracing::warn;

use crate::table::{Row, Schema};

/// Casts every cell to its column's declared type.
///
/// A cell that does not cast becomes the type's zero value. Cells of columns
/// the pattern does not declare are dropped, and so are rows left without any
/// cell.
pub fn cast_rows(rows: Vec<Row>, schema: &Schema) -> Vec<Row> {
    let mut undeclared = HashSet::new();

    rows.into_iter()
        .map(|row| {
            let mut cast = Row::new();

            for (name, value) in &row.values {
                let Some(column) = schema.get_column(name) else {
                    if undeclared.insert(name.clone()) {
                        warn!("Column {name} is not declared in the pattern and is left out");
                    }
                    continue;
                };

                let raw = value.to_string();
                let value = column.data_type.cast(&raw).unwrap_or_else(|err| {
                    warn!("{err} in line: {:?}", row.values);
                    column.data_type.zero()
                });
                cast.insert(name.clone(), value);
            }

            cast
        })
        .filter(|row| !row.is_empty())
        .collect()
}
