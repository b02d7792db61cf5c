use std::collections::HashSet;

use tracing::debug;

use super::fields::FIELD_DELIMITER;
use crate::{ReportError, core::types::Value, table::Row};

const VALUE_DELIMITER: char = ',';

/// Parses a table data file into raw text rows.
///
/// The first line holds the comma-separated column names. The rest of the
/// file is split on `#`; every non-blank segment is one comma-separated row.
/// A row with the wrong number of fields, or a repeated column name, rejects
/// the whole table.
pub fn load_table(text: &str) -> Result<Vec<Row>, ReportError> {
    let (header, body) = text.split_once('\n').unwrap_or((text, ""));
    let column_names = parse_header(header)?;

    let lines = body
        .split(FIELD_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.split(VALUE_DELIMITER).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    validate_table(&lines, column_names.len())?;

    let rows = lines
        .into_iter()
        .map(|line| {
            column_names
                .iter()
                .cloned()
                .zip(line.into_iter().map(Value::from))
                .collect::<Row>()
        })
        .collect::<Vec<_>>();

    debug!(
        columns = column_names.len(),
        rows = rows.len(),
        "loaded table data"
    );

    Ok(rows)
}

fn parse_header(header: &str) -> Result<Vec<String>, ReportError> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for name in header.trim_end().split(VALUE_DELIMITER) {
        let name = name.trim().to_uppercase();
        if !seen.insert(name.clone()) {
            return Err(ReportError::DuplicateColumn(name));
        }
        names.push(name);
    }

    Ok(names)
}

fn validate_table(lines: &[Vec<&str>], column_count: usize) -> Result<(), ReportError> {
    for (idx, line) in lines.iter().enumerate() {
        let row = idx + 1;
        if line.len() > column_count {
            return Err(ReportError::MissingColumnName { row });
        }
        if line.len() < column_count {
            return Err(ReportError::MissingValue { row });
        }
    }

    Ok(())
}
