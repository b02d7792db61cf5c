use tracing::debug;

use crate::{pattern::FilterCondition, table::Row};

/// Keeps the rows satisfying every condition.
///
/// Conditions apply in order, each to the rows left by the previous one. A
/// condition on a field the rows do not have (a column removed by grouping)
/// is skipped.
pub fn filter_rows(mut rows: Vec<Row>, conditions: &[FilterCondition]) -> Vec<Row> {
    for condition in conditions {
        let Some(first) = rows.first() else {
            break;
        };

        if !first.contains(&condition.field) {
            debug!(field = %condition.field, "filter field not in rows, skipping");
            continue;
        }

        rows.retain(|row| matches(condition, row));
    }

    rows
}

/// Whether `row` satisfies `condition`.
pub fn matches(condition: &FilterCondition, row: &Row) -> bool {
    row.get_value(&condition.field)
        .is_some_and(|value| condition.op.holds(value.compare(&condition.value)))
}
