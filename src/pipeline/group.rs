use indexmap::IndexMap;
use tracing::debug;

use crate::{
    core::types::{DataType, Value},
    pattern::{Aggregate, GroupSpec},
    table::{Row, Schema},
};

/// Groups rows by the group's fields and aggregates its target column.
///
/// Produces one row per distinct key, in the order keys are first seen:
/// the grouping fields followed by the aggregate under the target's name.
pub fn group_rows(rows: &[Row], group: &GroupSpec, schema: &Schema) -> Vec<Row> {
    // Keyed by the displayed key cells; values keep the typed key.
    let mut groups: IndexMap<Vec<String>, (Vec<Value>, Vec<Value>)> = IndexMap::new();

    for row in rows {
        let key = group
            .fields
            .iter()
            .map(|field| cell_or_zero(row, field, schema))
            .collect::<Vec<_>>();
        let target = cell_or_zero(row, &group.target, schema);

        groups
            .entry(key.iter().map(Value::to_string).collect())
            .or_insert_with(|| (key, Vec::new()))
            .1
            .push(target);
    }

    let target_type = schema
        .get_column(&group.target)
        .map(|column| column.data_type)
        .unwrap_or(DataType::Float64);

    debug!(groups = groups.len(), rows = rows.len(), "grouped rows");

    groups
        .into_values()
        .map(|(key, targets)| {
            let mut row = group.fields.iter().cloned().zip(key).collect::<Row>();
            row.insert(
                group.target.clone(),
                aggregate(group.aggregate, &targets, target_type),
            );
            row
        })
        .collect()
}

/// Computes `aggregate` over numeric values.
///
/// Sums keep the column type; averages are floats rounded to two decimals,
/// with ties going to the even digit (`0.125` -> `0.12`).
pub fn aggregate(aggregate: Aggregate, values: &[Value], data_type: DataType) -> Value {
    match (aggregate, data_type) {
        (Aggregate::Sum, DataType::Int64) => Value::Int64(
            values
                .iter()
                .filter_map(|value| match value {
                    Value::Int64(i) => Some(*i),
                    _ => None,
                })
                .fold(0i64, i64::saturating_add),
        ),
        (Aggregate::Sum, _) => Value::Float64(float_sum(values)),
        (Aggregate::Average, _) => {
            if values.is_empty() {
                return Value::Float64(0.0);
            }
            let mean = float_sum(values) / values.len() as f64;
            Value::Float64((mean * 100.0).round_ties_even() / 100.0)
        }
    }
}

fn float_sum(values: &[Value]) -> f64 {
    values.iter().filter_map(Value::as_f64).sum()
}

fn cell_or_zero(row: &Row, field: &str, schema: &Schema) -> Value {
    row.get_value(field).cloned().unwrap_or_else(|| {
        schema
            .get_column(field)
            .map(|column| column.data_type.zero())
            .unwrap_or_else(|| DataType::Text.zero())
    })
}
