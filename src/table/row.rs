use indexmap::IndexMap;

use crate::core::types::Value;

/// A row of cells keyed by column name.
///
/// Cells keep the order they were inserted in, which is the order they are
/// rendered in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub values: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value of the named column.
    pub fn get_value(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Sets a cell, keeping its position if the column is already present.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.values.insert(column.into(), value);
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut row: Row = [("ПОЛ", "м"), ("СТОИМОСТЬ", "20")].into_iter().collect();
        row.insert("ПОЛ", Value::from("ж"));

        assert_eq!(row.column_names().collect::<Vec<_>>(), ["ПОЛ", "СТОИМОСТЬ"]);
        assert_eq!(row.get_value("ПОЛ"), Some(&Value::from("ж")));
    }
}
