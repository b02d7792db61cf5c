use indexmap::IndexMap;

use super::column_def::ColumnDef;

/// The ordered set of columns declared by a table pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub columns: IndexMap<String, ColumnDef>,
}

impl Schema {
    /// Creates a schema from column definitions. A later column replaces an
    /// earlier one with the same name.
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns: columns
                .into_iter()
                .map(|column| (column.name.clone(), column))
                .collect(),
        }
    }

    /// Finds a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.values()
    }
}
