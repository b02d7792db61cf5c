use crate::core::{text::Alignment, types::DataType};

/// Definition of a single report column.
///
/// Specifies how cells of the column are typed and laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// The uppercased column name.
    pub name: String,

    /// The type cells are cast to.
    pub data_type: DataType,

    /// Display width in characters.
    pub width: usize,

    pub alignment: Alignment,

    /// Measurement unit shown in the header, possibly empty.
    pub unit: String,
}

impl ColumnDef {
    /// Creates a centered column without a unit.
    pub fn new(name: &str, data_type: DataType, width: usize) -> Self {
        Self {
            name: name.to_owned(),
            data_type,
            width,
            alignment: Alignment::default(),
            unit: String::new(),
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_owned();
        self
    }

    /// Header caption: the name, followed by `,unit` when a unit is set.
    pub fn caption(&self) -> String {
        if self.unit.is_empty() {
            self.name.clone()
        } else {
            format!("{},{}", self.name, self.unit)
        }
    }
}
