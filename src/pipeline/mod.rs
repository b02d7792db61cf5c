//! The table pipeline: cast, group, filter, format, render.

use tracing::debug;

use crate::{
    pattern::TablePattern,
    render::{Renderer, TableReport},
    table::Row,
};

pub use cast::cast_rows;
pub use filter::filter_rows;
pub use format::format_rows;
pub use group::group_rows;

pub mod cast;
pub mod filter;
pub mod format;
pub mod group;

/// Runs raw table rows through a pattern.
pub struct Pipeline<'a> {
    pattern: &'a TablePattern,
    default_width: usize,
}

impl<'a> Pipeline<'a> {
    pub fn new(pattern: &'a TablePattern, default_width: usize) -> Self {
        Self {
            pattern,
            default_width,
        }
    }

    /// Casts, groups (when the pattern has a group clause) and filters rows.
    ///
    /// The result still holds typed values.
    pub fn select(&self, rows: Vec<Row>) -> Vec<Row> {
        let schema = &self.pattern.schema;
        let rows = cast_rows(rows, schema);

        let rows = match &self.pattern.group_by {
            Some(group) => group_rows(&rows, group, schema),
            None => rows,
        };

        let rows = filter_rows(rows, &self.pattern.filters);
        debug!(rows = rows.len(), "rows selected");
        rows
    }

    /// Produces the finished report for raw rows.
    pub fn run(&self, rows: Vec<Row>) -> TableReport {
        let rows = format_rows(self.select(rows), &self.pattern.schema);

        Renderer::new(&self.pattern.schema, self.default_width)
            .render(self.pattern.title.as_deref(), &rows)
    }
}
