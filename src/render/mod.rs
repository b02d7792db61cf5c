//! Fixed-width table rendering.
//!
//! A rendered table looks like:
//!
//! ```text
//! ---------------Годовой отчет---------------
//! |        ПОЛ         |     СТОИМОСТЬ      |
//! -------------------------------------------
//! |         м          |        20.0        |
//! -------------------------------------------
//! ```
//!
//! Rows handed to the renderer are already formatted: every cell is text of
//! its column's width, possibly spanning several lines.

use std::fmt;

use crate::{
    core::text::{Alignment, align_value, char_len},
    table::{Row, Schema},
};

pub const VERT_BORDER: char = '|';
pub const HORIZ_BORDER: char = '-';
pub const NOTHING_FOUND: &str = "Ничего не найдено. Проверьте шаблон и данные";

/// A finished table report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub title: String,
    pub header: String,
    /// Separator-framed rows, starting with a separator line.
    pub body: String,
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.title, self.header, self.body)
    }
}

pub struct Renderer<'a> {
    schema: &'a Schema,
    default_width: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(schema: &'a Schema, default_width: usize) -> Self {
        Self {
            schema,
            default_width,
        }
    }

    pub fn render(&self, title: Option<&str>, rows: &[Row]) -> TableReport {
        let header = self.header_line(rows);
        let width = char_len(&header);

        TableReport {
            title: title_line(title, width),
            body: self.body(rows, width),
            header,
        }
    }

    /// Column captions of the first row, or the "nothing found" placeholder
    /// when there are no rows.
    pub fn header_line(&self, rows: &[Row]) -> String {
        let Some(first) = rows.first() else {
            let width = self.default_width.max(char_len(NOTHING_FOUND));
            return bordered([align_value(NOTHING_FOUND, width, Alignment::Center)]);
        };

        bordered(first.values.iter().map(|(name, value)| {
            match self.schema.get_column(name) {
                Some(column) => align_value(&column.caption(), column.width, column.alignment),
                None => {
                    let text = value.to_string();
                    let width = text.split('\n').next().map(char_len).unwrap_or(0);
                    align_value(name, width, Alignment::Center)
                }
            }
        }))
    }

    /// Every row followed by a separator, with a separator on top.
    pub fn body(&self, rows: &[Row], width: usize) -> String {
        let separator = separator(width);
        let mut lines = vec![separator.clone()];

        for row in rows {
            lines.push(row_lines(row));
            lines.push(separator.clone());
        }

        lines.join("\n")
    }
}

/// The title centered in `width` on a line of border characters.
///
/// A title longer than `width` is kept whole, so its line is wider than the
/// table below it.
pub fn title_line(title: Option<&str>, width: usize) -> String {
    Alignment::Center.pad(title.unwrap_or_default(), width, HORIZ_BORDER)
}

pub fn separator(width: usize) -> String {
    HORIZ_BORDER.to_string().repeat(width)
}

/// Renders one row, stacking multi-line cells.
///
/// The row is as tall as its tallest cell. A cell with fewer lines is
/// continued with blanks as wide as its first line.
pub fn row_lines(row: &Row) -> String {
    let cells = row
        .values
        .values()
        .map(|value| value.to_string())
        .collect::<Vec<_>>();
    let cells = cells
        .iter()
        .map(|cell| cell.split('\n').collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let height = cells.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|line| {
            bordered(cells.iter().map(|cell| match cell.get(line) {
                Some(text) => (*text).to_owned(),
                None => " ".repeat(char_len(cell[0])),
            }))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bordered(fields: impl IntoIterator<Item = String>) -> String {
    let mut line = String::from(VERT_BORDER);
    for field in fields {
        line.push_str(&field);
        line.push(VERT_BORDER);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::types::{DataType, Value},
        table::ColumnDef,
    };

    fn schema() -> Schema {
        Schema::new(vec![
            ColumnDef::new("ПОЛ", DataType::Text, 20),
            ColumnDef::new("СТОИМОСТЬ", DataType::Float64, 20),
        ])
    }

    fn formatted_row() -> Row {
        [
            ("ПОЛ", "         м          "),
            ("СТОИМОСТЬ", "        20.0        "),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_title_line() {
        assert_eq!(title_line(Some("Годовой отчет"), 21), "----Годовой отчет----");
        assert_eq!(title_line(None, 5), "-----");
    }

    #[test]
    fn test_long_title_is_not_truncated() {
        assert_eq!(title_line(Some("Годовой отчет"), 5), "Годовой отчет");
        assert_eq!(title_line(Some("Годовой отчет"), 13), "Годовой отчет");
        assert_eq!(title_line(Some("Годовой отчет"), 14), "Годовой отчет-");
    }

    #[test]
    fn test_header_line() {
        let schema = schema();
        let renderer = Renderer::new(&schema, 20);

        assert_eq!(
            renderer.header_line(&[formatted_row()]),
            "|        ПОЛ         |     СТОИМОСТЬ      |"
        );
    }

    #[test]
    fn test_header_shows_unit() {
        let schema = Schema::new(vec![
            ColumnDef::new("ЦЕНА", DataType::Float64, 10)
                .with_alignment(Alignment::Left)
                .with_unit("руб"),
        ]);
        let renderer = Renderer::new(&schema, 20);
        let rows = [[("ЦЕНА", "1.5       ")].into_iter().collect::<Row>()];

        assert_eq!(renderer.header_line(&rows), "|ЦЕНА,руб  |");
    }

    #[test]
    fn test_empty_table() {
        let schema = schema();
        let renderer = Renderer::new(&schema, 20);

        let header = renderer.header_line(&[]);
        assert_eq!(header, "|Ничего не найдено. Проверьте шаблон и данные|");
        assert_eq!(renderer.body(&[], char_len(&header)), "-".repeat(char_len(&header)));
    }

    #[test]
    fn test_empty_table_wider_default() {
        let schema = schema();
        let renderer = Renderer::new(&schema, 50);

        let header = renderer.header_line(&[]);
        assert_eq!(char_len(&header), 52);
        assert!(header.contains(NOTHING_FOUND));
    }

    #[test]
    fn test_body() {
        let schema = schema();
        let renderer = Renderer::new(&schema, 20);

        assert_eq!(
            renderer.body(&[formatted_row()], 43),
            "-------------------------------------------\n\
             |         м          |        20.0        |\n\
             -------------------------------------------"
        );
    }

    #[test]
    fn test_multiline_row() {
        let row = [("A", "ab\ncd"), ("B", "xyz")].into_iter().collect::<Row>();

        assert_eq!(row_lines(&row), "|ab|xyz|\n|cd|   |");
    }

    #[test]
    fn test_render_report() {
        let schema = schema();
        let renderer = Renderer::new(&schema, 20);

        let report = renderer.render(Some("Годовой отчет"), &[formatted_row()]);

        assert_eq!(
            report.to_string(),
            "---------------Годовой отчет---------------\n\
             |        ПОЛ         |     СТОИМОСТЬ      |\n\
             -------------------------------------------\n\
             |         м          |        20.0        |\n\
             -------------------------------------------"
        );
    }

    #[test]
    fn test_render_empty_report() {
        let schema = schema();
        let renderer = Renderer::new(&schema, 20);

        let report = renderer.render(Some("Годовой отчет"), &[]);

        assert_eq!(
            report.to_string(),
            "----------------Годовой отчет-----------------\n\
             |Ничего не найдено. Проверьте шаблон и данные|\n\
             ----------------------------------------------"
        );
    }

    #[test]
    fn test_unknown_column_uses_cell_width() {
        let schema = Schema::default();
        let renderer = Renderer::new(&schema, 20);
        let rows = [[("X", Value::from("  1  "))].into_iter().collect::<Row>()];

        assert_eq!(renderer.header_line(&rows), "|  X  |");
    }
}
