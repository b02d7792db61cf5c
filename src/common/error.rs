use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort a single report (or the table feeding it).
///
/// Recoverable problems (bad column definitions, failed casts, unknown
/// filter fields) never surface here: they are logged and skipped.
#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error("I/O error on {}: {source}", .path.display())]
    #[diagnostic(code(tabula::io), help("check that the file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown encoding: {0}")]
    #[diagnostic(
        code(tabula::encoding),
        help("use a WHATWG label such as utf-8 or cp1251")
    )]
    UnknownEncoding(String),

    #[error("{} is not valid {encoding}", .path.display())]
    #[diagnostic(code(tabula::decode))]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("TableDataError: no column value in row {row}")]
    #[diagnostic(code(tabula::table::missing_value))]
    MissingValue { row: usize },

    #[error("TableDataError: no column name in row {row}")]
    #[diagnostic(code(tabula::table::missing_column_name))]
    MissingColumnName { row: usize },

    #[error("TableDataError: duplicate column name {0}")]
    #[diagnostic(code(tabula::table::duplicate_column))]
    DuplicateColumn(String),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only invalidates the table being loaded.
    pub fn is_table_error(&self) -> bool {
        matches!(
            self,
            Self::MissingValue { .. } | Self::MissingColumnName { .. } | Self::DuplicateColumn(_)
        )
    }
}
