//! Fixed-width text reports from pattern files and data files.
//!
//! Two kinds of report are supported:
//!
//! - **Table reports**: a [`TablePattern`] declares typed columns, an
//!   optional group-by clause and filter conditions. Rows from a delimited
//!   data file are cast, grouped, filtered and rendered as a bordered table
//!   by the [`Pipeline`].
//! - **Text reports**: `{{NAME|WIDTH-ALIGN-UNIT}}` placeholders in free text
//!   are filled from a `name = value` data file by a [`TextRenderer`].
//!
//! Problems in patterns and data cells are logged through `tracing` and
//! skipped. Only I/O and decoding failures abort a report.

pub(crate) mod common;
pub(crate) mod core;
pub mod pattern;
pub mod pipeline;
pub mod render;
pub(crate) mod report;
pub mod source;
pub mod table;
pub mod text_report;

pub use common::{
    config::{DEFAULT_FIELD_WIDTH, ReportConfig, encoding_for_label},
    error::ReportError,
};
pub use crate::core::{
    text::{Alignment, align_value, format_value},
    types::{DataType, Value},
};
pub use pattern::TablePattern;
pub use pipeline::Pipeline;
pub use render::{Renderer, TableReport};
pub use report::{generate_table_report, generate_text_report};
pub use table::{ColumnDef, Row, Schema};
pub use text_report::{IdentityInflector, Inflector, TextRenderer};
