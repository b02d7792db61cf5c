use std::path::Path;

use tracing::{error, info};

use crate::{
    ReportConfig, ReportError,
    pattern::TablePattern,
    pipeline::Pipeline,
    render::TableReport,
    source::{
        fields::{FieldSyntax, extract_fields},
        read_text,
        table_data::load_table,
        write_text,
    },
    text_report::{Inflector, TextRenderer},
};

/// Builds a table report from one data file and writes it to `output`.
///
/// A data file with inconsistent rows is reported and rendered as an empty
/// table; only I/O and decoding failures are returned as errors.
pub fn generate_table_report(
    pattern: &TablePattern,
    data_path: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ReportConfig,
) -> Result<TableReport, ReportError> {
    let data_path = data_path.as_ref();
    let text = read_text(data_path, config.data_encoding)?;

    let rows = match load_table(&text) {
        Ok(rows) => rows,
        Err(err) if err.is_table_error() => {
            error!("{err} in {}", data_path.display());
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    let report = Pipeline::new(pattern, config.default_width).run(rows);
    write_text(&output, &report.to_string())?;

    info!(
        data = %data_path.display(),
        output = %output.as_ref().display(),
        "table report written"
    );
    Ok(report)
}

/// Fills a text pattern from one key-value data file and writes it to
/// `output`.
pub fn generate_text_report<I: Inflector + ?Sized>(
    pattern: &str,
    data_path: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ReportConfig,
    inflector: &I,
) -> Result<String, ReportError> {
    let data_path = data_path.as_ref();
    let data = read_text(data_path, config.data_encoding)?;
    let fields = extract_fields(&data, FieldSyntax::Assignment);

    let report = TextRenderer::new(&fields, config.default_width, inflector).render(pattern);
    write_text(&output, &report)?;

    info!(
        data = %data_path.display(),
        output = %output.as_ref().display(),
        "text report written"
    );
    Ok(report)
}
