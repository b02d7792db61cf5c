use std::path::Path;

use encoding_rs::Encoding;
use tracing::debug;

use crate::ReportError;

pub mod fields;
pub(crate) mod scanner;
pub mod table_data;

/// Reads a whole file and decodes it with `encoding`.
///
/// A byte order mark matching the encoding is dropped. Malformed input is an
/// error rather than being replaced.
pub fn read_text(path: impl AsRef<Path>, encoding: &'static Encoding) -> Result<String, ReportError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| ReportError::io(path, err))?;

    let (text, had_errors) = encoding.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(ReportError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }

    debug!(path = %path.display(), encoding = encoding.name(), "read input");
    Ok(text.into_owned())
}

/// Writes a generated report as UTF-8.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<(), ReportError> {
    let path = path.as_ref();
    std::fs::write(path, text).map_err(|err| ReportError::io(path, err))
}
