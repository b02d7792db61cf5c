use encoding_rs::{Encoding, UTF_8};

use crate::ReportError;

/// Column width used when a pattern does not give one.
pub const DEFAULT_FIELD_WIDTH: usize = 20;

/// Settings shared by every report generated in one run.
///
/// Passed explicitly into the loaders and formatters; nothing here is global.
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// Display width for columns and placeholders without an explicit width.
    pub default_width: usize,

    /// Encoding of the pattern file.
    pub pattern_encoding: &'static Encoding,

    /// Encoding of every data file.
    pub data_encoding: &'static Encoding,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_FIELD_WIDTH,
            pattern_encoding: UTF_8,
            data_encoding: UTF_8,
        }
    }
}

impl ReportConfig {
    pub fn with_default_width(mut self, width: usize) -> Self {
        self.default_width = width;
        self
    }

    pub fn with_pattern_encoding(mut self, label: &str) -> Result<Self, ReportError> {
        self.pattern_encoding = encoding_for_label(label)?;
        Ok(self)
    }

    pub fn with_data_encoding(mut self, label: &str) -> Result<Self, ReportError> {
        self.data_encoding = encoding_for_label(label)?;
        Ok(self)
    }
}

/// Resolves a WHATWG encoding label such as `utf-8` or `cp1251`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, ReportError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ReportError::UnknownEncoding(label.to_string()))
}
