use thiserror::Error;

/// Convenience result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Error type returned by import functions.
///
/// Shared by the file, raw-text and URL-parameter import surfaces.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be decoded into a JSON value (bad UTF-8, base64, percent-encoding,
    /// or JSON syntax).
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Well-formed JSON that does not have the shape of a reading-history export.
    #[error("invalid data structure: {message}")]
    Schema { message: String },
}

impl ImportError {
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub(crate) fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Message suitable for showing to the person who picked the input.
    ///
    /// `from_url` selects the wording used for the `data` query parameter surface.
    pub fn user_message(&self, from_url: bool) -> String {
        match (self, from_url) {
            (Self::Io(_), _) => "Error reading file. Please try again.".to_string(),
            (Self::Decode { .. }, false) => {
                "Failed to parse JSON file. Please make sure it's a valid AO3 history JSON file."
                    .to_string()
            }
            (Self::Decode { .. }, true) => {
                "Failed to parse data from URL. The data may be corrupted or in an invalid format."
                    .to_string()
            }
            (Self::Schema { .. }, _) => {
                "Invalid data structure. The file does not look like an AO3 history export."
                    .to_string()
            }
        }
    }
}

/// Error type returned by export functions.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying I/O error while writing the output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text writer error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "xlsx")]
    /// Workbook writer error (feature-gated behind `xlsx`).
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The requested format is not available in this build.
    #[error("unsupported export: {message}")]
    Unsupported { message: String },
}

impl ExportError {
    /// Transient message for a failed export in the given format (`"CSV"`, `"JSON"`, `"Excel"`).
    pub fn user_message(&self, format_label: &str) -> String {
        format!(
            "Failed to export to {format_label}. Please try again or check your file permissions."
        )
    }
}
