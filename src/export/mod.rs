//! Export of a work collection to files.
//!
//! Every format first relabels unavailable records with the display title and author used by
//! the table, so exports match what is on screen.
//!
//! - [`csv`]: delimited text, 15 columns
//! - [`json`]: the raw records, indented
//! - [`xlsx`]: a one-sheet workbook, 21 columns (requires the Cargo feature `xlsx`)
//!
//! ## Example
//!
//! ```no_run
//! use ao3_history::export::{export_to_path, ExportFormat, ExportOptions};
//! use ao3_history::types::Work;
//!
//! # fn main() -> Result<(), ao3_history::ExportError> {
//! let works: Vec<Work> = Vec::new();
//! let format = ExportFormat::Csv;
//! export_to_path(&works, format, format.default_file_name(), &ExportOptions::default())?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ExportError, ExportResult};
use crate::types::Work;

pub mod csv;
pub mod json;
pub mod row;
pub mod xlsx;

pub use self::csv::export_csv;
pub use self::json::export_json;
pub use self::row::{CSV_HEADERS, Cell, ExportRow, XLSX_HEADERS};
#[cfg(feature = "xlsx")]
pub use self::xlsx::{build_workbook, export_xlsx};

/// Worksheet name used when none is configured.
pub const DEFAULT_SHEET_NAME: &str = "AO3 History";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    /// File name offered when the caller does not choose one.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Csv => "ao3_history.csv",
            Self::Json => "ao3_history.json",
            Self::Xlsx => "ao3_history.xlsx",
        }
    }

    /// Human-facing name, as used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Xlsx => "Excel",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            other => Err(format!("unknown export format '{other}' (expected csv, json or xlsx)")),
        }
    }
}

/// Options for [`export_to_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Name of the single worksheet in workbook exports.
    pub sheet_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

/// Write `works` to the file at `path` in `format`, replacing any existing file.
pub fn export_to_path(
    works: &[Work],
    format: ExportFormat,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> ExportResult<()> {
    let path = path.as_ref();
    if format == ExportFormat::Xlsx && !cfg!(feature = "xlsx") {
        return Err(ExportError::Unsupported {
            message: "xlsx export not enabled (enable cargo feature 'xlsx')".to_string(),
        });
    }

    let writer = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => export_csv(works, writer)?,
        ExportFormat::Json => export_json(works, writer)?,
        #[cfg(feature = "xlsx")]
        ExportFormat::Xlsx => export_xlsx(works, writer, options)?,
        #[cfg(not(feature = "xlsx"))]
        ExportFormat::Xlsx => {
            let _ = options;
        }
    }

    log::info!(
        "exported {} works as {} to {}",
        works.len(),
        format.label(),
        path.display()
    );
    Ok(())
}
