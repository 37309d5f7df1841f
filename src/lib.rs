//! `ao3-history` loads a personal AO3 reading-history export and turns it into the data behind a
//! history viewer: a filtered and sorted table, summary statistics, chart-ready distributions,
//! and CSV/JSON/Excel re-exports.
//!
//! The primary entrypoint is [`ingestion::import`], which reads an [`ingestion::ImportSource`]
//! (a file, in-memory JSON text, or a share link's `data` parameter), checks that it has the
//! shape of a history export, and returns the [`types::Work`] records.
//!
//! ## What you can import
//!
//! - **Export file**: a UTF-8 JSON array of work records
//! - **Raw text**: the same JSON held in memory
//! - **Share link**: a URL whose `data` query parameter is `base64(percent_encode(json))`
//!
//! Every surface ends in the same structural validation. By default the first
//! [`ingestion::DEFAULT_SAMPLE_SIZE`] records are checked in depth; pass
//! [`ingestion::ValidationMode::Exhaustive`] to check every record.
//!
//! ## Quick example: import and summarise
//!
//! ```no_run
//! use ao3_history::ingestion::{import_from_path, ImportOptions};
//! use ao3_history::processing::summarize;
//!
//! # fn main() -> Result<(), ao3_history::ImportError> {
//! let works = import_from_path("history.json", &ImportOptions::default())?;
//! let stats = summarize(&works);
//! println!("{} works by {} authors", stats.total_works, stats.total_authors);
//! # Ok(())
//! # }
//! ```
//!
//! ## Processing example
//!
//! ```rust
//! use ao3_history::processing::{filter_works, sort_works};
//! use ao3_history::types::{Bound, FilterCriteria, SortDirection, SortField, SortSpec, Work};
//!
//! let mut long = Work { id: "1".into(), title: "Long".into(), ..Work::default() };
//! long.stats.word_count = 120_000;
//! let mut short = Work { id: "2".into(), title: "Short".into(), ..Work::default() };
//! short.stats.word_count = 800;
//! let works = vec![short, long];
//!
//! let criteria = FilterCriteria {
//!     min_word_count: 1_000,
//!     max_word_count: Bound::Unbounded,
//!     ..FilterCriteria::default()
//! };
//! let kept = filter_works(&works, "", &criteria);
//! assert_eq!(kept.len(), 1);
//!
//! let sorted = sort_works(&works, SortSpec::new(SortField::WordCount, SortDirection::Descending));
//! assert_eq!(sorted[0].title, "Long");
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: import entrypoints, validation and import observers
//! - [`types`]: the work record model, filter criteria and sort specs
//! - [`processing`]: filtering, sorting, statistics, chart data and pagination
//! - [`export`]: CSV, JSON and workbook export (workbooks need the Cargo feature `xlsx`)
//! - [`session`]: viewer state with superseding imports
//! - [`error`]: error types for import and export

pub mod error;
pub mod export;
pub mod ingestion;
pub mod processing;
pub mod session;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use error::{ExportError, ExportResult, ImportError, ImportResult};
