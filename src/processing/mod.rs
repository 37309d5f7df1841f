//! In-memory processing of imported work collections.
//!
//! Every function here takes `&[Work]` and returns a fresh value; inputs are never modified.
//!
//! - [`filter_works()`]: search term plus [`crate::types::FilterCriteria`]
//! - [`sort_works()`]: stable ordering by a [`crate::types::SortSpec`]
//! - [`summarize()`]: totals and top-N rankings
//! - [`build_chart_data()`]: chart-ready distributions
//! - [`available_filters()`]: distinct values for the filter panel
//! - [`paginate()`]: one table page plus its page-button window
//!
//! ## Example: search, sort, summarise
//!
//! ```rust
//! use ao3_history::processing::{filter_works, sort_works, summarize};
//! use ao3_history::types::{FilterCriteria, SortDirection, SortField, SortSpec, Work};
//!
//! let works = vec![
//!     Work { id: "1".into(), title: "Tea".into(), author: "a".into(), ..Work::default() },
//!     Work { id: "2".into(), title: "Coffee".into(), author: "b".into(), ..Work::default() },
//! ];
//!
//! let hits = filter_works(&works, "tea", &FilterCriteria::default());
//! assert_eq!(hits.len(), 1);
//!
//! let by_title = sort_works(&works, SortSpec::new(SortField::Title, SortDirection::Ascending));
//! assert_eq!(by_title[0].title, "Coffee");
//!
//! assert_eq!(summarize(&works).total_authors, 2);
//! ```

pub mod chart;
pub mod filter;
pub mod options;
pub mod page;
pub mod sort;
pub mod summary;

pub use chart::{ChartData, ChartSet, Colors, Dataset, build_chart_data};
pub use filter::{SearchTerm, filter_works};
pub use options::{AvailableFilters, available_filters};
pub use page::{DEFAULT_ROWS_PER_PAGE, Page, paginate};
pub use sort::{compare_works, parse_history_date, sort_works};
pub use summary::{MostVisited, NamedCount, StatSummary, summarize};
