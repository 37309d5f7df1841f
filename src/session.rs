//! Viewer state for one loaded history.
//!
//! A [`Session`] owns the collection plus everything the views derive from it: search term,
//! filter criteria, sort order, active view and table page. Derived data (visible rows,
//! statistics, chart data) is recomputed on request from that state.
//!
//! Imports are two-phase so that a slow import cannot overwrite a newer one:
//! [`Session::begin_import`] hands out an [`ImportTicket`], and only the most recently issued
//! ticket is accepted by [`Session::finish_import`].
//!
//! ```rust
//! use ao3_history::session::{LoadState, Session};
//! use ao3_history::ingestion::ImportSourceKind;
//!
//! let mut session = Session::default();
//! let first = session.begin_import(ImportSourceKind::File);
//! let second = session.begin_import(ImportSourceKind::Text);
//!
//! assert!(session.finish_import(second, Ok(Vec::new())));
//! // The superseded import is ignored.
//! assert!(!session.finish_import(first, Ok(Vec::new())));
//! assert_eq!(session.load_state(), LoadState::Loaded);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExportResult, ImportResult};
use crate::export::{self, ExportFormat, ExportOptions};
use crate::ingestion::{ImportOptions, ImportSource, ImportSourceKind, import};
use crate::processing::{
    AvailableFilters, ChartSet, DEFAULT_ROWS_PER_PAGE, Page, StatSummary, available_filters,
    build_chart_data, filter_works, paginate, sort_works, summarize,
};
use crate::types::{FilterCriteria, SortField, SortSpec, Work};

/// Configuration for a new [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub rows_per_page: usize,
    pub sort: SortSpec,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            sort: SortSpec::default(),
        }
    }
}

/// Where the session is in its import lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// Nothing imported yet.
    #[default]
    Empty,
    Loading,
    Loaded,
    /// The latest import failed. Any earlier collection is still held.
    Failed,
}

/// Which view is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Table,
    Stats,
    Visualizations,
}

/// Handle for one in-flight import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportTicket {
    id: u64,
    kind: ImportSourceKind,
}

#[derive(Debug, Clone)]
pub struct Session {
    works: Vec<Work>,
    load_state: LoadState,
    error: Option<String>,
    search_term: String,
    criteria: FilterCriteria,
    sort: SortSpec,
    view: View,
    page: usize,
    rows_per_page: usize,
    issued: u64,
    pending: Option<u64>,
    options: SessionOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        let options = SessionOptions {
            rows_per_page: options.rows_per_page.max(1),
            ..options
        };
        Self {
            works: Vec::new(),
            load_state: LoadState::Empty,
            error: None,
            search_term: String::new(),
            criteria: FilterCriteria::default(),
            sort: options.sort,
            view: View::Table,
            page: 1,
            rows_per_page: options.rows_per_page,
            issued: 0,
            pending: None,
            options,
        }
    }

    /// Start an import. Any import started earlier is superseded.
    pub fn begin_import(&mut self, kind: ImportSourceKind) -> ImportTicket {
        self.issued += 1;
        self.pending = Some(self.issued);
        self.load_state = LoadState::Loading;
        self.error = None;
        ImportTicket {
            id: self.issued,
            kind,
        }
    }

    /// Complete the import `ticket` was issued for.
    ///
    /// Returns `false`, changing nothing, when `ticket` has been superseded or already finished.
    /// On failure the previous collection is kept and a user-facing message is recorded.
    pub fn finish_import(&mut self, ticket: ImportTicket, result: ImportResult<Vec<Work>>) -> bool {
        if self.pending != Some(ticket.id) {
            log::debug!("discarding result of superseded import #{}", ticket.id);
            return false;
        }
        self.pending = None;

        match result {
            Ok(works) => {
                self.works = works;
                self.load_state = LoadState::Loaded;
                self.error = None;
                self.page = 1;
            }
            Err(e) => {
                self.load_state = LoadState::Failed;
                self.error = Some(e.user_message(ticket.kind == ImportSourceKind::Url));
            }
        }
        true
    }

    /// Import `source` synchronously. Returns whether the collection was replaced.
    pub fn load(&mut self, source: &ImportSource, options: &ImportOptions) -> bool {
        let ticket = self.begin_import(source.kind());
        let result = import(source, options);
        let ok = result.is_ok();
        self.finish_import(ticket, result) && ok
    }

    /// Drop the collection and return every setting to what the session was created with.
    /// Imports still in flight are discarded when they finish.
    pub fn reset(&mut self) {
        let issued = self.issued;
        *self = Self::new(self.options.clone());
        self.issued = issued;
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Message from the latest failed import, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Clear the search term and every filter constraint.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.set_criteria(FilterCriteria::default());
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Column-header click: ascending on a new column, toggled on the current one.
    pub fn sort_by_column(&mut self, field: SortField) {
        self.sort = self.sort.toggled(field);
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Select a 1-based page; out-of-range values are clamped when the page is built.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.rows_per_page = rows.max(1);
        self.page = 1;
    }

    /// The filtered, sorted rows of the table view.
    pub fn visible_works(&self) -> Vec<Work> {
        sort_works(
            &filter_works(&self.works, &self.search_term, &self.criteria),
            self.sort,
        )
    }

    /// The current page of [`Self::visible_works`].
    pub fn current_page(&self) -> Page {
        paginate(&self.visible_works(), self.page, self.rows_per_page)
    }

    /// Statistics over the whole collection, ignoring search and filters.
    pub fn summary(&self) -> StatSummary {
        summarize(&self.works)
    }

    /// Chart data over the whole collection.
    pub fn chart_data(&self) -> ChartSet {
        build_chart_data(&self.works)
    }

    pub fn available_filters(&self) -> AvailableFilters {
        available_filters(&self.works)
    }

    /// Export the whole collection. Failures leave the session untouched.
    pub fn export_to_path(
        &self,
        format: ExportFormat,
        path: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> ExportResult<()> {
        export::export_to_path(&self.works, format, path, options)
    }
}
