//! The flattened row shared by the tabular export formats.

use crate::types::{NamedLink, UNKNOWN, Work};

/// Column headers of the workbook export, in order.
pub const XLSX_HEADERS: [&str; 21] = [
    "Title",
    "Author",
    "Fandoms",
    "Word Count",
    "Last Visited",
    "Visits",
    "Rating",
    "Warnings",
    "Category",
    "Status",
    "Kudos",
    "Comments",
    "Bookmarks",
    "Hits",
    "Work ID",
    "Relationships",
    "Characters",
    "Additional Tags",
    "Language",
    "Published",
    "Chapters",
];

/// Column headers of the delimited export: the first 15 workbook columns.
pub const CSV_HEADERS: [&str; 15] = [
    "Title",
    "Author",
    "Fandoms",
    "Word Count",
    "Last Visited",
    "Visits",
    "Rating",
    "Warnings",
    "Category",
    "Status",
    "Kudos",
    "Comments",
    "Bookmarks",
    "Hits",
    "Work ID",
];

/// Chapter text written when a work has none.
pub const UNKNOWN_CHAPTERS: &str = "?/?";

/// A single cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(u64),
}

impl Cell<'_> {
    /// The cell as delimited-file text.
    pub fn to_text(self) -> String {
        match self {
            Cell::Text(s) => s.to_string(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// One work flattened into export columns, with missing values already defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub title: String,
    pub author: String,
    pub fandoms: String,
    pub word_count: u64,
    pub last_visited: String,
    pub visits: u64,
    pub rating: String,
    pub warnings: String,
    pub category: String,
    pub status: String,
    pub kudos: u64,
    pub comments: u64,
    pub bookmarks: u64,
    pub hits: u64,
    pub work_id: String,
    pub relationships: String,
    pub characters: String,
    pub additional_tags: String,
    pub language: String,
    pub published: String,
    pub chapters: String,
}

impl ExportRow {
    /// Flatten `work`, substituting the display title and author for unavailable records.
    pub fn from_work(work: &Work) -> Self {
        let work = work.for_display();
        Self {
            title: or_unknown(&work.title),
            author: or_unknown(&work.author),
            fandoms: or_unknown(&join_names(&work.fandoms)),
            word_count: work.stats.word_count,
            last_visited: or_unknown(&work.user_stats.last_visited),
            visits: work.user_stats.visits,
            rating: or_unknown(&work.rating),
            warnings: or_unknown(&join_names(&work.tags.warnings)),
            category: or_unknown(&work.category),
            status: or_unknown(&work.completion),
            kudos: work.stats.kudos,
            comments: work.stats.comments.unwrap_or(0),
            bookmarks: work.stats.bookmarks.unwrap_or(0),
            hits: work.stats.hits.unwrap_or(0),
            work_id: or_unknown(&work.id),
            relationships: join_names(&work.tags.relationships),
            characters: join_names(&work.tags.characters),
            additional_tags: join_names(&work.tags.freeforms),
            language: or_unknown(work.stats.language.as_deref().unwrap_or_default()),
            published: or_unknown(work.stats.publish_date.as_deref().unwrap_or_default()),
            chapters: work
                .stats
                .chapters
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN_CHAPTERS.to_string()),
        }
    }

    /// All 21 cells, in [`XLSX_HEADERS`] order.
    pub fn cells(&self) -> [Cell<'_>; 21] {
        [
            Cell::Text(&self.title),
            Cell::Text(&self.author),
            Cell::Text(&self.fandoms),
            Cell::Number(self.word_count),
            Cell::Text(&self.last_visited),
            Cell::Number(self.visits),
            Cell::Text(&self.rating),
            Cell::Text(&self.warnings),
            Cell::Text(&self.category),
            Cell::Text(&self.status),
            Cell::Number(self.kudos),
            Cell::Number(self.comments),
            Cell::Number(self.bookmarks),
            Cell::Number(self.hits),
            Cell::Text(&self.work_id),
            Cell::Text(&self.relationships),
            Cell::Text(&self.characters),
            Cell::Text(&self.additional_tags),
            Cell::Text(&self.language),
            Cell::Text(&self.published),
            Cell::Text(&self.chapters),
        ]
    }

    /// The first 15 cells as text, in [`CSV_HEADERS`] order.
    pub fn csv_record(&self) -> Vec<String> {
        self.cells()
            .into_iter()
            .take(CSV_HEADERS.len())
            .map(Cell::to_text)
            .collect()
    }
}

fn join_names(links: &[NamedLink]) -> String {
    links
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_unknown(s: &str) -> String {
    if s.is_empty() {
        UNKNOWN.to_string()
    } else {
        s.to_string()
    }
}
