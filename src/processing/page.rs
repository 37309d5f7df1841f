//! Table pagination.

use serde::Serialize;

use crate::types::Work;

/// Rows per page when nothing else is chosen.
pub const DEFAULT_ROWS_PER_PAGE: usize = 20;
/// Most page buttons shown at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// One page of a work list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub works: Vec<Work>,
    /// 1-based; clamped into `1..=total_pages`.
    pub page: usize,
    /// Zero for an empty list.
    pub total_pages: usize,
    pub total_rows: usize,
    /// Page numbers to offer as direct links. Empty when there is at most one page.
    pub page_buttons: Vec<usize>,
}

/// Slice page `page` (1-based) out of `works`.
///
/// Out-of-range pages are clamped; a `rows_per_page` of zero is treated as one.
pub fn paginate(works: &[Work], page: usize, rows_per_page: usize) -> Page {
    let rows_per_page = rows_per_page.max(1);
    let total_rows = works.len();
    let total_pages = total_rows.div_ceil(rows_per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * rows_per_page;
    let end = (start + rows_per_page).min(total_rows);
    let works = works.get(start..end).map(<[Work]>::to_vec).unwrap_or_default();

    Page {
        works,
        page,
        total_pages,
        total_rows,
        page_buttons: page_buttons(page, total_pages),
    }
}

/// The window of at most [`MAX_PAGE_BUTTONS`] pages centred on `page`, shifted to stay inside
/// `1..=total_pages`.
pub fn page_buttons(page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let mut start = page.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(total_pages);
    if end - start + 1 < MAX_PAGE_BUTTONS && start > 1 {
        start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
    }
    (start..=end).collect()
}
