//! Ordering of work collections by a [`SortSpec`].
//!
//! Comparison policy, in priority order:
//!
//! 1. both values absent: equal
//! 2. one value absent: the absent one is smaller
//! 3. date-like fields: compared chronologically; unparseable or empty text counts as the epoch
//! 4. numbers: compared numerically
//! 5. anything else: case-insensitive text comparison
//!
//! The direction then flips the result uniformly. Sorting is stable.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::{SortDirection, SortField, SortSpec, SortValue, Work};

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Returns a new, sorted copy of `works`. Ties keep their input order.
pub fn sort_works(works: &[Work], spec: SortSpec) -> Vec<Work> {
    let mut keyed: Vec<(SortKey, &Work)> = works
        .iter()
        .map(|w| (SortKey::of(spec.field, w), w))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| spec.direction.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, w)| w.clone()).collect()
}

/// Compare two works under `spec`.
pub fn compare_works(a: &Work, b: &Work, spec: SortSpec) -> Ordering {
    let ord = SortKey::of(spec.field, a).cmp(&SortKey::of(spec.field, b));
    spec.direction.apply(ord)
}

impl SortDirection {
    /// Orient an ascending comparison result.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

/// Parse a history date into milliseconds since the Unix epoch.
///
/// Returns `None` for empty or unrecognised text. Zone-less values are read as UTC.
pub fn parse_history_date(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }
    None
}

// Variant order matters: `Absent` sorts below every present value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Absent,
    Number(u64),
    Date(i64),
    Text(String),
}

impl SortKey {
    fn of(field: SortField, work: &Work) -> Self {
        match field.value(work) {
            SortValue::Absent => Self::Absent,
            SortValue::Number(n) => Self::Number(n),
            SortValue::Date(raw) => Self::Date(parse_history_date(raw).unwrap_or_else(|| {
                if !raw.trim().is_empty() {
                    log::debug!("unparseable {field} '{raw}', sorting as epoch");
                }
                0
            })),
            SortValue::Text(s) => Self::Text(s.to_lowercase()),
        }
    }
}
