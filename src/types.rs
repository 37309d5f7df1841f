//! Core data model types.
//!
//! A reading-history export is a JSON array of [`Work`] records. Imports produce a `Vec<Work>`,
//! and the processing layer narrows and orders it using [`FilterCriteria`] and [`SortSpec`].

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Title carried by records that stand in for works no longer available on the archive.
pub const UNAVAILABLE_TITLE: &str = "Unknown Title";
/// Author carried by unavailable records.
pub const UNAVAILABLE_AUTHOR: &str = "Anonymous";
/// Placeholder used by unavailable records for last-visited, rating, category and completion.
pub const UNKNOWN: &str = "Unknown";

/// Title shown (and exported) in place of an unavailable record's placeholder title.
pub const DELETED_WORK_TITLE: &str = "Deleted Work";
/// Author shown (and exported) in place of an unavailable record's placeholder author.
pub const DELETED_WORK_AUTHOR: &str = "Unknown";

/// A name plus the archive link it was scraped from (fandoms and tags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedLink {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

impl NamedLink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// The four tag lists attached to a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagBundle {
    #[serde(deserialize_with = "lenient::or_default")]
    pub warnings: Vec<NamedLink>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub relationships: Vec<NamedLink>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub characters: Vec<NamedLink>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub freeforms: Vec<NamedLink>,
}

impl TagBundle {
    /// Iterate every tag across all four lists (warnings first, freeforms last).
    pub fn iter_all(&self) -> impl Iterator<Item = &NamedLink> {
        self.warnings
            .iter()
            .chain(&self.relationships)
            .chain(&self.characters)
            .chain(&self.freeforms)
    }
}

/// Public statistics for a work, as shown on the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkStats {
    #[serde(deserialize_with = "lenient::count")]
    pub word_count: u64,
    /// Chapter progress, e.g. `"3/10"` or `"5/?"`.
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub chapters: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub kudos: u64,
    #[serde(
        deserialize_with = "lenient::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<u64>,
    #[serde(
        deserialize_with = "lenient::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub bookmarks: Option<u64>,
    #[serde(
        deserialize_with = "lenient::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub hits: Option<u64>,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_date: Option<String>,
}

/// The reader's own history for a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserStats {
    #[serde(deserialize_with = "lenient::text")]
    pub last_visited: String,
    #[serde(deserialize_with = "lenient::count")]
    pub visits: u64,
}

/// Series membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesRef {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub part: String,
}

/// One imported reading-history entry.
///
/// Field order matches the export's JSON layout, and is the order used when re-exporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Work {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(
        deserialize_with = "lenient::optional_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_number: Option<u32>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub author: String,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_url: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub fandoms: Vec<NamedLink>,
    #[serde(deserialize_with = "lenient::text")]
    pub rating: String,
    #[serde(deserialize_with = "lenient::text")]
    pub warning: String,
    #[serde(deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(deserialize_with = "lenient::text")]
    pub completion: String,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub tags: TagBundle,
    #[serde(deserialize_with = "lenient::or_default")]
    pub stats: WorkStats,
    #[serde(deserialize_with = "lenient::or_default")]
    pub user_stats: UserStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<SeriesRef>,
}

impl Work {
    /// Whether this record is the placeholder the exporter writes for a work that was deleted
    /// or locked since it was read.
    ///
    /// Such records are kept for display but left out of statistics and charts.
    pub fn is_unavailable(&self) -> bool {
        self.id.is_empty()
            && self.title == UNAVAILABLE_TITLE
            && self.author == UNAVAILABLE_AUTHOR
            && self.url.is_none()
            && self.author_url.is_none()
            && self.fandoms.is_empty()
            && self.stats.word_count == 0
            && self.user_stats.last_visited == UNKNOWN
            && self.rating == UNKNOWN
            && self.category == UNKNOWN
            && self.completion == UNKNOWN
    }

    /// Copy of this record with the display title/author substituted when it is unavailable.
    pub fn for_display(&self) -> Work {
        if self.is_unavailable() {
            Work {
                title: DELETED_WORK_TITLE.to_string(),
                author: DELETED_WORK_AUTHOR.to_string(),
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }

    /// Individual category tokens, e.g. `"F/F, Gen"` yields `["F/F", "Gen"]`.
    pub fn category_parts(&self) -> impl Iterator<Item = &str> {
        self.category
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
    }

    /// Whether the completion field reads as complete (case-insensitive `"complete"`).
    pub fn is_complete(&self) -> bool {
        self.completion.to_lowercase().contains("complete")
    }
}

/// Field readers for [`Work`] conversion.
///
/// Validation checks only a leading sample of records and only the fields it requires, so
/// conversion has to accept anything a validated payload can still carry: `null` in any field,
/// floating-point or negative counts, and scalars of the wrong kind.
mod lenient {
    use std::fmt;

    use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
    use serde::Deserialize;

    /// `null` reads as the type's default.
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Any scalar as text; `null`, arrays and objects read as empty.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(deserializer.deserialize_any(TextVisitor)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        deserializer.deserialize_any(TextVisitor)
    }

    /// A non-negative whole number. Floats round, negatives clamp to 0, anything
    /// unreadable is 0.
    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        Ok(deserializer.deserialize_any(CountVisitor)?.unwrap_or(0))
    }

    pub fn optional_count<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }

    pub fn optional_page<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        Ok(optional_count(deserializer)?.map(|n| u32::try_from(n).unwrap_or(u32::MAX)))
    }

    fn clamp_float(value: f64) -> u64 {
        if value.is_finite() && value > 0.0 {
            value.round() as u64
        } else {
            0
        }
    }

    fn drain_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<(), A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(())
    }

    fn drain_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<(), A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(())
    }

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
            drain_seq(seq).map(|()| None)
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
            drain_map(map).map(|()| None)
        }
    }

    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = Option<u64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(u64::try_from(v).unwrap_or(0)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(clamp_float(v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.trim().parse::<f64>().ok().map(clamp_float))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
            drain_seq(seq).map(|()| None)
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
            drain_map(map).map(|()| None)
        }
    }
}

/// Completion-status constraint of a [`FilterCriteria`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl FromStr for CompletionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "complete" => Ok(Self::Complete),
            "incomplete" => Ok(Self::Incomplete),
            other => Err(format!(
                "unknown completion status '{other}' (expected all, complete or incomplete)"
            )),
        }
    }
}

/// Upper bound of an inclusive numeric range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    /// No upper limit.
    #[default]
    Unbounded,
    /// Values above this are rejected.
    AtMost(u64),
}

impl Bound {
    pub fn admits(self, value: u64) -> bool {
        match self {
            Self::Unbounded => true,
            Self::AtMost(max) => value <= max,
        }
    }
}

impl From<Option<u64>> for Bound {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unbounded, Self::AtMost)
    }
}

/// Conjunctive filter constraints.
///
/// Each set matches if the record hits any of its members; an empty set places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub fandoms: BTreeSet<String>,
    pub authors: BTreeSet<String>,
    pub ratings: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub min_word_count: u64,
    pub max_word_count: Bound,
    pub min_visits: u64,
    pub max_visits: Bound,
    pub completion: CompletionStatus,
}

impl FilterCriteria {
    /// True when no constraint is set (the filter is then the identity).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A sortable field, named by its dotted path in the export JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortField {
    Id,
    Title,
    Author,
    Rating,
    Category,
    Completion,
    SeriesName,
    WordCount,
    Chapters,
    Kudos,
    Comments,
    Bookmarks,
    Hits,
    Language,
    PublishDate,
    LastVisited,
    Visits,
}

impl SortField {
    pub const ALL: [SortField; 17] = [
        Self::Id,
        Self::Title,
        Self::Author,
        Self::Rating,
        Self::Category,
        Self::Completion,
        Self::SeriesName,
        Self::WordCount,
        Self::Chapters,
        Self::Kudos,
        Self::Comments,
        Self::Bookmarks,
        Self::Hits,
        Self::Language,
        Self::PublishDate,
        Self::LastVisited,
        Self::Visits,
    ];

    /// Dotted path of the field in the export JSON.
    pub fn path(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Author => "author",
            Self::Rating => "rating",
            Self::Category => "category",
            Self::Completion => "completion",
            Self::SeriesName => "series.name",
            Self::WordCount => "stats.wordCount",
            Self::Chapters => "stats.chapters",
            Self::Kudos => "stats.kudos",
            Self::Comments => "stats.comments",
            Self::Bookmarks => "stats.bookmarks",
            Self::Hits => "stats.hits",
            Self::Language => "stats.language",
            Self::PublishDate => "stats.publishDate",
            Self::LastVisited => "userStats.lastVisited",
            Self::Visits => "userStats.visits",
        }
    }

    /// Whether values of this field are compared chronologically.
    pub fn is_date(self) -> bool {
        matches!(self, Self::PublishDate | Self::LastVisited)
    }

    /// Extract this field's value from `work`.
    pub fn value(self, work: &Work) -> SortValue<'_> {
        match self {
            Self::Id => self.text_value(&work.id),
            Self::Title => self.text_value(&work.title),
            Self::Author => self.text_value(&work.author),
            Self::Rating => self.text_value(&work.rating),
            Self::Category => self.text_value(&work.category),
            Self::Completion => self.text_value(&work.completion),
            Self::SeriesName => work
                .series
                .as_ref()
                .map_or(SortValue::Absent, |s| self.text_value(&s.name)),
            Self::WordCount => SortValue::Number(work.stats.word_count),
            Self::Chapters => work
                .stats
                .chapters
                .as_deref()
                .map_or(SortValue::Absent, |s| self.text_value(s)),
            Self::Kudos => SortValue::Number(work.stats.kudos),
            Self::Comments => work.stats.comments.map_or(SortValue::Absent, SortValue::Number),
            Self::Bookmarks => work.stats.bookmarks.map_or(SortValue::Absent, SortValue::Number),
            Self::Hits => work.stats.hits.map_or(SortValue::Absent, SortValue::Number),
            Self::Language => work
                .stats
                .language
                .as_deref()
                .map_or(SortValue::Absent, |s| self.text_value(s)),
            Self::PublishDate => work
                .stats
                .publish_date
                .as_deref()
                .map_or(SortValue::Absent, |s| self.text_value(s)),
            Self::LastVisited => self.text_value(&work.user_stats.last_visited),
            Self::Visits => SortValue::Number(work.user_stats.visits),
        }
    }

    fn text_value(self, s: &str) -> SortValue<'_> {
        if self.is_date() {
            SortValue::Date(s)
        } else {
            SortValue::Text(s)
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.path() == s)
            .ok_or_else(|| format!("unknown sort field '{s}'"))
    }
}

impl TryFrom<String> for SortField {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortField> for String {
    fn from(value: SortField) -> Self {
        value.path().to_string()
    }
}

/// A field value prepared for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortValue<'a> {
    /// The record has no value at this path.
    Absent,
    Number(u64),
    /// Raw text of a date-like field; parsed at comparison time.
    Date(&'a str),
    Text(&'a str),
}

/// Field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// The sort a column-header click produces: ascending on a new field, toggled on the same
    /// field.
    pub fn toggled(self, field: SortField) -> Self {
        let direction = if self.field == field && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { field, direction }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::Visits, SortDirection::Descending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::unavailable;

    #[test]
    fn unavailable_record_is_detected() {
        assert!(unavailable().is_unavailable());
    }

    #[test]
    fn any_real_field_breaks_the_unavailable_pattern() {
        let mut w = unavailable();
        w.id = "123".to_string();
        assert!(!w.is_unavailable());

        let mut w = unavailable();
        w.url = Some("https://archiveofourown.org/works/1".to_string());
        assert!(!w.is_unavailable());

        let mut w = unavailable();
        w.fandoms.push(NamedLink::new("Good Omens"));
        assert!(!w.is_unavailable());

        let mut w = unavailable();
        w.stats.word_count = 10;
        assert!(!w.is_unavailable());
    }

    #[test]
    fn for_display_substitutes_title_and_author_only_for_unavailable() {
        let shown = unavailable().for_display();
        assert_eq!(shown.title, DELETED_WORK_TITLE);
        assert_eq!(shown.author, DELETED_WORK_AUTHOR);

        let real = Work {
            title: "Real".to_string(),
            author: "someone".to_string(),
            ..Work::default()
        };
        assert_eq!(real.for_display(), real);
    }

    #[test]
    fn category_parts_are_trimmed() {
        let w = Work {
            category: " F/F,Gen , ".to_string(),
            ..Work::default()
        };
        assert_eq!(w.category_parts().collect::<Vec<_>>(), vec!["F/F", "Gen"]);
    }

    #[test]
    fn sort_field_paths_round_trip() {
        for field in SortField::ALL {
            assert_eq!(field.path().parse::<SortField>(), Ok(field));
        }
        assert!("stats.nope".parse::<SortField>().is_err());
    }

    #[test]
    fn optional_fields_read_as_absent() {
        let w = Work::default();
        assert_eq!(SortField::Hits.value(&w), SortValue::Absent);
        assert_eq!(SortField::SeriesName.value(&w), SortValue::Absent);
        assert_eq!(SortField::PublishDate.value(&w), SortValue::Absent);
        assert_eq!(SortField::LastVisited.value(&w), SortValue::Date(""));
        assert_eq!(SortField::WordCount.value(&w), SortValue::Number(0));
    }

    #[test]
    fn header_click_toggles_direction() {
        let spec = SortSpec::new(SortField::Title, SortDirection::Ascending);
        assert_eq!(spec.toggled(SortField::Title).direction, SortDirection::Descending);
        assert_eq!(
            spec.toggled(SortField::Title).toggled(SortField::Title).direction,
            SortDirection::Ascending
        );
        assert_eq!(
            SortSpec::default().toggled(SortField::Author),
            SortSpec::new(SortField::Author, SortDirection::Ascending)
        );
    }

    #[test]
    fn bound_unbounded_admits_everything() {
        assert!(Bound::Unbounded.admits(u64::MAX));
        assert!(Bound::AtMost(5).admits(5));
        assert!(!Bound::AtMost(5).admits(6));
        assert_eq!(Bound::from(None), Bound::Unbounded);
    }
}
