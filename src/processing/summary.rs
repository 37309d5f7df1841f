//! Summary statistics over a work collection.
//!
//! Placeholder records for unavailable works are left out of every figure.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::Work;

/// Length cap of [`StatSummary::top_authors`].
pub const TOP_AUTHORS: usize = 33;
/// Length cap of [`StatSummary::top_fandoms`].
pub const TOP_FANDOMS: usize = 30;
/// Length cap of [`StatSummary::top_relationships`].
pub const TOP_RELATIONSHIPS: usize = 34;
/// Length cap of [`StatSummary::top_freeform_tags`].
pub const TOP_FREEFORM_TAGS: usize = 34;

/// A ranked name with its number of works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

/// Title and visit count of the most visited work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MostVisited {
    pub title: String,
    pub visits: u64,
}

/// Read-only aggregate snapshot of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    pub total_works: u64,
    pub total_authors: u64,
    pub total_word_count: u64,
    /// Rounded to the nearest whole word.
    pub average_word_count: u64,
    pub total_visits: u64,
    pub most_visited_work: MostVisited,
    pub top_authors: Vec<NamedCount>,
    pub top_fandoms: Vec<NamedCount>,
    pub top_relationships: Vec<NamedCount>,
    pub top_freeform_tags: Vec<NamedCount>,
}

/// Compute the [`StatSummary`] of `works`.
///
/// Returns the zeroed summary when no available work remains.
pub fn summarize(works: &[Work]) -> StatSummary {
    let valid: Vec<&Work> = works.iter().filter(|w| !w.is_unavailable()).collect();
    if valid.is_empty() {
        return StatSummary::default();
    }

    let mut authors = Tally::default();
    let mut fandoms = Tally::default();
    let mut relationships = Tally::default();
    let mut freeforms = Tally::default();
    let mut total_word_count = 0u64;
    let mut total_visits = 0u64;
    let mut most_visited = valid[0];

    for &work in &valid {
        total_word_count += work.stats.word_count;
        total_visits += work.user_stats.visits;
        if work.user_stats.visits > most_visited.user_stats.visits {
            most_visited = work;
        }

        authors.add(&work.author);
        for f in &work.fandoms {
            fandoms.add(&f.name);
        }
        for r in &work.tags.relationships {
            relationships.add(&r.name);
        }
        for t in &work.tags.freeforms {
            freeforms.add(&t.name);
        }
    }

    let total_works = valid.len() as u64;
    StatSummary {
        total_works,
        total_authors: authors.distinct() as u64,
        total_word_count,
        average_word_count: (total_word_count as f64 / total_works as f64).round() as u64,
        total_visits,
        most_visited_work: MostVisited {
            title: most_visited.title.clone(),
            visits: most_visited.user_stats.visits,
        },
        top_authors: authors.ranked(TOP_AUTHORS),
        top_fandoms: fandoms.ranked(TOP_FANDOMS),
        top_relationships: relationships.ranked(TOP_RELATIONSHIPS),
        top_freeform_tags: freeforms.ranked(TOP_FREEFORM_TAGS),
    }
}

/// Frequency counter that remembers first-seen order, used to break ranking ties.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    index: HashMap<String, usize>,
    entries: Vec<NamedCount>,
}

impl Tally {
    pub(crate) fn add(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(NamedCount {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub(crate) fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Entries in first-seen order.
    pub(crate) fn into_entries(self) -> Vec<NamedCount> {
        self.entries
    }

    /// Entries by descending count, at most `cap` of them.
    pub(crate) fn ranked(self, cap: usize) -> Vec<NamedCount> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(cap);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::{NamedCount, StatSummary, TOP_FANDOMS, summarize};
    use crate::fixtures::{unavailable, with_fandoms, with_visits, with_words, work};
    use crate::types::NamedLink;

    #[test]
    fn empty_collection_yields_zeroed_summary() {
        assert_eq!(summarize(&[]), StatSummary::default());
        assert_eq!(summarize(&[unavailable(), unavailable()]), StatSummary::default());
    }

    #[test]
    fn single_author_collection() {
        let works: Vec<_> = (0..5)
            .map(|i| work(&i.to_string(), &format!("Work {i}"), "prolific"))
            .collect();
        let s = summarize(&works);
        assert_eq!(s.total_works, 5);
        assert_eq!(s.total_authors, 1);
        assert_eq!(
            s.top_authors,
            vec![NamedCount {
                name: "prolific".to_string(),
                count: 5
            }]
        );
    }

    #[test]
    fn totals_average_and_most_visited() {
        let works = vec![
            with_visits(with_words(work("1", "One", "a"), 1_000), 2),
            with_visits(with_words(work("2", "Two", "b"), 2_001), 7),
            with_visits(with_words(work("3", "Three", "c"), 0), 7),
        ];
        let s = summarize(&works);
        assert_eq!(s.total_word_count, 3_001);
        assert_eq!(s.average_word_count, 1_000);
        assert_eq!(s.total_visits, 16);
        // ties go to the first work seen
        assert_eq!(s.most_visited_work.title, "Two");
        assert_eq!(s.most_visited_work.visits, 7);
    }

    #[test]
    fn unavailable_works_are_excluded_from_every_count() {
        let mut gone = unavailable();
        gone.user_stats.visits = 1_000;
        let works = vec![work("1", "Here", "a"), gone];
        let s = summarize(&works);
        assert_eq!(s.total_works, 1);
        assert_eq!(s.total_authors, 1);
        assert_eq!(s.total_visits, 1);
        assert_eq!(s.most_visited_work.title, "Here");
        assert!(s.top_authors.iter().all(|a| a.name != "Anonymous"));
    }

    #[test]
    fn multi_fandom_works_count_toward_each_fandom() {
        let works = vec![
            with_fandoms(work("1", "A", "x"), &["Alpha", "Beta"]),
            with_fandoms(work("2", "B", "y"), &["Beta"]),
            with_fandoms(work("3", "C", "z"), &["Gamma"]),
        ];
        let s = summarize(&works);
        let names: Vec<_> = s.top_fandoms.iter().map(|f| (f.name.as_str(), f.count)).collect();
        assert_eq!(names, vec![("Beta", 2), ("Alpha", 1), ("Gamma", 1)]);
    }

    #[test]
    fn relationship_and_freeform_rankings() {
        let mut a = work("1", "A", "x");
        a.tags.relationships.push(NamedLink::new("A/B"));
        a.tags.freeforms.push(NamedLink::new("Angst"));
        let mut b = work("2", "B", "x");
        b.tags.relationships.push(NamedLink::new("A/B"));
        b.tags.relationships.push(NamedLink::new("C/D"));
        b.tags.freeforms.push(NamedLink::new("Fluff"));
        b.tags.freeforms.push(NamedLink::new("Angst"));

        let s = summarize(&[a, b]);
        assert_eq!(s.top_relationships[0].name, "A/B");
        assert_eq!(s.top_relationships[0].count, 2);
        assert_eq!(s.top_freeform_tags[0].name, "Angst");
        assert_eq!(s.top_freeform_tags.len(), 2);
    }

    #[test]
    fn top_lists_are_capped() {
        let works: Vec<_> = (0..50)
            .map(|i| with_fandoms(work(&i.to_string(), "T", "x"), &[format!("Fandom {i}").as_str()]))
            .collect();
        assert_eq!(summarize(&works).top_fandoms.len(), TOP_FANDOMS);
    }
}
