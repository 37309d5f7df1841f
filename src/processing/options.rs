//! Distinct values offered by the filter panel.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::Work;

/// Every value a [`crate::types::FilterCriteria`] set could usefully hold for a collection.
///
/// Each list is sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailableFilters {
    pub fandoms: Vec<String>,
    pub authors: Vec<String>,
    pub ratings: Vec<String>,
    pub categories: Vec<String>,
    /// Relationship, character and freeform tags. Warnings have their own field on the work.
    pub tags: Vec<String>,
}

/// Collect the filter values present in `works`, skipping unavailable placeholders.
pub fn available_filters(works: &[Work]) -> AvailableFilters {
    let mut fandoms = BTreeSet::new();
    let mut authors = BTreeSet::new();
    let mut ratings = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut tags = BTreeSet::new();

    for work in works.iter().filter(|w| !w.is_unavailable()) {
        fandoms.extend(work.fandoms.iter().map(|f| f.name.as_str()));
        authors.insert(work.author.as_str());
        ratings.insert(work.rating.as_str());
        categories.extend(work.category_parts());
        tags.extend(
            work.tags
                .relationships
                .iter()
                .chain(&work.tags.characters)
                .chain(&work.tags.freeforms)
                .map(|t| t.name.as_str()),
        );
    }

    let owned = |set: BTreeSet<&str>| {
        set.into_iter()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    };
    AvailableFilters {
        fandoms: owned(fandoms),
        authors: owned(authors),
        ratings: owned(ratings),
        categories: owned(categories),
        tags: owned(tags),
    }
}
