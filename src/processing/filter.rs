//! Search-term and criteria filtering for work collections.

use crate::types::{CompletionStatus, FilterCriteria, Work};

/// Returns the works matching `search_term` and every constraint in `criteria`.
///
/// Input order is preserved; the input is not modified.
pub fn filter_works(works: &[Work], search_term: &str, criteria: &FilterCriteria) -> Vec<Work> {
    let search = SearchTerm::new(search_term);
    works
        .iter()
        .filter(|w| search.matches(w) && criteria.matches(w))
        .cloned()
        .collect()
}

/// Case-insensitive free-text search over title, author, fandoms and tags.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    needle: Option<String>,
}

impl SearchTerm {
    /// A blank (or whitespace-only) term matches everything.
    pub fn new(term: &str) -> Self {
        let needle = if term.trim().is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        Self { needle }
    }

    pub fn matches(&self, work: &Work) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        let hit = |s: &str| s.to_lowercase().contains(needle);

        hit(&work.title)
            || hit(&work.author)
            || work.fandoms.iter().any(|f| hit(&f.name))
            || work.tags.iter_all().any(|t| hit(&t.name))
    }
}

impl FilterCriteria {
    /// Whether `work` satisfies every constraint. Checks stop at the first failure.
    pub fn matches(&self, work: &Work) -> bool {
        if !self.fandoms.is_empty() && !work.fandoms.iter().any(|f| self.fandoms.contains(&f.name))
        {
            return false;
        }
        if !self.authors.is_empty() && !self.authors.contains(&work.author) {
            return false;
        }
        if !self.ratings.is_empty() && !self.ratings.contains(&work.rating) {
            return false;
        }
        if !self.categories.is_empty()
            && !work.category_parts().any(|part| self.categories.contains(part))
        {
            return false;
        }

        let words = work.stats.word_count;
        if words < self.min_word_count || !self.max_word_count.admits(words) {
            return false;
        }
        let visits = work.user_stats.visits;
        if visits < self.min_visits || !self.max_visits.admits(visits) {
            return false;
        }

        match self.completion {
            CompletionStatus::All => {}
            CompletionStatus::Complete if !work.is_complete() => return false,
            CompletionStatus::Incomplete if work.is_complete() => return false,
            _ => {}
        }

        if !self.tags.is_empty() && !work.tags.iter_all().any(|t| self.tags.contains(&t.name)) {
            return false;
        }

        true
    }
}
