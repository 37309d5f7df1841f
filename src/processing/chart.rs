//! Chart-ready distributions.
//!
//! The output mirrors the `{ labels, datasets: [{ label, data, backgroundColor }] }` shape that
//! Chart.js consumes, so it can be serialised and handed straight to a renderer. Placeholder
//! records for unavailable works are left out.

use serde::Serialize;

use crate::types::{UNKNOWN, Work};

use super::summary::Tally;

/// Number of fandoms shown in [`ChartSet::fandom_distribution`].
pub const TOP_CHART_FANDOMS: usize = 10;

/// Colours assigned to the fandom bars, in rank order.
pub const FANDOM_PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#8AC24A", "#F44336",
    "#9C27B0", "#3F51B5",
];

/// Bar colour of the word-count histogram.
pub const WORD_COUNT_COLOR: &str = "#36A2EB";

/// Colour for ratings outside the archive's five standard ratings.
pub const FALLBACK_RATING_COLOR: &str = "#9966FF";

/// Word-count buckets as `(label, exclusive upper bound)`; the last bucket is open-ended.
pub const WORD_COUNT_BUCKETS: [(&str, Option<u64>); 7] = [
    ("< 1K", Some(1_000)),
    ("1K-5K", Some(5_000)),
    ("5K-10K", Some(10_000)),
    ("10K-25K", Some(25_000)),
    ("25K-50K", Some(50_000)),
    ("50K-100K", Some(100_000)),
    ("> 100K", None),
];

/// Category tokens looked for in a work's category string, in bucket order.
pub const CATEGORY_TOKENS: [&str; 5] = ["M/M", "F/F", "F/M", "Gen", "Multi"];
pub const OTHER_CATEGORY: &str = "Other";
pub const NO_CATEGORY: &str = "No Category";

/// Bar colours: a single colour for every bar, or one per bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerBar(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: Colors,
}

/// One chart: bar labels plus the datasets plotted against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    fn single(label: &str, bars: Vec<(String, u64)>, colors: Colors) -> Self {
        let (labels, data) = bars.into_iter().unzip();
        Self {
            labels,
            datasets: vec![Dataset {
                label: label.to_string(),
                data,
                background_color: colors,
            }],
        }
    }

    /// Counts of the first dataset keyed by label, handy for lookups.
    pub fn count_of(&self, label: &str) -> Option<u64> {
        let idx = self.labels.iter().position(|l| l == label)?;
        self.datasets.first()?.data.get(idx).copied()
    }
}

/// All four distributions shown on the visualisations view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSet {
    pub fandom_distribution: ChartData,
    pub word_count_distribution: ChartData,
    pub rating_distribution: ChartData,
    pub category_distribution: ChartData,
}

impl ChartSet {
    /// The structure returned when there is nothing to chart.
    pub fn empty() -> Self {
        let per_bar = || Colors::PerBar(Vec::new());
        Self {
            fandom_distribution: ChartData::single("Fandoms", Vec::new(), per_bar()),
            word_count_distribution: ChartData::single(
                "Word Count",
                Vec::new(),
                Colors::Single(String::new()),
            ),
            rating_distribution: ChartData::single("Ratings", Vec::new(), per_bar()),
            category_distribution: ChartData::single("Categories", Vec::new(), per_bar()),
        }
    }
}

/// Build every distribution for `works`.
pub fn build_chart_data(works: &[Work]) -> ChartSet {
    let valid: Vec<&Work> = works.iter().filter(|w| !w.is_unavailable()).collect();
    if valid.is_empty() {
        return ChartSet::empty();
    }

    ChartSet {
        fandom_distribution: fandom_distribution(&valid),
        word_count_distribution: word_count_distribution(&valid),
        rating_distribution: rating_distribution(&valid),
        category_distribution: category_distribution(&valid),
    }
}

fn fandom_distribution(works: &[&Work]) -> ChartData {
    let mut tally = Tally::default();
    for f in works.iter().flat_map(|w| &w.fandoms) {
        tally.add(&f.name);
    }
    let top = tally.ranked(TOP_CHART_FANDOMS);
    let colors = FANDOM_PALETTE
        .iter()
        .cycle()
        .take(top.len())
        .map(|c| c.to_string())
        .collect();
    let bars = top.into_iter().map(|e| (e.name, e.count)).collect();
    ChartData::single("Works per Fandom", bars, Colors::PerBar(colors))
}

/// Index into [`WORD_COUNT_BUCKETS`] for a word count. Lower bounds are inclusive.
pub fn word_count_bucket(word_count: u64) -> usize {
    WORD_COUNT_BUCKETS
        .iter()
        .position(|(_, upper)| upper.is_none_or(|upper| word_count < upper))
        .unwrap_or(WORD_COUNT_BUCKETS.len() - 1)
}

fn word_count_distribution(works: &[&Work]) -> ChartData {
    let mut counts = [0u64; WORD_COUNT_BUCKETS.len()];
    for w in works {
        counts[word_count_bucket(w.stats.word_count)] += 1;
    }
    let bars = WORD_COUNT_BUCKETS
        .iter()
        .zip(counts)
        .map(|((label, _), n)| (label.to_string(), n))
        .collect();
    ChartData::single(
        "Number of Works",
        bars,
        Colors::Single(WORD_COUNT_COLOR.to_string()),
    )
}

/// Colour for a rating bar.
pub fn rating_color(rating: &str) -> &'static str {
    match rating {
        "General Audiences" => "#4BC0C0",
        "Teen And Up Audiences" => "#FFCE56",
        "Mature" => "#FF9F40",
        "Explicit" => "#FF6384",
        "Not Rated" => "#9966FF",
        _ => FALLBACK_RATING_COLOR,
    }
}

fn rating_distribution(works: &[&Work]) -> ChartData {
    let mut tally = Tally::default();
    for w in works {
        tally.add(&w.rating);
    }
    let entries = tally.into_entries();
    let colors = entries
        .iter()
        .map(|e| rating_color(&e.name).to_string())
        .collect();
    let bars = entries.into_iter().map(|e| (e.name, e.count)).collect();
    ChartData::single("Works by Rating", bars, Colors::PerBar(colors))
}

/// Colour for a category bar.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "M/M" => "#36A2EB",
        "F/F" => "#FF6384",
        "F/M" => "#FFCE56",
        "Gen" => "#4BC0C0",
        "Multi" => "#9966FF",
        OTHER_CATEGORY => "#FF9F40",
        NO_CATEGORY => "#BBBBBB",
        _ => "#999999",
    }
}

/// Buckets a category string increments.
///
/// A compound string such as `"F/F, Gen"` lands in every bucket whose token it contains, so
/// bucket totals can exceed the number of works.
pub fn category_buckets(category: &str) -> Vec<&'static str> {
    let category = category.trim();
    if category.is_empty() || category == UNKNOWN || category == "No category" {
        return vec![NO_CATEGORY];
    }
    let found: Vec<&'static str> = CATEGORY_TOKENS
        .into_iter()
        .filter(|token| category.contains(token))
        .collect();
    if found.is_empty() {
        vec![OTHER_CATEGORY]
    } else {
        found
    }
}

fn category_distribution(works: &[&Work]) -> ChartData {
    let order: Vec<&str> = CATEGORY_TOKENS
        .into_iter()
        .chain([OTHER_CATEGORY, NO_CATEGORY])
        .collect();
    let mut counts = vec![0u64; order.len()];
    for w in works {
        for bucket in category_buckets(&w.category) {
            if let Some(i) = order.iter().position(|b| *b == bucket) {
                counts[i] += 1;
            }
        }
    }

    let mut bars: Vec<(String, u64)> = order
        .into_iter()
        .zip(counts)
        .filter(|(_, n)| *n > 0)
        .map(|(name, n)| (name.to_string(), n))
        .collect();
    bars.sort_by(|a, b| b.1.cmp(&a.1));

    let colors = bars
        .iter()
        .map(|(name, _)| category_color(name).to_string())
        .collect();
    ChartData::single("Work Categories", bars, Colors::PerBar(colors))
}
