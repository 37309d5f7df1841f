//! Record builders shared by the unit tests.

use crate::types::{
    NamedLink, UNAVAILABLE_AUTHOR, UNAVAILABLE_TITLE, UNKNOWN, UserStats, Work, WorkStats,
};

pub(crate) fn work(id: &str, title: &str, author: &str) -> Work {
    Work {
        id: id.to_string(),
        title: title.to_string(),
        url: Some(format!("https://archiveofourown.org/works/{id}")),
        author: author.to_string(),
        author_url: Some(format!("https://archiveofourown.org/users/{author}")),
        rating: "General Audiences".to_string(),
        category: "Gen".to_string(),
        completion: "Complete Work".to_string(),
        stats: WorkStats {
            word_count: 1_000,
            kudos: 10,
            ..WorkStats::default()
        },
        user_stats: UserStats {
            last_visited: "2024-01-01".to_string(),
            visits: 1,
        },
        ..Work::default()
    }
}

pub(crate) fn with_fandoms(mut w: Work, fandoms: &[&str]) -> Work {
    w.fandoms = fandoms.iter().copied().map(NamedLink::new).collect();
    w
}

pub(crate) fn with_words(mut w: Work, word_count: u64) -> Work {
    w.stats.word_count = word_count;
    w
}

pub(crate) fn with_visits(mut w: Work, visits: u64) -> Work {
    w.user_stats.visits = visits;
    w
}

pub(crate) fn unavailable() -> Work {
    Work {
        title: UNAVAILABLE_TITLE.to_string(),
        author: UNAVAILABLE_AUTHOR.to_string(),
        rating: UNKNOWN.to_string(),
        category: UNKNOWN.to_string(),
        completion: UNKNOWN.to_string(),
        user_stats: UserStats {
            last_visited: UNKNOWN.to_string(),
            visits: 1,
        },
        ..Work::default()
    }
}
