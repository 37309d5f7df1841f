//! JSON import implementation.
//!
//! The only accepted shape is a single JSON array of work objects, as written by the history
//! exporter. The payload is validated structurally (see [`super::validate`]) before any element
//! is converted into a [`Work`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ImportError, ImportResult};
use crate::types::Work;

use super::validate::{ValidationMode, validate_history};

/// Import a history export file.
///
/// The whole file is read and decoded as UTF-8 before parsing.
pub fn import_json_from_path(path: impl AsRef<Path>, mode: ValidationMode) -> ImportResult<Vec<Work>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| ImportError::decode(format!("file is not valid UTF-8: {e}")))?;
    import_json_from_str(&text, mode)
}

/// Import a history export from an in-memory string.
pub fn import_json_from_str(input: &str, mode: ValidationMode) -> ImportResult<Vec<Work>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ImportError::decode("json input is empty"));
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| ImportError::decode(format!("invalid json: {e}")))?;
    import_json_value(value, mode)
}

/// Validate an already-decoded JSON value and convert it into works.
pub fn import_json_value(value: Value, mode: ValidationMode) -> ImportResult<Vec<Work>> {
    validate_history(&value, mode)?;

    let Value::Array(items) = value else {
        // validate_history only accepts arrays
        return Err(ImportError::schema("expected a JSON array of works"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx0, item)| {
            Work::deserialize(item)
                .map_err(|e| ImportError::schema(format!("work {}: {e}", idx0 + 1)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::import_json_from_str;
    use crate::error::ImportError;
    use crate::ingestion::validate::ValidationMode;

    const ONE_WORK: &str = r#"[{
        "id": "42",
        "title": "A Study in Pink",
        "author": "someone",
        "fandoms": [{"name": "Sherlock (TV)", "url": "/tags/Sherlock%20(TV)/works"}],
        "rating": "Mature",
        "category": "M/M",
        "completion": "Work in Progress",
        "tags": {"warnings": [], "relationships": [{"name": "A/B", "url": "/x"}], "characters": [], "freeforms": []},
        "stats": {"wordCount": 5000, "kudos": 12, "hits": 300, "publishDate": "2020-05-01"},
        "userStats": {"lastVisited": "2024-03-01", "visits": 3},
        "series": null
    }]"#;

    #[test]
    fn imports_a_single_work() {
        let works = import_json_from_str(ONE_WORK, ValidationMode::default()).unwrap();
        assert_eq!(works.len(), 1);
        let w = &works[0];
        assert_eq!(w.id, "42");
        assert_eq!(w.fandoms[0].name, "Sherlock (TV)");
        assert_eq!(w.tags.relationships[0].name, "A/B");
        assert_eq!(w.stats.word_count, 5000);
        assert_eq!(w.stats.hits, Some(300));
        assert_eq!(w.stats.comments, None);
        assert_eq!(w.stats.publish_date.as_deref(), Some("2020-05-01"));
        assert_eq!(w.user_stats.visits, 3);
        assert!(w.series.is_none());
    }

    #[test]
    fn empty_input_is_a_decode_error() {
        let err = import_json_from_str("   ", ValidationMode::default()).unwrap_err();
        assert!(matches!(err, ImportError::Decode { .. }));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = import_json_from_str("[{\"id\":", ValidationMode::default()).unwrap_err();
        assert!(matches!(err, ImportError::Decode { .. }));
        assert!(err.to_string().contains("invalid json"));
    }

    #[test]
    fn wrong_shape_is_a_schema_error() {
        let err = import_json_from_str(r#"{"works": []}"#, ValidationMode::default()).unwrap_err();
        assert!(matches!(err, ImportError::Schema { .. }));
    }

    #[test]
    fn elements_past_the_sample_may_omit_fields() {
        let mut items: Vec<String> = (0..10)
            .map(|_| ONE_WORK.trim().trim_start_matches('[').trim_end_matches(']').to_string())
            .collect();
        items.push(r#"{"title": "Sparse"}"#.to_string());
        let input = format!("[{}]", items.join(","));

        let works = import_json_from_str(&input, ValidationMode::default()).unwrap();
        assert_eq!(works.len(), 11);
        assert_eq!(works[10].title, "Sparse");
        assert_eq!(works[10].stats.word_count, 0);

        let err = import_json_from_str(&input, ValidationMode::Exhaustive).unwrap_err();
        assert!(err.to_string().contains("work 11"));
    }

    fn with_stats(stats: &str, extra: &str) -> String {
        format!(
            r#"[{{"id":"7","title":"Loose","author":"a","fandoms":[],"rating":"Teen","category":"Gen",
            "completion":"Complete Work","tags":{{"warnings":[],"relationships":[],"characters":[],"freeforms":[]}},
            "stats":{stats},"userStats":{{"lastVisited":"2024-01-01","visits":2.0}}{extra}}}]"#
        )
    }

    #[test]
    fn nulls_in_unchecked_fields_read_as_defaults() {
        let input = with_stats(
            r#"{"wordCount":10,"kudos":1,"hits":null,"language":null}"#,
            r#","summary":null,"warning":null,"pageNumber":null,"series":{"name":"S","part":null}"#,
        );
        let works = import_json_from_str(&input, ValidationMode::default()).unwrap();
        let w = &works[0];
        assert_eq!(w.summary, "");
        assert_eq!(w.warning, "");
        assert_eq!(w.page_number, None);
        assert_eq!(w.stats.hits, None);
        assert_eq!(w.stats.language, None);
        let series = w.series.as_ref().unwrap();
        assert_eq!(series.name, "S");
        assert_eq!(series.part, "");
    }

    #[test]
    fn counts_accept_any_json_number() {
        let input = with_stats(
            r#"{"wordCount":1234.0,"kudos":-3,"comments":2.6,"bookmarks":-1.5}"#,
            "",
        );
        let works = import_json_from_str(&input, ValidationMode::default()).unwrap();
        let stats = &works[0].stats;
        assert_eq!(stats.word_count, 1234);
        assert_eq!(stats.kudos, 0);
        assert_eq!(stats.comments, Some(3));
        assert_eq!(stats.bookmarks, Some(0));
        assert_eq!(works[0].user_stats.visits, 2);
    }

    #[test]
    fn wrong_scalar_kinds_past_the_sample_still_import() {
        let good = ONE_WORK.trim().trim_start_matches('[').trim_end_matches(']').to_string();
        let mut items = vec![good; 10];
        items.push(
            r#"{"id":99,"title":true,"stats":{"wordCount":"2500","kudos":"lots"},"userStats":null,"tags":null}"#
                .to_string(),
        );
        let input = format!("[{}]", items.join(","));

        let works = import_json_from_str(&input, ValidationMode::default()).unwrap();
        let late = &works[10];
        assert_eq!(late.id, "99");
        assert_eq!(late.title, "true");
        assert_eq!(late.stats.word_count, 2500);
        assert_eq!(late.stats.kudos, 0);
        assert_eq!(late.user_stats.visits, 0);
        assert!(late.tags.freeforms.is_empty());
    }
}
