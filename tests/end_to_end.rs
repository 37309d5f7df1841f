use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ao3_history::export::{ExportFormat, ExportOptions};
use ao3_history::ingestion::{ImportOptions, ImportSource};
use ao3_history::processing::chart::NO_CATEGORY;
use ao3_history::session::{LoadState, Session, View};
use ao3_history::types::{CompletionStatus, FilterCriteria, SortDirection, SortField, SortSpec};

fn tmp_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("ao3-history-{name}-{nanos}.csv"))
}

fn loaded_session() -> Session {
    let mut session = Session::default();
    assert!(session.load(
        &ImportSource::File("tests/fixtures/history.json".into()),
        &ImportOptions::default()
    ));
    session
}

#[test]
fn import_search_clear_export() {
    let mut session = loaded_session();
    assert_eq!(session.load_state(), LoadState::Loaded);
    assert_eq!(session.current_page().works.len(), 3);

    session.set_search_term("long way");
    let page = session.current_page();
    assert_eq!(page.works.len(), 1);
    assert_eq!(page.works[0].id, "30412345");

    session.set_search_term("");
    assert_eq!(session.current_page().works.len(), 3);

    let path = tmp_file("e2e");
    session
        .export_to_path(ExportFormat::Csv, &path, &ExportOptions::default())
        .unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[3].starts_with("Deleted Work,"));
    assert!(!text.contains("Unknown Title"));
    std::fs::remove_file(path).ok();
}

#[test]
fn filters_and_sort_drive_the_table() {
    let mut session = loaded_session();
    session.set_criteria(FilterCriteria {
        fandoms: ["Good Omens (TV)".to_string()].into(),
        completion: CompletionStatus::Complete,
        ..FilterCriteria::default()
    });
    let titles: Vec<String> = session.visible_works().into_iter().map(|w| w.title).collect();
    assert_eq!(titles, vec!["The Long Way Home"]);

    session.clear_filters();
    session.set_sort(SortSpec::new(SortField::LastVisited, SortDirection::Ascending));
    let ids: Vec<String> = session.visible_works().into_iter().map(|w| w.id).collect();
    // "Unknown" is not a date and sorts as the epoch
    assert_eq!(ids, vec!["", "41122334", "30412345"]);
}

#[test]
fn stats_and_charts_skip_the_unavailable_record() {
    let mut session = loaded_session();
    session.set_view(View::Stats);
    let stats = session.summary();
    assert_eq!(stats.total_works, 2);
    assert_eq!(stats.total_word_count, 48_410);
    assert_eq!(stats.average_word_count, 24_205);
    assert_eq!(stats.most_visited_work.title, "The Long Way Home");
    assert_eq!(stats.top_fandoms[0].name, "Good Omens (TV)");
    assert_eq!(stats.top_fandoms[0].count, 2);

    let charts = session.chart_data();
    assert_eq!(charts.category_distribution.count_of("M/M"), Some(1));
    assert_eq!(charts.category_distribution.count_of("F/F"), Some(1));
    assert_eq!(charts.category_distribution.count_of("Gen"), Some(1));
    assert_eq!(charts.category_distribution.count_of(NO_CATEGORY), None);
    assert_eq!(charts.word_count_distribution.count_of("25K-50K"), Some(1));

    let filters = session.available_filters();
    assert_eq!(filters.authors, vec!["frostbite", "wanderer"]);
    assert_eq!(filters.categories, vec!["F/F", "Gen", "M/M"]);
}

#[test]
fn failed_reimport_keeps_the_collection() {
    let mut session = loaded_session();
    let replaced = session.load(
        &ImportSource::File("tests/fixtures/not_history.json".into()),
        &ImportOptions::default(),
    );
    assert!(!replaced);
    assert_eq!(session.load_state(), LoadState::Failed);
    assert_eq!(session.works().len(), 3);
    assert!(session.error().unwrap().starts_with("Invalid data structure"));
}
