use std::sync::{Arc, Mutex};

use ao3_history::ImportError;
use ao3_history::ingestion::{
    CompositeObserver, ImportContext, ImportObserver, ImportOptions, ImportSeverity, ImportSource,
    ImportSourceKind, ImportStats, ValidationMode, import,
};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<ImportStats>>,
    failures: Mutex<Vec<ImportSeverity>>,
    alerts: Mutex<Vec<ImportSeverity>>,
    kinds: Mutex<Vec<ImportSourceKind>>,
}

impl ImportObserver for RecordingObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        self.kinds.lock().unwrap().push(ctx.kind);
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, ctx: &ImportContext, severity: ImportSeverity, _error: &ImportError) {
        self.kinds.lock().unwrap().push(ctx.kind);
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &ImportContext, severity: ImportSeverity, _error: &ImportError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options(obs: &Arc<RecordingObserver>) -> ImportOptions {
    ImportOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: ImportSeverity::Critical,
        ..Default::default()
    }
}

#[test]
fn observer_receives_stats_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    import(&ImportSource::File("tests/fixtures/history.json".into()), &options(&obs)).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![ImportStats {
            works: 3,
            unavailable: 1,
            validated: 3,
        }]
    );
    assert!(successes[0].fully_validated());
    assert_eq!(obs.kinds.lock().unwrap().clone(), vec![ImportSourceKind::File]);
}

#[test]
fn stats_report_how_much_of_a_sampled_import_was_validated() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = ImportOptions {
        validation: ValidationMode::Sampled(2),
        ..options(&obs)
    };
    import(&ImportSource::File("tests/fixtures/history.json".into()), &opts).unwrap();

    let stats = obs.successes.lock().unwrap()[0];
    assert_eq!(stats.validated, 2);
    assert!(!stats.fully_validated());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = import(
        &ImportSource::File("tests/fixtures/does_not_exist.json".into()),
        &options(&obs),
    )
    .unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![ImportSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![ImportSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = import(&ImportSource::Text("not json".to_string()), &options(&obs)).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![ImportSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
    assert_eq!(obs.kinds.lock().unwrap().clone(), vec![ImportSourceKind::Text]);
}

#[test]
fn composite_observer_fans_out() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![a.clone() as Arc<dyn ImportObserver>, b.clone()]);
    let opts = ImportOptions {
        observer: Some(Arc::new(composite)),
        alert_at_or_above: ImportSeverity::Error,
        ..Default::default()
    };

    let _ = import(&ImportSource::DataParam("@@@".to_string()), &opts).unwrap_err();

    for obs in [&a, &b] {
        assert_eq!(obs.failures.lock().unwrap().clone(), vec![ImportSeverity::Error]);
        assert_eq!(obs.alerts.lock().unwrap().clone(), vec![ImportSeverity::Error]);
        assert_eq!(obs.kinds.lock().unwrap().clone(), vec![ImportSourceKind::Url]);
    }
}
