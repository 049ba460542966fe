mod common;

use common::{sample_rows, write_workbook};
use moldmatch_core::share::ShareStore;
use moldmatch_core::{
    AppConfig, ComparisonEngine, ComparisonResult, Error, ProgressReporter, SilentReporter,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    workbook: PathBuf,
    db_path: String,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("machines.xlsx");
    write_workbook(&workbook, "Data", &sample_rows());
    let db_path = dir.path().join("shares.db").to_str().unwrap().to_string();
    Fixture {
        _dir: dir,
        workbook,
        db_path,
    }
}

fn engine(fixture: &Fixture, auto_share: bool) -> ComparisonEngine {
    ComparisonEngine::new(AppConfig {
        db_path: fixture.db_path.clone(),
        auto_share,
        ..AppConfig::default()
    })
}

#[derive(Default)]
struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn on_load_complete(&self, machines: usize, _elapsed: f64) {
        self.push(format!("loaded {}", machines));
    }
    fn on_compare_complete(&self, hydraulic_groups: usize, electric_groups: usize, _elapsed: f64) {
        self.push(format!("compared {} {}", hydraulic_groups, electric_groups));
    }
    fn on_share_saved(&self, _share_id: &str, _elapsed: f64) {
        self.push("shared".to_string());
    }
    fn on_share_failed(&self, _message: &str) {
        self.push("share failed".to_string());
    }
}

struct BrokenStore;

impl ShareStore for BrokenStore {
    fn put(&self, _share_id: &str, _result: &ComparisonResult) -> Result<(), Error> {
        Err(Error::Other("store offline".to_string()))
    }

    fn get(&self, _share_id: &str) -> Result<Option<ComparisonResult>, Error> {
        Ok(None)
    }
}

#[test]
fn test_run_builds_both_views() {
    let fixture = fixture();
    let reporter = RecordingReporter::default();
    let run = engine(&fixture, false).run(&fixture.workbook, &reporter).unwrap();

    assert_eq!(run.machines_read, 5);
    assert!(run.share.is_none());

    let representative = &run.views.representative;
    assert_eq!(representative.hydraulic.len(), 1);
    assert_eq!(representative.electric.len(), 1);
    let hydraulic = &representative.hydraulic[0];
    assert_eq!(hydraulic.reference_specs.clamping_force, 400.0);
    assert_eq!(hydraulic.reference_specs.shot_size, 50.0);
    assert_eq!(hydraulic.models("Engel").len(), 1);
    assert_eq!(hydraulic.models("Engel")[0].checked_time, "06.2023");
    assert_eq!(hydraulic.models("Haitian").len(), 1);

    let entire = &run.views.entire;
    assert_eq!(entire.hydraulic[0].models("Engel").len(), 2);
    assert_eq!(entire.machine_count(), 4);

    assert_eq!(reporter.events(), vec!["loaded 5", "compared 1 1"]);
}

#[test]
fn test_auto_share_round_trip() {
    let fixture = fixture();
    let engine = engine(&fixture, true);
    let run = engine.run(&fixture.workbook, &SilentReporter).unwrap();

    let record = run.share.expect("comparison should be shared");
    assert_eq!(
        engine.share_url(&record),
        format!("http://localhost:8080/share/{}", record.share_id)
    );

    let shared = engine.open_shared(&record.share_id).unwrap();
    assert_eq!(shared, run.views.representative);
}

#[test]
fn test_share_failure_keeps_results() {
    let fixture = fixture();
    let reporter = RecordingReporter::default();
    let run = engine(&fixture, false)
        .run_with_store(&fixture.workbook, Some(&BrokenStore), &reporter)
        .unwrap();

    assert!(run.share.is_none());
    assert_eq!(run.views.representative.hydraulic.len(), 1);
    assert_eq!(
        reporter.events(),
        vec!["loaded 5", "compared 1 1", "share failed"]
    );
}

#[test]
fn test_unopenable_share_store_is_not_fatal() {
    let fixture = fixture();
    let engine = ComparisonEngine::new(AppConfig {
        auto_share: true,
        ..AppConfig::default()
    })
    .with_db_path("/nonexistent-dir/nested/shares.db");
    let reporter = RecordingReporter::default();

    let run = engine.run(&fixture.workbook, &reporter).unwrap();
    assert!(run.share.is_none());
    assert_eq!(reporter.events().last().map(String::as_str), Some("share failed"));
}

#[test]
fn test_missing_sheet_aborts_run() {
    let fixture = fixture();
    let workbook = fixture._dir.path().join("wrong.xlsx");
    write_workbook(&workbook, "Machines", &sample_rows());
    let reporter = RecordingReporter::default();

    let err = engine(&fixture, true).run(&workbook, &reporter).unwrap_err();
    assert!(matches!(err, Error::MissingSheet(_)));
    assert!(reporter.events().is_empty());
}

#[test]
fn test_open_shared_unknown_id() {
    let fixture = fixture();
    let engine = engine(&fixture, false);
    assert!(matches!(
        engine.open_shared("6f9619ff-8b86-d011-b42d-00c04fc964ff"),
        Err(Error::ShareNotFound(_))
    ));
    assert!(matches!(engine.open_shared("garbage"), Err(Error::InvalidShareId(_))));
}
