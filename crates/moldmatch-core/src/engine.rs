use crate::comparison;
use crate::config::AppConfig;
use crate::error::Error;
use crate::ingest;
use crate::model::{ComparisonResult, ComparisonViews, MachineRecord};
use crate::progress::ProgressReporter;
use crate::share::{self, ShareRecord, ShareStore};
use crate::storage::Database;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub struct ComparisonEngine {
    config: AppConfig,
    db_path: String,
}

#[derive(Debug)]
pub struct ComparisonRun {
    pub views: ComparisonViews,
    /// Absent when sharing is off or the save failed.
    pub share: Option<ShareRecord>,
    pub machines_read: usize,
    pub load_duration: Duration,
    pub compare_duration: Duration,
    pub share_duration: Duration,
}

impl ComparisonEngine {
    pub fn new(config: AppConfig) -> Self {
        let db_path = config.db_path.clone();
        Self { config, db_path }
    }

    pub fn with_db_path(mut self, path: &str) -> Self {
        self.db_path = path.to_string();
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn open_database(&self) -> Result<Database, Error> {
        Ok(Database::open(&self.db_path)?)
    }

    pub fn load(&self, path: &Path) -> Result<Vec<MachineRecord>, Error> {
        ingest::read_machine_records(path, &self.config.sheet_name)
    }

    /// Run the full comparison pipeline:
    /// 1. Read the machine sheet (any failure aborts)
    /// 2. Build the representative and entire views
    /// 3. Share the representative view when `auto_share` is set
    pub fn run(&self, path: &Path, reporter: &dyn ProgressReporter) -> Result<ComparisonRun, Error> {
        let mut run = self.run_with_store(path, None, reporter)?;
        if self.config.auto_share {
            let share_start = Instant::now();
            run.share = match self.open_database() {
                Ok(db) => self.share_soft(&db, &run.views.representative, reporter),
                Err(e) => {
                    error!("Error opening share store {}: {}", self.db_path, e);
                    reporter.on_share_failed(&e.to_string());
                    None
                }
            };
            run.share_duration = share_start.elapsed();
        }
        Ok(run)
    }

    /// Same pipeline with an explicit share store; `None` skips sharing.
    pub fn run_with_store(
        &self,
        path: &Path,
        store: Option<&dyn ShareStore>,
        reporter: &dyn ProgressReporter,
    ) -> Result<ComparisonRun, Error> {
        // Phase 1: Load
        let path_text = path.display().to_string();
        info!("Reading {}...", path_text);
        reporter.on_load_start(&path_text);
        let load_start = Instant::now();
        let machines = self.load(path)?;
        let load_duration = load_start.elapsed();
        reporter.on_load_complete(machines.len(), load_duration.as_secs_f64());

        // Phase 2: Compare
        info!("Comparing {} machines...", machines.len());
        reporter.on_compare_start();
        let compare_start = Instant::now();
        let views = comparison::compare_views(&machines);
        let compare_duration = compare_start.elapsed();
        debug!(
            "Comparison completed in {:.2}s: {} hydraulic groups, {} electric groups",
            compare_duration.as_secs_f64(),
            views.representative.hydraulic.len(),
            views.representative.electric.len(),
        );
        reporter.on_compare_complete(
            views.representative.hydraulic.len(),
            views.representative.electric.len(),
            compare_duration.as_secs_f64(),
        );

        // Phase 3: Share
        let share_start = Instant::now();
        let share = match store {
            Some(store) => self.share_soft(store, &views.representative, reporter),
            None => None,
        };
        let share_duration = share_start.elapsed();

        Ok(ComparisonRun {
            views,
            share,
            machines_read: machines.len(),
            load_duration,
            compare_duration,
            share_duration,
        })
    }

    /// Persist a view; failures are logged and reported, never returned.
    fn share_soft(
        &self,
        store: &dyn ShareStore,
        result: &ComparisonResult,
        reporter: &dyn ProgressReporter,
    ) -> Option<ShareRecord> {
        reporter.on_share_start();
        let start = Instant::now();
        match share::publish(store, result) {
            Ok(record) => {
                reporter.on_share_saved(&record.share_id, start.elapsed().as_secs_f64());
                Some(record)
            }
            Err(e) => {
                error!("Error saving comparison results: {}", e);
                reporter.on_share_failed(&e.to_string());
                None
            }
        }
    }

    pub fn open_shared(&self, share_id: &str) -> Result<ComparisonResult, Error> {
        let db = self.open_database()?;
        share::fetch_shared(&db, share_id)
    }

    pub fn share_url(&self, record: &ShareRecord) -> String {
        record.url(&self.config.share_origin)
    }
}
