/// Trait for reporting comparison progress.
///
/// CLI implements with tracing/indicatif; tests and embedders use `SilentReporter`.
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_load_start(&self, _path: &str) {}
    fn on_load_complete(&self, _rows: usize, _duration_secs: f64) {}
    fn on_compare_start(&self) {}
    fn on_compare_complete(&self, _hydraulic_groups: usize, _electric_groups: usize, _duration_secs: f64) {}
    fn on_share_start(&self) {}
    fn on_share_saved(&self, _share_id: &str, _duration_secs: f64) {}
    fn on_share_failed(&self, _message: &str) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
