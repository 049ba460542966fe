use indicatif::{ProgressBar, ProgressStyle};
use moldmatch_core::ProgressReporter;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress reporter using indicatif spinners, one per phase.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut guard) = self.bar.lock() {
            if let Some(old) = guard.take() {
                old.finish_and_clear();
            }
            *guard = Some(pb);
        }
    }

    fn finish_bar(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_load_start(&self, path: &str) {
        self.start_spinner(format!("Reading {}...", path));
    }

    fn on_load_complete(&self, rows: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Workbook read: {} machines in {:.2}s",
            rows, duration_secs
        );
    }

    fn on_compare_start(&self) {
        self.start_spinner("Grouping comparable machines...".to_string());
    }

    fn on_compare_complete(&self, hydraulic_groups: usize, electric_groups: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Comparison complete: {} hydraulic, {} electric groups in {:.2}s",
            hydraulic_groups, electric_groups, duration_secs
        );
    }

    fn on_share_start(&self) {
        self.start_spinner("Generating share link...".to_string());
    }

    fn on_share_saved(&self, share_id: &str, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Share link generated: {} in {:.2}s",
            share_id, duration_secs
        );
    }

    fn on_share_failed(&self, message: &str) {
        self.finish_bar();
        eprintln!("  \x1b[33m!\x1b[0m Failed to generate share link: {}", message);
    }
}
