//! Progress reporting utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Progress reporter shared by all sheet scans of one comparison
#[derive(Debug)]
pub struct ProgressReporter {
    pub sheets_pb: Option<ProgressBar>,
    start_time: Instant,
}

impl ProgressReporter {
    /// Create a progress bar counting finished sheets
    pub fn new_for_compare(sheet_count: u64) -> Self {
        Self {
            sheets_pb: Some(create_progress_bar(sheet_count, "Comparing sheets")),
            start_time: Instant::now(),
        }
    }

    /// Create minimal progress reporter (no progress bars)
    pub fn new_minimal() -> Self {
        Self {
            sheets_pb: None,
            start_time: Instant::now(),
        }
    }

    /// Record one finished sheet; callable from any scan thread
    pub fn sheet_finished(&self, sheet: &str) {
        if let Some(pb) = &self.sheets_pb {
            pb.set_message(sheet.to_string());
            pb.inc(1);
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Remove the bar before results are printed
    pub fn finish(&mut self) {
        if let Some(pb) = self.sheets_pb.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Create a progress bar with known total
fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>4}/{len:4} {msg}")
            .expect("Invalid progress template")
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
