//! Progress reporting for batch runs
//!
//! Uses the indicatif crate. A hidden bar is returned when progress output
//! is disabled, so callers never need to branch.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for the batch progress bar
pub const DEFAULT_BATCH_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create the progress bar for a batch of patient records
///
/// # Arguments
/// * `length` - Number of records in the batch
/// * `visible` - Whether to draw the bar at all
#[must_use]
pub fn create_batch_progress_bar(length: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(length);
    let style = ProgressStyle::with_template(DEFAULT_BATCH_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message("Diagnosing patients");
    pb
}

/// Finish a progress bar with a completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(message.to_string());
}
