//! Log lines for the stages of a diagnosis run

use std::path::Path;
use std::time::Duration;

/// An input file is about to be read
pub fn log_load_start(input: &str, path: &Path) {
    log::info!("Loading {input} from {}", path.display());
}

/// An input file was read into `count` records
pub fn log_load_complete(input: &str, path: &Path, count: usize, elapsed: Duration) {
    log::info!(
        "Loaded {count} {input} records from {} in {elapsed:?}",
        path.display()
    );
}

/// The result file was replaced
pub fn log_results_written(path: &Path, count: usize, elapsed: Duration) {
    log::info!(
        "Wrote {count} diagnosis results to {} in {elapsed:?}",
        path.display()
    );
}

/// A patient record was left out of the results
///
/// `row` is the zero-based position of the record in its input file.
pub fn log_record_skipped(row: usize) {
    log::warn!("Record {row} has no recognizable symptoms, skipping");
}
