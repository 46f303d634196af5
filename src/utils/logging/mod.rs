//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging and progress tracking.

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use self::log::{log_load_complete, log_load_start, log_record_skipped, log_results_written};
pub use self::progress::{create_batch_progress_bar, finish_progress_bar};
