//! Batch diagnosis pipeline
//!
//! Applies extraction, matching and code resolution to every patient record
//! of a batch and aggregates the outcome.

pub mod batch;
pub mod runner;
pub mod summary;
pub mod validation;

// Re-export key types
pub use batch::{BatchOutcome, DiagnosisPipeline, process_batch};
pub use runner::{BatchReport, run_batch};
pub use summary::{BatchSummary, render_results};
pub use validation::validate_patient_records;
