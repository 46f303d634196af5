//! File-to-file batch run
//!
//! Loads the reference table and patient file, diagnoses every patient and
//! replaces the result file. The result file is only written after the
//! whole batch has been processed; a failed run leaves it untouched.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::info;

use crate::algorithm::pipeline::batch::{BatchOutcome, DiagnosisPipeline};
use crate::algorithm::pipeline::summary::BatchSummary;
use crate::algorithm::pipeline::validation::validate_patient_records;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::utils::io::{read_patient_records, read_reference_table, write_results};

/// What a completed batch run did
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Results and counters
    pub outcome: BatchOutcome,
    /// Counts for presentation
    pub summary: BatchSummary,
    /// Where the results were written
    pub output_path: PathBuf,
    /// Wall time of the run
    pub elapsed: Duration,
}

/// Run one batch from files to the result file
///
/// # Errors
/// Fails when the configuration is invalid, when either input is absent or
/// empty, when the patient file has no symptom column, or when the result
/// file cannot be written.
pub fn run_batch(config: &PipelineConfig) -> Result<BatchReport> {
    let start = Instant::now();
    config.validate()?;

    let table = read_reference_table(&config.reference_path)?;
    let patients = read_patient_records(&config.patient_path)?;
    validate_patient_records(&patients)?;

    info!(
        "Diagnosing {} patient records against {} reference conditions ({} usable)",
        patients.len(),
        table.len(),
        table.candidate_count()
    );

    let pipeline =
        DiagnosisPipeline::new(&table, config.matcher.clone())?.with_progress(config.show_progress);
    let outcome = pipeline.run(&patients);

    write_results(&config.output_path, &outcome.results)?;

    let summary = BatchSummary::from_results(&outcome.results);
    let elapsed = start.elapsed();
    info!(
        "Batch complete in {:.2?}: {} records, {} processed, {} errors",
        elapsed, outcome.total_records, outcome.processed_count, outcome.error_count
    );

    Ok(BatchReport {
        outcome,
        summary,
        output_path: config.output_path.clone(),
        elapsed,
    })
}
