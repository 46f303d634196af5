//! Batch diagnosis
//!
//! Runs extraction, matching and code resolution over every patient record
//! of a batch. A record without symptoms is counted and skipped; nothing a
//! single record contains can fail the batch.

use chrono::{Local, NaiveDateTime};
use log::{debug, info};

use crate::algorithm::matching::extraction::extract_symptoms;
use crate::algorithm::matching::{CodeResolver, MatchOutcome, Matcher};
use crate::config::MatcherConfig;
use crate::error::Result;
use crate::models::patient::{EMAIL_ALIASES, EYE_ALIASES, ONSET_ALIASES};
use crate::models::placeholders::or_unknown;
use crate::models::{DiagnosisResult, PatientRecord, ReferenceTable, SymptomSet};
use crate::utils::logging::{create_batch_progress_bar, finish_progress_bar, log_record_skipped};

/// Results and counters of one batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// One result per successfully processed record, in input order
    pub results: Vec<DiagnosisResult>,
    /// Number of input records
    pub total_records: usize,
    /// Number of records that produced a result
    pub processed_count: usize,
    /// Number of records skipped for lack of symptoms
    pub error_count: usize,
}

impl BatchOutcome {
    /// Number of processed records a condition was accepted for
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_matched()).count()
    }
}

/// Diagnosis pipeline prepared for one reference table
#[derive(Debug)]
pub struct DiagnosisPipeline<'a> {
    matcher: Matcher<'a>,
    resolver: CodeResolver,
    show_progress: bool,
}

impl<'a> DiagnosisPipeline<'a> {
    /// Prepare a pipeline for a reference table
    pub fn new(table: &'a ReferenceTable, config: MatcherConfig) -> Result<Self> {
        Ok(Self {
            matcher: Matcher::new(table, config)?,
            resolver: CodeResolver::new(table),
            show_progress: false,
        })
    }

    /// Draw a progress bar while running
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Diagnose one record
    ///
    /// Returns `None` when the record has no recognizable symptoms.
    #[must_use]
    pub fn diagnose(
        &self,
        record: &PatientRecord,
        processed_at: NaiveDateTime,
    ) -> Option<DiagnosisResult> {
        let symptoms = extract_symptoms(record);
        if symptoms.is_empty() {
            return None;
        }

        let outcome = self.matcher.find_best_match(&symptoms);
        let cpt_code = self.resolver.resolve(&outcome.icd_code);
        Some(assemble_result(record, &symptoms, outcome, cpt_code, processed_at))
    }

    /// Diagnose every record in input order
    #[must_use]
    pub fn run(&self, patients: &[PatientRecord]) -> BatchOutcome {
        let pb = create_batch_progress_bar(patients.len() as u64, self.show_progress);
        let mut outcome = BatchOutcome {
            results: Vec::with_capacity(patients.len()),
            total_records: patients.len(),
            ..Default::default()
        };

        for (row, record) in patients.iter().enumerate() {
            match self.diagnose(record, Local::now().naive_local()) {
                Some(result) => {
                    debug!("Record {row}: {} -> {}", result.patient_email, result.diagnosis);
                    outcome.processed_count += 1;
                    outcome.results.push(result);
                }
                None => {
                    log_record_skipped(row);
                    outcome.error_count += 1;
                }
            }
            pb.inc(1);
        }

        finish_progress_bar(&pb, "Diagnosis complete");
        info!(
            "Processed {} of {} records ({} matched, {} errors)",
            outcome.processed_count,
            outcome.total_records,
            outcome.matched_count(),
            outcome.error_count
        );

        outcome
    }
}

fn assemble_result(
    record: &PatientRecord,
    symptoms: &SymptomSet,
    outcome: MatchOutcome,
    cpt_code: String,
    processed_at: NaiveDateTime,
) -> DiagnosisResult {
    DiagnosisResult {
        patient_email: or_unknown(record.first_present(EMAIL_ALIASES)),
        diagnosis: outcome.condition,
        icd_code: outcome.icd_code,
        prescription: outcome.prescription,
        cpt_code,
        eye: or_unknown(record.first_present(EYE_ALIASES)),
        onset_date: or_unknown(record.first_present(ONSET_ALIASES)),
        diagnosis_status: outcome.diagnosis_status,
        sod: outcome.sod,
        severity: outcome.severity,
        insurance: outcome.insurance,
        symptoms: symptoms.display_string(),
        processed_at,
    }
}

/// Run a batch against a reference table in one call
pub fn process_batch(
    patients: &[PatientRecord],
    table: &ReferenceTable,
    config: MatcherConfig,
) -> Result<BatchOutcome> {
    Ok(DiagnosisPipeline::new(table, config)?.run(patients))
}
