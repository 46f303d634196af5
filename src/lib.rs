//! A Rust library for matching patient symptom records against an ICD/CPT
//! reference table and producing a diagnosis result file.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{MatcherConfig, PipelineConfig};
pub use error::{DxError, Result};
pub use models::{
    ConditionEntry, DiagnosisResult, NO_MATCH_CODE, PatientRecord, ReferenceTable, SymptomSet,
    UNKNOWN,
};

// Matching
pub use algorithm::matching::{
    CodeResolver, MatchOutcome, MatchStrategy, Matcher, extract_symptoms, jaccard_similarity,
    resolve_secondary_code,
};

// Batch processing
pub use algorithm::pipeline::{
    BatchOutcome, BatchReport, BatchSummary, DiagnosisPipeline, process_batch, render_results,
    run_batch, validate_patient_records,
};

// File access
pub use utils::io::{
    export_results, read_patient_records, read_reference_table, read_results, write_results,
};
