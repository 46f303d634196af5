//! Domain models for the diagnosis pipeline
//!
//! Inputs ([`PatientRecord`], [`ConditionEntry`]) are read-only for a run;
//! a [`DiagnosisResult`] is produced once per processed patient.

pub mod condition;
pub mod patient;
pub mod placeholders;
pub mod result;
pub mod symptom;

// Re-export commonly used types
pub use condition::{ConditionEntry, ReferenceTable};
pub use patient::PatientRecord;
pub use placeholders::{NO_MATCH_CODE, UNKNOWN};
pub use result::DiagnosisResult;
pub use symptom::SymptomSet;
