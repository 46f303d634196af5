//! Diagnosis result model
//!
//! Field order here is the column order of the result file.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::placeholders::is_no_match;

/// Result file columns, in order
pub const RESULT_COLUMNS: [&str; 13] = [
    "patient_email",
    "diagnosis",
    "icd_code",
    "prescription",
    "cpt_code",
    "Eye",
    "Onset_date",
    "Diagnosis_status",
    "SOD",
    "Severity",
    "Insurance",
    "Symptoms",
    "processed_at",
];

/// One output row per successfully processed patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Patient email, or the placeholder
    pub patient_email: String,
    /// Matched condition name
    pub diagnosis: String,
    /// Primary code, or the no-match code
    pub icd_code: String,
    /// Prescription of the matched condition
    pub prescription: String,
    /// Secondary billing code, or the no-match code
    pub cpt_code: String,
    /// Affected eye/side
    #[serde(rename = "Eye")]
    pub eye: String,
    /// Onset date as given by the patient record
    #[serde(rename = "Onset_date")]
    pub onset_date: String,
    /// Diagnosis status label
    #[serde(rename = "Diagnosis_status")]
    pub diagnosis_status: String,
    /// Onset-duration label
    #[serde(rename = "SOD")]
    pub sod: String,
    /// Severity label
    #[serde(rename = "Severity")]
    pub severity: String,
    /// Insurance label
    #[serde(rename = "Insurance")]
    pub insurance: String,
    /// Extracted symptoms, comma separated
    #[serde(rename = "Symptoms")]
    pub symptoms: String,
    /// When the record was processed
    pub processed_at: NaiveDateTime,
}

impl DiagnosisResult {
    /// Whether a reference condition was selected for this patient
    #[must_use]
    pub fn is_matched(&self) -> bool {
        !is_no_match(&self.icd_code)
    }
}
