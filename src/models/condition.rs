//! Reference condition model
//!
//! One row of the ICD/CPT reference table. Every column apart from the
//! symptoms is optional per row; a matched row with a missing column reports
//! the shared placeholder for that column.

use serde::Deserialize;
use smallvec::SmallVec;

use crate::error::{DxError, Result};

/// Symptom columns of the reference table, in scan order
pub const REFERENCE_SYMPTOM_COLUMNS: [&str; 3] = ["symptom1", "symptom2", "symptom3"];

/// Columns the reference table must have besides at least one symptom column
pub const REFERENCE_REQUIRED_COLUMNS: [&str; 2] = ["condition", "icd_code"];

/// One row of the reference table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConditionEntry {
    /// Condition name
    pub condition: Option<String>,
    /// Primary (ICD) code
    pub icd_code: Option<String>,
    /// Secondary billing (CPT) code
    pub cpt_code: Option<String>,
    /// First reference symptom
    pub symptom1: Option<String>,
    /// Second reference symptom
    pub symptom2: Option<String>,
    /// Third reference symptom
    pub symptom3: Option<String>,
    /// Recommended prescription
    pub prescription: Option<String>,
    /// Severity label
    pub severity: Option<String>,
    /// Onset-duration label
    #[serde(rename = "SOD")]
    pub sod: Option<String>,
    /// Diagnosis status label
    pub diagnosis_status: Option<String>,
    /// Insurance label
    #[serde(rename = "Insurance")]
    pub insurance: Option<String>,
}

impl ConditionEntry {
    /// Create an entry with a name, primary code and reference symptoms
    #[must_use]
    pub fn new(condition: &str, icd_code: &str, symptoms: &[&str]) -> Self {
        let mut entry = Self {
            condition: Some(condition.to_string()),
            icd_code: Some(icd_code.to_string()),
            ..Default::default()
        };
        let slots = [&mut entry.symptom1, &mut entry.symptom2, &mut entry.symptom3];
        for (slot, symptom) in slots.into_iter().zip(symptoms) {
            *slot = Some((*symptom).to_string());
        }
        entry
    }

    /// Set the secondary billing code
    #[must_use]
    pub fn with_cpt_code(mut self, code: &str) -> Self {
        self.cpt_code = Some(code.to_string());
        self
    }

    /// Set the prescription
    #[must_use]
    pub fn with_prescription(mut self, prescription: &str) -> Self {
        self.prescription = Some(prescription.to_string());
        self
    }

    /// Set the severity label
    #[must_use]
    pub fn with_severity(mut self, severity: &str) -> Self {
        self.severity = Some(severity.to_string());
        self
    }

    /// Set the onset-duration label
    #[must_use]
    pub fn with_sod(mut self, sod: &str) -> Self {
        self.sod = Some(sod.to_string());
        self
    }

    /// Set the diagnosis status label
    #[must_use]
    pub fn with_diagnosis_status(mut self, status: &str) -> Self {
        self.diagnosis_status = Some(status.to_string());
        self
    }

    /// Set the insurance label
    #[must_use]
    pub fn with_insurance(mut self, insurance: &str) -> Self {
        self.insurance = Some(insurance.to_string());
        self
    }

    /// Non-blank reference symptoms, trimmed, in column order
    #[must_use]
    pub fn effective_symptoms(&self) -> SmallVec<[&str; 3]> {
        [&self.symptom1, &self.symptom2, &self.symptom3]
            .into_iter()
            .filter_map(|s| s.as_deref().map(str::trim))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Whether this entry can ever be matched
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        !self.effective_symptoms().is_empty()
    }
}

/// The full, ordered reference table
///
/// Order matters: on equal scores the earlier entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: Vec<ConditionEntry>,
}

impl ReferenceTable {
    /// Create a table, rejecting an empty one
    pub fn new(entries: Vec<ConditionEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(DxError::missing_input(
                "ICD/CPT reference table contains no entries",
            ));
        }
        Ok(Self { entries })
    }

    /// Entries in table order
    #[must_use]
    pub fn entries(&self) -> &[ConditionEntry] {
        &self.entries
    }

    /// Entry at a table position
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&ConditionEntry> {
        self.entries.get(position)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; an empty table cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries with at least one reference symptom
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_candidate()).count()
    }
}
