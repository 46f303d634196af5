//! Validation of patient input before a batch run
//!
//! This is the upload check: a patient file is only accepted when it has
//! records and at least one of them exposes a recognized symptom field.

use crate::algorithm::matching::extraction::{SYMPTOM_FIELDS, has_symptom_fields};
use crate::error::{DxError, Result};
use crate::models::PatientRecord;

/// Validate that patient records can be diagnosed at all
pub fn validate_patient_records(records: &[PatientRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(DxError::missing_input("patient input contains no records"));
    }

    if !records.iter().any(has_symptom_fields) {
        return Err(DxError::schema(format!(
            "patient input has no symptom column; expected one of: {}",
            SYMPTOM_FIELDS.join(", ")
        )));
    }

    Ok(())
}
