//! Symptom extraction from patient records
//!
//! Patient files have no fixed schema. A fixed, ordered list of symptom
//! fields is scanned and every comma separated piece is collected.

use crate::models::{PatientRecord, SymptomSet};

/// Recognized symptom-bearing fields, in scan order
pub const SYMPTOM_FIELDS: &[&str] = &[
    "symptom1",
    "symptom2",
    "symptom3",
    "symptom4",
    "symptom5",
    "symptom",
    "symptoms",
    "Symptoms",
    "chief_complaint",
];

/// Separator between symptoms inside one field
pub const SYMPTOM_SEPARATOR: char = ',';

/// Extract the ordered, de-duplicated symptoms of one record
///
/// An empty result means the record cannot be diagnosed.
#[must_use]
pub fn extract_symptoms(record: &PatientRecord) -> SymptomSet {
    let pieces = SYMPTOM_FIELDS
        .iter()
        .filter_map(|field| record.non_empty(field))
        .flat_map(|value| value.split(SYMPTOM_SEPARATOR));

    SymptomSet::from_pieces(pieces)
}

/// Whether a record carries any recognized symptom field at all
#[must_use]
pub fn has_symptom_fields(record: &PatientRecord) -> bool {
    record.exposes_any(SYMPTOM_FIELDS)
}
