//! JSON vitals input
//!
//! Vitals exports nest the fields the pipeline needs:
//!
//! ```json
//! [{"personal_info": {"email": ["a@example.com"]},
//!   "health_data": {"symptoms": ["redness", "pain"],
//!                   "affected-eye": ["left"], "onset": "2024-04-28"}}]
//! ```
//!
//! Each object is flattened into a [`PatientRecord`] so the matching code
//! never sees the nesting.

use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;

use log::warn;
use serde_json::{Map, Value};

use crate::error::util::open_input_file;
use crate::error::{DxError, Result};
use crate::models::PatientRecord;
use crate::utils::logging::{log_load_complete, log_load_start};

/// First string of a value that is either a string or an array of strings
fn first_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|item| item.as_str().map(str::to_string)),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// All strings of a value, comma joined
fn joined_strings(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

fn copy_scalars(object: &Map<String, Value>, record: &mut PatientRecord) {
    for (key, value) in object {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(_) | Value::Bool(_) => value.to_string(),
            _ => continue,
        };
        record.insert(key.clone(), text);
    }
}

/// Flatten one vitals object into a patient record
///
/// Top level scalar fields are copied as is. The nested vitals fields are
/// mapped to `email`, `symptoms`, `affected-eye` and `onset`. A value that is
/// not an object gives an empty record.
#[must_use]
pub fn flatten_vitals(value: &Value) -> PatientRecord {
    let mut record = PatientRecord::new();
    let Some(object) = value.as_object() else {
        return record;
    };

    copy_scalars(object, &mut record);

    if let Some(email) = object
        .get("personal_info")
        .and_then(|info| info.get("email"))
        .and_then(first_string)
    {
        record.insert("email", email);
    }

    if let Some(health) = object.get("health_data").and_then(Value::as_object) {
        if let Some(symptoms) = health.get("symptoms").and_then(joined_strings) {
            record.insert("symptoms", symptoms);
        }
        if let Some(eye) = health.get("affected-eye").and_then(first_string) {
            record.insert("affected-eye", eye);
        }
        if let Some(onset) = health.get("onset").and_then(first_string) {
            record.insert("onset", onset);
        }
    }

    // A top level symptom array is as good as a nested one
    if let Some(symptoms @ Value::Array(_)) = object.get("symptoms") {
        if let Some(joined) = joined_strings(symptoms) {
            record.insert("symptoms", joined);
        }
    }

    record
}

/// Load patient records from a JSON vitals export
///
/// # Errors
/// Returns a missing-input error when the file is absent or holds no
/// records, and a JSON error when it cannot be parsed.
pub fn read_patient_json(path: &Path) -> Result<Vec<PatientRecord>> {
    let start = Instant::now();
    log_load_start("vitals", path);

    let file = open_input_file(path, "Vitals file")?;
    let text = io::read_to_string(BufReader::new(file)).map_err(|e| DxError::io(path, e))?;
    if text.trim().is_empty() {
        return Err(DxError::missing_input(format!(
            "Vitals file is empty: {}",
            path.display()
        )));
    }
    let value: Value = serde_json::from_str(&text)?;

    let records: Vec<PatientRecord> = match &value {
        Value::Array(items) => items.iter().map(flatten_vitals).collect(),
        Value::Object(_) => vec![flatten_vitals(&value)],
        _ => {
            return Err(DxError::schema(format!(
                "vitals file must hold an array of objects: {}",
                path.display()
            )));
        }
    };

    if records.is_empty() {
        return Err(DxError::missing_input(format!(
            "Vitals file contains no records: {}",
            path.display()
        )));
    }

    let empty = records.iter().filter(|r| r.is_empty()).count();
    if empty > 0 {
        warn!("{empty} vitals entries in {} are not objects", path.display());
    }

    log_load_complete("vitals", path, records.len(), start.elapsed());
    Ok(records)
}
