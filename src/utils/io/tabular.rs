//! CSV input and output
//!
//! Reads the reference table and open-schema patient files, and writes the
//! result file in its fixed column order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::error::util::{ensure_parent_dir, open_input_file};
use crate::error::{DxError, Result};
use crate::models::condition::{REFERENCE_REQUIRED_COLUMNS, REFERENCE_SYMPTOM_COLUMNS};
use crate::models::{ConditionEntry, DiagnosisResult, PatientRecord, ReferenceTable};
use crate::utils::logging::{log_load_complete, log_load_start, log_results_written};

fn reader_for(path: &Path, purpose: &str) -> Result<csv::Reader<fs::File>> {
    let file = open_input_file(path, purpose)?;
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file))
}

/// Check that a reference header row has the columns matching relies on
pub fn validate_reference_headers(headers: &StringRecord) -> Result<()> {
    let has = |column: &str| headers.iter().any(|h| h == column);

    let missing: Vec<&str> = REFERENCE_REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !has(*column))
        .collect();
    if !missing.is_empty() {
        return Err(DxError::schema(format!(
            "reference table is missing required columns: {}",
            missing.join(", ")
        )));
    }

    if !REFERENCE_SYMPTOM_COLUMNS.iter().any(|column| has(*column)) {
        return Err(DxError::schema(format!(
            "reference table has none of the symptom columns {}",
            REFERENCE_SYMPTOM_COLUMNS.join(", ")
        )));
    }

    Ok(())
}

/// Load the ICD/CPT reference table
///
/// # Errors
/// Returns a missing-input error when the file is absent or has no rows, and a
/// schema error when required columns are missing.
pub fn read_reference_table(path: &Path) -> Result<ReferenceTable> {
    let start = Instant::now();
    log_load_start("reference", path);

    let mut reader = reader_for(path, "ICD/CPT reference table")?;
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(DxError::missing_input(format!(
            "ICD/CPT reference table is empty: {}",
            path.display()
        )));
    }
    validate_reference_headers(&headers)?;

    let entries = reader
        .deserialize::<ConditionEntry>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let table = ReferenceTable::new(entries)?;
    log_load_complete("reference", path, table.len(), start.elapsed());
    Ok(table)
}

/// Load patient records from a CSV file with any set of columns
///
/// # Errors
/// Returns a missing-input error when the file is absent or has no records.
pub fn read_patient_csv(path: &Path) -> Result<Vec<PatientRecord>> {
    let start = Instant::now();
    log_load_start("patient", path);

    let mut reader = reader_for(path, "Patient file")?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // Short rows simply lack the trailing fields
        let record: PatientRecord = headers.iter().zip(row.iter()).collect();
        records.push(record);
    }

    if records.is_empty() {
        return Err(DxError::missing_input(format!(
            "Patient file contains no records: {}",
            path.display()
        )));
    }

    log_load_complete("patient", path, records.len(), start.elapsed());
    Ok(records)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

/// Write the result file, replacing any previous one
///
/// Rows are written to a staging file first and moved into place once
/// complete, so readers never observe a half written result.
pub fn write_results(path: &Path, results: &[DiagnosisResult]) -> Result<()> {
    let start = Instant::now();
    ensure_parent_dir(path)?;

    let staging = staging_path(path);
    {
        let file = fs::File::create(&staging).map_err(|e| DxError::io(&staging, e))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(crate::models::result::RESULT_COLUMNS)?;
        for result in results {
            writer.serialize(result)?;
        }
        writer.flush().map_err(|e| DxError::io(&staging, e))?;
    }
    fs::rename(&staging, path).map_err(|e| DxError::io(path, e))?;

    log_results_written(path, results.len(), start.elapsed());
    Ok(())
}

/// Read back the last written result file
pub fn read_results(path: &Path) -> Result<Vec<DiagnosisResult>> {
    let file = open_input_file(path, "Result file")?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let results = reader
        .deserialize::<DiagnosisResult>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(results)
}

/// Copy the last written result file to `out` exactly as it is on disk
///
/// Returns the number of bytes copied.
pub fn export_results<W: io::Write>(path: &Path, out: &mut W) -> Result<u64> {
    let mut file = open_input_file(path, "Result file")?;
    io::copy(&mut file, out).map_err(|e| DxError::io(path, e))
}
