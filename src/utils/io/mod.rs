//! IO utilities for file operations
//!
//! This module reads the reference table and patient files and writes the
//! result file. Patient files are CSV or JSON, chosen by file extension.

pub mod json;
pub mod tabular;

use std::path::Path;

use crate::error::{DxError, Result};
use crate::models::PatientRecord;

// Re-export commonly used functions for convenience
pub use json::read_patient_json;
pub use tabular::{
    export_results, read_patient_csv, read_reference_table, read_results, write_results,
};

/// Supported patient file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientFormat {
    /// Comma separated values with a header row
    Csv,
    /// JSON vitals export
    Json,
}

impl PatientFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(DxError::schema(format!(
                "unsupported patient file type (expected .csv or .json): {}",
                path.display()
            ))),
        }
    }
}

/// Load patient records in whichever supported format the file has
pub fn read_patient_records(path: &Path) -> Result<Vec<PatientRecord>> {
    match PatientFormat::from_path(path)? {
        PatientFormat::Csv => read_patient_csv(path),
        PatientFormat::Json => read_patient_json(path),
    }
}
