//! Utility functions for error handling
//!
//! Input files are checked up front so a missing file is reported as a
//! missing input with a readable cause rather than a bare IO error.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DxError, Result};

/// Open an input file, classifying absence as a missing input
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - What the file is needed for (for error context)
pub fn open_input_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(DxError::missing_input(format!(
            "{purpose} not found at {}",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(DxError::missing_input(format!(
            "{purpose} path is not a file: {}",
            path.display()
        )));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DxError::missing_input(format!(
            "{purpose} was removed before it could be read: {}",
            path.display()
        ))),
        Err(e) => Err(DxError::io(path, e)),
    }
}

/// Make sure the parent directory of an output file exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| DxError::io(parent, e))
        }
        _ => Ok(()),
    }
}
