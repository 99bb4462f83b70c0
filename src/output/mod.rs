//! Output writers for GEO submissions.
//!
//! This module handles:
//! - Projecting aggregated raw data files into a sample table
//! - Assembling the submission (metadata + samples + raw files)
//! - Writing delimited sheets and JSON exports

pub mod json;
pub mod sheet;
pub mod submission;
pub mod table;

// Re-export main functions
pub use json::{read_submission, write_submission};
pub use sheet::{sheet_rows, write_sheet};
pub use submission::GeoSubmission;
pub use table::{display_value, flatten_values, SampleTable};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate the path and create missing parent directories
pub(crate) fn prepare_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
