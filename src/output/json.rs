//! JSON submission writer.
//!
//! Writes GeoSubmission structs to JSON files with proper formatting.

use super::submission::GeoSubmission;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a submission to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `submission` - Submission to write
/// * `output_path` - Path to output JSON file; parent directories are created
///
/// # Returns
/// Ok if file written successfully
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let submission = GeoSubmission::build(&doc, &index)?;
/// write_submission(&submission, "geo/submission.json")?;
/// ```
pub fn write_submission(
    submission: &GeoSubmission,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing submission JSON to: {}", output_path.display());

    super::prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, submission).map_err(OutputError::SerializationFailed)?;

    info!(
        "Submission written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a submission from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Returns
/// The deserialized submission
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_submission(input_path: impl AsRef<Path>) -> Result<GeoSubmission, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading submission from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let submission: GeoSubmission = serde_json::from_reader(BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    debug!(
        "Submission loaded: version {}, {} samples",
        submission.version,
        submission.samples.rows.len()
    );

    Ok(submission)
}
