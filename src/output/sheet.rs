//! Delimited GEO metadata sheet writer.
//!
//! Layout, one record per line:
//! - `title`, `summary` and one `contributor` line per person
//! - the sample table (header row, then one row per raw data file)
//! - a `RAW FILES` marker followed by one raw data file name per line
//!
//! Records have different widths, so the writer runs in flexible mode.

use super::submission::GeoSubmission;
use crate::utils::config::{CONTRIBUTOR_KEY, RAW_FILES_SECTION, SUMMARY_KEY, TITLE_KEY};
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Records of the sheet in write order
pub fn sheet_rows(submission: &GeoSubmission) -> Vec<Vec<String>> {
    let mut rows = vec![
        vec![TITLE_KEY.to_string(), submission.title.clone()],
        vec![SUMMARY_KEY.to_string(), submission.summary.clone()],
    ];

    rows.extend(
        submission
            .contributors
            .iter()
            .map(|c| vec![CONTRIBUTOR_KEY.to_string(), c.clone()]),
    );

    rows.push(submission.samples.header.clone());
    rows.extend(submission.samples.rows.iter().cloned());

    rows.push(vec![RAW_FILES_SECTION.to_string()]);
    rows.extend(submission.raw_files.iter().map(|f| vec![f.clone()]));

    rows
}

/// Write the submission as a delimited sheet
///
/// **Public** - main entry point for sheet output
///
/// # Arguments
/// * `submission` - Submission to write
/// * `output_path` - Path to output sheet
/// * `delimiter` - Field separator byte (tab by default in the CLI)
///
/// # Errors
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
/// * `OutputError::WriteFailed` / `OutputError::SheetFailed` - write error
///
/// # Example
/// ```ignore
/// write_sheet(&submission, "geo/samples.tsv", b'\t')?;
/// ```
pub fn write_sheet(
    submission: &GeoSubmission,
    output_path: impl AsRef<Path>,
    delimiter: u8,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing sheet to: {}", output_path.display());

    super::prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(BufWriter::new(file));

    let rows = sheet_rows(submission);
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Sheet written successfully ({} records, {} samples)",
        rows.len(),
        submission.samples.rows.len()
    );

    Ok(())
}
