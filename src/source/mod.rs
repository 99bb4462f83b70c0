//! Acquisition of the ARC JSON document.
//!
//! Either runs the ARC export tool inside an ARC directory or reads a
//! previously exported document from disk. Both yield raw JSON; turning it
//! into typed structures is the parser's job.

pub mod exporter;

pub use exporter::ArcExporter;

use crate::utils::error::SourceError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read an exported ARC JSON document from a file
///
/// # Errors
/// * `SourceError::ReadFailed` - the file cannot be opened
/// * `SourceError::InvalidJson` - the file is not valid JSON
pub fn read_arc_json(path: impl AsRef<Path>) -> Result<serde_json::Value, SourceError> {
    let path = path.as_ref();
    debug!("Reading ARC JSON from: {}", path.display());

    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}
