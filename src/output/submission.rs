//! GEO submission model.
//!
//! Combines the investigation metadata with the sample table. This is what
//! gets written to disk as a sheet and, optionally, as JSON.

use super::table::SampleTable;
use crate::aggregator::RawDataFileIndex;
use crate::parser::ArcDocument;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level submission structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoSubmission {
    /// Schema version for compatibility checking
    pub version: String,

    pub title: String,

    pub summary: String,

    /// One "First,Last" entry per investigation contact
    pub contributors: Vec<String>,

    pub samples: SampleTable,

    /// Raw data file names in sample order
    pub raw_files: Vec<String>,

    /// Timestamp when the submission was generated
    pub generated_at: String,
}

impl GeoSubmission {
    /// Build a submission from the document metadata and aggregated records
    ///
    /// # Errors
    /// * `OutputError::NoRawDataFiles` - nothing to submit
    pub fn build(document: &ArcDocument, index: &RawDataFileIndex) -> Result<Self, OutputError> {
        let samples = SampleTable::from_records(index)?;
        let raw_files = samples.raw_files().map(str::to_string).collect();

        Ok(Self {
            version: SCHEMA_VERSION.to_string(),
            title: document.title.clone().unwrap_or_default(),
            summary: document.description.clone().unwrap_or_default(),
            contributors: document.people.iter().map(|p| p.contributor()).collect(),
            samples,
            raw_files,
            generated_at: Utc::now().to_rfc3339(),
        })
    }
}
