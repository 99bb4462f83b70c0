//! Raw data file discovery.
//!
//! Scans the process sequence once and seeds an empty aggregation record
//! for every output typed as a raw data file.

use super::collector::CategoryValues;
use crate::parser::ProcessNode;
use indexmap::IndexMap;
use log::{debug, warn};

/// Aggregated annotation of one raw data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDataFile {
    /// Root ancestor material; resolved during lineage traversal
    pub sample_name: Option<String>,

    pub name: String,

    /// Index of the process node whose output was indexed
    pub produced_by: usize,

    pub parameters: CategoryValues,

    pub factors: CategoryValues,

    pub characteristics: CategoryValues,
}

impl RawDataFile {
    pub fn new(name: impl Into<String>, produced_by: usize) -> Self {
        Self {
            sample_name: None,
            name: name.into(),
            produced_by,
            parameters: CategoryValues::new(),
            factors: CategoryValues::new(),
            characteristics: CategoryValues::new(),
        }
    }
}

/// Raw data files keyed by name, in first-discovery order
pub type RawDataFileIndex = IndexMap<String, RawDataFile>;

/// Build the raw data file index for a process sequence
///
/// **Public** - first stage of the aggregation pipeline
///
/// A later output with an already indexed name replaces the earlier record
/// in place (last write wins, position kept). Nothing is merged.
///
/// # Arguments
/// * `sequence` - Process nodes of one assay, in topological order
///
/// # Returns
/// Empty records keyed by raw data file name, each holding the index of
/// the node that produced it
///
/// # Example
/// ```ignore
/// let mut index = index_raw_data_files(&assay.process_sequence);
/// aggregate_raw_data_files(&mut index, &assay.process_sequence);
/// ```
pub fn index_raw_data_files(sequence: &[ProcessNode]) -> RawDataFileIndex {
    let mut index = RawDataFileIndex::new();

    for (node_idx, node) in sequence.iter().enumerate() {
        for output in node.outputs.iter().filter(|o| o.is_raw_data_file()) {
            let replaced = index.insert(
                output.name.clone(),
                RawDataFile::new(output.name.as_str(), node_idx),
            );
            if replaced.is_some() {
                warn!(
                    "Raw data file '{}' is produced more than once; keeping the last occurrence",
                    output.name
                );
            }
        }
    }

    debug!("Indexed {} raw data files", index.len());
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sequence(raw: serde_json::Value) -> Vec<ProcessNode> {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_only_raw_data_files_are_indexed() {
        let seq = sequence(json!([
            {
                "inputs": [{ "name": "S1", "type": "Sample Name" }],
                "outputs": [{ "name": "E1", "type": "Extract Name" }]
            },
            {
                "inputs": [{ "name": "E1" }],
                "outputs": [{ "name": "R1", "type": "Raw Data File" }]
            }
        ]));

        let index = index_raw_data_files(&seq);
        assert_eq!(index.len(), 1);
        let record = &index["R1"];
        assert_eq!(record.name, "R1");
        assert!(record.sample_name.is_none());
        assert!(record.parameters.is_empty());
    }

    #[test]
    fn test_duplicate_name_keeps_first_position() {
        let seq = sequence(json!([
            { "outputs": [{ "name": "R1", "type": "Raw Data File" }] },
            { "outputs": [{ "name": "R2", "type": "Raw Data File" }] },
            { "outputs": [{ "name": "R1", "type": "Raw Data File" }] }
        ]));

        let index = index_raw_data_files(&seq);
        let names: Vec<&str> = index.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["R1", "R2"]);
        assert_eq!(index["R1"].produced_by, 2);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(index_raw_data_files(&[]).is_empty());
    }
}
