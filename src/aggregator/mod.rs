//! Lineage aggregation of raw data file annotations.
//!
//! This module transforms a process sequence into:
//! - An index of raw data files (terminal artifacts)
//! - Per-file parameter, factor and characteristic value sets
//! - The root sample each raw data file descends from

pub mod collector;
pub mod index;
pub mod lineage;

// Re-export main types and functions
pub use collector::{CategoryValues, ValueSet};
pub use index::{index_raw_data_files, RawDataFile, RawDataFileIndex};
pub use lineage::{aggregate_lineage, aggregate_raw_data_files};

use crate::parser::ProcessNode;
use log::info;

/// Index and aggregate every raw data file of a process sequence
///
/// **Public** - convenience entry point used by the convert command
pub fn collect_raw_data_files(sequence: &[ProcessNode]) -> RawDataFileIndex {
    let mut index = index_raw_data_files(sequence);
    info!(
        "Found {} raw data files in {} process nodes",
        index.len(),
        sequence.len()
    );
    aggregate_raw_data_files(&mut index, sequence);
    index
}
