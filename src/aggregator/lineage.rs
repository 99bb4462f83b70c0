//! Backward lineage traversal.
//!
//! For a raw data file, walks every ancestor path back to the originating
//! sample and merges the parameters of every process node, the factors of
//! every matched output and the factors and characteristics of every
//! aligned input into the record.
//!
//! Traversal is a depth-first search over strictly decreasing node indices,
//! driven by an explicit frame stack instead of call recursion. Each frame
//! resumes exactly where it left off after its children finish, so the
//! visiting order (and therefore which match sets `sample_name` last) is
//! that of the equivalent recursive walk.

use super::index::{RawDataFile, RawDataFileIndex};
use crate::parser::{Material, ProcessNode};
use log::{debug, warn};

/// Search state for one target name
#[derive(Debug)]
struct Frame<'a> {
    /// Material name to find among node outputs
    target: &'a str,

    /// Nodes `[0, remaining)` are still to be scanned, highest first
    remaining: usize,

    /// Next output position within node `remaining - 1`
    output: usize,
}

impl<'a> Frame<'a> {
    /// Frame scanning nodes `upper_bound` down to 0
    fn new(target: &'a str, upper_bound: usize) -> Self {
        Self {
            target,
            remaining: upper_bound + 1,
            output: 0,
        }
    }

    /// Advance to the next `(node, output)` whose name equals the target
    fn next_match(&mut self, sequence: &[ProcessNode]) -> Option<(usize, usize)> {
        while self.remaining > 0 {
            let node_idx = self.remaining - 1;
            let outputs = &sequence[node_idx].outputs;

            while self.output < outputs.len() {
                let output_idx = self.output;
                self.output += 1;
                if outputs[output_idx].name == self.target {
                    return Some((node_idx, output_idx));
                }
            }

            self.remaining -= 1;
            self.output = 0;
        }
        None
    }
}

/// Aggregate lineage information for `target_name` into `record`
///
/// **Public** - general form of the traversal
///
/// Every output named `target_name` at index `upper_bound` or below is
/// processed, and every aligned input is followed further back. The result
/// is the union over all ancestor paths.
///
/// # Arguments
/// * `record` - Record to merge into; mutated in place
/// * `target_name` - Material name to trace back
/// * `sequence` - Process nodes in topological order
/// * `upper_bound` - Highest node index to scan (clamped to the sequence)
///
/// # Example
/// ```ignore
/// let mut record = RawDataFile::new("R1", 1);
/// aggregate_lineage(&mut record, "R1", &sequence, sequence.len() - 1);
/// assert_eq!(record.sample_name.as_deref(), Some("S1"));
/// ```
pub fn aggregate_lineage(
    record: &mut RawDataFile,
    target_name: &str,
    sequence: &[ProcessNode],
    upper_bound: usize,
) {
    if sequence.is_empty() {
        return;
    }
    let upper_bound = upper_bound.min(sequence.len() - 1);
    run(record, sequence, Frame::new(target_name, upper_bound), None);
}

/// Aggregate every indexed raw data file in place
///
/// **Public** - second stage of the aggregation pipeline
///
/// Each record is traced over the whole sequence. Raw data file outputs
/// with the record's name from any node other than `produced_by` were
/// overwritten in the index and are skipped at the first level; every other
/// producer of the name (e.g. a derived data file) still contributes.
/// Records share no state and are processed one after another.
///
/// # Arguments
/// * `index` - Records from `index_raw_data_files`; filled in place
/// * `sequence` - The same process sequence the index was built from
pub fn aggregate_raw_data_files(index: &mut RawDataFileIndex, sequence: &[ProcessNode]) {
    for (name, record) in index.iter_mut() {
        let producer = record.produced_by;
        if producer >= sequence.len() {
            warn!(
                "Raw data file '{}' refers to missing process node {}",
                name, producer
            );
            continue;
        }

        run(
            record,
            sequence,
            Frame::new(name.as_str(), sequence.len() - 1),
            Some(producer),
        );

        debug!(
            "Aggregated '{}': sample {:?}, {} parameters, {} factors, {} characteristics",
            name,
            record.sample_name,
            record.parameters.len(),
            record.factors.len(),
            record.characteristics.len()
        );
    }
}

/// Drive the frame stack until every branch is exhausted.
///
/// With `producer` set, root-level raw data file matches from other nodes
/// are skipped.
fn run<'a>(
    record: &mut RawDataFile,
    sequence: &'a [ProcessNode],
    root: Frame<'a>,
    producer: Option<usize>,
) {
    let mut stack = vec![root];

    while let Some(frame) = stack.last_mut() {
        let Some((node_idx, output_idx)) = frame.next_match(sequence) else {
            stack.pop();
            continue;
        };

        let node = &sequence[node_idx];
        let at_root = stack.len() == 1;
        if at_root
            && producer.is_some_and(|p| p != node_idx)
            && node.outputs[output_idx].is_raw_data_file()
        {
            continue;
        }

        let input = aligned_input(node, node_idx, output_idx);

        merge_contribution(record, node, &node.outputs[output_idx], input);

        if let Some(input) = input {
            // Deeper matches overwrite this, leaving the root ancestor
            record.sample_name = Some(input.name.clone());

            if node_idx > 0 {
                stack.push(Frame::new(&input.name, node_idx - 1));
            }
        }
    }
}

/// Positional input lookup; out of range is treated as no input
fn aligned_input(node: &ProcessNode, node_idx: usize, output_idx: usize) -> Option<&Material> {
    let input = node.aligned_input(output_idx);
    if input.is_none() && node.is_misaligned() {
        warn!(
            "Process node {} has {} inputs for {} outputs; output {} treated as a source",
            node_idx,
            node.inputs.as_ref().map_or(0, Vec::len),
            node.outputs.len(),
            output_idx
        );
    }
    input
}

/// Merge one matched `(node, output, input)` triple into the record
fn merge_contribution(
    record: &mut RawDataFile,
    node: &ProcessNode,
    output: &Material,
    input: Option<&Material>,
) {
    record.parameters.accumulate_all(&node.parameter_values);
    record.factors.accumulate_all(&output.factor_values);

    if let Some(input) = input {
        record.factors.accumulate_all(&input.factor_values);
        record.characteristics.accumulate_all(&input.characteristics);
    }
}
