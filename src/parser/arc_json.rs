//! Materializes the ARC export into the typed document model.
//!
//! The graph is trusted: no reconciliation between schema versions is
//! attempted and any structural mismatch is fatal.

use super::schema::{ArcDocument, Assay};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::Deserialize;

/// Parse the exported ARC JSON into an `ArcDocument`
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - JSON produced by `arc export` or read from a file
///
/// # Errors
/// * `ParseError::JsonError` - the document does not match the ISA schema
///   (missing `processSequence`, missing `outputs`, malformed categories)
///
/// # Example
/// ```ignore
/// let raw = read_arc_json("arc.json")?;
/// let doc = parse_arc_document(&raw)?;
/// let assay = select_assay(&doc, 0, 0)?;
/// ```
pub fn parse_arc_document(raw: &serde_json::Value) -> Result<ArcDocument, ParseError> {
    let document = ArcDocument::deserialize(raw)?;

    debug!(
        "Parsed ARC document: {} studies, {} people",
        document.studies.len(),
        document.people.len()
    );

    Ok(document)
}

/// Select the assay whose process sequence is converted
///
/// # Errors
/// * `ParseError::MissingField` - study or assay index out of range
pub fn select_assay(
    document: &ArcDocument,
    study_idx: usize,
    assay_idx: usize,
) -> Result<&Assay, ParseError> {
    let study = document
        .studies
        .get(study_idx)
        .ok_or_else(|| ParseError::MissingField(format!("studies[{}]", study_idx)))?;

    if document.studies.len() > 1 {
        warn!(
            "Document has {} studies, converting study {} only",
            document.studies.len(),
            study_idx
        );
    }

    let assay = study.assays.get(assay_idx).ok_or_else(|| {
        ParseError::MissingField(format!("studies[{}].assays[{}]", study_idx, assay_idx))
    })?;

    debug!(
        "Selected assay with {} process nodes",
        assay.process_sequence.len()
    );

    Ok(assay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_process_sequence_is_fatal() {
        let raw = json!({ "studies": [{ "assays": [{}] }] });
        assert!(matches!(
            parse_arc_document(&raw),
            Err(ParseError::JsonError(_))
        ));
    }

    #[test]
    fn test_select_missing_assay() {
        let raw = json!({ "studies": [{ "assays": [] }] });
        let doc = parse_arc_document(&raw).unwrap();
        assert!(matches!(
            select_assay(&doc, 0, 0),
            Err(ParseError::MissingField(_))
        ));
    }
}
