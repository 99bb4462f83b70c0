//! ARC document parsing and schema definitions.
//!
//! This module handles:
//! - Materializing the exported ISA JSON into typed structures
//! - Assignment values (scalars and annotated terms)
//! - Selecting the assay whose process sequence is converted

pub mod arc_json;
pub mod schema;
pub mod value;

// Re-export main types
pub use arc_json::{parse_arc_document, select_assay};
pub use schema::{
    ArcDocument, Assay, Assignment, Characteristic, FactorValue, Material, ParameterValue,
    Person, ProcessNode,
};
pub use value::{OntologyTerm, Value};
