//! ISA JSON schema definitions for the ARC export.
//!
//! Only the parts of the document the converter reads are modelled.
//! Optional fields are explicit: an absent input list is `None`, absent
//! assignment lists are empty.

use super::value::{OntologyTerm, Value};
use crate::utils::config::RAW_DATA_FILE_TYPE;
use serde::Deserialize;

/// Top-level investigation document produced by `arc export`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcDocument {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub people: Vec<Person>,

    #[serde(default)]
    pub studies: Vec<Study>,
}

/// Investigation contact
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

impl Person {
    /// Contributor cell as expected by GEO ("First,Last")
    pub fn contributor(&self) -> String {
        format!("{},{}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Study {
    #[serde(default)]
    pub assays: Vec<Assay>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assay {
    /// Process nodes in temporal order; the index is the topological order
    pub process_sequence: Vec<ProcessNode>,
}

/// One step of the experiment graph
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessNode {
    /// Positionally aligned with `outputs` when present
    #[serde(default)]
    pub inputs: Option<Vec<Material>>,

    pub outputs: Vec<Material>,

    #[serde(default)]
    pub parameter_values: Vec<ParameterValue>,
}

impl ProcessNode {
    /// Input consumed to produce the output at `output_idx`.
    ///
    /// Returns `None` when the node has no input list or the list is too
    /// short; a misaligned node never borrows another position's input.
    pub fn aligned_input(&self, output_idx: usize) -> Option<&Material> {
        self.inputs.as_ref()?.get(output_idx)
    }

    /// Whether input and output lists have different lengths
    pub fn is_misaligned(&self) -> bool {
        self.inputs
            .as_ref()
            .is_some_and(|inputs| inputs.len() != self.outputs.len())
    }
}

/// Named material flowing between process nodes
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Join key for graph edges
    pub name: String,

    #[serde(default, rename = "type")]
    pub material_type: Option<String>,

    #[serde(default)]
    pub factor_values: Vec<FactorValue>,

    /// Only read on inputs
    #[serde(default)]
    pub characteristics: Vec<Characteristic>,
}

impl Material {
    pub fn is_raw_data_file(&self) -> bool {
        self.material_type.as_deref() == Some(RAW_DATA_FILE_TYPE)
    }
}

/// Category-labelled value attached to a node or material
pub trait Assignment {
    fn category_name(&self) -> &str;
    fn value(&self) -> Option<&Value>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolParameter {
    pub parameter_name: OntologyTerm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterValue {
    pub category: ProtocolParameter,

    #[serde(default)]
    pub value: Option<Value>,
}

impl Assignment for ParameterValue {
    fn category_name(&self) -> &str {
        &self.category.parameter_name.annotation_value
    }

    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factor {
    pub factor_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FactorValue {
    pub category: Factor,

    #[serde(default)]
    pub value: Option<Value>,
}

impl Assignment for FactorValue {
    fn category_name(&self) -> &str {
        &self.category.factor_name
    }

    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialAttribute {
    pub characteristic_type: OntologyTerm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Characteristic {
    pub category: MaterialAttribute,

    #[serde(default)]
    pub value: Option<Value>,
}

impl Assignment for Characteristic {
    fn category_name(&self) -> &str {
        &self.category.characteristic_type.annotation_value
    }

    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}
