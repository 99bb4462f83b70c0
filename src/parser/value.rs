//! Assignment values as found in ISA JSON.
//!
//! A value is either a bare scalar or an annotated ontology term carrying
//! a display label. JSON `null` is not a value; fields holding one
//! deserialize to `None`.

use crate::utils::error::ParseError;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Annotated ontology term (`annotationValue` plus optional source/accession)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OntologyTerm {
    /// Display label
    #[serde(default, deserialize_with = "deserialize_label")]
    pub annotation_value: String,

    #[serde(default)]
    pub term_source: Option<String>,

    #[serde(default)]
    pub term_accession: Option<String>,
}

impl OntologyTerm {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            annotation_value: label.into(),
            ..Default::default()
        }
    }
}

/// Value of a parameter, factor or characteristic assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum Value {
    Term(OntologyTerm),
    Text(String),
    /// Canonical decimal form; `5` and `5.0` are the same number
    Number(String),
    Bool(bool),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn number(n: impl Into<serde_json::Number>) -> Self {
        Value::Number(canonical_number(&n.into()))
    }

    pub fn term(label: impl Into<String>) -> Self {
        Value::Term(OntologyTerm::new(label))
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ParseError;

    fn try_from(raw: serde_json::Value) -> Result<Self, Self::Error> {
        match raw {
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Number(n) => Ok(Value::Number(canonical_number(&n))),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Object(map) => Ok(Value::Term(serde_json::from_value(
                serde_json::Value::Object(map),
            )?)),
            other => Err(ParseError::UnsupportedValue(other.to_string())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Term(term) => f.write_str(&term.annotation_value),
            Value::Text(s) | Value::Number(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Integral numbers print without a fraction, whatever their JSON literal
fn canonical_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // Below 2^53 the float is an exact integer
        Some(f) if f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
            (f as i64).to_string()
        }
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Accept string or numeric labels; null and missing become empty
fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(canonical_number(&n)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number label, found {}",
            other
        ))),
    }
}
