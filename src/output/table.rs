//! Tabular projection of aggregated raw data files.
//!
//! Produces the GEO "samples" block: one header row and one row per raw
//! data file, with every value set flattened into a single cell.

use crate::aggregator::{CategoryValues, RawDataFile, RawDataFileIndex, ValueSet};
use crate::parser::Value;
use crate::utils::config::{
    CHARACTERISTIC_PREFIX, FACTOR_PREFIX, PARAMETER_PREFIX, RAW_FILE_COLUMN, SAMPLE_NAME_COLUMN,
    VALUE_DELIMITER,
};
use crate::utils::error::OutputError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Display form of a value: the label of an annotated term, the scalar otherwise
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Term(term) => Cow::Borrowed(term.annotation_value.as_str()),
        Value::Text(s) | Value::Number(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
    }
}

/// Join a value set into one delimited cell
pub fn flatten_values(values: &ValueSet) -> String {
    values
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(VALUE_DELIMITER)
}

/// Header plus one row per raw data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Sorted category columns of each group
struct Columns<'a> {
    parameters: BTreeSet<&'a str>,
    factors: BTreeSet<&'a str>,
    characteristics: BTreeSet<&'a str>,
}

impl<'a> Columns<'a> {
    fn collect(records: impl Iterator<Item = &'a RawDataFile>) -> Self {
        let mut columns = Columns {
            parameters: BTreeSet::new(),
            factors: BTreeSet::new(),
            characteristics: BTreeSet::new(),
        };
        for record in records {
            columns.parameters.extend(record.parameters.categories());
            columns.factors.extend(record.factors.categories());
            columns
                .characteristics
                .extend(record.characteristics.categories());
        }
        columns
    }

    fn header(&self) -> Vec<String> {
        let mut header = vec![SAMPLE_NAME_COLUMN.to_string()];
        header.extend(self.parameters.iter().map(|n| format!("{}{}", PARAMETER_PREFIX, n)));
        header.extend(self.factors.iter().map(|n| format!("{}{}", FACTOR_PREFIX, n)));
        header.extend(
            self.characteristics
                .iter()
                .map(|n| format!("{}{}", CHARACTERISTIC_PREFIX, n)),
        );
        header.push(RAW_FILE_COLUMN.to_string());
        header
    }

    fn row(&self, name: &str, record: &RawDataFile) -> Vec<String> {
        let mut row = vec![record.sample_name.clone().unwrap_or_default()];
        push_cells(&mut row, &self.parameters, &record.parameters);
        push_cells(&mut row, &self.factors, &record.factors);
        push_cells(&mut row, &self.characteristics, &record.characteristics);
        row.push(name.to_string());
        row
    }
}

/// A category the record never saw yields an empty cell
fn push_cells(row: &mut Vec<String>, names: &BTreeSet<&str>, values: &CategoryValues) {
    row.extend(
        names
            .iter()
            .map(|name| values.get(name).map(flatten_values).unwrap_or_default()),
    );
}

impl SampleTable {
    /// Project the aggregated index into a table
    ///
    /// **Public** - main entry point for tabular output
    ///
    /// Category columns are the union over all records, sorted within each
    /// group (parameters, factors, characteristics). Rows follow index order.
    ///
    /// # Returns
    /// Header of `Sample name`, `raw file` and the prefixed category columns,
    /// plus one row per raw data file
    ///
    /// # Errors
    /// * `OutputError::NoRawDataFiles` - the index is empty
    pub fn from_records(index: &RawDataFileIndex) -> Result<Self, OutputError> {
        if index.is_empty() {
            return Err(OutputError::NoRawDataFiles);
        }

        let columns = Columns::collect(index.values());
        let header = columns.header();
        let rows: Vec<Vec<String>> = index
            .iter()
            .map(|(name, record)| columns.row(name, record))
            .collect();

        debug!(
            "Built sample table: {} columns, {} rows",
            header.len(),
            rows.len()
        );

        Ok(Self { header, rows })
    }

    /// Raw data file names in row order
    pub fn raw_files(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(|row| row.last().map(String::as_str))
    }
}
