//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while obtaining the ARC JSON document
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to run export command '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Export command exited with status {status}")]
    ExportFailed { status: String },

    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Export output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors that can occur while materializing the experiment graph
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),
}

/// Errors that can occur during table projection and file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("No raw data files found in the process sequence")]
    NoRawDataFiles,

    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to write sheet: {0}")]
    SheetFailed(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
