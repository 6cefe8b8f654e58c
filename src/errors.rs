//! Defines the custom error types for the crate.
//!
//! This uses `thiserror` for clean, boilerplate-free error handling.
//! `ConstructionError` covers everything that can go wrong while building a
//! record from a wire mapping; `SpdxError` wraps it together with I/O,
//! JSON and schema failures.

use crate::validation::SchemaViolation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpdxError {
    #[error("I/O Error: {1} - {0}")]
    Io(#[source] std::io::Error, String),

    #[error("JSON Deserialization Error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Construction Error: {0}")]
    Construction(#[from] ConstructionError),

    #[error("JSON Schema Validation Error: {0}")]
    Schema(#[from] SchemaViolation),

    #[error("Schema Loading Error for file: {0}")]
    SchemaLoad(PathBuf),

    #[error("Invalid JSON Schema: {0}")]
    InvalidSchema(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for SpdxError {
    fn from(err: std::io::Error) -> Self {
        SpdxError::Io(err, "IO operation failed".to_string())
    }
}

/// A record could not be built from the supplied mapping.
///
/// `path` locates the offending value inside the input, rooted at `$`,
/// e.g. `$.packages[0].checksums[1]`; the top-level record itself is `$`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("{record} at '{path}' must be a JSON object")]
    NotAMapping { record: &'static str, path: String },

    #[error("{record} at '{path}' is missing required field '{alias}' ({name})")]
    MissingField {
        record: &'static str,
        name: &'static str,
        alias: &'static str,
        path: String,
    },

    #[error("{record} at '{path}' has unknown field '{field}'")]
    UnknownField {
        record: &'static str,
        field: String,
        path: String,
    },

    #[error("{record} field '{path}' is null; omit the field to leave it unset")]
    NullValue { record: &'static str, path: String },

    #[error("{record} field '{path}' must contain at least one entry")]
    EmptySequence { record: &'static str, path: String },

    #[error("{record} has an invalid value: {message}")]
    InvalidValue {
        record: &'static str,
        message: String,
    },
}

impl ConstructionError {
    /// The name of the record type that rejected the input.
    pub fn record(&self) -> &'static str {
        match self {
            ConstructionError::NotAMapping { record, .. }
            | ConstructionError::MissingField { record, .. }
            | ConstructionError::UnknownField { record, .. }
            | ConstructionError::NullValue { record, .. }
            | ConstructionError::EmptySequence { record, .. }
            | ConstructionError::InvalidValue { record, .. } => record,
        }
    }
}
