//! JSON Schema validation of serialized SPDX documents.
//!
//! This uses the `jsonschema` crate. The schema is treated as an opaque
//! oracle: nothing here knows what it contains, so a newer SPDX schema can be
//! dropped in without touching the model. The SPDX 2.3 schema ships with the
//! crate and is used when the caller does not supply one.

use crate::errors::SpdxError;
use crate::validation::{SchemaViolation, Violation};
use log::{debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The SPDX 2.3 JSON Schema.
pub const SPDX_2_3_SCHEMA: &str = include_str!("../schemas/spdx-schema-2.3.json");

/// A compiled schema, reusable across documents.
pub struct SpdxSchema {
    document: Value,
    validator: jsonschema::Validator,
}

impl SpdxSchema {
    /// Compiles the bundled SPDX 2.3 schema.
    pub fn bundled() -> Result<Self, SpdxError> {
        let document: Value = serde_json::from_str(SPDX_2_3_SCHEMA)?;
        Self::from_value(document)
    }

    /// Loads and compiles a schema document from disk.
    pub fn from_path(path: &Path) -> Result<Self, SpdxError> {
        info!("Loading schema from {}", path.display());
        let file = File::open(path).map_err(|e| {
            SpdxError::Io(e, format!("Failed to open schema {}", path.display()))
        })?;
        let document: Value = serde_json::from_reader(BufReader::new(file))
            .map_err(|_| SpdxError::SchemaLoad(path.to_path_buf()))?;
        Self::from_value(document)
    }

    /// Compiles an already parsed schema document.
    pub fn from_value(document: Value) -> Result<Self, SpdxError> {
        let validator = jsonschema::validator_for(&document)
            .map_err(|e| SpdxError::InvalidSchema(e.to_string()))?;
        Ok(Self {
            document,
            validator,
        })
    }

    /// The schema document this validator was compiled from.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Checks `instance`, collecting every violation.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaViolation> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|error| {
                Violation::new(
                    error.instance_path.to_string(),
                    error.schema_path.to_string(),
                    error.to_string(),
                )
            })
            .collect();

        match SchemaViolation::from_violations(violations) {
            None => {
                debug!("Instance conforms to schema");
                Ok(())
            }
            Some(violation) => Err(violation),
        }
    }
}

/// Validates `instance` against `schema` in one call.
///
/// Success is silent; a schema that does not compile is reported as
/// [`SpdxError::InvalidSchema`], a nonconforming instance as
/// [`SpdxError::Schema`].
pub fn validate(instance: &Value, schema: &Value) -> Result<(), SpdxError> {
    let compiled = SpdxSchema::from_value(schema.clone())?;
    compiled.validate(instance)?;
    Ok(())
}
