//! SPDX JSON text handling for whole documents.

use crate::errors::SpdxError;
use crate::fields::SpdxRecord;
use crate::models_spdx::Document;
use serde_json::Value;
use std::io::{Read, Write};

/// Parse an SPDX document from JSON
pub fn parse<R: Read>(reader: R) -> Result<Document, SpdxError> {
    let mapping: Value = serde_json::from_reader(reader)?;
    Ok(Document::from_wire(mapping)?)
}

/// Write an SPDX document as pretty-printed JSON
pub fn write<W: Write>(mut writer: W, doc: &Document) -> Result<(), SpdxError> {
    let mapping = doc.to_wire()?;
    serde_json::to_writer_pretty(&mut writer, &mapping).map_err(|e| {
        SpdxError::Serialization(format!("Failed to write SPDX JSON: {}", e))
    })?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Render an SPDX document as a pretty-printed JSON string
pub fn to_string(doc: &Document) -> Result<String, SpdxError> {
    let mapping = doc.to_wire()?;
    serde_json::to_string_pretty(&mapping)
        .map_err(|e| SpdxError::Serialization(format!("Failed to render SPDX JSON: {}", e)))
}
