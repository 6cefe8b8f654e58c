//! Main library for the SPDX 2.3 JSON model.
//!
//! This crate models SPDX 2.3 documents as immutable records, round-trips
//! them losslessly to and from SPDX JSON, and validates the serialized form
//! against the SPDX 2.3 JSON Schema.
//!
//! ```no_run
//! use serde_json::json;
//! use spdx_json_model::{Document, SpdxRecord, SpdxSchema};
//!
//! let document = Document::from_wire(json!({
//!     "spdxVersion": "SPDX-2.3",
//!     "dataLicense": "CC0-1.0",
//!     "SPDXID": "SPDXRef-DOCUMENT",
//!     "name": "example",
//!     "documentNamespace": "https://example.com/spdxdocs/example-1",
//!     "creationInfo": {
//!         "created": "2024-01-01T00:00:00Z",
//!         "creators": ["Tool: example-1.0"]
//!     }
//! }))?;
//! document.validate(&SpdxSchema::bundled()?)?;
//! # Ok::<(), spdx_json_model::SpdxError>(())
//! ```

pub mod errors;
pub mod fields;
pub mod json;
pub mod models_spdx;
pub mod schema;
pub mod validation;

pub use errors::{ConstructionError, SpdxError};
pub use fields::{SpdxRecord, WireField};
pub use models_spdx::{
    Annotation, AnnotationType, Checksum, ChecksumAlgorithm, CreationInfo, CrossRef,
    DataLicense, Document, ExternalDocumentRef, ExternalRef, File, FileType,
    HasExtractedLicensingInfo, Package, PackagePurpose, PackageVerificationCode,
    ReferenceCategory, Relationship, RelationshipType, Review, Snippet, SnippetPointer,
    SnippetRange, SpdxVersion,
};
pub use schema::{SpdxSchema, validate};
pub use validation::{SchemaViolation, Violation};

use log::{info, warn};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

/// How schema violations are printed by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    Colored,
    Plain,
}

/// Top-level configuration for a check/normalize run.
#[derive(Debug)]
pub struct Config {
    pub input_file: PathBuf,
    pub output_file: Option<PathBuf>,
    /// External schema; the bundled SPDX 2.3 schema when `None`.
    pub schema_file: Option<PathBuf>,
    pub validate: bool,
    pub report_style: ReportStyle,
}

/// The main entry point for the CLI pipeline.
///
/// Reads the input document, builds the model from it, validates the
/// serialized form and, when an output file is configured, writes the
/// normalized document.
pub fn run(config: Config) -> Result<(), SpdxError> {
    let start_time = Instant::now();
    info!("Reading SPDX document: {}", config.input_file.display());

    let file = fs::File::open(&config.input_file)
        .map_err(|e| SpdxError::Io(e, "Failed to open input file".to_string()))?;
    let document = json::parse(BufReader::new(file))?;
    info!(
        "Loaded '{}' ({} packages, {} files, {} snippets, {} relationships)",
        document.name(),
        document.packages().map_or(0, |p| p.len()),
        document.files().map_or(0, |f| f.len()),
        document.snippets().map_or(0, |s| s.len()),
        document.relationships().map_or(0, |r| r.len()),
    );

    if config.validate {
        let schema_start = Instant::now();
        let schema = match &config.schema_file {
            Some(path) => SpdxSchema::from_path(path)?,
            None => SpdxSchema::bundled()?,
        };

        if let Err(err) = document.validate(&schema) {
            if let SpdxError::Schema(violation) = &err {
                match config.report_style {
                    ReportStyle::Colored => violation.print_colored(),
                    ReportStyle::Plain => violation.print_plain(),
                }
            }
            return Err(err);
        }
        info!(
            "Validation passed successfully. (Took {:.2?})",
            schema_start.elapsed()
        );
    } else {
        warn!("Skipping schema validation.");
    }

    if let Some(output_file) = &config.output_file {
        let out = fs::File::create(output_file)
            .map_err(|e| SpdxError::Io(e, "Failed to create output file".to_string()))?;
        json::write(BufWriter::new(out), &document)?;
        info!("Wrote normalized document to {}", output_file.display());
    }

    info!("Finished in {:.2?}", start_time.elapsed());
    Ok(())
}
