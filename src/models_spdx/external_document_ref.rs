//! References to other SPDX documents, pinned by checksum.

use super::checksum::Checksum;
use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExternalDocumentRef {
    #[serde(rename = "externalDocumentId")]
    external_document_id: String,
    #[serde(rename = "spdxDocument")]
    spdx_document: String,
    #[serde(rename = "checksum")]
    checksum: Checksum,
}

impl SpdxRecord for ExternalDocumentRef {
    const RECORD: &'static str = "ExternalDocumentRef";
    const FIELDS: &'static [WireField] = &[
        WireField::required("external_document_id", "externalDocumentId"),
        WireField::required("spdx_document", "spdxDocument"),
        WireField::required("checksum", "checksum").record(Checksum::check_wire),
    ];
}

impl ExternalDocumentRef {
    /// `external_document_id` is expected to be a `DocumentRef-*` identifier;
    /// `spdx_document` is the namespace URI of the referenced document.
    pub fn new(
        external_document_id: impl Into<String>,
        spdx_document: impl Into<String>,
        checksum: Checksum,
    ) -> Self {
        Self {
            external_document_id: external_document_id.into(),
            spdx_document: spdx_document.into(),
            checksum,
        }
    }

    pub fn external_document_id(&self) -> &str {
        &self.external_document_id
    }

    pub fn spdx_document(&self) -> &str {
        &self.spdx_document
    }

    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }
}
