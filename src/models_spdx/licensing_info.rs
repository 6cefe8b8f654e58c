//! Licenses defined inside the document (`LicenseRef-*` identifiers).

use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

/// A URL where the license text may be found, with the SPDX license-list
/// tooling's liveness annotations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CrossRef {
    #[serde(rename = "url")]
    url: String,
    #[serde(rename = "isLive", skip_serializing_if = "Option::is_none")]
    is_live: Option<bool>,
    #[serde(rename = "isValid", skip_serializing_if = "Option::is_none")]
    is_valid: Option<bool>,
    #[serde(rename = "isWayBackLink", skip_serializing_if = "Option::is_none")]
    is_way_back_link: Option<bool>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    match_status: Option<String>,
    #[serde(rename = "order", skip_serializing_if = "Option::is_none")]
    order: Option<i64>,
    #[serde(rename = "timestamp", skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl SpdxRecord for CrossRef {
    const RECORD: &'static str = "CrossRef";
    const FIELDS: &'static [WireField] = &[
        WireField::required("url", "url"),
        WireField::optional("is_live", "isLive"),
        WireField::optional("is_valid", "isValid"),
        WireField::optional("is_way_back_link", "isWayBackLink"),
        WireField::optional("match_status", "match"),
        WireField::optional("order", "order"),
        WireField::optional("timestamp", "timestamp"),
    ];
}

impl CrossRef {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_live(&self) -> Option<bool> {
        self.is_live
    }

    pub fn is_valid(&self) -> Option<bool> {
        self.is_valid
    }

    pub fn is_way_back_link(&self) -> Option<bool> {
        self.is_way_back_link
    }

    pub fn match_status(&self) -> Option<&str> {
        self.match_status.as_deref()
    }

    pub fn order(&self) -> Option<i64> {
        self.order
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HasExtractedLicensingInfo {
    #[serde(rename = "licenseId")]
    license_id: String,
    #[serde(rename = "extractedText")]
    extracted_text: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "seeAlsos", skip_serializing_if = "Option::is_none")]
    see_alsos: Option<Vec<String>>,
    #[serde(rename = "crossRefs", skip_serializing_if = "Option::is_none")]
    cross_refs: Option<Vec<CrossRef>>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl SpdxRecord for HasExtractedLicensingInfo {
    const RECORD: &'static str = "HasExtractedLicensingInfo";
    const FIELDS: &'static [WireField] = &[
        WireField::required("license_id", "licenseId"),
        WireField::required("extracted_text", "extractedText"),
        WireField::optional("name", "name"),
        WireField::optional("see_alsos", "seeAlsos"),
        WireField::optional("cross_refs", "crossRefs").records(CrossRef::check_wire),
        WireField::optional("comment", "comment"),
    ];
}

impl HasExtractedLicensingInfo {
    pub fn license_id(&self) -> &str {
        &self.license_id
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn see_alsos(&self) -> Option<&[String]> {
        self.see_alsos.as_deref()
    }

    pub fn cross_refs(&self) -> Option<&[CrossRef]> {
        self.cross_refs.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
