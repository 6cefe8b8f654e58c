//! Document provenance: who created it, when, and with which license list.

use crate::fields::{SpdxRecord, WireField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout SPDX expects for `created`.
pub const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CreationInfo {
    #[serde(rename = "created")]
    created: String,
    #[serde(rename = "creators")]
    creators: Vec<String>,
    #[serde(rename = "licenseListVersion", skip_serializing_if = "Option::is_none")]
    license_list_version: Option<String>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl SpdxRecord for CreationInfo {
    const RECORD: &'static str = "CreationInfo";
    const FIELDS: &'static [WireField] = &[
        WireField::required("created", "created"),
        WireField::required("creators", "creators").non_empty(),
        WireField::optional("license_list_version", "licenseListVersion"),
        WireField::optional("comment", "comment"),
    ];
}

impl CreationInfo {
    /// Creators are kept in the given order; each is expected to carry a
    /// `Person:`, `Organization:` or `Tool:` prefix.
    pub fn new(created: DateTime<Utc>, creators: Vec<String>) -> Self {
        Self {
            created: created.format(CREATED_FORMAT).to_string(),
            creators,
            license_list_version: None,
            comment: None,
        }
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn creators(&self) -> &[String] {
        &self.creators
    }

    pub fn license_list_version(&self) -> Option<&str> {
        self.license_list_version.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
