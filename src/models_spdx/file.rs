//! File elements and their digests.

use super::annotation::Annotation;
use super::checksum::Checksum;
use super::enums::FileType;
use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct File {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    #[serde(rename = "fileName")]
    file_name: String,
    #[serde(rename = "checksums")]
    checksums: Vec<Checksum>,
    #[serde(rename = "fileTypes", skip_serializing_if = "Option::is_none")]
    file_types: Option<Vec<FileType>>,
    #[serde(rename = "copyrightText", skip_serializing_if = "Option::is_none")]
    copyright_text: Option<String>,
    #[serde(rename = "licenseConcluded", skip_serializing_if = "Option::is_none")]
    license_concluded: Option<String>,
    #[serde(rename = "licenseInfoInFiles", skip_serializing_if = "Option::is_none")]
    license_info_in_files: Option<Vec<String>>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(rename = "licenseComments", skip_serializing_if = "Option::is_none")]
    license_comments: Option<String>,
    #[serde(rename = "noticeText", skip_serializing_if = "Option::is_none")]
    notice_text: Option<String>,
    #[serde(rename = "fileContributors", skip_serializing_if = "Option::is_none")]
    file_contributors: Option<Vec<String>>,
    #[serde(rename = "attributionTexts", skip_serializing_if = "Option::is_none")]
    attribution_texts: Option<Vec<String>>,
    #[serde(rename = "fileDependencies", skip_serializing_if = "Option::is_none")]
    file_dependencies: Option<Vec<String>>,
    #[serde(rename = "artifactOfs", skip_serializing_if = "Option::is_none")]
    artifact_ofs: Option<Vec<Map<String, Value>>>,
    #[serde(rename = "annotations", skip_serializing_if = "Option::is_none")]
    annotations: Option<Vec<Annotation>>,
}

impl SpdxRecord for File {
    const RECORD: &'static str = "File";
    const FIELDS: &'static [WireField] = &[
        WireField::required("spdx_id", "SPDXID"),
        WireField::required("file_name", "fileName"),
        WireField::required("checksums", "checksums")
            .records(Checksum::check_wire)
            .non_empty(),
        WireField::optional("file_types", "fileTypes"),
        WireField::optional("copyright_text", "copyrightText"),
        WireField::optional("license_concluded", "licenseConcluded"),
        WireField::optional("license_info_in_files", "licenseInfoInFiles"),
        WireField::optional("comment", "comment"),
        WireField::optional("license_comments", "licenseComments"),
        WireField::optional("notice_text", "noticeText"),
        WireField::optional("file_contributors", "fileContributors"),
        WireField::optional("attribution_texts", "attributionTexts"),
        WireField::optional("file_dependencies", "fileDependencies"),
        WireField::optional("artifact_ofs", "artifactOfs"),
        WireField::optional("annotations", "annotations").records(Annotation::check_wire),
    ];
}

impl File {
    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Never empty.
    pub fn checksums(&self) -> &[Checksum] {
        &self.checksums
    }

    pub fn file_types(&self) -> Option<&[FileType]> {
        self.file_types.as_deref()
    }

    pub fn copyright_text(&self) -> Option<&str> {
        self.copyright_text.as_deref()
    }

    pub fn license_concluded(&self) -> Option<&str> {
        self.license_concluded.as_deref()
    }

    pub fn license_info_in_files(&self) -> Option<&[String]> {
        self.license_info_in_files.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn license_comments(&self) -> Option<&str> {
        self.license_comments.as_deref()
    }

    pub fn notice_text(&self) -> Option<&str> {
        self.notice_text.as_deref()
    }

    pub fn file_contributors(&self) -> Option<&[String]> {
        self.file_contributors.as_deref()
    }

    pub fn attribution_texts(&self) -> Option<&[String]> {
        self.attribution_texts.as_deref()
    }

    /// SPDX IDs of files this one was derived from. Deprecated in SPDX 2.3.
    pub fn file_dependencies(&self) -> Option<&[String]> {
        self.file_dependencies.as_deref()
    }

    /// DOAP project descriptions, kept as given. Deprecated in SPDX 2.3.
    pub fn artifact_ofs(&self) -> Option<&[Map<String, Value>]> {
        self.artifact_ofs.as_deref()
    }

    pub fn annotations(&self) -> Option<&[Annotation]> {
        self.annotations.as_deref()
    }
}
