//! Package elements: identity, provenance, licensing and external refs.

use super::annotation::Annotation;
use super::checksum::Checksum;
use super::enums::PackagePurpose;
use super::external_ref::ExternalRef;
use super::verification_code::PackageVerificationCode;
use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Package {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    #[serde(rename = "downloadLocation")]
    download_location: String,
    #[serde(rename = "licenseConcluded", skip_serializing_if = "Option::is_none")]
    license_concluded: Option<String>,
    #[serde(rename = "copyrightText", skip_serializing_if = "Option::is_none")]
    copyright_text: Option<String>,
    #[serde(rename = "filesAnalyzed", skip_serializing_if = "Option::is_none")]
    files_analyzed: Option<bool>,
    #[serde(rename = "versionInfo", skip_serializing_if = "Option::is_none")]
    version_info: Option<String>,
    #[serde(rename = "licenseDeclared", skip_serializing_if = "Option::is_none")]
    license_declared: Option<String>,
    #[serde(rename = "releaseDate", skip_serializing_if = "Option::is_none")]
    release_date: Option<String>,
    #[serde(rename = "checksums", skip_serializing_if = "Option::is_none")]
    checksums: Option<Vec<Checksum>>,
    #[serde(rename = "externalRefs", skip_serializing_if = "Option::is_none")]
    external_refs: Option<Vec<ExternalRef>>,
    #[serde(rename = "supplier", skip_serializing_if = "Option::is_none")]
    supplier: Option<String>,
    #[serde(rename = "originator", skip_serializing_if = "Option::is_none")]
    originator: Option<String>,
    #[serde(rename = "homepage", skip_serializing_if = "Option::is_none")]
    homepage: Option<String>,
    #[serde(rename = "summary", skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(rename = "licenseComments", skip_serializing_if = "Option::is_none")]
    license_comments: Option<String>,
    #[serde(rename = "licenseInfoFromFiles", skip_serializing_if = "Option::is_none")]
    license_info_from_files: Option<Vec<String>>,
    #[serde(rename = "packageFileName", skip_serializing_if = "Option::is_none")]
    package_file_name: Option<String>,
    #[serde(rename = "sourceInfo", skip_serializing_if = "Option::is_none")]
    source_info: Option<String>,
    #[serde(rename = "attributionTexts", skip_serializing_if = "Option::is_none")]
    attribution_texts: Option<Vec<String>>,
    #[serde(rename = "primaryPackagePurpose", skip_serializing_if = "Option::is_none")]
    primary_package_purpose: Option<PackagePurpose>,
    #[serde(rename = "builtDate", skip_serializing_if = "Option::is_none")]
    built_date: Option<String>,
    #[serde(rename = "validUntilDate", skip_serializing_if = "Option::is_none")]
    valid_until_date: Option<String>,
    #[serde(rename = "packageVerificationCode", skip_serializing_if = "Option::is_none")]
    package_verification_code: Option<PackageVerificationCode>,
    #[serde(rename = "hasFiles", skip_serializing_if = "Option::is_none")]
    has_files: Option<Vec<String>>,
    #[serde(rename = "annotations", skip_serializing_if = "Option::is_none")]
    annotations: Option<Vec<Annotation>>,
}

impl SpdxRecord for Package {
    const RECORD: &'static str = "Package";
    const FIELDS: &'static [WireField] = &[
        WireField::required("name", "name"),
        WireField::required("spdx_id", "SPDXID"),
        WireField::required("download_location", "downloadLocation"),
        WireField::optional("license_concluded", "licenseConcluded"),
        WireField::optional("copyright_text", "copyrightText"),
        WireField::optional("files_analyzed", "filesAnalyzed"),
        WireField::optional("version_info", "versionInfo"),
        WireField::optional("license_declared", "licenseDeclared"),
        WireField::optional("release_date", "releaseDate"),
        WireField::optional("checksums", "checksums").records(Checksum::check_wire),
        WireField::optional("external_refs", "externalRefs").records(ExternalRef::check_wire),
        WireField::optional("supplier", "supplier"),
        WireField::optional("originator", "originator"),
        WireField::optional("homepage", "homepage"),
        WireField::optional("summary", "summary"),
        WireField::optional("description", "description"),
        WireField::optional("comment", "comment"),
        WireField::optional("license_comments", "licenseComments"),
        WireField::optional("license_info_from_files", "licenseInfoFromFiles"),
        WireField::optional("package_file_name", "packageFileName"),
        WireField::optional("source_info", "sourceInfo"),
        WireField::optional("attribution_texts", "attributionTexts"),
        WireField::optional("primary_package_purpose", "primaryPackagePurpose"),
        WireField::optional("built_date", "builtDate"),
        WireField::optional("valid_until_date", "validUntilDate"),
        WireField::optional("package_verification_code", "packageVerificationCode")
            .record(PackageVerificationCode::check_wire),
        WireField::optional("has_files", "hasFiles"),
        WireField::optional("annotations", "annotations").records(Annotation::check_wire),
    ];
}

impl Package {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }

    pub fn download_location(&self) -> &str {
        &self.download_location
    }

    pub fn license_concluded(&self) -> Option<&str> {
        self.license_concluded.as_deref()
    }

    pub fn copyright_text(&self) -> Option<&str> {
        self.copyright_text.as_deref()
    }

    /// `Some(false)` when explicitly disabled, `None` when never supplied.
    pub fn files_analyzed(&self) -> Option<bool> {
        self.files_analyzed
    }

    pub fn version_info(&self) -> Option<&str> {
        self.version_info.as_deref()
    }

    pub fn license_declared(&self) -> Option<&str> {
        self.license_declared.as_deref()
    }

    pub fn release_date(&self) -> Option<&str> {
        self.release_date.as_deref()
    }

    pub fn checksums(&self) -> Option<&[Checksum]> {
        self.checksums.as_deref()
    }

    pub fn external_refs(&self) -> Option<&[ExternalRef]> {
        self.external_refs.as_deref()
    }

    /// Locators of all `purl` external references, in document order.
    pub fn purls(&self) -> impl Iterator<Item = &str> {
        self.external_refs
            .iter()
            .flatten()
            .filter(|r| r.reference_type() == "purl")
            .map(|r| r.reference_locator())
    }

    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    pub fn originator(&self) -> Option<&str> {
        self.originator.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn license_comments(&self) -> Option<&str> {
        self.license_comments.as_deref()
    }

    pub fn license_info_from_files(&self) -> Option<&[String]> {
        self.license_info_from_files.as_deref()
    }

    pub fn package_file_name(&self) -> Option<&str> {
        self.package_file_name.as_deref()
    }

    pub fn source_info(&self) -> Option<&str> {
        self.source_info.as_deref()
    }

    pub fn attribution_texts(&self) -> Option<&[String]> {
        self.attribution_texts.as_deref()
    }

    pub fn primary_package_purpose(&self) -> Option<PackagePurpose> {
        self.primary_package_purpose
    }

    pub fn built_date(&self) -> Option<&str> {
        self.built_date.as_deref()
    }

    pub fn valid_until_date(&self) -> Option<&str> {
        self.valid_until_date.as_deref()
    }

    pub fn package_verification_code(&self) -> Option<&PackageVerificationCode> {
        self.package_verification_code.as_ref()
    }

    /// SPDX IDs of the files contained in this package.
    pub fn has_files(&self) -> Option<&[String]> {
        self.has_files.as_deref()
    }

    pub fn annotations(&self) -> Option<&[Annotation]> {
        self.annotations.as_deref()
    }
}
