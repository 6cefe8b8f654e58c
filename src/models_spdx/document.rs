//! The root SPDX document record.

use super::annotation::{Annotation, Review};
use super::creation_info::CreationInfo;
use super::enums::{DataLicense, SpdxVersion};
use super::external_document_ref::ExternalDocumentRef;
use super::file::File;
use super::licensing_info::HasExtractedLicensingInfo;
use super::package::Package;
use super::relationship::Relationship;
use super::snippet::Snippet;
use crate::errors::SpdxError;
use crate::fields::{SpdxRecord, WireField};
use crate::schema::SpdxSchema;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier conventionally given to the document itself.
pub const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";

/// An SPDX 2.3 document.
///
/// `spdxVersion`, `dataLicense` and `SPDXID` are emitted only when they were
/// supplied, like every other optional field; the schema reports them when
/// they are missing. [`Document::new`] supplies all three, and the accessors
/// fall back to `SPDX-2.3`, `CC0-1.0` and `SPDXRef-DOCUMENT`. Every
/// collection keeps the distinction between "not supplied" and "supplied
/// but empty".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    schema: Option<String>,
    #[serde(rename = "spdxVersion", skip_serializing_if = "Option::is_none")]
    spdx_version: Option<SpdxVersion>,
    #[serde(rename = "dataLicense", skip_serializing_if = "Option::is_none")]
    data_license: Option<DataLicense>,
    #[serde(rename = "SPDXID", skip_serializing_if = "Option::is_none")]
    spdx_id: Option<String>,
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "documentNamespace")]
    document_namespace: String,
    #[serde(rename = "creationInfo")]
    creation_info: CreationInfo,
    #[serde(rename = "externalDocumentRefs", skip_serializing_if = "Option::is_none")]
    external_document_refs: Option<Vec<ExternalDocumentRef>>,
    #[serde(rename = "packages", skip_serializing_if = "Option::is_none")]
    packages: Option<Vec<Package>>,
    #[serde(rename = "files", skip_serializing_if = "Option::is_none")]
    files: Option<Vec<File>>,
    #[serde(rename = "snippets", skip_serializing_if = "Option::is_none")]
    snippets: Option<Vec<Snippet>>,
    #[serde(rename = "documentDescribes", skip_serializing_if = "Option::is_none")]
    document_describes: Option<Vec<String>>,
    #[serde(rename = "hasExtractedLicensingInfos", skip_serializing_if = "Option::is_none")]
    has_extracted_licensing_infos: Option<Vec<HasExtractedLicensingInfo>>,
    #[serde(rename = "relationships", skip_serializing_if = "Option::is_none")]
    relationships: Option<Vec<Relationship>>,
    #[serde(rename = "annotations", skip_serializing_if = "Option::is_none")]
    annotations: Option<Vec<Annotation>>,
    #[serde(rename = "revieweds", skip_serializing_if = "Option::is_none")]
    revieweds: Option<Vec<Review>>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl SpdxRecord for Document {
    const RECORD: &'static str = "Document";
    const FIELDS: &'static [WireField] = &[
        WireField::optional("schema", "$schema"),
        WireField::optional("spdx_version", "spdxVersion"),
        WireField::optional("data_license", "dataLicense"),
        WireField::optional("spdx_id", "SPDXID"),
        WireField::required("name", "name"),
        WireField::required("document_namespace", "documentNamespace"),
        WireField::required("creation_info", "creationInfo").record(CreationInfo::check_wire),
        WireField::optional("external_document_refs", "externalDocumentRefs")
            .records(ExternalDocumentRef::check_wire),
        WireField::optional("packages", "packages").records(Package::check_wire),
        WireField::optional("files", "files").records(File::check_wire),
        WireField::optional("snippets", "snippets").records(Snippet::check_wire),
        WireField::optional("document_describes", "documentDescribes"),
        WireField::optional("has_extracted_licensing_infos", "hasExtractedLicensingInfos")
            .records(HasExtractedLicensingInfo::check_wire),
        WireField::optional("relationships", "relationships").records(Relationship::check_wire),
        WireField::optional("annotations", "annotations").records(Annotation::check_wire),
        WireField::optional("revieweds", "revieweds").records(Review::check_wire),
        WireField::optional("comment", "comment"),
    ];
}

impl Document {
    /// An empty document with `spdxVersion`, `dataLicense` and `SPDXID` set
    /// to their fixed values.
    pub fn new(
        name: impl Into<String>,
        document_namespace: impl Into<String>,
        creation_info: CreationInfo,
    ) -> Self {
        Self {
            schema: None,
            spdx_version: Some(SpdxVersion::default()),
            data_license: Some(DataLicense::default()),
            spdx_id: Some(DOCUMENT_SPDX_ID.to_string()),
            name: name.into(),
            document_namespace: document_namespace.into(),
            creation_info,
            external_document_refs: None,
            packages: None,
            files: None,
            snippets: None,
            document_describes: None,
            has_extracted_licensing_infos: None,
            relationships: None,
            annotations: None,
            revieweds: None,
            comment: None,
        }
    }

    /// Builds a unique `documentNamespace` of the form `<base>/<name>-<uuid>`.
    pub fn generate_namespace(base: &str, name: &str) -> String {
        format!("{}/{}-{}", base.trim_end_matches('/'), name, Uuid::new_v4())
    }

    /// Serializes the document and checks it against `schema`.
    pub fn validate(&self, schema: &SpdxSchema) -> Result<(), SpdxError> {
        debug!("Validating document '{}' against schema", self.name);
        let instance = self.to_wire()?;
        schema.validate(&instance)?;
        Ok(())
    }

    /// The `$schema` URI the document declares, if any.
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn spdx_version(&self) -> SpdxVersion {
        self.spdx_version.unwrap_or_default()
    }

    pub fn data_license(&self) -> DataLicense {
        self.data_license.unwrap_or_default()
    }

    pub fn spdx_id(&self) -> &str {
        self.spdx_id.as_deref().unwrap_or(DOCUMENT_SPDX_ID)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document_namespace(&self) -> &str {
        &self.document_namespace
    }

    pub fn creation_info(&self) -> &CreationInfo {
        &self.creation_info
    }

    pub fn external_document_refs(&self) -> Option<&[ExternalDocumentRef]> {
        self.external_document_refs.as_deref()
    }

    pub fn packages(&self) -> Option<&[Package]> {
        self.packages.as_deref()
    }

    pub fn files(&self) -> Option<&[File]> {
        self.files.as_deref()
    }

    pub fn snippets(&self) -> Option<&[Snippet]> {
        self.snippets.as_deref()
    }

    pub fn document_describes(&self) -> Option<&[String]> {
        self.document_describes.as_deref()
    }

    pub fn has_extracted_licensing_infos(&self) -> Option<&[HasExtractedLicensingInfo]> {
        self.has_extracted_licensing_infos.as_deref()
    }

    pub fn relationships(&self) -> Option<&[Relationship]> {
        self.relationships.as_deref()
    }

    pub fn annotations(&self) -> Option<&[Annotation]> {
        self.annotations.as_deref()
    }

    pub fn revieweds(&self) -> Option<&[Review]> {
        self.revieweds.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// First package carrying `spdx_id`.
    pub fn package(&self, spdx_id: &str) -> Option<&Package> {
        self.packages().unwrap_or_default().iter().find(|p| p.spdx_id() == spdx_id)
    }

    /// First file carrying `spdx_id`.
    pub fn file(&self, spdx_id: &str) -> Option<&File> {
        self.files().unwrap_or_default().iter().find(|f| f.spdx_id() == spdx_id)
    }

    /// First snippet carrying `spdx_id`.
    pub fn snippet(&self, spdx_id: &str) -> Option<&Snippet> {
        self.snippets().unwrap_or_default().iter().find(|s| s.spdx_id() == spdx_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConstructionError;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn minimal() -> Value {
        json!({
            "spdxVersion": "SPDX-2.3",
            "dataLicense": "CC0-1.0",
            "SPDXID": "SPDXRef-DOCUMENT",
            "name": "minimal",
            "documentNamespace": "https://example.com/minimal",
            "creationInfo": {
                "created": "2024-01-01T00:00:00Z",
                "creators": ["Tool: test"],
            },
        })
    }

    #[test]
    fn test_minimal_document_round_trips_exactly() {
        let document = Document::from_wire(minimal()).unwrap();
        assert_eq!(document.to_wire().unwrap(), minimal());
    }

    #[test]
    fn test_fixed_fields_are_not_added_when_absent() {
        let mut data = minimal();
        let object = data.as_object_mut().unwrap();
        object.remove("spdxVersion");
        object.remove("dataLicense");
        object.remove("SPDXID");

        let document = Document::from_wire(data.clone()).unwrap();
        assert_eq!(document.spdx_version(), SpdxVersion::V2_3);
        assert_eq!(document.data_license(), DataLicense::Cc0_1_0);
        assert_eq!(document.spdx_id(), DOCUMENT_SPDX_ID);
        assert_eq!(document.to_wire().unwrap(), data);
    }

    #[test]
    fn test_new_sets_fixed_fields() {
        let created = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let document = Document::new(
            "minimal",
            "https://example.com/minimal",
            CreationInfo::new(created, vec!["Tool: test".to_string()]),
        );

        assert_eq!(document.to_wire().unwrap(), minimal());
        assert_eq!(document, Document::from_wire(minimal()).unwrap());
    }

    #[test]
    fn test_other_spdx_version_rejected() {
        let mut data = minimal();
        data["spdxVersion"] = json!("SPDX-2.2");
        let err = Document::from_wire(data).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidValue { record: "Document", .. }));
    }

    #[test]
    fn test_empty_collections_are_kept() {
        let mut data = minimal();
        data["packages"] = json!([]);
        data["relationships"] = json!([]);

        let document = Document::from_wire(data).unwrap();
        assert_eq!(document.packages(), Some(&[][..]));
        let wire = document.to_wire().unwrap();
        assert_eq!(wire["packages"], json!([]));
        assert_eq!(wire["relationships"], json!([]));
        assert!(wire.get("snippets").is_none());
    }

    #[test]
    fn test_nested_creation_info_error() {
        let mut data = minimal();
        data["creationInfo"]["tool"] = json!("x");
        let err = Document::from_wire(data).unwrap_err();
        assert_eq!(
            err,
            ConstructionError::UnknownField {
                record: "CreationInfo",
                field: "tool".to_string(),
                path: "$.creationInfo".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_creators_rejected_in_document() {
        let mut data = minimal();
        data["creationInfo"]["creators"] = json!([]);
        let err = Document::from_wire(data).unwrap_err();
        assert_eq!(
            err,
            ConstructionError::EmptySequence {
                record: "CreationInfo",
                path: "$.creationInfo.creators".to_string(),
            }
        );
    }

    #[test]
    fn test_schema_uri_and_reviews() {
        let mut data = minimal();
        data["$schema"] = json!("https://raw.githubusercontent.com/spdx/spdx-spec/v2.3/schemas/spdx-schema.json");
        data["revieweds"] = json!([{"reviewDate": "2010-02-10T00:00:00Z", "reviewer": "Person: Joe Reviewer"}]);

        let document = Document::from_wire(data.clone()).unwrap();
        assert!(document.schema().unwrap().ends_with("spdx-schema.json"));
        assert_eq!(document.revieweds().unwrap()[0].reviewer(), Some("Person: Joe Reviewer"));
        assert_eq!(document.to_wire().unwrap(), data);
    }

    #[test]
    fn test_generate_namespace() {
        let first = Document::generate_namespace("https://example.com/spdxdocs/", "demo");
        let second = Document::generate_namespace("https://example.com/spdxdocs", "demo");
        assert!(first.starts_with("https://example.com/spdxdocs/demo-"));
        assert_ne!(first, second);
    }
}
