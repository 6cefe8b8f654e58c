//! References from a package to external identifiers such as purls or CPEs.

use super::enums::ReferenceCategory;
use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExternalRef {
    #[serde(rename = "referenceCategory")]
    reference_category: ReferenceCategory,
    #[serde(rename = "referenceType")]
    reference_type: String,
    #[serde(rename = "referenceLocator")]
    reference_locator: String,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl SpdxRecord for ExternalRef {
    const RECORD: &'static str = "ExternalRef";
    const FIELDS: &'static [WireField] = &[
        WireField::required("reference_category", "referenceCategory"),
        WireField::required("reference_type", "referenceType"),
        WireField::required("reference_locator", "referenceLocator"),
        WireField::optional("comment", "comment"),
    ];
}

impl ExternalRef {
    pub fn new(
        reference_category: ReferenceCategory,
        reference_type: impl Into<String>,
        reference_locator: impl Into<String>,
    ) -> Self {
        Self {
            reference_category,
            reference_type: reference_type.into(),
            reference_locator: reference_locator.into(),
            comment: None,
        }
    }

    /// A `PACKAGE-MANAGER` reference of type `purl`.
    pub fn purl(locator: impl Into<String>) -> Self {
        Self::new(ReferenceCategory::PackageManager, "purl", locator)
    }

    pub fn reference_category(&self) -> ReferenceCategory {
        self.reference_category
    }

    pub fn reference_type(&self) -> &str {
        &self.reference_type
    }

    pub fn reference_locator(&self) -> &str {
        &self.reference_locator
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_purl_reference() {
        let data = json!({
            "referenceCategory": "PACKAGE-MANAGER",
            "referenceType": "purl",
            "referenceLocator": "pkg:pypi/lxml@3.3.5",
        });

        let external_ref = ExternalRef::from_wire(data.clone()).unwrap();
        assert_eq!(external_ref, ExternalRef::purl("pkg:pypi/lxml@3.3.5"));
        assert_eq!(external_ref.comment(), None);
        assert_eq!(external_ref.to_wire().unwrap(), data);
    }

    #[test]
    fn test_legacy_category_kept_as_written() {
        let data = json!({
            "referenceCategory": "PACKAGE_MANAGER",
            "referenceType": "purl",
            "referenceLocator": "pkg:npm/left-pad@1.3.0",
        });

        let external_ref = ExternalRef::from_wire(data.clone()).unwrap();
        assert_eq!(
            external_ref.reference_category(),
            ReferenceCategory::LegacyPackageManager
        );
        assert_eq!(external_ref.to_wire().unwrap(), data);
    }
}
