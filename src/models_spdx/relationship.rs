//! Typed, directed edges between SPDX element identifiers.

use super::enums::RelationshipType;
use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

/// Both ends are plain identifiers; nothing checks that they resolve.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Relationship {
    #[serde(rename = "spdxElementId")]
    spdx_element_id: String,
    #[serde(rename = "relatedSpdxElement")]
    related_spdx_element: String,
    #[serde(rename = "relationshipType")]
    relationship_type: RelationshipType,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl SpdxRecord for Relationship {
    const RECORD: &'static str = "Relationship";
    const FIELDS: &'static [WireField] = &[
        WireField::required("spdx_element_id", "spdxElementId"),
        WireField::required("related_spdx_element", "relatedSpdxElement"),
        WireField::required("relationship_type", "relationshipType"),
        WireField::optional("comment", "comment"),
    ];
}

impl Relationship {
    pub fn new(
        spdx_element_id: impl Into<String>,
        relationship_type: RelationshipType,
        related_spdx_element: impl Into<String>,
    ) -> Self {
        Self {
            spdx_element_id: spdx_element_id.into(),
            related_spdx_element: related_spdx_element.into(),
            relationship_type,
            comment: None,
        }
    }

    pub fn spdx_element_id(&self) -> &str {
        &self.spdx_element_id
    }

    pub fn related_spdx_element(&self) -> &str {
        &self.related_spdx_element
    }

    pub fn relationship_type(&self) -> RelationshipType {
        self.relationship_type
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
