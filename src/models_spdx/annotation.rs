//! Comments attached to elements: annotations and legacy document reviews.

use super::enums::AnnotationType;
use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Annotation {
    #[serde(rename = "annotationDate")]
    annotation_date: String,
    #[serde(rename = "annotationType")]
    annotation_type: AnnotationType,
    #[serde(rename = "annotator")]
    annotator: String,
    #[serde(rename = "comment")]
    comment: String,
}

impl SpdxRecord for Annotation {
    const RECORD: &'static str = "Annotation";
    const FIELDS: &'static [WireField] = &[
        WireField::required("annotation_date", "annotationDate"),
        WireField::required("annotation_type", "annotationType"),
        WireField::required("annotator", "annotator"),
        WireField::required("comment", "comment"),
    ];
}

impl Annotation {
    pub fn new(
        annotation_type: AnnotationType,
        annotator: impl Into<String>,
        annotation_date: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            annotation_date: annotation_date.into(),
            annotation_type,
            annotator: annotator.into(),
            comment: comment.into(),
        }
    }

    pub fn annotation_date(&self) -> &str {
        &self.annotation_date
    }

    pub fn annotation_type(&self) -> AnnotationType {
        self.annotation_type
    }

    pub fn annotator(&self) -> &str {
        &self.annotator
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Document-level review record, superseded by [`Annotation`] with type
/// `REVIEW` but still accepted by SPDX 2.3.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Review {
    #[serde(rename = "reviewDate")]
    review_date: String,
    #[serde(rename = "reviewer", skip_serializing_if = "Option::is_none")]
    reviewer: Option<String>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl SpdxRecord for Review {
    const RECORD: &'static str = "Review";
    const FIELDS: &'static [WireField] = &[
        WireField::required("review_date", "reviewDate"),
        WireField::optional("reviewer", "reviewer"),
        WireField::optional("comment", "comment"),
    ];
}

impl Review {
    pub fn review_date(&self) -> &str {
        &self.review_date
    }

    pub fn reviewer(&self) -> Option<&str> {
        self.reviewer.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
