//! Snippets: byte or line ranges of a file with their own licensing.

use super::annotation::Annotation;
use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

/// One end of a snippet range, located by byte offset, line number or both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SnippetPointer {
    #[serde(rename = "reference")]
    reference: String,
    #[serde(rename = "offset", skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    #[serde(rename = "lineNumber", skip_serializing_if = "Option::is_none")]
    line_number: Option<i64>,
}

impl SpdxRecord for SnippetPointer {
    const RECORD: &'static str = "SnippetPointer";
    const FIELDS: &'static [WireField] = &[
        WireField::required("reference", "reference"),
        WireField::optional("offset", "offset"),
        WireField::optional("line_number", "lineNumber"),
    ];
}

impl SnippetPointer {
    pub fn offset(reference: impl Into<String>, offset: i64) -> Self {
        Self {
            reference: reference.into(),
            offset: Some(offset),
            line_number: None,
        }
    }

    pub fn line(reference: impl Into<String>, line_number: i64) -> Self {
        Self {
            reference: reference.into(),
            offset: None,
            line_number: Some(line_number),
        }
    }

    /// SPDX ID of the file the pointer points into.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn byte_offset(&self) -> Option<i64> {
        self.offset
    }

    pub fn line_number(&self) -> Option<i64> {
        self.line_number
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SnippetRange {
    #[serde(rename = "startPointer")]
    start_pointer: SnippetPointer,
    #[serde(rename = "endPointer")]
    end_pointer: SnippetPointer,
}

impl SpdxRecord for SnippetRange {
    const RECORD: &'static str = "SnippetRange";
    const FIELDS: &'static [WireField] = &[
        WireField::required("start_pointer", "startPointer").record(SnippetPointer::check_wire),
        WireField::required("end_pointer", "endPointer").record(SnippetPointer::check_wire),
    ];
}

impl SnippetRange {
    pub fn new(start_pointer: SnippetPointer, end_pointer: SnippetPointer) -> Self {
        Self {
            start_pointer,
            end_pointer,
        }
    }

    pub fn start_pointer(&self) -> &SnippetPointer {
        &self.start_pointer
    }

    pub fn end_pointer(&self) -> &SnippetPointer {
        &self.end_pointer
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Snippet {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "snippetFromFile")]
    snippet_from_file: String,
    #[serde(rename = "ranges")]
    ranges: Vec<SnippetRange>,
    #[serde(rename = "licenseConcluded", skip_serializing_if = "Option::is_none")]
    license_concluded: Option<String>,
    #[serde(rename = "licenseInfoInSnippets", skip_serializing_if = "Option::is_none")]
    license_info_in_snippets: Option<Vec<String>>,
    #[serde(rename = "licenseComments", skip_serializing_if = "Option::is_none")]
    license_comments: Option<String>,
    #[serde(rename = "copyrightText", skip_serializing_if = "Option::is_none")]
    copyright_text: Option<String>,
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(rename = "attributionTexts", skip_serializing_if = "Option::is_none")]
    attribution_texts: Option<Vec<String>>,
    #[serde(rename = "annotations", skip_serializing_if = "Option::is_none")]
    annotations: Option<Vec<Annotation>>,
}

impl SpdxRecord for Snippet {
    const RECORD: &'static str = "Snippet";
    const FIELDS: &'static [WireField] = &[
        WireField::required("spdx_id", "SPDXID"),
        WireField::required("name", "name"),
        WireField::required("snippet_from_file", "snippetFromFile"),
        WireField::required("ranges", "ranges")
            .records(SnippetRange::check_wire)
            .non_empty(),
        WireField::optional("license_concluded", "licenseConcluded"),
        WireField::optional("license_info_in_snippets", "licenseInfoInSnippets"),
        WireField::optional("license_comments", "licenseComments"),
        WireField::optional("copyright_text", "copyrightText"),
        WireField::optional("comment", "comment"),
        WireField::optional("attribution_texts", "attributionTexts"),
        WireField::optional("annotations", "annotations").records(Annotation::check_wire),
    ];
}

impl Snippet {
    pub fn spdx_id(&self) -> &str {
        &self.spdx_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// SPDX ID of the file the snippet was taken from.
    pub fn snippet_from_file(&self) -> &str {
        &self.snippet_from_file
    }

    /// Never empty.
    pub fn ranges(&self) -> &[SnippetRange] {
        &self.ranges
    }

    pub fn license_concluded(&self) -> Option<&str> {
        self.license_concluded.as_deref()
    }

    pub fn license_info_in_snippets(&self) -> Option<&[String]> {
        self.license_info_in_snippets.as_deref()
    }

    pub fn license_comments(&self) -> Option<&str> {
        self.license_comments.as_deref()
    }

    pub fn copyright_text(&self) -> Option<&str> {
        self.copyright_text.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn attribution_texts(&self) -> Option<&[String]> {
        self.attribution_texts.as_deref()
    }

    pub fn annotations(&self) -> Option<&[Annotation]> {
        self.annotations.as_deref()
    }
}
