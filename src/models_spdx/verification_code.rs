//! Package verification code: a digest over the package's files.

use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PackageVerificationCode {
    #[serde(rename = "packageVerificationCodeValue")]
    value: String,
    #[serde(
        rename = "packageVerificationCodeExcludedFiles",
        skip_serializing_if = "Option::is_none"
    )]
    excluded_files: Option<Vec<String>>,
}

impl SpdxRecord for PackageVerificationCode {
    const RECORD: &'static str = "PackageVerificationCode";
    const FIELDS: &'static [WireField] = &[
        WireField::required("value", "packageVerificationCodeValue"),
        WireField::optional("excluded_files", "packageVerificationCodeExcludedFiles"),
    ];
}

impl PackageVerificationCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            excluded_files: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Files left out of the digest, in the order given.
    pub fn excluded_files(&self) -> Option<&[String]> {
        self.excluded_files.as_deref()
    }
}
