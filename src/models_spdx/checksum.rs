//! Algorithm/value digest pair attached to packages and files.

use super::enums::ChecksumAlgorithm;
use crate::fields::{SpdxRecord, WireField};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Checksum {
    #[serde(rename = "algorithm")]
    algorithm: ChecksumAlgorithm,
    #[serde(rename = "checksumValue")]
    checksum_value: String,
}

impl SpdxRecord for Checksum {
    const RECORD: &'static str = "Checksum";
    const FIELDS: &'static [WireField] = &[
        WireField::required("algorithm", "algorithm"),
        WireField::required("checksum_value", "checksumValue"),
    ];
}

impl Checksum {
    /// The digest length is not checked here; the schema is the authority.
    pub fn new(algorithm: ChecksumAlgorithm, checksum_value: impl Into<String>) -> Self {
        Self {
            algorithm,
            checksum_value: checksum_value.into(),
        }
    }

    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    pub fn checksum_value(&self) -> &str {
        &self.checksum_value
    }
}
