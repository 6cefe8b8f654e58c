//! Field alias tables and the construction/serialization contract shared by
//! every SPDX record.
//!
//! SPDX wire keys are irregular (`SPDXID` next to `spdxElementId`), so every
//! record declares its fields in a static table instead of relying on a
//! case-conversion rule. The table drives the structural checks run before
//! decoding, which is what turns a bad input into a [`ConstructionError`]
//! that names the field and where it sits in the input.

use crate::errors::{ConstructionError, SpdxError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Location of the top-level mapping in construction error paths.
pub const ROOT_PATH: &str = "$";

/// Structural check for a nested record, see [`SpdxRecord::check_wire`].
pub type CheckFn = fn(&Value, &str) -> Result<(), ConstructionError>;

/// How a field's value is checked before decoding.
#[derive(Clone, Copy)]
pub enum Shape {
    /// Scalar or list of scalars; left entirely to the decoder.
    Value,
    /// A single nested record.
    Record(CheckFn),
    /// An ordered list of nested records.
    Records(CheckFn),
}

/// One entry of a record's alias table.
#[derive(Clone, Copy)]
pub struct WireField {
    /// Internal (Rust) field identifier.
    pub name: &'static str,
    /// Key used in SPDX JSON.
    pub alias: &'static str,
    pub required: bool,
    pub non_empty: bool,
    pub shape: Shape,
}

impl WireField {
    pub const fn required(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias,
            required: true,
            non_empty: false,
            shape: Shape::Value,
        }
    }

    pub const fn optional(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            alias,
            required: false,
            non_empty: false,
            shape: Shape::Value,
        }
    }

    pub const fn record(mut self, check: CheckFn) -> Self {
        self.shape = Shape::Record(check);
        self
    }

    pub const fn records(mut self, check: CheckFn) -> Self {
        self.shape = Shape::Records(check);
        self
    }

    pub const fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }
}

/// Contract implemented by every SPDX entity.
///
/// `from_wire` is the only way to build a composite record; `to_wire` is
/// its inverse and emits only the fields that were supplied.
pub trait SpdxRecord: Serialize + DeserializeOwned {
    /// Human readable record name used in error messages.
    const RECORD: &'static str;
    /// Alias table, in serialization order.
    const FIELDS: &'static [WireField];

    /// Runs the structural checks for a mapping located at `path`.
    fn check_wire(mapping: &Value, path: &str) -> Result<(), ConstructionError> {
        check_mapping(Self::RECORD, Self::FIELDS, mapping, path)
    }

    /// Builds a record from a wire-keyed mapping.
    fn from_wire(mapping: Value) -> Result<Self, ConstructionError> {
        Self::check_wire(&mapping, ROOT_PATH)?;
        serde_json::from_value(mapping).map_err(|e| ConstructionError::InvalidValue {
            record: Self::RECORD,
            message: e.to_string(),
        })
    }

    /// Serializes to a wire-keyed mapping, omitting unset fields.
    fn to_wire(&self) -> Result<Value, SpdxError> {
        serde_json::to_value(self).map_err(|e| {
            SpdxError::Serialization(format!("Failed to serialize {}: {}", Self::RECORD, e))
        })
    }

    /// Wire key for an internal field name.
    fn alias_of(name: &str) -> Option<&'static str> {
        Self::FIELDS.iter().find(|f| f.name == name).map(|f| f.alias)
    }

    /// Internal field name for a wire key.
    fn name_of(alias: &str) -> Option<&'static str> {
        Self::FIELDS.iter().find(|f| f.alias == alias).map(|f| f.name)
    }
}

fn child_path(path: &str, key: &str) -> String {
    format!("{}.{}", path, key)
}

/// Checks keys, presence, nulls and nested records of one mapping against
/// its alias table. Types and enum values are left to the decoder.
pub fn check_mapping(
    record: &'static str,
    fields: &'static [WireField],
    mapping: &Value,
    path: &str,
) -> Result<(), ConstructionError> {
    let object = mapping
        .as_object()
        .ok_or_else(|| ConstructionError::NotAMapping {
            record,
            path: path.to_string(),
        })?;

    if let Some(unknown) = object
        .keys()
        .find(|key| !fields.iter().any(|f| f.alias == key.as_str()))
    {
        return Err(ConstructionError::UnknownField {
            record,
            field: unknown.clone(),
            path: path.to_string(),
        });
    }

    for field in fields {
        let value = match object.get(field.alias) {
            Some(value) => value,
            None if field.required => {
                return Err(ConstructionError::MissingField {
                    record,
                    name: field.name,
                    alias: field.alias,
                    path: path.to_string(),
                });
            }
            None => continue,
        };

        let field_path = child_path(path, field.alias);
        if value.is_null() {
            return Err(ConstructionError::NullValue {
                record,
                path: field_path,
            });
        }

        if field.non_empty && value.as_array().is_some_and(|items| items.is_empty()) {
            return Err(ConstructionError::EmptySequence {
                record,
                path: field_path,
            });
        }

        match field.shape {
            Shape::Value => {}
            Shape::Record(check) => check(value, &field_path)?,
            Shape::Records(check) => {
                // A non-array value is reported by the decoder as a type error.
                if let Some(items) = value.as_array() {
                    for (idx, item) in items.iter().enumerate() {
                        check(item, &format!("{}[{}]", field_path, idx))?;
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Leaf {
        #[serde(rename = "leafValue")]
        leaf_value: String,
    }

    impl SpdxRecord for Leaf {
        const RECORD: &'static str = "Leaf";
        const FIELDS: &'static [WireField] = &[WireField::required("leaf_value", "leafValue")];
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Branch {
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "leaves", skip_serializing_if = "Option::is_none")]
        leaves: Option<Vec<Leaf>>,
    }

    impl SpdxRecord for Branch {
        const RECORD: &'static str = "Branch";
        const FIELDS: &'static [WireField] = &[
            WireField::required("id", "ID"),
            WireField::optional("leaves", "leaves")
                .records(Leaf::check_wire)
                .non_empty(),
        ];
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(Branch::alias_of("id"), Some("ID"));
        assert_eq!(Branch::name_of("ID"), Some("id"));
        assert_eq!(Branch::alias_of("ID"), None);
    }

    #[test]
    fn test_nested_error_path() {
        let err = Branch::from_wire(json!({
            "ID": "b",
            "leaves": [{"leafValue": "x"}, {"leafValue": "y", "extra": true}]
        }))
        .unwrap_err();

        assert_eq!(
            err,
            ConstructionError::UnknownField {
                record: "Leaf",
                field: "extra".to_string(),
                path: "$.leaves[1]".to_string(),
            }
        );
    }

    #[test]
    fn test_null_and_empty_rejected() {
        let err = Branch::from_wire(json!({"ID": "b", "leaves": null})).unwrap_err();
        assert!(matches!(err, ConstructionError::NullValue { ref path, .. } if path == "$.leaves"));

        let err = Branch::from_wire(json!({"ID": "b", "leaves": []})).unwrap_err();
        assert!(matches!(err, ConstructionError::EmptySequence { .. }));
    }

    #[test]
    fn test_not_a_mapping() {
        let err = Branch::from_wire(json!(["ID"])).unwrap_err();
        assert!(matches!(err, ConstructionError::NotAMapping { record: "Branch", .. }));
    }

    #[test]
    fn test_type_errors_come_from_decoder() {
        let err = Branch::from_wire(json!({"ID": 7})).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidValue { record: "Branch", .. }));
    }
}
