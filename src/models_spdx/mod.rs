//! SPDX 2.3 document model.
//!
//! Every record is built once through [`SpdxRecord::from_wire`] and read
//! through accessors afterwards; there is no way to modify a record in
//! place. Optional fields are `Option`s so an unset field and a field set
//! to its zero value stay distinguishable on the wire.
//!
//! [`SpdxRecord::from_wire`]: crate::fields::SpdxRecord::from_wire

pub mod annotation;
pub mod checksum;
pub mod creation_info;
pub mod document;
pub mod enums;
pub mod external_document_ref;
pub mod external_ref;
pub mod file;
pub mod licensing_info;
pub mod package;
pub mod relationship;
pub mod snippet;
pub mod verification_code;

pub use annotation::{Annotation, Review};
pub use checksum::Checksum;
pub use creation_info::CreationInfo;
pub use document::{DOCUMENT_SPDX_ID, Document};
pub use enums::{
    AnnotationType, ChecksumAlgorithm, DataLicense, FileType, PackagePurpose, ReferenceCategory,
    RelationshipType, SpdxVersion,
};
pub use external_document_ref::ExternalDocumentRef;
pub use external_ref::ExternalRef;
pub use file::File;
pub use licensing_info::{CrossRef, HasExtractedLicensingInfo};
pub use package::Package;
pub use relationship::Relationship;
pub use snippet::{Snippet, SnippetPointer, SnippetRange};
pub use verification_code::PackageVerificationCode;
