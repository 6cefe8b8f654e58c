//! Closed value sets used by SPDX 2.3 fields.
//!
//! Each set mirrors the matching `enum` in the SPDX 2.3 JSON Schema, so a
//! value the model accepts is always one the schema accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The SPDX wire spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Digest algorithm of a [`Checksum`](super::Checksum).
    pub enum ChecksumAlgorithm {
        Sha1 => "SHA1",
        Sha224 => "SHA224",
        Sha256 => "SHA256",
        Sha384 => "SHA384",
        Sha512 => "SHA512",
        Sha3_256 => "SHA3-256",
        Sha3_384 => "SHA3-384",
        Sha3_512 => "SHA3-512",
        Blake2b256 => "BLAKE2b-256",
        Blake2b384 => "BLAKE2b-384",
        Blake2b512 => "BLAKE2b-512",
        Blake3 => "BLAKE3",
        Md2 => "MD2",
        Md4 => "MD4",
        Md5 => "MD5",
        Md6 => "MD6",
        Adler32 => "ADLER32",
    }
}

wire_enum! {
    /// Category of an [`ExternalRef`](super::ExternalRef).
    ///
    /// The underscore spellings predate SPDX 2.3 but are still listed by its
    /// schema; they are kept as distinct values so they round-trip unchanged.
    pub enum ReferenceCategory {
        Security => "SECURITY",
        PackageManager => "PACKAGE-MANAGER",
        PersistentId => "PERSISTENT-ID",
        Other => "OTHER",
        LegacyPackageManager => "PACKAGE_MANAGER",
        LegacyPersistentId => "PERSISTENT_ID",
    }
}

wire_enum! {
    /// Type of a [`File`](super::File).
    pub enum FileType {
        Source => "SOURCE",
        Binary => "BINARY",
        Archive => "ARCHIVE",
        Application => "APPLICATION",
        Audio => "AUDIO",
        Image => "IMAGE",
        Text => "TEXT",
        Video => "VIDEO",
        Documentation => "DOCUMENTATION",
        Spdx => "SPDX",
        Other => "OTHER",
    }
}

wire_enum! {
    /// Primary purpose of a [`Package`](super::Package).
    pub enum PackagePurpose {
        Application => "APPLICATION",
        Framework => "FRAMEWORK",
        Library => "LIBRARY",
        Container => "CONTAINER",
        OperatingSystem => "OPERATING_SYSTEM",
        Device => "DEVICE",
        Firmware => "FIRMWARE",
        Source => "SOURCE",
        Archive => "ARCHIVE",
        File => "FILE",
        Install => "INSTALL",
        Other => "OTHER",
    }
}

wire_enum! {
    /// Edge type of a [`Relationship`](super::Relationship).
    pub enum RelationshipType {
        Amends => "AMENDS",
        AncestorOf => "ANCESTOR_OF",
        BuildDependencyOf => "BUILD_DEPENDENCY_OF",
        BuildToolOf => "BUILD_TOOL_OF",
        ContainedBy => "CONTAINED_BY",
        Contains => "CONTAINS",
        CopyOf => "COPY_OF",
        DataFileOf => "DATA_FILE_OF",
        DependencyManifestOf => "DEPENDENCY_MANIFEST_OF",
        DependencyOf => "DEPENDENCY_OF",
        DependsOn => "DEPENDS_ON",
        DescendantOf => "DESCENDANT_OF",
        DescribedBy => "DESCRIBED_BY",
        Describes => "DESCRIBES",
        DevDependencyOf => "DEV_DEPENDENCY_OF",
        DevToolOf => "DEV_TOOL_OF",
        DistributionArtifact => "DISTRIBUTION_ARTIFACT",
        DocumentationOf => "DOCUMENTATION_OF",
        DynamicLink => "DYNAMIC_LINK",
        ExampleOf => "EXAMPLE_OF",
        ExpandedFromArchive => "EXPANDED_FROM_ARCHIVE",
        FileAdded => "FILE_ADDED",
        FileDeleted => "FILE_DELETED",
        FileModified => "FILE_MODIFIED",
        GeneratedFrom => "GENERATED_FROM",
        Generates => "GENERATES",
        HasPrerequisite => "HAS_PREREQUISITE",
        MetafileOf => "METAFILE_OF",
        OptionalComponentOf => "OPTIONAL_COMPONENT_OF",
        OptionalDependencyOf => "OPTIONAL_DEPENDENCY_OF",
        Other => "OTHER",
        PackageOf => "PACKAGE_OF",
        PatchApplied => "PATCH_APPLIED",
        PatchFor => "PATCH_FOR",
        PrerequisiteFor => "PREREQUISITE_FOR",
        ProvidedDependencyOf => "PROVIDED_DEPENDENCY_OF",
        RequirementDescriptionFor => "REQUIREMENT_DESCRIPTION_FOR",
        RuntimeDependencyOf => "RUNTIME_DEPENDENCY_OF",
        SpecificationFor => "SPECIFICATION_FOR",
        StaticLink => "STATIC_LINK",
        TestCaseOf => "TEST_CASE_OF",
        TestDependencyOf => "TEST_DEPENDENCY_OF",
        TestOf => "TEST_OF",
        TestToolOf => "TEST_TOOL_OF",
        VariantOf => "VARIANT_OF",
    }
}

wire_enum! {
    /// Value of a document's `spdxVersion`. Only SPDX 2.3 is modelled.
    pub enum SpdxVersion {
        V2_3 => "SPDX-2.3",
    }
}

wire_enum! {
    /// Value of a document's `dataLicense`, fixed by the SPDX specification.
    pub enum DataLicense {
        Cc0_1_0 => "CC0-1.0",
    }
}

wire_enum! {
    /// Kind of an [`Annotation`](super::Annotation).
    pub enum AnnotationType {
        Other => "OTHER",
        Review => "REVIEW",
    }
}

impl Default for SpdxVersion {
    fn default() -> Self {
        SpdxVersion::V2_3
    }
}

impl Default for DataLicense {
    fn default() -> Self {
        DataLicense::Cc0_1_0
    }
}
