#![deny(missing_docs)]

//! # Codec Kinds
//!
//! The closed set of codec categories. Used as the registry key.

use std::fmt;

/// A codec category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    /// Enum values.
    Enum,
    /// Primitive values.
    Primitive,
    /// Collections of primitive or enum values.
    Collection,
    /// Delta (change-feed) collections.
    DeltaCollection,
    /// Complex instances. Shares the [`CodecKind::Entity`] registry slot.
    Complex,
    /// Entity instances.
    Entity,
    /// Collections of entity or complex instances.
    ResourceSet,
    /// Bare values without the protocol envelope (`$value`, `$count`).
    RawValue,
    /// The service document.
    ServiceDocument,
    /// A single entity reference link.
    ReferenceLink,
    /// A collection of entity reference links.
    ReferenceLinkCollection,
    /// Error bodies.
    Error,
    /// The metadata document.
    Metadata,
}

impl CodecKind {
    /// Every kind, in declaration order.
    pub const ALL: [CodecKind; 13] = [
        Self::Enum,
        Self::Primitive,
        Self::Collection,
        Self::DeltaCollection,
        Self::Complex,
        Self::Entity,
        Self::ResourceSet,
        Self::RawValue,
        Self::ServiceDocument,
        Self::ReferenceLink,
        Self::ReferenceLinkCollection,
        Self::Error,
        Self::Metadata,
    ];

    /// The registry slot this kind is stored under.
    ///
    /// Complex and entity payloads are written by the same codec; the schema
    /// type carried in the codec context tells them apart.
    pub fn registry_slot(self) -> CodecKind {
        match self {
            CodecKind::Complex => CodecKind::Entity,
            other => other,
        }
    }

    /// Whether this kind is a fixed role selected by value type or path, not by schema type.
    pub fn is_role(self) -> bool {
        matches!(
            self,
            CodecKind::RawValue
                | CodecKind::ServiceDocument
                | CodecKind::ReferenceLink
                | CodecKind::ReferenceLinkCollection
                | CodecKind::Error
                | CodecKind::Metadata
        )
    }

    /// A stable display name.
    pub fn name(self) -> &'static str {
        match self {
            CodecKind::Enum => "enum",
            CodecKind::Primitive => "primitive",
            CodecKind::Collection => "collection",
            CodecKind::DeltaCollection => "delta-collection",
            CodecKind::Complex => "complex",
            CodecKind::Entity => "entity",
            CodecKind::ResourceSet => "resource-set",
            CodecKind::RawValue => "raw-value",
            CodecKind::ServiceDocument => "service-document",
            CodecKind::ReferenceLink => "reference-link",
            CodecKind::ReferenceLinkCollection => "reference-link-collection",
            CodecKind::Error => "error",
            CodecKind::Metadata => "metadata",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_shares_entity_slot() {
        assert_eq!(CodecKind::Complex.registry_slot(), CodecKind::Entity);
        assert_eq!(CodecKind::Entity.registry_slot(), CodecKind::Entity);
        for kind in CodecKind::ALL {
            if kind != CodecKind::Complex {
                assert_eq!(kind.registry_slot(), kind);
            }
        }
    }

    #[test]
    fn test_roles() {
        let roles: Vec<CodecKind> = CodecKind::ALL.into_iter().filter(|k| k.is_role()).collect();
        assert_eq!(roles.len(), 6);
        assert!(!CodecKind::ResourceSet.is_role());
    }
}
