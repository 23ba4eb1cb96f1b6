#![deny(missing_docs)]

//! # EDM Types
//!
//! The schema-side type system: kind tags, primitive kinds, type definitions
//! and nullable type references.

use crate::error::{FormatterError, FormatterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The bare kind tag of an EDM type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdmTypeKind {
    /// A built-in `Edm.*` primitive.
    Primitive,
    /// A named enumeration.
    Enum,
    /// A structured type without a key.
    Complex,
    /// A structured type with a key.
    Entity,
    /// An ordered collection of another type.
    Collection,
    /// A named alias over a primitive.
    TypeDefinition,
    /// A value with no declared schema.
    Untyped,
}

/// The `Edm.*` primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EdmPrimitiveKind {
    /// `Edm.Binary`
    Binary,
    /// `Edm.Boolean`
    Boolean,
    /// `Edm.Byte`
    Byte,
    /// `Edm.Date`
    Date,
    /// `Edm.DateTimeOffset`
    DateTimeOffset,
    /// `Edm.Decimal`
    Decimal,
    /// `Edm.Double`
    Double,
    /// `Edm.Duration`
    Duration,
    /// `Edm.Guid`
    Guid,
    /// `Edm.Int16`
    Int16,
    /// `Edm.Int32`
    Int32,
    /// `Edm.Int64`
    Int64,
    /// `Edm.SByte`
    SByte,
    /// `Edm.Single`
    Single,
    /// `Edm.Stream`
    Stream,
    /// `Edm.String`
    String,
    /// `Edm.TimeOfDay`
    TimeOfDay,
}

impl EdmPrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [EdmPrimitiveKind; 17] = [
        Self::Binary,
        Self::Boolean,
        Self::Byte,
        Self::Date,
        Self::DateTimeOffset,
        Self::Decimal,
        Self::Double,
        Self::Duration,
        Self::Guid,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::SByte,
        Self::Single,
        Self::Stream,
        Self::String,
        Self::TimeOfDay,
    ];

    /// The qualified name, e.g. `Edm.Int32`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Binary => "Edm.Binary",
            Self::Boolean => "Edm.Boolean",
            Self::Byte => "Edm.Byte",
            Self::Date => "Edm.Date",
            Self::DateTimeOffset => "Edm.DateTimeOffset",
            Self::Decimal => "Edm.Decimal",
            Self::Double => "Edm.Double",
            Self::Duration => "Edm.Duration",
            Self::Guid => "Edm.Guid",
            Self::Int16 => "Edm.Int16",
            Self::Int32 => "Edm.Int32",
            Self::Int64 => "Edm.Int64",
            Self::SByte => "Edm.SByte",
            Self::Single => "Edm.Single",
            Self::Stream => "Edm.Stream",
            Self::String => "Edm.String",
            Self::TimeOfDay => "Edm.TimeOfDay",
        }
    }
}

impl fmt::Display for EdmPrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdmPrimitiveKind {
    type Err = FormatterError;

    fn from_str(s: &str) -> FormatterResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FormatterError::UnknownSchemaType(s.to_string()))
    }
}

impl TryFrom<String> for EdmPrimitiveKind {
    type Error = FormatterError;

    fn try_from(value: String) -> FormatterResult<Self> {
        value.parse()
    }
}

impl From<EdmPrimitiveKind> for String {
    fn from(kind: EdmPrimitiveKind) -> Self {
        kind.name().to_string()
    }
}

/// A collection type: its element plus whether it is a delta (change-feed) payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmCollectionType {
    element: Box<EdmTypeRef>,
    delta: bool,
}

impl EdmCollectionType {
    /// A plain snapshot collection of `element`.
    pub fn new(element: EdmTypeRef) -> Self {
        Self {
            element: Box::new(element),
            delta: false,
        }
    }

    /// A delta feed of `element`.
    pub fn delta_feed(element: EdmTypeRef) -> Self {
        Self {
            element: Box::new(element),
            delta: true,
        }
    }

    /// The element type.
    pub fn element_type(&self) -> &EdmTypeRef {
        &self.element
    }

    /// Whether this collection carries incremental changes rather than a snapshot.
    pub fn is_delta_feed(&self) -> bool {
        self.delta
    }
}

/// An EDM type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdmType {
    /// A built-in primitive.
    Primitive(EdmPrimitiveKind),
    /// A named enumeration (qualified name).
    Enum(String),
    /// A named complex type (qualified name).
    Complex(String),
    /// A named entity type (qualified name).
    Entity(String),
    /// A collection.
    Collection(EdmCollectionType),
    /// A named alias over a primitive.
    TypeDefinition {
        /// Qualified name of the definition.
        name: String,
        /// The primitive it aliases.
        underlying: EdmPrimitiveKind,
    },
    /// No declared schema.
    Untyped,
}

impl EdmType {
    /// The bare kind tag.
    pub fn kind(&self) -> EdmTypeKind {
        match self {
            EdmType::Primitive(_) => EdmTypeKind::Primitive,
            EdmType::Enum(_) => EdmTypeKind::Enum,
            EdmType::Complex(_) => EdmTypeKind::Complex,
            EdmType::Entity(_) => EdmTypeKind::Entity,
            EdmType::Collection(_) => EdmTypeKind::Collection,
            EdmType::TypeDefinition { .. } => EdmTypeKind::TypeDefinition,
            EdmType::Untyped => EdmTypeKind::Untyped,
        }
    }

    /// The trace name used in diagnostics, e.g. `Collection(NS.Customer)`.
    pub fn full_name(&self) -> String {
        match self {
            EdmType::Primitive(p) => p.name().to_string(),
            EdmType::Enum(name) | EdmType::Complex(name) | EdmType::Entity(name) => name.clone(),
            EdmType::TypeDefinition { name, .. } => name.clone(),
            EdmType::Collection(c) => format!("Collection({})", c.element_type().full_name()),
            EdmType::Untyped => "Edm.Untyped".to_string(),
        }
    }
}

/// A use of an EDM type: the definition plus nullability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmTypeRef {
    definition: EdmType,
    nullable: bool,
}

impl EdmTypeRef {
    /// Creates a reference to `definition`.
    pub fn new(definition: EdmType, nullable: bool) -> Self {
        Self {
            definition,
            nullable,
        }
    }

    /// A non-nullable primitive.
    pub fn primitive(kind: EdmPrimitiveKind) -> Self {
        Self::new(EdmType::Primitive(kind), false)
    }

    /// A nullable reference to an entity type.
    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(EdmType::Entity(name.into()), true)
    }

    /// A nullable reference to a complex type.
    pub fn complex(name: impl Into<String>) -> Self {
        Self::new(EdmType::Complex(name.into()), true)
    }

    /// A non-nullable reference to an enum type.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(EdmType::Enum(name.into()), false)
    }

    /// A non-nullable snapshot collection of `element`.
    pub fn collection(element: EdmTypeRef) -> Self {
        Self::new(EdmType::Collection(EdmCollectionType::new(element)), false)
    }

    /// A non-nullable delta feed of `element`.
    pub fn delta_feed(element: EdmTypeRef) -> Self {
        Self::new(
            EdmType::Collection(EdmCollectionType::delta_feed(element)),
            false,
        )
    }

    /// The referenced definition.
    pub fn definition(&self) -> &EdmType {
        &self.definition
    }

    /// Whether the reference admits null.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// The kind tag of the definition.
    pub fn kind(&self) -> EdmTypeKind {
        self.definition.kind()
    }

    /// True for primitives.
    pub fn is_primitive(&self) -> bool {
        self.kind() == EdmTypeKind::Primitive
    }

    /// True for enums.
    pub fn is_enum(&self) -> bool {
        self.kind() == EdmTypeKind::Enum
    }

    /// True for entity types.
    pub fn is_entity(&self) -> bool {
        self.kind() == EdmTypeKind::Entity
    }

    /// True for complex types.
    pub fn is_complex(&self) -> bool {
        self.kind() == EdmTypeKind::Complex
    }

    /// True for collections.
    pub fn is_collection(&self) -> bool {
        self.kind() == EdmTypeKind::Collection
    }

    /// The collection definition, if this is a collection.
    pub fn as_collection(&self) -> Option<&EdmCollectionType> {
        match &self.definition {
            EdmType::Collection(c) => Some(c),
            _ => None,
        }
    }

    /// The trace name of the definition.
    pub fn full_name(&self) -> String {
        self.definition.full_name()
    }
}

impl fmt::Display for EdmTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())?;
        if self.nullable {
            write!(f, " (Nullable)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitive_names_round_trip_through_from_str() {
        for kind in EdmPrimitiveKind::ALL {
            assert_eq!(kind.name().parse::<EdmPrimitiveKind>().unwrap(), kind);
        }
        assert!("Edm.Nope".parse::<EdmPrimitiveKind>().is_err());
    }

    #[test]
    fn test_full_names() {
        let customers = EdmTypeRef::collection(EdmTypeRef::entity("NS.Customer"));
        assert_eq!(customers.full_name(), "Collection(NS.Customer)");
        assert_eq!(
            EdmTypeRef::primitive(EdmPrimitiveKind::Int32).full_name(),
            "Edm.Int32"
        );
        assert_eq!(EdmTypeRef::new(EdmType::Untyped, true).full_name(), "Edm.Untyped");
    }

    #[test]
    fn test_collection_accessors() {
        let delta = EdmTypeRef::delta_feed(EdmTypeRef::entity("NS.Order"));
        let collection = delta.as_collection().expect("collection");
        assert!(collection.is_delta_feed());
        assert!(collection.element_type().is_entity());
        assert!(EdmTypeRef::complex("NS.Address").as_collection().is_none());
    }

    #[test]
    fn test_primitive_kind_serde_uses_qualified_name() {
        let json = serde_json::to_string(&EdmPrimitiveKind::DateTimeOffset).unwrap();
        assert_eq!(json, "\"Edm.DateTimeOffset\"");
        let parsed: EdmPrimitiveKind = serde_json::from_str("\"Edm.Guid\"").unwrap();
        assert_eq!(parsed, EdmPrimitiveKind::Guid);
    }
}
