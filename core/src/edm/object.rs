#![deny(missing_docs)]

//! # EDM Objects
//!
//! Untyped, schema-aware values: entity instances that carry their own EDM
//! type, and the validated collection wrapper over them.

use crate::edm::types::EdmTypeRef;
use crate::error::{FormatterError, FormatterResult};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::ops::Deref;

/// A value that knows its own EDM type.
pub trait EdmObject {
    /// The EDM type of this value.
    fn edm_type(&self) -> &EdmTypeRef;
}

/// An entity instance with no backing Rust type.
#[derive(Debug, Clone, PartialEq)]
pub struct EdmEntityObject {
    edm_type: EdmTypeRef,
    properties: IndexMap<String, JsonValue>,
}

impl EdmEntityObject {
    /// Creates an empty instance of the entity type `edm_type`.
    ///
    /// Fails with `UnexpectedTypeKind` when `edm_type` is not an entity type.
    pub fn new(edm_type: EdmTypeRef) -> FormatterResult<Self> {
        if !edm_type.is_entity() {
            return Err(FormatterError::UnexpectedTypeKind {
                actual: edm_type.full_name(),
                expected: "EdmEntityType",
            });
        }
        Ok(Self {
            edm_type,
            properties: IndexMap::new(),
        })
    }

    /// Returns a property value if it has been set.
    pub fn try_get_property(&self, name: &str) -> Option<&JsonValue> {
        self.properties.get(name)
    }

    /// Sets a property, returning the previous value.
    pub fn try_set_property(
        &mut self,
        name: impl Into<String>,
        value: JsonValue,
    ) -> Option<JsonValue> {
        self.properties.insert(name.into(), value)
    }

    /// Names of the properties that have been set, in insertion order.
    pub fn changed_properties(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

impl EdmObject for EdmEntityObject {
    fn edm_type(&self) -> &EdmTypeRef {
        &self.edm_type
    }
}

/// An ordered, mutable sequence of [`EdmEntityObject`]s tagged with its collection type.
///
/// The element type of the collection type is always an entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct EdmEntityObjectCollection {
    edm_type: EdmTypeRef,
    items: Vec<EdmEntityObject>,
}

impl EdmEntityObjectCollection {
    /// Creates an empty collection of type `edm_type`.
    pub fn new(edm_type: EdmTypeRef) -> FormatterResult<Self> {
        Self::with_items(edm_type, Vec::new())
    }

    /// Wraps `items` in a collection of type `edm_type`.
    pub fn with_items(edm_type: EdmTypeRef, items: Vec<EdmEntityObject>) -> FormatterResult<Self> {
        let collection = edm_type
            .as_collection()
            .ok_or_else(|| FormatterError::ExpectedCollectionType(edm_type.full_name()))?;

        let element = collection.element_type();
        if !element.is_entity() {
            return Err(FormatterError::UnexpectedElementType {
                element: element.full_name(),
                collection: edm_type.full_name(),
                expected: "EdmEntityType",
            });
        }

        Ok(Self { edm_type, items })
    }

    /// Appends an entity.
    pub fn push(&mut self, item: EdmEntityObject) {
        self.items.push(item);
    }

    /// Removes and returns the entity at `index`, or `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<EdmEntityObject> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Mutable access to the entity at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut EdmEntityObject> {
        self.items.get_mut(index)
    }

    /// Unwraps the collection into its items.
    pub fn into_inner(self) -> Vec<EdmEntityObject> {
        self.items
    }
}

impl EdmObject for EdmEntityObjectCollection {
    fn edm_type(&self) -> &EdmTypeRef {
        &self.edm_type
    }
}

impl Deref for EdmEntityObjectCollection {
    type Target = [EdmEntityObject];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl Extend<EdmEntityObject> for EdmEntityObjectCollection {
    fn extend<I: IntoIterator<Item = EdmEntityObject>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for EdmEntityObjectCollection {
    type Item = EdmEntityObject;
    type IntoIter = std::vec::IntoIter<EdmEntityObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a EdmEntityObjectCollection {
    type Item = &'a EdmEntityObject;
    type IntoIter = std::slice::Iter<'a, EdmEntityObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
