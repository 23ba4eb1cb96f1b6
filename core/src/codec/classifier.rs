#![deny(missing_docs)]

//! # Schema Type Classifier
//!
//! Maps an EDM type to the codec kind that handles it. Used by both resolvers
//! once their special cases are exhausted.

use crate::codec::kind::CodecKind;
use crate::edm::types::{EdmType, EdmTypeRef};

/// Returns the codec kind for `edm_type`, or `None` for kinds no codec handles.
///
/// Collections split three ways: delta feeds, resource sets (entity or complex
/// elements) and plain value collections.
pub fn classify(edm_type: &EdmTypeRef) -> Option<CodecKind> {
    match edm_type.definition() {
        EdmType::Enum(_) => Some(CodecKind::Enum),
        EdmType::Primitive(_) => Some(CodecKind::Primitive),
        EdmType::Collection(collection) => {
            let element = collection.element_type();
            if collection.is_delta_feed() {
                Some(CodecKind::DeltaCollection)
            } else if element.is_entity() || element.is_complex() {
                Some(CodecKind::ResourceSet)
            } else {
                Some(CodecKind::Collection)
            }
        }
        EdmType::Complex(_) => Some(CodecKind::Complex),
        EdmType::Entity(_) => Some(CodecKind::Entity),
        EdmType::TypeDefinition { .. } | EdmType::Untyped => None,
    }
}
