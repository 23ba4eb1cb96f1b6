#![deny(missing_docs)]

//! # Deserializer Context
//!
//! State handed to a deserializer so it can reach the target type, schema
//! model, request and path without global lookups.
//!
//! A context belongs to a single inbound request. It is passed by reference
//! through the parse call tree and is never shared between concurrent parses.

use crate::edm::model::SchemaModel;
use crate::edm::types::EdmTypeRef;
use crate::path::ODataPath;
use crate::request::InboundRequest;
use crate::value_type::ValueType;
use std::fmt;
use std::sync::Arc;

/// Read-side state for one parse. Every field is optional; individual
/// deserializers document which ones they need.
#[derive(Clone, Default)]
pub struct DeserializerContext {
    /// The Rust type the payload is read into.
    pub value_type: Option<ValueType>,
    /// The EDM type of the payload.
    pub edm_type: Option<EdmTypeRef>,
    /// The parsed request path.
    pub path: Option<ODataPath>,
    /// The schema model serving the request.
    pub model: Option<Arc<dyn SchemaModel>>,
    /// The inbound request being read.
    pub request: Option<Arc<dyn InboundRequest>>,
}

impl DeserializerContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the context for reading a `value_type` body from `request`.
    ///
    /// Model and path come from the request; the EDM type is looked up in the model.
    pub fn for_request(value_type: ValueType, request: Arc<dyn InboundRequest>) -> Self {
        let model = request.model();
        let edm_type = model.schema_type(&value_type);
        Self {
            path: request.path().cloned(),
            edm_type,
            model: Some(model),
            value_type: Some(value_type),
            request: Some(request),
        }
    }

    /// Whether the payload is a delta feed.
    pub fn is_delta_feed(&self) -> bool {
        self.edm_type
            .as_ref()
            .and_then(EdmTypeRef::as_collection)
            .is_some_and(|c| c.is_delta_feed())
    }
}

impl fmt::Debug for DeserializerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeserializerContext")
            .field("value_type", &self.value_type)
            .field("edm_type", &self.edm_type)
            .field("path", &self.path)
            .field("model", &self.model.as_ref().map(|_| "SchemaModel(..)"))
            .field("request", &self.request.as_ref().map(|_| "InboundRequest(..)"))
            .finish()
    }
}
