#![deny(missing_docs)]

//! # Deserializer Resolution
//!
//! Picks the deserializer for an inbound body. Reference links are
//! recognized by value type; everything else is mapped through the schema
//! model and dispatched with [`classify`].

use crate::codec::{classify, CodecKind, DeserializerRegistry, ODataDeserializer};
use crate::edm::model::SchemaModel;
use crate::edm::types::EdmTypeRef;
use crate::payload::EntityReferenceLink;
use crate::request::InboundRequest;
use crate::value_type::ValueType;
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

/// Selects deserializers from a shared registry.
#[derive(Debug, Clone)]
pub struct DeserializerResolver {
    registry: Arc<DeserializerRegistry>,
}

impl DeserializerResolver {
    /// Creates a resolver over `registry`.
    pub fn new(registry: Arc<DeserializerRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this resolver reads.
    pub fn registry(&self) -> &Arc<DeserializerRegistry> {
        &self.registry
    }

    /// Returns the deserializer for bodies of the EDM type `edm_type`.
    pub fn edm_type_deserializer(
        &self,
        edm_type: &EdmTypeRef,
    ) -> Option<Arc<dyn ODataDeserializer>> {
        let kind = classify(edm_type)?;
        self.registry.get(kind)
    }

    /// Resolves the deserializer for reading a `value_type` body.
    ///
    /// `model` is only invoked when `value_type` is not a reference link.
    pub fn resolve<F>(&self, value_type: &ValueType, model: F) -> Option<Arc<dyn ODataDeserializer>>
    where
        F: FnOnce() -> Arc<dyn SchemaModel>,
    {
        if value_type.is::<Url>() || value_type.is::<EntityReferenceLink>() {
            trace!(value_type = %value_type, "reference link body");
            return self.registry.role(CodecKind::ReferenceLink);
        }

        let Some(edm_type) = model().schema_type(value_type) else {
            debug!(value_type = %value_type, "no schema type mapped; no deserializer");
            return None;
        };

        let deserializer = self.edm_type_deserializer(&edm_type);
        debug!(
            value_type = %value_type,
            edm_type = %edm_type,
            found = deserializer.is_some(),
            "resolved deserializer by schema type"
        );
        deserializer
    }

    /// Resolves the deserializer for a body carried by `request`.
    pub fn resolve_for_request(
        &self,
        value_type: &ValueType,
        request: &dyn InboundRequest,
    ) -> Option<Arc<dyn ODataDeserializer>> {
        self.resolve(value_type, || request.model())
    }
}
