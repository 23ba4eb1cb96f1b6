#![deny(missing_docs)]

//! # Serializer Resolution
//!
//! Picks the serializer for an outgoing value.
//!
//! Resolution order (first match wins):
//! 1. `ServiceDocument` → service document.
//! 2. `Url` / `EntityReferenceLink` → reference link.
//! 3. sequences of `Url` / `EntityReferenceLinks` → reference link collection.
//! 4. `ODataError` or the configured error type → error.
//! 5. anything assignable to `dyn SchemaModel` → metadata.
//! 6. otherwise the schema model is materialized and the value type mapped;
//!    `$count` paths, and `$value` paths on primitives or enums, get the raw
//!    value serializer; everything else goes through [`classify`].
//!
//! The model accessor is only invoked at step 6.

use crate::codec::{classify, CodecKind, ODataSerializer, SerializerRegistry};
use crate::edm::model::SchemaModel;
use crate::edm::types::EdmTypeRef;
use crate::error::{FormatterError, FormatterResult};
use crate::path::ODataPath;
use crate::payload::{
    EntityReferenceLink, EntityReferenceLinks, ODataError, SerializableError, ServiceDocument,
};
use crate::request::InboundRequest;
use crate::value_type::{Described, ValueType};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

/// A deferred schema model. Evaluated at most once.
pub type ModelAccessor<'a> = Box<dyn FnOnce() -> Arc<dyn SchemaModel> + 'a>;

/// The inputs of one serializer resolution.
pub struct ResolutionRequest<'a> {
    value_type: &'a ValueType,
    model: ModelAccessor<'a>,
    path: Option<&'a ODataPath>,
    error_type: Option<&'a ValueType>,
}

impl<'a> ResolutionRequest<'a> {
    /// Creates a request with no path and no configured error type.
    pub fn new<F>(value_type: &'a ValueType, model: F) -> Self
    where
        F: FnOnce() -> Arc<dyn SchemaModel> + 'a,
    {
        Self {
            value_type,
            model: Box::new(model),
            path: None,
            error_type: None,
        }
    }

    /// Starts a builder where every input is optional until `build`.
    pub fn builder() -> ResolutionRequestBuilder<'a> {
        ResolutionRequestBuilder::default()
    }

    /// Sets the request path.
    pub fn with_path(mut self, path: impl Into<Option<&'a ODataPath>>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the type treated as an error body in addition to `ODataError`.
    pub fn with_error_type(mut self, error_type: impl Into<Option<&'a ValueType>>) -> Self {
        self.error_type = error_type.into();
        self
    }

    /// The value type being resolved.
    pub fn value_type(&self) -> &ValueType {
        self.value_type
    }

    /// The request path, if any.
    pub fn path(&self) -> Option<&ODataPath> {
        self.path
    }

    /// The configured error type, if any.
    pub fn error_type(&self) -> Option<&ValueType> {
        self.error_type
    }
}

impl fmt::Debug for ResolutionRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionRequest")
            .field("value_type", &self.value_type)
            .field("path", &self.path)
            .field("error_type", &self.error_type)
            .finish_non_exhaustive()
    }
}

/// Builds a [`ResolutionRequest`], reporting absent required inputs.
#[derive(Default)]
pub struct ResolutionRequestBuilder<'a> {
    value_type: Option<&'a ValueType>,
    model: Option<ModelAccessor<'a>>,
    path: Option<&'a ODataPath>,
    error_type: Option<&'a ValueType>,
}

impl<'a> ResolutionRequestBuilder<'a> {
    /// Sets the value type.
    pub fn value_type(mut self, value_type: impl Into<Option<&'a ValueType>>) -> Self {
        self.value_type = value_type.into();
        self
    }

    /// Sets the deferred model accessor.
    pub fn model<F>(mut self, model: F) -> Self
    where
        F: FnOnce() -> Arc<dyn SchemaModel> + 'a,
    {
        self.model = Some(Box::new(model));
        self
    }

    /// Sets the request path.
    pub fn path(mut self, path: impl Into<Option<&'a ODataPath>>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the configured error type.
    pub fn error_type(mut self, error_type: impl Into<Option<&'a ValueType>>) -> Self {
        self.error_type = error_type.into();
        self
    }

    /// Finishes the request.
    ///
    /// Fails with `InvalidArgument` when the value type or the model accessor is absent.
    pub fn build(self) -> FormatterResult<ResolutionRequest<'a>> {
        let value_type = self
            .value_type
            .ok_or(FormatterError::InvalidArgument("value_type"))?;
        let model = self
            .model
            .ok_or(FormatterError::InvalidArgument("model"))?;
        Ok(ResolutionRequest {
            value_type,
            model,
            path: self.path,
            error_type: self.error_type,
        })
    }
}

/// Selects serializers from a shared registry.
///
/// Holds no state besides the registry handle; every call re-queries it.
#[derive(Debug, Clone)]
pub struct SerializerResolver {
    registry: Arc<SerializerRegistry>,
}

impl SerializerResolver {
    /// Creates a resolver over `registry`.
    pub fn new(registry: Arc<SerializerRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this resolver reads.
    pub fn registry(&self) -> &Arc<SerializerRegistry> {
        &self.registry
    }

    /// Returns the serializer for values of the EDM type `edm_type`.
    pub fn edm_type_serializer(&self, edm_type: &EdmTypeRef) -> Option<Arc<dyn ODataSerializer>> {
        let kind = classify(edm_type)?;
        self.registry.get(kind)
    }

    /// Resolves the serializer for `request`. `None` means no serializer applies.
    pub fn resolve(&self, request: ResolutionRequest<'_>) -> Option<Arc<dyn ODataSerializer>> {
        let ResolutionRequest {
            value_type,
            model,
            path,
            error_type,
        } = request;

        if let Some(role) = special_payload_role(value_type, error_type) {
            trace!(value_type = %value_type, kind = %role, "special payload type");
            return self.registry.role(role);
        }

        let model = model();
        let Some(edm_type) = model.schema_type(value_type) else {
            debug!(value_type = %value_type, "no schema type mapped; no serializer");
            return None;
        };

        let is_count_request = path.is_some_and(ODataPath::is_count_request);
        let is_raw_value_request = path.is_some_and(ODataPath::is_raw_value_request);

        if is_count_request
            || (is_raw_value_request && (edm_type.is_primitive() || edm_type.is_enum()))
        {
            trace!(value_type = %value_type, edm_type = %edm_type, "raw value request");
            return self.registry.role(CodecKind::RawValue);
        }

        let serializer = self.edm_type_serializer(&edm_type);
        debug!(
            value_type = %value_type,
            edm_type = %edm_type,
            found = serializer.is_some(),
            "resolved serializer by schema type"
        );
        serializer
    }

    /// Resolves the serializer for a value written in response to `request`.
    ///
    /// The model is taken lazily from the request and `SerializableError` is
    /// the configured error type.
    pub fn resolve_for_request(
        &self,
        value_type: &ValueType,
        request: &dyn InboundRequest,
    ) -> Option<Arc<dyn ODataSerializer>> {
        let error_type = SerializableError::value_type();
        let resolution = ResolutionRequest::new(value_type, || request.model())
            .with_path(request.path())
            .with_error_type(&error_type);
        self.resolve(resolution)
    }
}

fn special_payload_role(value_type: &ValueType, error_type: Option<&ValueType>) -> Option<CodecKind> {
    if value_type.is::<ServiceDocument>() {
        Some(CodecKind::ServiceDocument)
    } else if value_type.is::<Url>() || value_type.is::<EntityReferenceLink>() {
        Some(CodecKind::ReferenceLink)
    } else if value_type.is_sequence_of(&ValueType::of::<Url>())
        || value_type.is::<EntityReferenceLinks>()
    {
        Some(CodecKind::ReferenceLinkCollection)
    } else if value_type.is::<ODataError>() || error_type.is_some_and(|e| e == value_type) {
        Some(CodecKind::Error)
    } else if value_type.is_assignable_to(&ValueType::of::<dyn SchemaModel>()) {
        Some(CodecKind::Metadata)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edm::model::EdmModel;
    use pretty_assertions::assert_eq;

    struct Poco;

    fn model() -> Arc<dyn SchemaModel> {
        Arc::new(EdmModel::new("NS"))
    }

    #[test]
    fn test_special_payload_roles() {
        let cases = vec![
            (ServiceDocument::value_type(), CodecKind::ServiceDocument),
            (Url::value_type(), CodecKind::ReferenceLink),
            (EntityReferenceLink::value_type(), CodecKind::ReferenceLink),
            (Vec::<Url>::value_type(), CodecKind::ReferenceLinkCollection),
            (EntityReferenceLinks::value_type(), CodecKind::ReferenceLinkCollection),
            (ODataError::value_type(), CodecKind::Error),
            (EdmModel::value_type(), CodecKind::Metadata),
        ];
        for (value_type, expected) in cases {
            assert_eq!(special_payload_role(&value_type, None), Some(expected));
        }
    }

    #[test]
    fn test_configured_error_type() {
        let poco = ValueType::of::<Poco>();
        assert_eq!(special_payload_role(&poco, None), None);
        assert_eq!(special_payload_role(&poco, Some(&poco)), Some(CodecKind::Error));
    }

    #[test]
    fn test_builder_requires_value_type() {
        let err = ResolutionRequest::builder().model(model).build().unwrap_err();
        assert!(matches!(err, FormatterError::InvalidArgument("value_type")));
    }

    #[test]
    fn test_builder_requires_model() {
        let value_type = ValueType::of::<Poco>();
        let err = ResolutionRequest::builder()
            .value_type(&value_type)
            .build()
            .unwrap_err();
        assert!(matches!(err, FormatterError::InvalidArgument("model")));
    }

    #[test]
    fn test_builder_carries_optional_inputs() {
        let value_type = ValueType::of::<Poco>();
        let path: ODataPath = "Pocos/$count".parse().unwrap();
        let request = ResolutionRequest::builder()
            .value_type(&value_type)
            .model(model)
            .path(&path)
            .build()
            .unwrap();
        assert_eq!(request.value_type(), &value_type);
        assert_eq!(request.path(), Some(&path));
        assert!(request.error_type().is_none());
    }
}
