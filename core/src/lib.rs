#![deny(missing_docs)]

//! # OData Formatter Core
//!
//! Type-driven payload codec resolution for OData services.
//!
//! Given the Rust type of a value, the schema model and the request path, the
//! resolvers pick the serializer or deserializer that handles it from a
//! kind-keyed registry. Codec implementations are supplied by the host.

/// Shared error types.
pub mod error;

/// Runtime descriptors of Rust types.
pub mod value_type;

/// Entity Data Model: types, the schema model and EDM objects.
pub mod edm;

/// Protocol payload object model.
pub mod payload;

/// Parsed request paths.
pub mod path;

/// The inbound request seam.
pub mod request;

/// Codec kinds, traits, registry and schema type classification.
pub mod codec;

/// Serializer resolution.
pub mod serialization;

/// Deserializer resolution and context.
pub mod deserialization;

pub use codec::{
    classify, CodecKind, CodecRegistry, DeserializerRegistry, ODataDeserializer, ODataSerializer,
    SerializerRegistry,
};
pub use deserialization::{DeserializerContext, DeserializerResolver};
pub use edm::{
    EdmEntityObject, EdmEntityObjectCollection, EdmModel, EdmObject, EdmPrimitiveKind, EdmType,
    EdmTypeKind, EdmTypeRef, SchemaModel,
};
pub use error::{FormatterError, FormatterResult};
pub use path::{ODataPath, PathSegment};
pub use payload::{
    EntityReferenceLink, EntityReferenceLinks, ODataError, SerializableError, ServiceDocument,
};
pub use request::{InboundRequest, RequestContext};
pub use serialization::{ResolutionRequest, SerializerContext, SerializerResolver};
pub use value_type::{Described, ValueType};
