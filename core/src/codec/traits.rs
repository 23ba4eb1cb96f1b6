#![deny(missing_docs)]

//! # Codec Traits
//!
//! The contracts concrete codecs implement. Implementations live outside this
//! crate; the resolvers only select them.

use crate::codec::kind::CodecKind;
use crate::deserialization::DeserializerContext;
use crate::error::FormatterResult;
use crate::serialization::SerializerContext;
use std::any::Any;
use std::io::{Read, Write};

/// Writes one category of payload.
pub trait ODataSerializer: Send + Sync {
    /// The category this serializer writes.
    fn kind(&self) -> CodecKind;

    /// Writes `graph` to `sink`.
    ///
    /// `graph` is the value whose type was resolved; implementations downcast it.
    fn write_object(
        &self,
        graph: &dyn Any,
        sink: &mut dyn Write,
        context: &SerializerContext,
    ) -> FormatterResult<()>;
}

/// Reads one category of payload.
pub trait ODataDeserializer: Send + Sync {
    /// The category this deserializer reads.
    fn kind(&self) -> CodecKind;

    /// Reads a value of `context.value_type` from `source`.
    fn read(
        &self,
        source: &mut dyn Read,
        context: &DeserializerContext,
    ) -> FormatterResult<Box<dyn Any + Send>>;
}
