#![deny(missing_docs)]

//! # Codecs
//!
//! - **kind**: the closed set of codec categories (registry keys).
//! - **traits**: `ODataSerializer` / `ODataDeserializer` contracts.
//! - **registry**: kind-keyed codec storage.
//! - **classifier**: EDM type to codec kind mapping.

pub mod classifier;
pub mod kind;
pub mod registry;
pub mod traits;

pub use classifier::classify;
pub use kind::CodecKind;
pub use registry::{CodecRegistry, DeserializerRegistry, SerializerRegistry};
pub use traits::{ODataDeserializer, ODataSerializer};
