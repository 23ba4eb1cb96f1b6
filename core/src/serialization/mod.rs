#![deny(missing_docs)]

//! # Serialization
//!
//! - **resolver**: `SerializerResolver` and its `ResolutionRequest` input.
//! - **context**: `SerializerContext`, the state handed to serializers.

pub mod context;
pub mod resolver;

pub use context::SerializerContext;
pub use resolver::{ModelAccessor, ResolutionRequest, ResolutionRequestBuilder, SerializerResolver};
