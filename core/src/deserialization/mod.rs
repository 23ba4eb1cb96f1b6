#![deny(missing_docs)]

//! # Deserialization
//!
//! - **context**: `DeserializerContext`, the per-parse state carrier.
//! - **resolver**: `DeserializerResolver`.

pub mod context;
pub mod resolver;

pub use context::DeserializerContext;
pub use resolver::DeserializerResolver;
