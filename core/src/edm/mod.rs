#![deny(missing_docs)]

//! # Entity Data Model
//!
//! - **types**: EDM kind tags, primitives, definitions and type references.
//! - **model**: the `SchemaModel` seam and the concrete `EdmModel`.
//! - **object**: untyped entity values and the validated entity collection.

pub mod model;
pub mod object;
pub mod types;

pub use model::{DeclaredKind, EdmModel, SchemaModel, SchemaTypeDeclaration};
pub use object::{EdmEntityObject, EdmEntityObjectCollection, EdmObject};
pub use types::{EdmCollectionType, EdmPrimitiveKind, EdmType, EdmTypeKind, EdmTypeRef};
