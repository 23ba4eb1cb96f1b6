#![deny(missing_docs)]

//! # Schema Model
//!
//! The `SchemaModel` seam consumed by the resolvers and `EdmModel`, its
//! concrete implementation.
//!
//! `EdmModel` holds:
//! - declared schema types keyed by qualified name (declaration order preserved),
//! - bindings from Rust `TypeId`s to EDM type references (the type-mapping cache).
//!
//! Declarations can be built in code or loaded from YAML / JSON documents:
//!
//! ```yaml
//! namespace: Sales
//! types:
//!   - name: Customer
//!     kind: entity
//!   - name: Zip
//!     kind: typeDefinition
//!     underlying: Edm.String
//! ```

use crate::edm::types::{EdmPrimitiveKind, EdmType, EdmTypeRef};
use crate::error::{FormatterError, FormatterResult};
use crate::value_type::{Described, ValueType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Read access to a schema model.
///
/// `dyn SchemaModel` is the schema-model representation type: any value
/// assignable to it is rendered as a metadata document.
pub trait SchemaModel: Send + Sync {
    /// Maps a Rust value type to its EDM type, if the model knows it.
    fn schema_type(&self, value_type: &ValueType) -> Option<EdmTypeRef>;
}

impl Described for dyn SchemaModel {}

impl Described for Arc<dyn SchemaModel> {
    fn value_type() -> ValueType {
        ValueType::of::<Self>().assignable_to::<dyn SchemaModel>()
    }
}

/// The kind of a declared schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclaredKind {
    /// A keyed structured type.
    Entity,
    /// An unkeyed structured type.
    Complex,
    /// An enumeration.
    Enum,
    /// An alias over a primitive; requires `underlying`.
    TypeDefinition,
}

/// A single schema type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTypeDeclaration {
    /// Simple or qualified name. Simple names are qualified with the model namespace.
    pub name: String,
    /// The declared kind.
    pub kind: DeclaredKind,
    /// The aliased primitive for type definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying: Option<EdmPrimitiveKind>,
}

impl SchemaTypeDeclaration {
    /// Creates a declaration without an underlying primitive.
    pub fn new(name: impl Into<String>, kind: DeclaredKind) -> Self {
        Self {
            name: name.into(),
            kind,
            underlying: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    namespace: String,
    #[serde(default)]
    types: Vec<SchemaTypeDeclaration>,
}

/// The concrete schema model.
#[derive(Debug, Clone)]
pub struct EdmModel {
    namespace: String,
    declared: IndexMap<String, EdmType>,
    bindings: HashMap<TypeId, EdmTypeRef>,
}

impl Described for EdmModel {
    fn value_type() -> ValueType {
        ValueType::of::<Self>().assignable_to::<dyn SchemaModel>()
    }
}

impl Described for Arc<EdmModel> {
    fn value_type() -> ValueType {
        ValueType::of::<Self>()
            .assignable_to::<EdmModel>()
            .assignable_to::<dyn SchemaModel>()
    }
}

impl EdmModel {
    /// Creates an empty model with Rust primitives pre-bound to their `Edm.*` types.
    pub fn new(namespace: impl Into<String>) -> Self {
        let mut model = Self {
            namespace: namespace.into(),
            declared: IndexMap::new(),
            bindings: HashMap::new(),
        };
        model.bind_primitives();
        model
    }

    /// Loads declarations from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> FormatterResult<Self> {
        let doc: SchemaDocument = serde_yaml::from_str(yaml)
            .map_err(|e| FormatterError::ModelLoad(format!("Failed to parse YAML: {}", e)))?;
        Self::from_document(doc)
    }

    /// Loads declarations from a JSON value.
    pub fn from_json_value(value: JsonValue) -> FormatterResult<Self> {
        let doc: SchemaDocument = serde_json::from_value(value)
            .map_err(|e| FormatterError::ModelLoad(format!("Failed to parse JSON: {}", e)))?;
        Self::from_document(doc)
    }

    fn from_document(doc: SchemaDocument) -> FormatterResult<Self> {
        let mut model = Self::new(doc.namespace);
        for decl in doc.types {
            model.declare(decl)?;
        }
        Ok(model)
    }

    /// The namespace simple names are qualified with.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Declares a schema type. Re-declaring a name replaces the earlier definition.
    pub fn declare(&mut self, decl: SchemaTypeDeclaration) -> FormatterResult<&mut Self> {
        let name = self.qualify(&decl.name);
        let definition = match decl.kind {
            DeclaredKind::Entity => EdmType::Entity(name.clone()),
            DeclaredKind::Complex => EdmType::Complex(name.clone()),
            DeclaredKind::Enum => EdmType::Enum(name.clone()),
            DeclaredKind::TypeDefinition => {
                let underlying = decl.underlying.ok_or_else(|| {
                    FormatterError::ModelLoad(format!(
                        "Type definition '{}' requires an underlying primitive",
                        name
                    ))
                })?;
                EdmType::TypeDefinition {
                    name: name.clone(),
                    underlying,
                }
            }
        };
        self.declared.insert(name, definition);
        Ok(self)
    }

    /// Iterates declared types in declaration order.
    pub fn declared_types(&self) -> impl Iterator<Item = &EdmType> {
        self.declared.values()
    }

    /// Finds a declared type or an `Edm.*` primitive by name.
    ///
    /// Entity and complex references are nullable; everything else is not.
    pub fn find_type(&self, name: &str) -> Option<EdmTypeRef> {
        if let Ok(primitive) = name.parse::<EdmPrimitiveKind>() {
            return Some(EdmTypeRef::primitive(primitive));
        }
        let definition = self.declared.get(&self.qualify(name))?.clone();
        let nullable = matches!(definition, EdmType::Entity(_) | EdmType::Complex(_));
        Some(EdmTypeRef::new(definition, nullable))
    }

    /// Binds `T` to the declared type `name`.
    pub fn bind<T: ?Sized + 'static>(&mut self, name: &str) -> FormatterResult<&mut Self> {
        let edm_type = self
            .find_type(name)
            .ok_or_else(|| FormatterError::UnknownSchemaType(name.to_string()))?;
        Ok(self.bind_type::<T>(edm_type))
    }

    /// Binds `T` to a delta feed whose elements are the declared type `element_name`.
    pub fn bind_delta_feed<T: ?Sized + 'static>(
        &mut self,
        element_name: &str,
    ) -> FormatterResult<&mut Self> {
        let element = self
            .find_type(element_name)
            .ok_or_else(|| FormatterError::UnknownSchemaType(element_name.to_string()))?;
        Ok(self.bind_type::<T>(EdmTypeRef::delta_feed(element)))
    }

    /// Binds `T` to an explicit EDM type, replacing any earlier binding.
    pub fn bind_type<T: ?Sized + 'static>(&mut self, edm_type: EdmTypeRef) -> &mut Self {
        tracing::trace!(
            rust_type = std::any::type_name::<T>(),
            edm_type = %edm_type,
            "binding type"
        );
        self.bindings.insert(TypeId::of::<T>(), edm_type);
        self
    }

    fn qualify(&self, name: &str) -> String {
        if name.contains('.') {
            name.to_string()
        } else {
            format!("{}.{}", self.namespace, name)
        }
    }

    fn bind_primitives(&mut self) {
        use EdmPrimitiveKind as P;

        self.bind_type::<bool>(EdmTypeRef::primitive(P::Boolean))
            .bind_type::<i8>(EdmTypeRef::primitive(P::SByte))
            .bind_type::<u8>(EdmTypeRef::primitive(P::Byte))
            .bind_type::<i16>(EdmTypeRef::primitive(P::Int16))
            .bind_type::<u16>(EdmTypeRef::primitive(P::Int32))
            .bind_type::<i32>(EdmTypeRef::primitive(P::Int32))
            .bind_type::<u32>(EdmTypeRef::primitive(P::Int64))
            .bind_type::<i64>(EdmTypeRef::primitive(P::Int64))
            .bind_type::<u64>(EdmTypeRef::primitive(P::Int64))
            .bind_type::<f32>(EdmTypeRef::primitive(P::Single))
            .bind_type::<f64>(EdmTypeRef::primitive(P::Double))
            .bind_type::<char>(EdmTypeRef::primitive(P::String))
            .bind_type::<String>(EdmTypeRef::primitive(P::String))
            .bind_type::<str>(EdmTypeRef::primitive(P::String))
            .bind_type::<Vec<u8>>(EdmTypeRef::primitive(P::Binary));
    }
}

impl SchemaModel for EdmModel {
    fn schema_type(&self, value_type: &ValueType) -> Option<EdmTypeRef> {
        if let Some(bound) = self.bindings.get(&value_type.id()) {
            return Some(bound.clone());
        }

        // Unbound sequences map through their element; nested collections are not representable.
        let element = self.schema_type(value_type.element()?)?;
        if element.is_collection() {
            return None;
        }
        Some(EdmTypeRef::collection(element))
    }
}
