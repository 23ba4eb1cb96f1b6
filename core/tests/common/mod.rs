//! Shared fixtures: a small sales model and stub codecs that report their kind.

#![allow(dead_code)]

use odata_formatter_core::edm::{DeclaredKind, SchemaTypeDeclaration};
use odata_formatter_core::{
    CodecKind, DeserializerContext, DeserializerRegistry, Described, EdmModel, FormatterResult,
    ODataDeserializer, ODataSerializer, SchemaModel, SerializableError, SerializerContext,
    SerializerRegistry,
};
use std::any::Any;
use std::cell::Cell;
use std::io::{Read, Write};
use std::sync::Arc;

pub struct Customer;
pub struct Address;
pub struct Color;
pub struct CustomerChanges;
pub struct Unmapped;

impl Described for Customer {}
impl Described for Address {}
impl Described for Color {}
impl Described for CustomerChanges {}
impl Described for Unmapped {}

/// Serializer that writes its kind name.
#[derive(Debug)]
pub struct StubSerializer(pub CodecKind);

impl ODataSerializer for StubSerializer {
    fn kind(&self) -> CodecKind {
        self.0
    }

    fn write_object(
        &self,
        _graph: &dyn Any,
        sink: &mut dyn Write,
        context: &SerializerContext,
    ) -> FormatterResult<()> {
        write!(sink, "{}", self.0)?;
        if let Some(edm_type) = &context.edm_type {
            write!(sink, ":{}", edm_type.full_name())?;
        }
        Ok(())
    }
}

/// Deserializer that returns the full name of the context's EDM type.
#[derive(Debug)]
pub struct StubDeserializer(pub CodecKind);

impl ODataDeserializer for StubDeserializer {
    fn kind(&self) -> CodecKind {
        self.0
    }

    fn read(
        &self,
        source: &mut dyn Read,
        context: &DeserializerContext,
    ) -> FormatterResult<Box<dyn Any + Send>> {
        let mut body = String::new();
        source.read_to_string(&mut body)?;
        let edm_name = context
            .edm_type
            .as_ref()
            .map(|t| t.full_name())
            .unwrap_or_default();
        Ok(Box::new(format!("{}|{}", edm_name, body)))
    }
}

/// A registry with a stub serializer in every slot.
pub fn serializer_registry() -> Arc<SerializerRegistry> {
    let registry = SerializerRegistry::new();
    for kind in CodecKind::ALL {
        registry.register(kind.registry_slot(), Arc::new(StubSerializer(kind.registry_slot())));
    }
    Arc::new(registry)
}

/// A registry with a stub deserializer in every slot.
pub fn deserializer_registry() -> Arc<DeserializerRegistry> {
    let registry = DeserializerRegistry::new();
    for kind in CodecKind::ALL {
        registry.register(
            kind.registry_slot(),
            Arc::new(StubDeserializer(kind.registry_slot())),
        );
    }
    Arc::new(registry)
}

/// The sales model with every fixture type bound.
pub fn sales_model() -> Arc<EdmModel> {
    let mut model = EdmModel::new("Sales");
    model
        .declare(SchemaTypeDeclaration::new("Customer", DeclaredKind::Entity))
        .unwrap()
        .declare(SchemaTypeDeclaration::new("Address", DeclaredKind::Complex))
        .unwrap()
        .declare(SchemaTypeDeclaration::new("Color", DeclaredKind::Enum))
        .unwrap()
        .bind::<Customer>("Customer")
        .unwrap()
        .bind::<Address>("Address")
        .unwrap()
        .bind::<Color>("Color")
        .unwrap()
        .bind_delta_feed::<CustomerChanges>("Customer")
        .unwrap()
        // The error type also has a mapping, to check that the error role wins.
        .bind::<SerializableError>("Address")
        .unwrap();
    Arc::new(model)
}

/// Counts how often the deferred model is materialized.
pub struct ModelProbe {
    model: Arc<EdmModel>,
    calls: Cell<usize>,
}

impl ModelProbe {
    pub fn new() -> Self {
        Self {
            model: sales_model(),
            calls: Cell::new(0),
        }
    }

    pub fn accessor(&self) -> impl FnOnce() -> Arc<dyn SchemaModel> + '_ {
        move || {
            self.calls.set(self.calls.get() + 1);
            let model: Arc<dyn SchemaModel> = self.model.clone();
            model
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}
