#![deny(missing_docs)]

//! # Codec Registry
//!
//! Stores one shared codec per [`CodecKind`] slot. The registry makes no
//! decisions: resolvers ask it for a kind and it answers with whatever is
//! registered at that moment.
//!
//! Registration goes through `&self`, so a registry shared behind an `Arc`
//! can be updated while resolvers hold it; the next lookup sees the change.

use crate::codec::kind::CodecKind;
use crate::codec::traits::{ODataDeserializer, ODataSerializer};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of serializers.
pub type SerializerRegistry = CodecRegistry<dyn ODataSerializer>;

/// Registry of deserializers.
pub type DeserializerRegistry = CodecRegistry<dyn ODataDeserializer>;

/// A kind-keyed store of shared codec handles.
pub struct CodecRegistry<C: ?Sized> {
    entries: RwLock<HashMap<CodecKind, Arc<C>>>,
}

impl<C: ?Sized> CodecRegistry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Builder-style registration.
    pub fn with(self, kind: CodecKind, codec: Arc<C>) -> Self {
        self.register(kind, codec);
        self
    }

    /// Registers `codec` for `kind`, returning the codec it replaces.
    pub fn register(&self, kind: CodecKind, codec: Arc<C>) -> Option<Arc<C>> {
        self.entries.write().insert(kind.registry_slot(), codec)
    }

    /// Removes the codec registered for `kind`.
    pub fn remove(&self, kind: CodecKind) -> Option<Arc<C>> {
        self.entries.write().remove(&kind.registry_slot())
    }

    /// Looks up the codec for a schema-derived kind.
    pub fn get(&self, kind: CodecKind) -> Option<Arc<C>> {
        self.entries.read().get(&kind.registry_slot()).cloned()
    }

    /// Looks up the codec for a fixed role (service document, error, raw value...).
    ///
    /// Roles are expected to be registered by the host, so a miss is logged.
    pub fn role(&self, kind: CodecKind) -> Option<Arc<C>> {
        let codec = self.get(kind);
        if codec.is_none() {
            tracing::warn!(role = %kind, "no codec registered for role");
        }
        codec
    }

    /// Whether a codec is registered for `kind`.
    pub fn contains(&self, kind: CodecKind) -> bool {
        self.entries.read().contains_key(&kind.registry_slot())
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no codec is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<C: ?Sized> Default for CodecRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> fmt::Debug for CodecRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read();
        let mut kinds: Vec<&'static str> = entries.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("CodecRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}
