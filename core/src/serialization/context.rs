#![deny(missing_docs)]

//! # Serializer Context
//!
//! State handed to a serializer for one write.

use crate::edm::model::SchemaModel;
use crate::edm::types::EdmTypeRef;
use crate::path::ODataPath;
use std::fmt;
use std::sync::Arc;

/// Write-side state: the model, the request path and the resolved EDM type.
#[derive(Clone, Default)]
pub struct SerializerContext {
    /// The schema model serving the request.
    pub model: Option<Arc<dyn SchemaModel>>,
    /// The parsed request path.
    pub path: Option<ODataPath>,
    /// The EDM type of the value being written.
    pub edm_type: Option<EdmTypeRef>,
}

impl SerializerContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model.
    pub fn with_model(mut self, model: Arc<dyn SchemaModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the path.
    pub fn with_path(mut self, path: ODataPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Sets the EDM type of the value being written.
    pub fn with_edm_type(mut self, edm_type: EdmTypeRef) -> Self {
        self.edm_type = Some(edm_type);
        self
    }
}

impl fmt::Debug for SerializerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerContext")
            .field("model", &self.model.as_ref().map(|_| "SchemaModel(..)"))
            .field("path", &self.path)
            .field("edm_type", &self.edm_type)
            .finish()
    }
}
