#![deny(missing_docs)]

//! # Inbound Requests
//!
//! The transport-facing seam: what the resolvers need from a request.

use crate::edm::model::SchemaModel;
use crate::path::ODataPath;
use std::fmt;
use std::sync::Arc;

/// An inbound request as seen by the resolvers.
pub trait InboundRequest: Send + Sync {
    /// The schema model serving this request.
    ///
    /// Resolvers call this lazily, only once special cases are exhausted.
    fn model(&self) -> Arc<dyn SchemaModel>;

    /// The parsed request path, if the request was routed.
    fn path(&self) -> Option<&ODataPath>;
}

/// A plain request carrying a shared model and an optional path.
#[derive(Clone)]
pub struct RequestContext {
    model: Arc<dyn SchemaModel>,
    path: Option<ODataPath>,
}

impl RequestContext {
    /// Creates an unrouted request against `model`.
    pub fn new(model: Arc<dyn SchemaModel>) -> Self {
        Self { model, path: None }
    }

    /// Sets the parsed path.
    pub fn with_path(mut self, path: ODataPath) -> Self {
        self.path = Some(path);
        self
    }
}

impl InboundRequest for RequestContext {
    fn model(&self) -> Arc<dyn SchemaModel> {
        Arc::clone(&self.model)
    }

    fn path(&self) -> Option<&ODataPath> {
        self.path.as_ref()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("model", &"SchemaModel(..)")
            .field("path", &self.path)
            .finish()
    }
}
