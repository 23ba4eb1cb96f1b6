#![deny(missing_docs)]

//! # Protocol Payloads
//!
//! Object-model types for payloads whose codec is chosen by the type itself
//! rather than by the schema model: service documents, entity reference links
//! and error bodies.

use crate::value_type::{Described, ValueType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use url::Url;

/// The kind of a service document entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceDocumentElementKind {
    /// An entity set.
    EntitySet,
    /// A singleton.
    Singleton,
    /// A function import.
    FunctionImport,
}

/// A single entry of the service document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDocumentElement {
    /// Name of the exposed resource.
    pub name: String,
    /// Relative or absolute URL of the resource.
    pub url: String,
    /// The entry kind.
    pub kind: ServiceDocumentElementKind,
}

/// The service root document listing every top-level resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDocument {
    /// All entries, in declaration order.
    pub value: Vec<ServiceDocumentElement>,
}

impl ServiceDocument {
    /// Entries of the given kind.
    pub fn elements_of(
        &self,
        kind: ServiceDocumentElementKind,
    ) -> impl Iterator<Item = &ServiceDocumentElement> {
        self.value.iter().filter(move |e| e.kind == kind)
    }
}

impl Described for ServiceDocument {}

/// A link to a single entity (`$ref` payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReferenceLink {
    /// The entity id.
    #[serde(rename = "@odata.id")]
    pub url: Url,
}

impl Described for EntityReferenceLink {}

/// A collection of entity reference links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReferenceLinks {
    /// The links.
    pub value: Vec<EntityReferenceLink>,
    /// Total count, when requested.
    #[serde(rename = "@odata.count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    /// Link to the next page.
    #[serde(rename = "@odata.nextLink", skip_serializing_if = "Option::is_none")]
    pub next_link: Option<Url>,
}

impl Described for EntityReferenceLinks {
    fn value_type() -> ValueType {
        ValueType::of::<Self>().with_element(EntityReferenceLink::value_type())
    }
}

/// A nested error detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ODataErrorDetail {
    /// Service-defined error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Target of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// The protocol's native error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ODataError {
    /// Service-defined error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Target of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Additional details.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ODataErrorDetail>,
    /// Service-specific debugging information.
    #[serde(rename = "innererror", skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<JsonValue>,
}

impl ODataError {
    /// Creates an error with a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            target: None,
            details: Vec::new(),
            inner_error: None,
        }
    }
}

impl Described for ODataError {}

/// A loosely structured error body keyed by field name.
///
/// This is the default "configured error type" for request-driven resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializableError(pub IndexMap<String, JsonValue>);

impl SerializableError {
    /// Records `messages` under `key`.
    pub fn add_errors(&mut self, key: impl Into<String>, messages: Vec<String>) {
        self.0.insert(key.into(), JsonValue::from(messages));
    }

    /// Whether no error has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Described for SerializableError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_reference_link_wire_name() {
        let link = EntityReferenceLink {
            url: Url::parse("http://host/svc/Customers(1)").unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({ "@odata.id": "http://host/svc/Customers(1)" })
        );
    }

    #[test]
    fn test_reference_links_report_element() {
        let links = ValueType::described::<EntityReferenceLinks>();
        assert!(links.is_sequence_of(&ValueType::of::<EntityReferenceLink>()));
    }

    #[test]
    fn test_odata_error_skips_empty_fields() {
        let err = ODataError::new("NotFound", "No customer 4");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "code": "NotFound", "message": "No customer 4" })
        );
    }

    #[test]
    fn test_serializable_error_is_transparent_and_ordered() {
        let mut err = SerializableError::default();
        assert!(err.is_empty());
        err.add_errors("Name", vec!["required".into()]);
        err.add_errors("Age", vec!["too small".into()]);
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"Name":["required"],"Age":["too small"]}"#
        );
    }

    #[test]
    fn test_service_document_filter() {
        let doc = ServiceDocument {
            value: vec![
                ServiceDocumentElement {
                    name: "Customers".into(),
                    url: "Customers".into(),
                    kind: ServiceDocumentElementKind::EntitySet,
                },
                ServiceDocumentElement {
                    name: "Me".into(),
                    url: "Me".into(),
                    kind: ServiceDocumentElementKind::Singleton,
                },
            ],
        };
        let names: Vec<&str> = doc
            .elements_of(ServiceDocumentElementKind::Singleton)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Me"]);
    }
}
