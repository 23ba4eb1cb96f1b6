mod common;

use common::*;
use odata_formatter_core::{
    CodecKind, DeserializerContext, DeserializerRegistry, DeserializerResolver, Described,
    EdmTypeRef, EntityReferenceLink, InboundRequest, RequestContext, SchemaModel, ValueType,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use url::Url;

fn resolver() -> DeserializerResolver {
    DeserializerResolver::new(deserializer_registry())
}

fn resolve_kind(
    resolver: &DeserializerResolver,
    probe: &ModelProbe,
    value_type: &ValueType,
) -> Option<CodecKind> {
    resolver
        .resolve(value_type, probe.accessor())
        .map(|d| d.kind())
}

#[test]
fn reference_links_skip_the_model() {
    let resolver = resolver();
    for value_type in [Url::value_type(), EntityReferenceLink::value_type()] {
        let probe = ModelProbe::new();
        assert_eq!(
            resolve_kind(&resolver, &probe, &value_type),
            Some(CodecKind::ReferenceLink)
        );
        assert_eq!(probe.calls(), 0);
    }
}

#[test]
fn schema_kinds_dispatch_through_the_classifier() {
    let resolver = resolver();
    let cases = vec![
        (Customer::value_type(), Some(CodecKind::Entity)),
        (Address::value_type(), Some(CodecKind::Entity)),
        (Color::value_type(), Some(CodecKind::Enum)),
        (i32::value_type(), Some(CodecKind::Primitive)),
        (String::value_type(), Some(CodecKind::Primitive)),
        (Vec::<Customer>::value_type(), Some(CodecKind::ResourceSet)),
        (Vec::<i32>::value_type(), Some(CodecKind::Collection)),
        (CustomerChanges::value_type(), Some(CodecKind::DeltaCollection)),
        (Unmapped::value_type(), None),
    ];

    for (value_type, expected) in cases {
        let probe = ModelProbe::new();
        assert_eq!(
            resolve_kind(&resolver, &probe, &value_type),
            expected,
            "{}",
            value_type
        );
        assert_eq!(probe.calls(), 1);
    }
}

#[test]
fn missing_registration_is_not_found() {
    let resolver = DeserializerResolver::new(Arc::new(DeserializerRegistry::new()));
    let probe = ModelProbe::new();
    assert_eq!(resolve_kind(&resolver, &probe, &Url::value_type()), None);
    assert_eq!(resolve_kind(&resolver, &probe, &Customer::value_type()), None);
}

#[test]
fn request_body_is_read_with_its_context() {
    let resolver = resolver();
    let model: Arc<dyn SchemaModel> = sales_model();
    let request: Arc<dyn InboundRequest> =
        Arc::new(RequestContext::new(model).with_path("Customers".parse().unwrap()));
    let customer = Customer::value_type();

    let deserializer = resolver
        .resolve_for_request(&customer, request.as_ref())
        .expect("entity deserializer");
    assert_eq!(deserializer.kind(), CodecKind::Entity);

    let context = DeserializerContext::for_request(customer, Arc::clone(&request));
    assert_eq!(context.edm_type, Some(EdmTypeRef::entity("Sales.Customer")));
    assert!(!context.is_delta_feed());

    let mut body: &[u8] = br#"{"Name":"Ada"}"#;
    let value = deserializer.read(&mut body, &context).unwrap();
    let text = value.downcast::<String>().unwrap();
    assert_eq!(*text, r#"Sales.Customer|{"Name":"Ada"}"#);
}

#[test]
fn delta_body_context_reports_delta_feed() {
    let resolver = resolver();
    let request: Arc<dyn InboundRequest> = Arc::new(RequestContext::new(sales_model()));
    let changes = CustomerChanges::value_type();

    let deserializer = resolver
        .resolve_for_request(&changes, request.as_ref())
        .unwrap();
    assert_eq!(deserializer.kind(), CodecKind::DeltaCollection);

    let context = DeserializerContext::for_request(changes, request);
    assert!(context.is_delta_feed());
    assert!(context.path.is_none());
}
