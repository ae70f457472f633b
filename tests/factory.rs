use oasmodel::model::{
    Components, Header, OpenApi, Parameter, RequestBody, Schema, SecurityRequirement, Tag,
};
use oasmodel::{
    DefaultFactoryResolver, FactoryError, ModelKind, OasFactory, OasFactoryResolver, ParameterIn,
};
use std::any::Any;
use std::sync::Arc;

#[test]
fn every_kind_is_constructible() {
    let factory = OasFactory::default();
    for kind in ModelKind::ALL {
        assert!(
            factory.resolver().create_object(*kind).is_ok(),
            "{} was not created",
            kind
        );
        assert!(factory.create_by_name(kind.name()).is_ok());
    }
}

#[test]
fn fresh_objects_carry_documented_defaults() {
    let factory = OasFactory::default();

    let body: RequestBody = factory.create_object().unwrap();
    assert_eq!(body.required(), Some(true));

    let mut parameter: Parameter = factory.create_object().unwrap();
    assert_eq!(parameter.required(), None);
    assert_eq!(parameter.in_(), None);
    parameter.set_in(Some(ParameterIn::Path));
    assert_eq!(parameter.required(), Some(true));

    assert_eq!(factory.create_schema().unwrap(), Schema::default());
    assert_eq!(factory.create_header().unwrap(), Header::default());
    assert!(factory.create_security_requirement().unwrap().is_empty());
    assert_eq!(factory.create_components().unwrap(), Components::default());

    let open_api: OpenApi = factory.create_open_api().unwrap();
    assert_eq!(open_api.openapi(), oasmodel::DEFAULT_OPENAPI_VERSION);
    assert!(open_api.paths().is_none());
}

#[test]
fn names_resolve_with_qualifiers() {
    let factory = OasFactory::default();
    let created = factory
        .create_by_name("org.eclipse.microprofile.openapi.models.security.SecurityRequirement")
        .unwrap();
    assert!(created.downcast::<SecurityRequirement>().is_ok());

    assert!(matches!(
        factory.create_by_name("  "),
        Err(FactoryError::MissingType)
    ));
    assert!(matches!(
        factory.create_by_name("Widget"),
        Err(FactoryError::UnknownType(_))
    ));
}

#[test]
fn resolver_overrides_are_used() {
    let resolver = DefaultFactoryResolver::new();
    resolver.register(ModelKind::Tag, || {
        Box::new(Tag::new("preset")) as Box<dyn Any + Send>
    });
    let factory = OasFactory::new(Arc::new(resolver));
    assert_eq!(factory.create_tag().unwrap().name(), Some("preset"));

    let resolver = DefaultFactoryResolver::new();
    resolver.unregister(ModelKind::Tag);
    let factory = OasFactory::new(Arc::new(resolver));
    assert!(matches!(
        factory.create_tag(),
        Err(FactoryError::NoConstructor(_))
    ));
}
