use oasmodel::declare::{Declaration, ExtensionDecl, SchemaDecl};
use oasmodel::model::*;
use oasmodel::{Constructible, ModelKind, OasFactory, ParameterIn, document};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;

#[test]
fn fluent_and_setter_agree() {
    let fluent = Operation::default()
        .with_summary("List pets")
        .with_operation_id("listPets")
        .with_deprecated(true)
        .with_tags(vec!["pets".to_string()]);
    let mut set = Operation::default();
    set.set_summary(Some("List pets".to_string()));
    set.set_operation_id(Some("listPets".to_string()));
    set.set_deprecated(Some(true));
    set.set_tags(Some(vec!["pets".to_string()]));
    assert_eq!(fluent, set);
    assert_eq!(fluent.summary(), Some("List pets"));
    assert_eq!(fluent.deprecated(), Some(true));

    let fluent = Schema::default().with_max_items(3).with_title("Ids");
    let mut set = Schema::default();
    set.set_max_items(Some(3));
    set.set_title(Some("Ids".to_string()));
    assert_eq!(fluent, set);

    let mut server = Server::new("https://api.example.com");
    server.set_description(Some("production".to_string()));
    assert_eq!(
        server,
        Server::new("https://api.example.com").with_description("production")
    );

    let mut tag = Tag::new("pets");
    tag.set_description(None);
    assert_eq!(tag.description(), None);
}

#[test]
fn path_location_forces_required() {
    for prior in [None, Some(false), Some(true)] {
        let mut parameter = Parameter::default();
        parameter.set_required(prior);
        parameter.set_in(Some(ParameterIn::Path));
        assert_eq!(parameter.required(), Some(true));
    }
    let query = Parameter::new("q", ParameterIn::Query);
    assert_eq!(query.required(), None);
}

#[test]
fn unset_and_zero_max_items_differ() {
    let unset = Schema::of_type(SchemaType::Array);
    let zero = Schema::of_type(SchemaType::Array).with_max_items(0);
    let unset = serde_json::to_value(&unset).unwrap();
    let zero = serde_json::to_value(&zero).unwrap();
    assert_eq!(unset, json!({ "type": "array" }));
    assert_eq!(zero, json!({ "type": "array", "maxItems": 0 }));

    let factory = OasFactory::default();
    let declared = SchemaDecl::of_type(SchemaType::Array).build(&factory).unwrap();
    assert_eq!(serde_json::to_value(&declared).unwrap(), unset);
    let declared = SchemaDecl {
        max_items: 0,
        ..SchemaDecl::of_type(SchemaType::Array)
    }
    .build(&factory)
    .unwrap();
    assert_eq!(serde_json::to_value(&declared).unwrap(), zero);
}

#[test]
fn parsed_extension_becomes_object() {
    let mut operation = Operation::default();
    ExtensionDecl::new("x-custom", r#"{"owner": "pets-team", "tier": 1}"#)
        .parsed()
        .apply_to(&mut operation);
    ExtensionDecl::new("x-raw", r#"{"owner": "pets-team"}"#).apply_to(&mut operation);

    let mut open_api = OpenApi::new(Info::new("Pets", "1.0.0"));
    open_api.add_path_item("/pets", PathItem::default().with_get(operation));
    let value = document::to_value(&open_api).unwrap();
    assert_eq!(
        value["paths"]["/pets"]["get"],
        json!({
            "x-custom": { "owner": "pets-team", "tier": 1 },
            "x-raw": "{\"owner\": \"pets-team\"}"
        })
    );
}

#[test]
fn extensions_without_prefix_are_not_written() {
    let mut body = RequestBody::default();
    body.add_extension("x-kept", true).add_extension("dropped", true);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "required": true, "x-kept": true })
    );
}

fn check_extensions<T: Constructible + Extensible + Serialize>(factory: &OasFactory) -> ModelKind {
    let mut item: T = factory.create_object().unwrap();
    let value = json!({ "owner": "pets-team" });
    item.add_extension("x-owner", value.clone());
    assert_eq!(item.extension("x-owner"), Some(&value), "{}", T::KIND);
    assert_eq!(
        serde_json::to_value(&item).unwrap()["x-owner"],
        value,
        "{} did not write its extension",
        T::KIND
    );
    assert_eq!(item.remove_extension("x-owner"), Some(value));
    assert!(item.extensions().is_empty());
    T::KIND
}

macro_rules! check_all {
    ($factory:expr, $($ty:ty),* $(,)?) => {
        vec![$(check_extensions::<$ty>($factory)),*]
    };
}

#[test]
fn every_extensible_entity_round_trips_extensions() {
    let factory = OasFactory::default();
    let covered = check_all!(
        &factory,
        OpenApi, Info, Contact, License, ExternalDocumentation, Server, ServerVariable,
        ServerVariables, Paths, PathItem, Operation, Parameter, Header, RequestBody, MediaType,
        Encoding, ApiResponses, ApiResponse, Callback, Link, Example, Schema, Discriminator, Xml,
        SecurityScheme, OAuthFlows, OAuthFlow, Scopes, Tag, Components,
    );
    // Content and SecurityRequirement are plain maps without extensions.
    for kind in ModelKind::ALL {
        if matches!(kind, ModelKind::Content | ModelKind::SecurityRequirement) {
            continue;
        }
        assert!(covered.contains(kind), "{} has no extension check", kind);
    }
}
