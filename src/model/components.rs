use crate::model::{
    ApiResponse, Callback, Example, Header, Link, Parameter, PathItem, RequestBody, Schema,
    SecurityScheme,
};
use crate::types::{Extensions, RefOr};
use indexmap::IndexMap;
use serde::Serialize;

/// Reusable definitions, addressed by `#/components/<collection>/<name>`.
///
/// Names are expected to be unique within a collection; adding an existing
/// name replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schemas: Option<IndexMap<String, RefOr<Schema>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) responses: Option<IndexMap<String, RefOr<ApiResponse>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<IndexMap<String, RefOr<Parameter>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<IndexMap<String, RefOr<Example>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_bodies: Option<IndexMap<String, RefOr<RequestBody>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) headers: Option<IndexMap<String, RefOr<Header>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security_schemes: Option<IndexMap<String, RefOr<SecurityScheme>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) links: Option<IndexMap<String, RefOr<Link>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) callbacks: Option<IndexMap<String, RefOr<Callback>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) path_items: Option<IndexMap<String, RefOr<PathItem>>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(Components {
    map schemas / schema: RefOr<Schema>,
    map responses / response: RefOr<ApiResponse>,
    map parameters / parameter: RefOr<Parameter>,
    map examples / example: RefOr<Example>,
    map request_bodies / request_body: RefOr<RequestBody>,
    map headers / header: RefOr<Header>,
    map security_schemes / security_scheme: RefOr<SecurityScheme>,
    map links / link: RefOr<Link>,
    map callbacks / callback: RefOr<Callback>,
    map path_items / path_item: RefOr<PathItem>,
});

impl Components {
    /// The inline schema registered under `name`, if there is one.
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas
            .as_ref()
            .and_then(|schemas| schemas.get(name))
            .and_then(RefOr::as_item)
    }

    pub fn security_scheme(&self, name: &str) -> Option<&SecurityScheme> {
        self.security_schemes
            .as_ref()
            .and_then(|schemes| schemes.get(name))
            .and_then(RefOr::as_item)
    }
}

extensible!(Components);
