use crate::model::{Content, Example, Schema};
use crate::types::{Extensions, RefOr, Referenceable};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderStyle {
    Simple,
}

/// A response or encoding header. Shaped like a parameter without `name`
/// and `in`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allow_empty_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<HeaderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schema: Option<RefOr<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<IndexMap<String, RefOr<Example>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<Content>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(Header {
    str description: String,
    copy required: bool,
    copy deprecated: bool,
    copy allow_empty_value: bool,
    copy style: HeaderStyle,
    copy explode: bool,
    opt schema: RefOr<Schema>,
    opt example: Value,
    map examples / example: RefOr<Example>,
    opt content: Content,
});

impl Referenceable for Header {
    const COMPONENT: &'static str = "headers";
}

extensible!(Header);
