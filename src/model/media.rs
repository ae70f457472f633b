use crate::model::{Example, Header, Schema};
use crate::types::{Extensions, RefOr};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Payload descriptions keyed by media type (`application/json`, `text/*`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Content {
    #[serde(flatten)]
    pub(crate) media_types: IndexMap<String, MediaType>,
}

named_collection!(Content, media_types / media_type: MediaType);

impl Content {
    /// Shortcut for a single `media_type` whose body follows `schema`.
    pub fn of(media_type: impl Into<String>, schema: impl Into<RefOr<Schema>>) -> Self {
        Content::default().with_media_type(media_type, MediaType::default().with_schema(schema))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schema: Option<RefOr<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<IndexMap<String, RefOr<Example>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) encoding: Option<IndexMap<String, Encoding>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(MediaType {
    opt schema: RefOr<Schema>,
    opt example: Value,
    map examples / example: RefOr<Example>,
    map encoding / encoding: Encoding,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EncodingStyle {
    Form,
    SpaceDelimited,
    PipeDelimited,
    DeepObject,
}

/// Serialization of one property of a multipart or form-urlencoded body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) headers: Option<IndexMap<String, RefOr<Header>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<EncodingStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allow_reserved: Option<bool>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(Encoding {
    str content_type: String,
    map headers / header: RefOr<Header>,
    copy style: EncodingStyle,
    copy explode: bool,
    copy allow_reserved: bool,
});

extensible!(MediaType, Encoding);
