use crate::model::Content;
use crate::types::{Extensions, Referenceable};
use serde::Serialize;

/// The payload an operation accepts.
///
/// A fresh body is required: a declared body is treated as mandatory unless
/// explicitly relaxed, unlike the document format's own `false` default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) required: Option<bool>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Default for RequestBody {
    fn default() -> Self {
        RequestBody {
            description: None,
            content: None,
            required: Some(true),
            extensions: Extensions::default(),
        }
    }
}

accessors!(RequestBody {
    str description: String,
    opt content: Content,
    copy required: bool,
});

impl Referenceable for RequestBody {
    const COMPONENT: &'static str = "requestBodies";
}

extensible!(RequestBody);

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Schema;
    use serde_json::json;

    #[test]
    fn test_required_by_default() {
        assert_eq!(RequestBody::default().required(), Some(true));
    }

    #[test]
    fn test_optional_body() {
        let body = RequestBody::default()
            .with_required(false)
            .with_content(Content::of("text/plain", Schema::default()));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "content": { "text/plain": { "schema": {} } }, "required": false })
        );
    }
}
