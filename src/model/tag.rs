use crate::types::Extensions;
use serde::Serialize;

/// Pointer to documentation that lives outside the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExternalDocumentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl ExternalDocumentation {
    pub fn new(url: impl Into<String>) -> Self {
        ExternalDocumentation::default().with_url(url)
    }
}

accessors!(ExternalDocumentation {
    str description: String,
    str url: String,
});

/// Metadata for a tag used to group operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_docs: Option<ExternalDocumentation>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag::default().with_name(name)
    }
}

accessors!(Tag {
    str name: String,
    str description: String,
    opt external_docs: ExternalDocumentation,
});

extensible!(ExternalDocumentation, Tag);

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Extensible;
    use serde_json::json;

    #[test]
    fn test_tag_serializes_camel_case() {
        let tag = Tag::new("pets")
            .with_description("Everything about pets")
            .with_external_docs(ExternalDocumentation::new("https://example.com/pets"))
            .with_extension("x-order", 1);
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({
                "name": "pets",
                "description": "Everything about pets",
                "externalDocs": { "url": "https://example.com/pets" },
                "x-order": 1
            })
        );
    }

    #[test]
    fn test_setter_and_fluent_agree() {
        let mut tag = Tag::default();
        tag.set_name(Some("a".to_string()));
        assert_eq!(tag.name(), Tag::default().with_name("a").name());
        tag.set_name(None);
        assert_eq!(tag.name(), None);
    }
}
