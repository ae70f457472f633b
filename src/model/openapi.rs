use crate::DEFAULT_OPENAPI_VERSION;
use crate::model::{
    Components, ExternalDocumentation, Info, PathItem, Paths, SecurityRequirement, Server, Tag,
};
use crate::types::{Extensions, RefOr};
use indexmap::IndexMap;
use serde::Serialize;

/// The document root. It is never removed by a filter, only mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi {
    pub(crate) openapi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) info: Option<Info>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) json_schema_dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) servers: Option<Vec<Server>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) paths: Option<Paths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) webhooks: Option<IndexMap<String, RefOr<PathItem>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) components: Option<Components>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security: Option<Vec<SecurityRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_docs: Option<ExternalDocumentation>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Default for OpenApi {
    fn default() -> Self {
        OpenApi {
            openapi: DEFAULT_OPENAPI_VERSION.to_string(),
            info: None,
            json_schema_dialect: None,
            servers: None,
            paths: None,
            webhooks: None,
            components: None,
            security: None,
            tags: None,
            external_docs: None,
            extensions: Extensions::default(),
        }
    }
}

impl OpenApi {
    pub fn new(info: Info) -> Self {
        OpenApi::default().with_info(info)
    }

    pub fn openapi(&self) -> &str {
        &self.openapi
    }

    pub fn set_openapi(&mut self, openapi: impl Into<String>) {
        self.openapi = openapi.into();
    }

    pub fn with_openapi(mut self, openapi: impl Into<String>) -> Self {
        self.set_openapi(openapi);
        self
    }

    /// Adds an entry to `paths`, creating the collection if needed.
    pub fn add_path_item(
        &mut self,
        path: impl Into<String>,
        item: impl Into<RefOr<PathItem>>,
    ) -> &mut Self {
        self.paths
            .get_or_insert_with(Paths::default)
            .add_path_item(path, item);
        self
    }

    /// The tag declared under `name`.
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags
            .iter()
            .flatten()
            .find(|tag| tag.name() == Some(name))
    }
}

accessors!(OpenApi {
    opt info: Info,
    str json_schema_dialect: String,
    list servers / server: Server,
    opt paths: Paths,
    map webhooks / webhook: RefOr<PathItem>,
    opt components: Components,
    list security / security_requirement: SecurityRequirement,
    list tags / tag: Tag,
    opt external_docs: ExternalDocumentation,
});

extensible!(OpenApi);

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{Extensible, Operation};
    use serde_json::json;

    #[test]
    fn test_default_version() {
        let document = OpenApi::default();
        assert_eq!(document.openapi(), "3.1.0");
        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({ "openapi": "3.1.0" })
        );
    }

    #[test]
    fn test_minimal_document() {
        let mut document = OpenApi::new(Info::new("Pets", "1.0.0"))
            .with_tags(vec![Tag::new("pets")])
            .with_extension("x-audience", "public");
        document.add_path_item(
            "/pets",
            PathItem::default().with_get(Operation::default().with_operation_id("listPets")),
        );
        assert!(document.tag("pets").is_some());
        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({
                "openapi": "3.1.0",
                "info": { "title": "Pets", "version": "1.0.0" },
                "paths": { "/pets": { "get": { "operationId": "listPets" } } },
                "tags": [ { "name": "pets" } ],
                "x-audience": "public"
            })
        );
    }
}
