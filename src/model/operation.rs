use crate::model::{
    ApiResponses, Callback, ExternalDocumentation, Parameter, RequestBody, SecurityRequirement,
    Server,
};
use crate::types::{Extensions, RefOr};
use indexmap::IndexMap;
use serde::Serialize;

/// One HTTP method on one path.
///
/// `security` distinguishes "not declared" (`None`, the document-level
/// requirements apply) from "declared empty" (`Some(vec![])`, no
/// authentication for this operation).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_docs: Option<ExternalDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<Vec<RefOr<Parameter>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_body: Option<RefOr<RequestBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) responses: Option<ApiResponses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) callbacks: Option<IndexMap<String, RefOr<Callback>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security: Option<Vec<SecurityRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) servers: Option<Vec<Server>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(Operation {
    list tags / tag: String,
    str summary: String,
    str description: String,
    opt external_docs: ExternalDocumentation,
    str operation_id: String,
    list parameters / parameter: RefOr<Parameter>,
    opt request_body: RefOr<RequestBody>,
    opt responses: ApiResponses,
    map callbacks / callback: RefOr<Callback>,
    copy deprecated: bool,
    list security / security_requirement: SecurityRequirement,
    list servers / server: Server,
});

extensible!(Operation);

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{ApiResponse, Extensible};
    use crate::types::ParameterIn;
    use serde_json::json;

    #[test]
    fn test_empty_security_is_kept() {
        let operation = Operation::default().with_security(Vec::new());
        assert_eq!(operation.security(), Some(&[][..]));
        assert_eq!(
            serde_json::to_value(&operation).unwrap(),
            json!({ "security": [] })
        );
        assert_eq!(
            serde_json::to_value(Operation::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_add_and_remove_parameters() {
        let limit = RefOr::Item(Parameter::new("limit", ParameterIn::Query));
        let mut operation = Operation::default();
        operation
            .add_parameter(limit.clone())
            .add_parameter(Parameter::new("offset", ParameterIn::Query));
        assert_eq!(operation.parameters().map(<[_]>::len), Some(2));
        operation.remove_parameter(&limit);
        assert_eq!(operation.parameters().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_fluent_chain() {
        let operation = Operation::default()
            .with_operation_id("listPets")
            .with_summary("List pets")
            .with_tags(vec!["pets".to_string()])
            .with_responses(ApiResponses::default().with_api_response("200", ApiResponse::new("ok")));
        assert_eq!(operation.operation_id(), Some("listPets"));
        assert_eq!(operation.tags(), Some(&["pets".to_string()][..]));
        assert!(operation
            .responses()
            .map(|responses| responses.has_api_response("200"))
            .unwrap_or(false));
    }

    #[test]
    fn test_operation_extensions() {
        let mut operation = Operation::default().with_extension("x-audit", json!({"level": 2}));
        assert_eq!(operation.extension("x-audit"), Some(&json!({"level": 2})));
        assert_eq!(
            serde_json::to_value(&operation).unwrap(),
            json!({ "x-audit": { "level": 2 } })
        );
        assert_eq!(operation.remove_extension("x-audit"), Some(json!({"level": 2})));
        assert!(operation.extensions().is_empty());
    }
}
