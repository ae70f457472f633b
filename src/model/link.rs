use crate::model::Server;
use crate::types::{Extensions, Referenceable};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A design-time link from a response to another operation.
///
/// `operation_ref` and `operation_id` are alternatives. Parameter values and
/// the request body are either constants or runtime expressions such as
/// `$response.body#/id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) operation_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<IndexMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) server: Option<Server>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(Link {
    str operation_ref: String,
    str operation_id: String,
    map parameters / parameter: Value,
    opt request_body: Value,
    str description: String,
    opt server: Server,
});

impl Referenceable for Link {
    const COMPONENT: &'static str = "links";
}

extensible!(Link);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_parameters() {
        let mut link = Link::default().with_operation_id("getUser");
        link.add_parameter("userId", "$response.body#/id");
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "operationId": "getUser",
                "parameters": { "userId": "$response.body#/id" }
            })
        );
        assert_eq!(link.remove_parameter("userId"), Some(json!("$response.body#/id")));
        assert_eq!(link.remove_parameter("userId"), None);
    }
}
