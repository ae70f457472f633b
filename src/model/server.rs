use crate::types::Extensions;
use indexmap::IndexMap;
use serde::Serialize;

/// A server hosting the API. `url` may contain `{name}` tokens that are
/// filled from `variables`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Server {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) variables: Option<ServerVariables>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Server::default().with_url(url)
    }

    /// Names of the `{name}` tokens in the url, in order of appearance.
    pub fn url_variable_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let Some(mut rest) = self.url.as_deref() else {
            return names;
        };
        while let Some(start) = rest.find('{') {
            let Some(end) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + end]);
            rest = &rest[start + end + 1..];
        }
        names
    }

    /// The url with every token replaced by its variable's default.
    /// Tokens without a declared default are left in place.
    pub fn resolved_url(&self) -> Option<String> {
        let mut url = self.url.clone()?;
        if let Some(variables) = &self.variables {
            for (name, variable) in variables.variables() {
                if let Some(default_value) = variable.default_value() {
                    url = url.replace(&format!("{{{}}}", name), default_value);
                }
            }
        }
        Some(url)
    }
}

accessors!(Server {
    str url: String,
    str description: String,
    opt variables: ServerVariables,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServerVariable {
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub(crate) enumeration: Option<Vec<String>>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub(crate) default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(ServerVariable {
    list enumeration / enumeration_value: String,
    str default_value: String,
    str description: String,
});

/// The named variables of one server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServerVariables {
    #[serde(flatten)]
    pub(crate) variables: IndexMap<String, ServerVariable>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

named_collection!(ServerVariables, variables / server_variable: ServerVariable);

extensible!(Server, ServerVariable, ServerVariables);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn templated_server() -> Server {
        let mut variables = ServerVariables::default();
        variables
            .add_server_variable(
                "port",
                ServerVariable::default()
                    .with_default_value("8443")
                    .with_enumeration(vec!["8443".to_string(), "443".to_string()]),
            )
            .add_server_variable("basePath", ServerVariable::default().with_default_value("v2"));
        Server::new("https://{host}:{port}/{basePath}").with_variables(variables)
    }

    #[test]
    fn test_url_variable_names() {
        let server = templated_server();
        assert_eq!(server.url_variable_names(), vec!["host", "port", "basePath"]);
    }

    #[test]
    fn test_resolved_url_keeps_unknown_tokens() {
        let server = templated_server();
        assert_eq!(
            server.resolved_url().as_deref(),
            Some("https://{host}:8443/v2")
        );
    }

    #[test]
    fn test_server_serialization() {
        let server = templated_server();
        assert_eq!(
            serde_json::to_value(&server).unwrap(),
            json!({
                "url": "https://{host}:{port}/{basePath}",
                "variables": {
                    "port": { "enum": ["8443", "443"], "default": "8443" },
                    "basePath": { "default": "v2" }
                }
            })
        );
    }

    #[test]
    fn test_named_collection_operations() {
        let mut variables = templated_server().variables().cloned().unwrap_or_default();
        assert!(variables.has_server_variable("port"));
        assert!(variables.remove_server_variable("port").is_some());
        assert!(!variables.has_server_variable("port"));
        assert_eq!(variables.len(), 1);
    }
}
