use crate::types::{Extensions, Referenceable};
use indexmap::IndexMap;
use serde::Serialize;

/// Security schemes that must all be satisfied together, each with the
/// scopes it requires. A list of requirements is satisfied by any one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SecurityRequirement {
    #[serde(flatten)]
    pub(crate) schemes: IndexMap<String, Vec<String>>,
}

named_collection!(SecurityRequirement, schemes / scheme: Vec<String>);

impl SecurityRequirement {
    /// Adds a scheme that requires no particular scope.
    pub fn add_scheme_without_scopes(&mut self, name: impl Into<String>) -> &mut Self {
        self.add_scheme(name, Vec::<String>::new())
    }

    /// Adds a scheme requiring the given scopes.
    pub fn with_scopes<I, S>(mut self, name: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scopes: Vec<String> = scopes.into_iter().map(Into::into).collect();
        self.add_scheme(name, scopes);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SecuritySchemeType {
    #[serde(rename = "apiKey")]
    ApiKey,
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[serde(rename = "openIdConnect")]
    OpenIdConnect,
    #[serde(rename = "mutualTLS")]
    MutualTls,
}

/// Location of an `apiKey` credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityIn {
    Query,
    Header,
    Cookie,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) scheme_type: Option<SecuritySchemeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<SecurityIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bearer_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) flows: Option<OAuthFlows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) open_id_connect_url: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl SecurityScheme {
    pub fn of_type(scheme_type: SecuritySchemeType) -> Self {
        SecurityScheme::default().with_scheme_type(scheme_type)
    }

    pub fn in_(&self) -> Option<SecurityIn> {
        self.location
    }

    pub fn set_in(&mut self, location: Option<SecurityIn>) {
        self.location = location;
    }

    pub fn with_in(mut self, location: SecurityIn) -> Self {
        self.set_in(Some(location));
        self
    }
}

accessors!(SecurityScheme {
    copy scheme_type: SecuritySchemeType,
    str description: String,
    str name: String,
    str scheme: String,
    str bearer_format: String,
    opt flows: OAuthFlows,
    str open_id_connect_url: String,
});

impl Referenceable for SecurityScheme {
    const COMPONENT: &'static str = "securitySchemes";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) implicit: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) password: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) client_credentials: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) authorization_code: Option<OAuthFlow>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(OAuthFlows {
    opt implicit: OAuthFlow,
    opt password: OAuthFlow,
    opt client_credentials: OAuthFlow,
    opt authorization_code: OAuthFlow,
});

impl OAuthFlows {
    /// Every scope name declared by any of the flows.
    pub fn all_scopes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for flow in [
            &self.implicit,
            &self.password,
            &self.client_credentials,
            &self.authorization_code,
        ]
        .into_iter()
        .flatten()
        {
            if let Some(scopes) = &flow.scopes {
                for name in scopes.scopes().keys() {
                    if !names.contains(&name.as_str()) {
                        names.push(name.as_str());
                    }
                }
            }
        }
        names
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) authorization_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) token_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) refresh_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scopes: Option<Scopes>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(OAuthFlow {
    str authorization_url: String,
    str token_url: String,
    str refresh_url: String,
    opt scopes: Scopes,
});

/// Scope names of an OAuth flow mapped to their descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scopes {
    #[serde(flatten)]
    pub(crate) scopes: IndexMap<String, String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

named_collection!(Scopes, scopes / scope: String);

extensible!(SecurityScheme, OAuthFlows, OAuthFlow, Scopes);
