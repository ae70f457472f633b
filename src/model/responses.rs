use crate::model::{Content, Header, Link};
use crate::types::{Extensions, RefOr, Referenceable};
use http::StatusCode;
use indexmap::IndexMap;
use serde::Serialize;

/// One possible response of an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) headers: Option<IndexMap<String, RefOr<Header>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) links: Option<IndexMap<String, RefOr<Link>>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl ApiResponse {
    pub fn new(description: impl Into<String>) -> Self {
        ApiResponse::default().with_description(description)
    }
}

accessors!(ApiResponse {
    str description: String,
    map headers / header: RefOr<Header>,
    opt content: Content,
    map links / link: RefOr<Link>,
});

impl Referenceable for ApiResponse {
    const COMPONENT: &'static str = "responses";
}

/// Responses of an operation keyed by status code (`"200"`, `"4XX"`), plus
/// the `default` entry that covers every code not listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiResponses {
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub(crate) default_response: Option<RefOr<ApiResponse>>,
    #[serde(flatten)]
    pub(crate) responses: IndexMap<String, RefOr<ApiResponse>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

/// The reserved code of the entry covering every undocumented status.
pub const DEFAULT_RESPONSE_CODE: &str = "default";

accessors!(ApiResponses {
    opt default_response: RefOr<ApiResponse>,
});

/// Entry accessors keyed by code. The code `default` always addresses
/// [`ApiResponses::default_response`], so it never appears in the code map.
impl ApiResponses {
    /// Entries keyed by status code, without `default`.
    pub fn api_responses(&self) -> &IndexMap<String, RefOr<ApiResponse>> {
        &self.responses
    }

    /// Replaces the coded entries. A `default` key becomes the default response.
    pub fn set_api_responses(&mut self, mut responses: IndexMap<String, RefOr<ApiResponse>>) {
        if let Some(default_response) = responses.shift_remove(DEFAULT_RESPONSE_CODE) {
            self.default_response = Some(default_response);
        }
        self.responses = responses;
    }

    pub fn with_api_responses(mut self, responses: IndexMap<String, RefOr<ApiResponse>>) -> Self {
        self.set_api_responses(responses);
        self
    }

    pub fn add_api_response(
        &mut self,
        code: impl Into<String>,
        response: impl Into<RefOr<ApiResponse>>,
    ) -> &mut Self {
        let code = code.into();
        if code == DEFAULT_RESPONSE_CODE {
            self.default_response = Some(response.into());
        } else {
            self.responses.insert(code, response.into());
        }
        self
    }

    pub fn with_api_response(
        mut self,
        code: impl Into<String>,
        response: impl Into<RefOr<ApiResponse>>,
    ) -> Self {
        self.add_api_response(code, response);
        self
    }

    pub fn remove_api_response(&mut self, code: &str) -> Option<RefOr<ApiResponse>> {
        if code == DEFAULT_RESPONSE_CODE {
            return self.default_response.take();
        }
        self.responses.shift_remove(code)
    }

    pub fn has_api_response(&self, code: &str) -> bool {
        self.api_response(code).is_some()
    }

    pub fn api_response(&self, code: &str) -> Option<&RefOr<ApiResponse>> {
        if code == DEFAULT_RESPONSE_CODE {
            return self.default_response.as_ref();
        }
        self.responses.get(code)
    }

    pub fn api_response_mut(&mut self, code: &str) -> Option<&mut RefOr<ApiResponse>> {
        if code == DEFAULT_RESPONSE_CODE {
            return self.default_response.as_mut();
        }
        self.responses.get_mut(code)
    }

    /// Number of entries, `default` included.
    pub fn len(&self) -> usize {
        self.responses.len() + usize::from(self.default_response.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entry documenting `status`: the exact code first, then its range
    /// (`"5XX"`), then `default`.
    pub fn response_for(&self, status: StatusCode) -> Option<&RefOr<ApiResponse>> {
        let code = status.as_u16();
        self.responses
            .get(&code.to_string())
            .or_else(|| self.responses.get(&format!("{}XX", code / 100)))
            .or(self.default_response.as_ref())
    }
}

extensible!(ApiResponse, ApiResponses);
