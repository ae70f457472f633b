use crate::declare::parameter::build_content;
use crate::declare::{ContentDecl, Declaration, ExtensionDecl, SchemaDecl, apply_extensions};
use crate::error::FactoryError;
use crate::factory::OasFactory;
use crate::merge::Merge;
use crate::model::responses::DEFAULT_RESPONSE_CODE;
use crate::model::{ApiResponse, ApiResponses, Header};
use crate::types::RefOr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderDecl {
    pub name: String,
    pub description: String,
    pub schema: Option<SchemaDecl>,
    pub required: bool,
    pub deprecated: bool,
    pub reference: String,
    pub extensions: Vec<ExtensionDecl>,
}

impl Declaration for HeaderDecl {
    type Output = RefOr<Header>;

    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError> {
        if !self.reference.is_empty() {
            return Ok(RefOr::component_ref(&self.reference));
        }
        let mut header = factory.create_header()?;
        header.set_description((!self.description.is_empty()).then(|| self.description.clone()));
        if let Some(schema) = &self.schema {
            header.set_schema(schema.build(factory)?);
        }
        if self.required {
            header.set_required(Some(true));
        }
        if self.deprecated {
            header.set_deprecated(Some(true));
        }
        apply_extensions(&mut header, &self.extensions);
        Ok(RefOr::Item(header))
    }
}

/// A response declaration. An empty `response_code` declares the `default`
/// response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponseDecl {
    pub response_code: String,
    pub description: String,
    pub content: Vec<ContentDecl>,
    pub headers: Vec<HeaderDecl>,
    pub reference: String,
    pub extensions: Vec<ExtensionDecl>,
}

impl ApiResponseDecl {
    pub fn new(response_code: impl Into<String>, description: impl Into<String>) -> Self {
        ApiResponseDecl {
            response_code: response_code.into(),
            description: description.into(),
            ..ApiResponseDecl::default()
        }
    }

    pub fn code(&self) -> &str {
        if self.response_code.is_empty() {
            DEFAULT_RESPONSE_CODE
        } else {
            &self.response_code
        }
    }
}

impl Declaration for ApiResponseDecl {
    type Output = RefOr<ApiResponse>;

    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError> {
        if !self.reference.is_empty() {
            return Ok(RefOr::component_ref(&self.reference));
        }
        let mut response = factory.create_api_response()?;
        response.set_description((!self.description.is_empty()).then(|| self.description.clone()));
        response.set_content(build_content(&self.content, factory)?);
        for header in &self.headers {
            response.add_header(header.name.clone(), header.build(factory)?);
        }
        apply_extensions(&mut response, &self.extensions);
        Ok(RefOr::Item(response))
    }
}

/// Collects response declarations into one `ApiResponses`. Declarations that
/// share a code are merged in order into a single entry.
pub fn responses_from(
    decls: &[ApiResponseDecl],
    factory: &OasFactory,
) -> Result<ApiResponses, FactoryError> {
    let mut responses = factory.create_api_responses()?;
    for decl in decls {
        let response = decl.build(factory)?;
        match responses.api_response_mut(decl.code()) {
            Some(existing) => {
                log::debug!("Merging repeated response '{}'", decl.code());
                existing.merge(response);
            }
            None => {
                responses.add_api_response(decl.code(), response);
            }
        }
    }
    Ok(responses)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::SchemaType;
    use serde_json::json;

    #[test]
    fn test_repeated_codes_collapse() {
        let decls = vec![
            ApiResponseDecl::new("200", "ok"),
            ApiResponseDecl {
                content: vec![ContentDecl::new(
                    "application/json",
                    SchemaDecl::of_type(SchemaType::Object),
                )],
                ..ApiResponseDecl::new("200", "")
            },
            ApiResponseDecl::new("404", "missing"),
        ];
        let responses = responses_from(&decls, &OasFactory::default()).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(
            serde_json::to_value(&responses).unwrap(),
            json!({
                "200": {
                    "description": "ok",
                    "content": { "application/json": { "schema": { "type": "object" } } }
                },
                "404": { "description": "missing" }
            })
        );
    }

    #[test]
    fn test_empty_code_is_default() {
        let decls = vec![ApiResponseDecl {
            headers: vec![HeaderDecl {
                name: "X-Rate-Limit".to_string(),
                schema: Some(SchemaDecl::of_type(SchemaType::Integer)),
                ..HeaderDecl::default()
            }],
            ..ApiResponseDecl::new("", "unexpected")
        }];
        let responses = responses_from(&decls, &OasFactory::default()).unwrap();
        assert_eq!(responses.len(), 1);
        assert!(responses.api_responses().is_empty());
        assert_eq!(
            serde_json::to_value(&responses).unwrap(),
            json!({
                "default": {
                    "description": "unexpected",
                    "headers": { "X-Rate-Limit": { "schema": { "type": "integer" } } }
                }
            })
        );
    }

    #[test]
    fn test_repeated_default_collapses() {
        let decls = vec![
            ApiResponseDecl::new("", "unexpected"),
            ApiResponseDecl {
                content: vec![ContentDecl {
                    media_type: "text/plain".to_string(),
                    ..ContentDecl::default()
                }],
                ..ApiResponseDecl::new("default", "")
            },
        ];
        let responses = responses_from(&decls, &OasFactory::default()).unwrap();
        assert_eq!(
            serde_json::to_string(&responses).unwrap(),
            r#"{"default":{"description":"unexpected","content":{"text/plain":{}}}}"#
        );
    }
}

