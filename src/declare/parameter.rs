use crate::declare::{Declaration, ExtensionDecl, SchemaDecl, apply_extensions};
use crate::error::FactoryError;
use crate::factory::OasFactory;
use crate::model::{Content, Parameter, ParameterStyle, RequestBody};
use crate::types::{ParameterIn, RefOr};
use serde_json::Value;

/// Tri-state `explode`: left to the style default unless stated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Explode {
    #[default]
    Default,
    True,
    False,
}

impl Explode {
    fn as_option(self) -> Option<bool> {
        match self {
            Explode::Default => None,
            Explode::True => Some(true),
            Explode::False => Some(false),
        }
    }
}

/// One media type of a body or parameter. An empty `media_type` stands for `*/*`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDecl {
    pub media_type: String,
    pub schema: Option<SchemaDecl>,
    pub example: String,
    pub extensions: Vec<ExtensionDecl>,
}

impl ContentDecl {
    pub fn new(media_type: impl Into<String>, schema: SchemaDecl) -> Self {
        ContentDecl {
            media_type: media_type.into(),
            schema: Some(schema),
            ..ContentDecl::default()
        }
    }
}

pub(crate) fn build_content(
    decls: &[ContentDecl],
    factory: &OasFactory,
) -> Result<Option<Content>, FactoryError> {
    if decls.is_empty() {
        return Ok(None);
    }
    let mut content = factory.create_content()?;
    for decl in decls {
        let mut media_type = factory.create_media_type()?;
        if let Some(schema) = &decl.schema {
            media_type.set_schema(schema.build(factory)?);
        }
        if !decl.example.is_empty() {
            media_type.set_example(Some(example_value(&decl.example)));
        }
        apply_extensions(&mut media_type, &decl.extensions);
        let name = if decl.media_type.is_empty() {
            "*/*"
        } else {
            decl.media_type.as_str()
        };
        content.add_media_type(name, media_type);
    }
    Ok(Some(content))
}

fn example_value(example: &str) -> Value {
    serde_json::from_str(example).unwrap_or_else(|_| Value::String(example.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterDecl {
    pub name: String,
    pub location: Option<ParameterIn>,
    pub description: String,
    pub required: bool,
    pub deprecated: bool,
    pub allow_empty_value: bool,
    pub style: Option<ParameterStyle>,
    pub explode: Explode,
    pub allow_reserved: bool,
    pub schema: Option<SchemaDecl>,
    pub content: Vec<ContentDecl>,
    pub example: String,
    pub hidden: bool,
    pub reference: String,
    pub extensions: Vec<ExtensionDecl>,
}

impl ParameterDecl {
    pub fn new(name: impl Into<String>, location: ParameterIn) -> Self {
        ParameterDecl {
            name: name.into(),
            location: Some(location),
            ..ParameterDecl::default()
        }
    }
}

impl Declaration for ParameterDecl {
    type Output = Option<RefOr<Parameter>>;

    /// `None` for a hidden parameter. Boolean flags left `false` stay unset,
    /// except that a path parameter is always required.
    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError> {
        if self.hidden {
            return Ok(None);
        }
        if !self.reference.is_empty() {
            return Ok(Some(RefOr::component_ref(&self.reference)));
        }
        let mut parameter = factory.create_parameter()?;
        if !self.name.is_empty() {
            parameter.set_name(Some(self.name.clone()));
        }
        if self.required {
            parameter.set_required(Some(true));
        }
        parameter.set_in(self.location);
        parameter.set_description((!self.description.is_empty()).then(|| self.description.clone()));
        if self.deprecated {
            parameter.set_deprecated(Some(true));
        }
        if self.allow_empty_value {
            parameter.set_allow_empty_value(Some(true));
        }
        if self.allow_reserved {
            parameter.set_allow_reserved(Some(true));
        }
        parameter.set_style(self.style);
        parameter.set_explode(self.explode.as_option());
        if let Some(schema) = &self.schema {
            parameter.set_schema(schema.build(factory)?);
        }
        parameter.set_content(build_content(&self.content, factory)?);
        if !self.example.is_empty() {
            parameter.set_example(Some(example_value(&self.example)));
        }
        apply_extensions(&mut parameter, &self.extensions);
        Ok(Some(RefOr::Item(parameter)))
    }
}

/// A request body declaration. Unlike the document format, `required`
/// defaults to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBodyDecl {
    pub description: String,
    pub content: Vec<ContentDecl>,
    pub required: bool,
    pub reference: String,
    pub extensions: Vec<ExtensionDecl>,
}

impl Default for RequestBodyDecl {
    fn default() -> Self {
        RequestBodyDecl {
            description: String::new(),
            content: Vec::new(),
            required: true,
            reference: String::new(),
            extensions: Vec::new(),
        }
    }
}

impl Declaration for RequestBodyDecl {
    type Output = RefOr<RequestBody>;

    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError> {
        if !self.reference.is_empty() {
            return Ok(RefOr::component_ref(&self.reference));
        }
        let mut body = factory.create_request_body()?;
        body.set_description((!self.description.is_empty()).then(|| self.description.clone()));
        body.set_content(build_content(&self.content, factory)?);
        body.set_required(Some(self.required));
        apply_extensions(&mut body, &self.extensions);
        Ok(RefOr::Item(body))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::SchemaType;
    use serde_json::json;

    #[test]
    fn test_path_parameter_is_required() {
        let decl = ParameterDecl::new("id", ParameterIn::Path);
        let parameter = decl.build(&OasFactory::default()).unwrap().unwrap();
        assert_eq!(
            parameter.as_item().and_then(Parameter::required),
            Some(true)
        );
    }

    #[test]
    fn test_query_parameter() {
        let decl = ParameterDecl {
            description: "Page size".to_string(),
            explode: Explode::False,
            schema: Some(SchemaDecl::of_type(SchemaType::Integer)),
            example: "20".to_string(),
            ..ParameterDecl::new("limit", ParameterIn::Query)
        };
        let parameter = decl.build(&OasFactory::default()).unwrap().unwrap();
        assert_eq!(
            serde_json::to_value(&parameter).unwrap(),
            json!({
                "name": "limit",
                "in": "query",
                "description": "Page size",
                "explode": false,
                "schema": { "type": "integer" },
                "example": 20
            })
        );
    }

    #[test]
    fn test_hidden_and_referenced_parameters() {
        let factory = OasFactory::default();
        let hidden = ParameterDecl {
            hidden: true,
            ..ParameterDecl::new("debug", ParameterIn::Query)
        };
        assert_eq!(hidden.build(&factory).unwrap(), None);

        let referenced = ParameterDecl {
            reference: "PageSize".to_string(),
            ..ParameterDecl::default()
        };
        assert_eq!(
            serde_json::to_value(referenced.build(&factory).unwrap()).unwrap(),
            json!({ "$ref": "#/components/parameters/PageSize" })
        );
    }

    #[test]
    fn test_request_body_required_by_default() {
        let decl = RequestBodyDecl {
            content: vec![ContentDecl::new(
                "application/json",
                SchemaDecl {
                    reference: "Pet".to_string(),
                    ..SchemaDecl::default()
                },
            )],
            ..RequestBodyDecl::default()
        };
        let body = decl.build(&OasFactory::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "content": {
                    "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } }
                },
                "required": true
            })
        );
    }

    #[test]
    fn test_empty_media_type_is_wildcard() {
        let content = build_content(&[ContentDecl::default()], &OasFactory::default())
            .unwrap()
            .unwrap();
        assert!(content.has_media_type("*/*"));
    }
}
