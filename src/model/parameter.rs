use crate::model::{Content, Example, Schema};
use crate::types::{Extensions, ParameterIn, RefOr, Referenceable};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// How a parameter value is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterStyle {
    Matrix,
    Label,
    Form,
    Simple,
    SpaceDelimited,
    PipeDelimited,
    DeepObject,
}

impl ParameterStyle {
    /// The style used when none is declared for a parameter in `location`.
    pub fn default_for(location: ParameterIn) -> Self {
        match location {
            ParameterIn::Query | ParameterIn::Cookie => ParameterStyle::Form,
            ParameterIn::Path | ParameterIn::Header => ParameterStyle::Simple,
        }
    }
}

/// A single operation parameter, identified by `name` and `in`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<ParameterIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allow_empty_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<ParameterStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allow_reserved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schema: Option<RefOr<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<IndexMap<String, RefOr<Example>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<Content>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterIn) -> Self {
        Parameter::default().with_name(name).with_in(location)
    }

    pub fn in_(&self) -> Option<ParameterIn> {
        self.location
    }

    /// Sets the location. A path parameter is always required, so moving a
    /// parameter into the path also sets `required`.
    pub fn set_in(&mut self, location: Option<ParameterIn>) {
        self.location = location;
        if location == Some(ParameterIn::Path) {
            self.required = Some(true);
        }
    }

    pub fn with_in(mut self, location: ParameterIn) -> Self {
        self.set_in(Some(location));
        self
    }

    /// The declared style, or the default for the parameter's location.
    pub fn effective_style(&self) -> Option<ParameterStyle> {
        self.style
            .or_else(|| self.location.map(ParameterStyle::default_for))
    }

    /// The declared `explode`, or `true` exactly when the effective style is `form`.
    pub fn effective_explode(&self) -> bool {
        self.explode
            .unwrap_or(self.effective_style() == Some(ParameterStyle::Form))
    }

    /// Two parameters describe the same thing when `name` and `in` agree.
    pub fn same_identity(&self, other: &Parameter) -> bool {
        self.name == other.name && self.location == other.location
    }
}

accessors!(Parameter {
    str name: String,
    str description: String,
    copy required: bool,
    copy deprecated: bool,
    copy allow_empty_value: bool,
    copy style: ParameterStyle,
    copy explode: bool,
    copy allow_reserved: bool,
    opt schema: RefOr<Schema>,
    opt example: Value,
    map examples / example: RefOr<Example>,
    opt content: Content,
});

impl Referenceable for Parameter {
    const COMPONENT: &'static str = "parameters";
}

extensible!(Parameter);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_unset_by_default() {
        let parameter = Parameter::default().with_name("limit");
        assert_eq!(parameter.required(), None);
        let parameter = parameter.with_in(ParameterIn::Query);
        assert_eq!(parameter.required(), None);
    }

    #[test]
    fn test_path_forces_required() {
        let mut parameter = Parameter::default().with_required(false);
        parameter.set_in(Some(ParameterIn::Path));
        assert_eq!(parameter.required(), Some(true));
        assert_eq!(parameter.in_(), Some(ParameterIn::Path));

        let fluent = Parameter::default().with_in(ParameterIn::Path);
        assert_eq!(fluent.required(), Some(true));
    }

    #[test]
    fn test_effective_style_and_explode() {
        let query = Parameter::new("tags", ParameterIn::Query);
        assert_eq!(query.effective_style(), Some(ParameterStyle::Form));
        assert!(query.effective_explode());

        let header = Parameter::new("X-Trace", ParameterIn::Header);
        assert_eq!(header.effective_style(), Some(ParameterStyle::Simple));
        assert!(!header.effective_explode());

        let piped = Parameter::new("ids", ParameterIn::Query)
            .with_style(ParameterStyle::PipeDelimited);
        assert!(!piped.effective_explode());
    }

    #[test]
    fn test_serializes_in_field() {
        let parameter = Parameter::new("id", ParameterIn::Path)
            .with_schema(RefOr::<Schema>::component_ref("Id"));
        assert_eq!(
            serde_json::to_value(&parameter).unwrap(),
            json!({
                "name": "id",
                "in": "path",
                "required": true,
                "schema": { "$ref": "#/components/schemas/Id" }
            })
        );
    }
}
