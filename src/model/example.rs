use crate::types::{Extensions, Referenceable};
use serde::Serialize;
use serde_json::Value;

/// An example value, inline or hosted at `external_value`. The two are
/// alternatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_value: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(Example {
    str summary: String,
    str description: String,
    opt value: Value,
    str external_value: String,
});

impl Referenceable for Example {
    const COMPONENT: &'static str = "examples";
}

extensible!(Example);
