use crate::model::PathItem;
use crate::types::{Extensions, RefOr, Referenceable};
use indexmap::IndexMap;
use serde::Serialize;

/// Out-of-band requests the API may make, keyed by a runtime expression
/// that evaluates to the callback url (`{$request.body#/callbackUrl}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Callback {
    #[serde(flatten)]
    pub(crate) path_items: IndexMap<String, RefOr<PathItem>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

named_collection!(Callback, path_items / path_item: RefOr<PathItem>);

impl Referenceable for Callback {
    const COMPONENT: &'static str = "callbacks";
}

extensible!(Callback);
