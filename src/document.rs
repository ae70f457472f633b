//! Writing a finished document out as JSON or YAML.
//!
//! Every function works on a copy: the version named by the `openapi` field
//! selects the schema dialect, which is stamped onto each schema in the copy
//! before it is serialized.

use crate::OPENAPI_FIELD;
use crate::error::DocumentError;
use crate::filter::OasFilter;
use crate::filter::traverser::traverse;
use crate::model::{OpenApi, Schema};
use crate::types::version::{OpenApiVersion, SchemaDialect};
use serde_json::Value;
use std::str::FromStr;

struct DialectStamp(SchemaDialect);

impl OasFilter for DialectStamp {
    fn filter_schema(&mut self, mut schema: Schema) -> Option<Schema> {
        schema.set_dialect(self.0);
        Some(schema)
    }
}

/// A copy of `open_api` whose schemas render for its declared version.
pub fn prepare(open_api: &OpenApi) -> Result<OpenApi, DocumentError> {
    let version = OpenApiVersion::from_str(open_api.openapi())?;
    let mut prepared = open_api.clone();
    let summary = traverse(&mut prepared, &mut DialectStamp(version.dialect()));
    log::debug!(
        "Prepared document with {} {} ({:?}), {} elements",
        OPENAPI_FIELD,
        open_api.openapi(),
        version.dialect(),
        summary.visited
    );
    Ok(prepared)
}

pub fn to_value(open_api: &OpenApi) -> Result<Value, DocumentError> {
    let prepared = prepare(open_api)?;
    serde_json::to_value(&prepared).map_err(|e| DocumentError::serialization(&e))
}

pub fn to_json(open_api: &OpenApi) -> Result<String, DocumentError> {
    let prepared = prepare(open_api)?;
    serde_json::to_string(&prepared).map_err(|e| DocumentError::serialization(&e))
}

pub fn to_json_pretty(open_api: &OpenApi) -> Result<String, DocumentError> {
    let prepared = prepare(open_api)?;
    serde_json::to_string_pretty(&prepared).map_err(|e| DocumentError::serialization(&e))
}

pub fn to_yaml(open_api: &OpenApi) -> Result<String, DocumentError> {
    let prepared = prepare(open_api)?;
    serde_yaml::to_string(&prepared).map_err(|e| DocumentError::serialization(&e))
}
