//! A typed OpenAPI document model with a creation factory, a filter pass
//! that can rewrite or drop any element, and JSON/YAML output.
//!
//! ```
//! use oasmodel::model::{Info, OpenApi, Operation, PathItem};
//!
//! let mut document = OpenApi::new(Info::new("Pets", "1.0.0"));
//! document.add_path_item(
//!     "/pets",
//!     PathItem::default().with_get(Operation::default().with_operation_id("listPets")),
//! );
//! assert!(oasmodel::document::to_json(&document).is_ok());
//! ```

#[macro_use]
pub mod model;

pub mod config;
pub mod declare;
pub mod document;
pub mod error;
pub mod factory;
pub mod filter;
pub mod merge;
pub mod security;
pub mod types;

pub use crate::config::OasConfig;
pub use crate::error::{
    ConfigError, DocumentError, FactoryError, FilterError, ModelError, OasError,
};
pub use crate::factory::{
    Constructible, DefaultFactoryResolver, ModelKind, OasFactory, OasFactoryResolver,
};
pub use crate::filter::{FilterSummary, OasFilter, filter_document};
pub use crate::merge::Merge;
pub use crate::types::version::{OpenApiVersion, SchemaDialect};
pub use crate::types::{Extensions, ParameterIn, RefOr, Reference};

pub(crate) const REF_FIELD: &str = "$ref";
pub(crate) const COMPONENTS_FIELD: &str = "components";
pub(crate) const PATHS_FIELD: &str = "paths";
pub(crate) const OPENAPI_FIELD: &str = "openapi";
pub(crate) const PATH_SEPARATOR: &str = "/";
pub(crate) const FRAGMENT_PREFIX: &str = "#";
pub(crate) const TILDE: &str = "~";
pub(crate) const ENCODED_SLASH: &str = "~1";
pub(crate) const ENCODED_TILDE: &str = "~0";
pub(crate) const EXTENSION_PREFIX: &str = "x-";

/// The `openapi` value of a freshly created document.
pub const DEFAULT_OPENAPI_VERSION: &str = "3.1.0";
