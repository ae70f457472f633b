//! Declarative descriptors with the defaults of the annotation surface.
//!
//! A scanner fills these from source annotations; [`Declaration::build`]
//! turns one into model objects created through an [`OasFactory`]. Unset
//! numeric attributes are recognised by sentinel values rather than by
//! absence, exactly as the annotations encode them.

pub mod extension;
pub mod parameter;
pub mod response;
pub mod schema;
pub mod security;

pub use extension::{ExtensionDecl, apply_extensions};
pub use parameter::{ContentDecl, Explode, ParameterDecl, RequestBodyDecl};
pub use response::{ApiResponseDecl, HeaderDecl, responses_from};
pub use schema::SchemaDecl;
pub use security::{SecurityRequirementDecl, SecurityRequirementsSet, SecurityRequirementsSets};

use crate::error::FactoryError;
use crate::factory::OasFactory;

pub trait Declaration {
    type Output;

    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError>;
}
