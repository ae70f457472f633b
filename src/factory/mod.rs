//! Creation of model instances through a pluggable resolver.
//!
//! Application code asks an [`OasFactory`] for a type and never names the
//! implementation. The factory is an explicit handle; [`OasFactory::global`]
//! exists for hosts that need one process-wide instance.

pub mod kind;
pub mod resolver;

pub use kind::{Constructible, ModelKind};
pub use resolver::{Constructor, DefaultFactoryResolver, OasFactoryResolver, ResolverRegistration};

use crate::error::FactoryError;
use crate::model::*;
use std::any::Any;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

static GLOBAL_FACTORY: OnceLock<OasFactory> = OnceLock::new();

#[derive(Clone)]
pub struct OasFactory {
    resolver: Arc<dyn OasFactoryResolver>,
}

impl OasFactory {
    pub fn new(resolver: Arc<dyn OasFactoryResolver>) -> Self {
        OasFactory { resolver }
    }

    /// Uses the highest priority [`ResolverRegistration`] submitted with
    /// `inventory`, or the default resolver when there is none.
    pub fn discover() -> Self {
        let registration = inventory::iter::<ResolverRegistration>
            .into_iter()
            .max_by_key(|registration| registration.priority);
        match registration {
            Some(registration) => {
                log::debug!(
                    "Using factory resolver '{}' (priority {})",
                    registration.name,
                    registration.priority
                );
                OasFactory::new((registration.create)())
            }
            None => {
                log::debug!("No factory resolver registered, using the default");
                OasFactory::default()
            }
        }
    }

    /// Sets the process-wide factory. Fails with the given factory when one
    /// is already in place.
    pub fn install(factory: OasFactory) -> Result<(), OasFactory> {
        GLOBAL_FACTORY.set(factory)
    }

    /// The process-wide factory, discovered on first use unless installed.
    pub fn global() -> &'static OasFactory {
        GLOBAL_FACTORY.get_or_init(OasFactory::discover)
    }

    pub fn resolver(&self) -> &Arc<dyn OasFactoryResolver> {
        &self.resolver
    }

    /// A new, empty instance of `T`.
    pub fn create_object<T: Constructible>(&self) -> Result<T, FactoryError> {
        let created = self.resolver.create_object(T::KIND)?;
        match created.downcast::<T>() {
            Ok(instance) => Ok(*instance),
            Err(_) => Err(FactoryError::type_mismatch(
                &T::KIND,
                "an instance of another type",
            )),
        }
    }

    /// A new instance of the type called `name` (`"Schema"`, `"APIResponse"`).
    pub fn create_by_name(&self, name: &str) -> Result<Box<dyn Any + Send>, FactoryError> {
        let kind = ModelKind::from_str(name)?;
        self.resolver.create_object(kind)
    }
}

impl Default for OasFactory {
    fn default() -> Self {
        OasFactory::new(Arc::new(DefaultFactoryResolver::new()))
    }
}

impl std::fmt::Debug for OasFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OasFactory").finish_non_exhaustive()
    }
}

macro_rules! create_methods {
    ($($ty:ident => $method:ident),* $(,)?) => {
        impl OasFactory {
            $(
                pub fn $method(&self) -> Result<$ty, FactoryError> {
                    self.create_object::<$ty>()
                }
            )*
        }
    };
}

create_methods! {
    Components => create_components,
    ExternalDocumentation => create_external_documentation,
    OpenApi => create_open_api,
    Operation => create_operation,
    PathItem => create_path_item,
    Paths => create_paths,
    Callback => create_callback,
    Example => create_example,
    Header => create_header,
    Info => create_info,
    Contact => create_contact,
    License => create_license,
    Link => create_link,
    Content => create_content,
    Discriminator => create_discriminator,
    Encoding => create_encoding,
    MediaType => create_media_type,
    Schema => create_schema,
    Xml => create_xml,
    Parameter => create_parameter,
    RequestBody => create_request_body,
    ApiResponse => create_api_response,
    ApiResponses => create_api_responses,
    OAuthFlow => create_oauth_flow,
    OAuthFlows => create_oauth_flows,
    Scopes => create_scopes,
    SecurityRequirement => create_security_requirement,
    SecurityScheme => create_security_scheme,
    Server => create_server,
    ServerVariable => create_server_variable,
    ServerVariables => create_server_variables,
    Tag => create_tag,
}
