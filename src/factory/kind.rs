use crate::error::FactoryError;
use crate::model::*;
use std::any::Any;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

macro_rules! model_kinds {
    ($($kind:ident => $name:literal $(| $alias:literal)*),* $(,)?) => {
        /// Every model type the factory can construct.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ModelKind {
            $($kind,)*
        }

        impl ModelKind {
            pub const ALL: &'static [ModelKind] = &[$(ModelKind::$kind,)*];

            /// The interface name used in configuration and error messages.
            pub fn name(&self) -> &'static str {
                match self {
                    $(ModelKind::$kind => $name,)*
                }
            }
        }

        impl FromStr for ModelKind {
            type Err = FactoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let name = s.trim();
                // Qualified names resolve by their last segment.
                let name = name.rsplit(['.', ':']).next().unwrap_or(name);
                match name {
                    "" => Err(FactoryError::MissingType),
                    $($name $(| $alias)* | stringify!($kind) => Ok(ModelKind::$kind),)*
                    _ => Err(FactoryError::unknown_type(s)),
                }
            }
        }

        $(
            impl Constructible for $kind {
                const KIND: ModelKind = ModelKind::$kind;
            }
        )*
    };
}

model_kinds! {
    Components => "Components",
    ExternalDocumentation => "ExternalDocumentation",
    OpenApi => "OpenAPI",
    Operation => "Operation",
    PathItem => "PathItem",
    Paths => "Paths",
    Callback => "Callback",
    Example => "Example",
    Header => "Header",
    Info => "Info",
    Contact => "Contact",
    License => "License",
    Link => "Link",
    Content => "Content",
    Discriminator => "Discriminator",
    Encoding => "Encoding",
    MediaType => "MediaType",
    Schema => "Schema",
    Xml => "XML",
    Parameter => "Parameter",
    RequestBody => "RequestBody",
    ApiResponse => "APIResponse",
    ApiResponses => "APIResponses",
    OAuthFlow => "OAuthFlow",
    OAuthFlows => "OAuthFlows",
    Scopes => "Scopes",
    SecurityRequirement => "SecurityRequirement",
    SecurityScheme => "SecurityScheme",
    Server => "Server",
    ServerVariable => "ServerVariable",
    ServerVariables => "ServerVariables",
    Tag => "Tag",
}

impl Display for ModelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A model type the factory can create. Fresh instances come from `Default`.
pub trait Constructible: Any + Send + Default {
    const KIND: ModelKind;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(ModelKind::from_str("Schema").unwrap(), ModelKind::Schema);
        assert_eq!(ModelKind::from_str("APIResponse").unwrap(), ModelKind::ApiResponse);
        assert_eq!(ModelKind::from_str("ApiResponse").unwrap(), ModelKind::ApiResponse);
        assert_eq!(
            ModelKind::from_str("org.eclipse.microprofile.openapi.models.media.XML").unwrap(),
            ModelKind::Xml
        );
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(ModelKind::from_str(""), Err(FactoryError::MissingType));
        assert_eq!(ModelKind::from_str("  "), Err(FactoryError::MissingType));
        assert_eq!(
            ModelKind::from_str("Widget"),
            Err(FactoryError::UnknownType("Widget".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for kind in ModelKind::ALL {
            assert_eq!(ModelKind::from_str(kind.name()).unwrap(), *kind);
        }
        assert_eq!(ModelKind::ALL.len(), 32);
    }
}
