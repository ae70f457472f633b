use crate::types::version::VersionError;
use std::fmt::{Display, Formatter};

/// Errors raised by model operations that can be asked for something the
/// document format cannot hold.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    UnsupportedMethod(String),
}

impl ModelError {
    pub(crate) fn unsupported_method<T>(method: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        ModelError::UnsupportedMethod(method.to_string())
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::UnsupportedMethod(method) => {
                write!(f, "Method {} has no slot in a path item", method)
            }
        }
    }
}

impl std::error::Error for ModelError {}

#[derive(Debug, Clone, PartialEq)]
pub enum FactoryError {
    /// No type name was given.
    MissingType,
    /// The name is not one of the constructible model types.
    UnknownType(String),
    /// The resolver has no constructor for a known type.
    NoConstructor(String),
    /// The resolver produced a value of a different type than requested.
    TypeMismatch { expected: String, found: String },
}

impl FactoryError {
    pub(crate) fn unknown_type<T>(name: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        FactoryError::UnknownType(name.to_string())
    }

    pub(crate) fn no_constructor<T>(kind: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        FactoryError::NoConstructor(kind.to_string())
    }

    pub(crate) fn type_mismatch<E, F>(expected: &E, found: &F) -> Self
    where
        E: ToString + ?Sized,
        F: ToString + ?Sized,
    {
        FactoryError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl Display for FactoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryError::MissingType => write!(f, "No model type given"),
            FactoryError::UnknownType(name) => {
                write!(f, "{} is not a constructible model type", name)
            }
            FactoryError::NoConstructor(kind) => {
                write!(f, "No constructor registered for {}", kind)
            }
            FactoryError::TypeMismatch { expected, found } => {
                write!(f, "Expected an instance of {} but the resolver produced {}", expected, found)
            }
        }
    }
}

impl std::error::Error for FactoryError {}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    UnknownFilter(String),
}

impl FilterError {
    pub(crate) fn unknown_filter<T>(name: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        FilterError::UnknownFilter(name.to_string())
    }
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::UnknownFilter(name) => write!(f, "No filter registered as {}", name),
        }
    }
}

impl std::error::Error for FilterError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(String, String),
    /// The configuration file is not a flat map of scalars.
    Parse(String, String),
    /// A known key holds a value of the wrong shape.
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    pub(crate) fn io<P, E>(path: &P, error: &E) -> Self
    where
        P: ToString + ?Sized,
        E: ToString + ?Sized,
    {
        ConfigError::Io(path.to_string(), error.to_string())
    }

    pub(crate) fn parse<P, E>(source: &P, error: &E) -> Self
    where
        P: ToString + ?Sized,
        E: ToString + ?Sized,
    {
        ConfigError::Parse(source.to_string(), error.to_string())
    }

    pub(crate) fn invalid_value<K, V>(key: &K, value: &V) -> Self
    where
        K: ToString + ?Sized,
        V: ToString + ?Sized,
    {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, error) => {
                write!(f, "Unable to read configuration {}: {}", path, error)
            }
            ConfigError::Parse(source, error) => {
                write!(f, "Unable to parse configuration {}: {}", source, error)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub enum DocumentError {
    UnsupportedVersion(VersionError),
    Serialization(String),
}

impl DocumentError {
    pub(crate) fn serialization<T>(error: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        DocumentError::Serialization(error.to_string())
    }
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::UnsupportedVersion(error) => {
                write!(f, "Document cannot be written: {}", error)
            }
            DocumentError::Serialization(error) => write!(f, "Serialization failed: {}", error),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<VersionError> for DocumentError {
    fn from(error: VersionError) -> Self {
        DocumentError::UnsupportedVersion(error)
    }
}

/// Any error this crate returns.
#[derive(Debug)]
pub enum OasError {
    Model(ModelError),
    Factory(FactoryError),
    Filter(FilterError),
    Config(ConfigError),
    Document(DocumentError),
    Version(VersionError),
}

impl Display for OasError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OasError::Model(error) => write!(f, "{}", error),
            OasError::Factory(error) => write!(f, "{}", error),
            OasError::Filter(error) => write!(f, "{}", error),
            OasError::Config(error) => write!(f, "{}", error),
            OasError::Document(error) => write!(f, "{}", error),
            OasError::Version(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for OasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OasError::Model(error) => Some(error),
            OasError::Factory(error) => Some(error),
            OasError::Filter(error) => Some(error),
            OasError::Config(error) => Some(error),
            OasError::Document(error) => Some(error),
            OasError::Version(error) => Some(error),
        }
    }
}

impl From<ModelError> for OasError {
    fn from(error: ModelError) -> Self {
        OasError::Model(error)
    }
}

impl From<FactoryError> for OasError {
    fn from(error: FactoryError) -> Self {
        OasError::Factory(error)
    }
}

impl From<FilterError> for OasError {
    fn from(error: FilterError) -> Self {
        OasError::Filter(error)
    }
}

impl From<ConfigError> for OasError {
    fn from(error: ConfigError) -> Self {
        OasError::Config(error)
    }
}

impl From<DocumentError> for OasError {
    fn from(error: DocumentError) -> Self {
        OasError::Document(error)
    }
}

impl From<VersionError> for OasError {
    fn from(error: VersionError) -> Self {
        OasError::Version(error)
    }
}
