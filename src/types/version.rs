use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The OpenAPI release line a document declares in its `openapi` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenApiVersion {
    V30x,
    V31x,
}

impl FromStr for OpenApiVersion {
    type Err = VersionError;

    /// Reads the major and minor segments; the patch segment is not checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.trim().split('.');
        let mut next = || segments.next().and_then(|segment| segment.parse::<u32>().ok());
        match (next(), next()) {
            (Some(3), Some(0)) => Ok(OpenApiVersion::V30x),
            (Some(3), Some(1)) => Ok(OpenApiVersion::V31x),
            _ => Err(VersionError::unsupported_version(s)),
        }
    }
}

impl OpenApiVersion {
    pub fn dialect(&self) -> SchemaDialect {
        match self {
            OpenApiVersion::V30x => SchemaDialect::OpenApi30,
            OpenApiVersion::V31x => SchemaDialect::Draft202012,
        }
    }
}

/// How schema keywords whose shape changed between 3.0 and 3.1 are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaDialect {
    /// Boolean `exclusiveMinimum`/`exclusiveMaximum`, `nullable`, single `type`.
    OpenApi30,
    /// Numeric exclusive bounds and `type` arrays (JSON Schema 2020-12).
    #[default]
    Draft202012,
}

#[derive(Debug)]
pub enum VersionError {
    UnsupportedVersion(String),
}

impl VersionError {
    pub(crate) fn unsupported_version<T>(version: &T) -> Self
    where
        T: ToString + ?Sized,
    {
        VersionError::UnsupportedVersion(version.to_string())
    }
}

impl Display for VersionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionError::UnsupportedVersion(version) => {
                write!(f, "Unsupported version: {}", version)
            }
        }
    }
}

impl std::error::Error for VersionError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_versions() {
        assert_eq!(
            OpenApiVersion::from_str("3.0.3").unwrap(),
            OpenApiVersion::V30x
        );
        assert_eq!(
            OpenApiVersion::from_str("3.1.0").unwrap(),
            OpenApiVersion::V31x
        );
        assert!(OpenApiVersion::from_str("2.0").is_err());
    }

    #[test]
    fn test_minor_compared_as_number() {
        assert!(OpenApiVersion::from_str("3.10.0").is_err());
        assert!(OpenApiVersion::from_str("3.01x").is_err());
        assert!(OpenApiVersion::from_str("4.1.0").is_err());
        assert_eq!(
            OpenApiVersion::from_str("3.1.1").unwrap(),
            OpenApiVersion::V31x
        );
    }

    #[test]
    fn test_dialects() {
        assert_eq!(OpenApiVersion::V30x.dialect(), SchemaDialect::OpenApi30);
        assert_eq!(OpenApiVersion::V31x.dialect(), SchemaDialect::Draft202012);
    }
}
