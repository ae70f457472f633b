//! `mp.openapi.*` configuration.
//!
//! Properties are plain string pairs. They can come from any iterator, from
//! the process environment (`MP_OPENAPI_FILTER` for `mp.openapi.filter`) or
//! from a YAML file, flat or nested:
//!
//! ```yaml
//! mp.openapi.filter: com.example.AuditFilter
//! mp:
//!   openapi:
//!     servers: https://api.example.com, https://staging.example.com
//! ```

use crate::error::ConfigError;
use crate::model::OpenApi;
use crate::types::RefOr;
use indexmap::IndexMap;
use serde_yaml::Value as YamlValue;
use std::path::Path;

pub const FILTER: &str = "mp.openapi.filter";
pub const MODEL_READER: &str = "mp.openapi.model.reader";
pub const SCAN_DISABLE: &str = "mp.openapi.scan.disable";
pub const SCAN_PACKAGES: &str = "mp.openapi.scan.packages";
pub const SCAN_CLASSES: &str = "mp.openapi.scan.classes";
pub const SCAN_EXCLUDE_PACKAGES: &str = "mp.openapi.scan.exclude.packages";
pub const SCAN_EXCLUDE_CLASSES: &str = "mp.openapi.scan.exclude.classes";
pub const SERVERS: &str = "mp.openapi.servers";
pub const SERVERS_PATH_PREFIX: &str = "mp.openapi.servers.path.";
pub const SERVERS_OPERATION_PREFIX: &str = "mp.openapi.servers.operation.";
pub const EXTENSIONS_PREFIX: &str = "mp.openapi.extensions.";

const KNOWN_KEYS: [&str; 8] = [
    FILTER,
    MODEL_READER,
    SCAN_DISABLE,
    SCAN_PACKAGES,
    SCAN_CLASSES,
    SCAN_EXCLUDE_PACKAGES,
    SCAN_EXCLUDE_CLASSES,
    SERVERS,
];

const LIST_SEPARATOR: char = ',';

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OasConfig {
    properties: IndexMap<String, String>,
}

impl OasConfig {
    pub fn new() -> Self {
        OasConfig::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        OasConfig {
            properties: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Reads the known keys from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_vars(std::env::vars())
    }

    /// Reads the known keys from environment-style pairs: upper case with
    /// `_` for every `.`.
    pub fn from_env_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = OasConfig::new();
        for (name, value) in vars {
            if let Some(key) = KNOWN_KEYS.iter().find(|key| env_name(key) == name) {
                log::debug!("Configuration {} taken from {}", key, name);
                config.set(*key, value);
            }
        }
        config
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let document: YamlValue =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::parse("yaml", &e))?;
        let mut config = OasConfig::new();
        match document {
            YamlValue::Null => {}
            YamlValue::Mapping(_) => flatten_yaml(&mut config, None, &document)?,
            _ => return Err(ConfigError::parse("yaml", "top level must be a mapping")),
        }
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(&path.display(), &e))?;
        Self::from_yaml_str(&content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Copies every property of `other` over this one.
    pub fn merge(&mut self, other: OasConfig) {
        self.properties.extend(other.properties);
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Name of the [`OasFilter`](crate::filter::OasFilter) to run.
    pub fn filter(&self) -> Option<&str> {
        self.get(FILTER)
    }

    pub fn model_reader(&self) -> Option<&str> {
        self.get(MODEL_READER)
    }

    pub fn scan_disable(&self) -> Result<bool, ConfigError> {
        match self.get(SCAN_DISABLE) {
            None => Ok(false),
            Some(value) if value.eq_ignore_ascii_case("true") => Ok(true),
            Some(value) if value.eq_ignore_ascii_case("false") => Ok(false),
            Some(value) => Err(ConfigError::invalid_value(SCAN_DISABLE, value)),
        }
    }

    pub fn scan_packages(&self) -> Vec<&str> {
        self.list(SCAN_PACKAGES)
    }

    pub fn scan_classes(&self) -> Vec<&str> {
        self.list(SCAN_CLASSES)
    }

    pub fn scan_exclude_packages(&self) -> Vec<&str> {
        self.list(SCAN_EXCLUDE_PACKAGES)
    }

    pub fn scan_exclude_classes(&self) -> Vec<&str> {
        self.list(SCAN_EXCLUDE_CLASSES)
    }

    /// Whether an annotation scanner should look at the type `qualified_name`.
    ///
    /// Explicit class entries beat package entries, exclusions beat
    /// inclusions at the same level, and an empty inclusion list includes
    /// everything.
    pub fn should_scan(&self, qualified_name: &str) -> Result<bool, ConfigError> {
        if self.scan_disable()? {
            return Ok(false);
        }
        if self.scan_exclude_classes().contains(&qualified_name) {
            return Ok(false);
        }
        if self.scan_classes().contains(&qualified_name) {
            return Ok(true);
        }
        let package = qualified_name
            .rsplit_once('.')
            .map(|(package, _)| package)
            .unwrap_or("");
        let in_package = |candidate: &&str| {
            package == *candidate || package.starts_with(&format!("{}.", candidate))
        };
        if self.scan_exclude_packages().iter().any(in_package) {
            return Ok(false);
        }
        let packages = self.scan_packages();
        let classes = self.scan_classes();
        if packages.is_empty() && classes.is_empty() {
            return Ok(true);
        }
        Ok(packages.iter().any(in_package))
    }

    /// Servers replacing the document-level `servers`.
    pub fn servers(&self) -> Vec<&str> {
        self.list(SERVERS)
    }

    /// Servers for every operation under `path`.
    pub fn path_servers(&self, path: &str) -> Vec<&str> {
        self.list(&format!("{}{}", SERVERS_PATH_PREFIX, path))
    }

    /// Servers for the operation with `operation_id`.
    pub fn operation_servers(&self, operation_id: &str) -> Vec<&str> {
        self.list(&format!("{}{}", SERVERS_OPERATION_PREFIX, operation_id))
    }

    /// Vendor properties under `mp.openapi.extensions.`, keyed by the rest
    /// of their name.
    pub fn extensions(&self) -> IndexMap<&str, &str> {
        self.properties
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(EXTENSIONS_PREFIX)
                    .map(|name| (name, value.as_str()))
            })
            .collect()
    }

    /// Replaces the servers of the document, of each configured path and of
    /// each configured operation. Operation servers win over path servers,
    /// which win over document servers, as the output format defines.
    pub fn apply_servers(&self, open_api: &mut OpenApi) {
        let servers = self.servers();
        if !servers.is_empty() {
            log::debug!("Replacing document servers with {:?}", servers);
            open_api.set_servers(Some(to_servers(&servers)));
        }
        let Some(paths) = open_api.paths_mut() else {
            return;
        };
        for (path, item) in paths.path_items.iter_mut() {
            let RefOr::Item(item) = item else {
                continue;
            };
            let servers = self.path_servers(path);
            if !servers.is_empty() {
                log::debug!("Replacing servers of {} with {:?}", path, servers);
                item.set_servers(Some(to_servers(&servers)));
            }
            for (_, slot) in item.operation_slots_mut() {
                let Some(operation) = slot.as_mut() else {
                    continue;
                };
                let Some(operation_id) = operation.operation_id() else {
                    continue;
                };
                let servers = self.operation_servers(operation_id);
                if !servers.is_empty() {
                    log::debug!("Replacing servers of {} with {:?}", operation_id, servers);
                    operation.set_servers(Some(to_servers(&servers)));
                }
            }
        }
    }

    fn list(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|value| {
                value
                    .split(LIST_SEPARATOR)
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn env_name(key: &str) -> String {
    key.to_ascii_uppercase().replace('.', "_")
}

fn to_servers(urls: &[&str]) -> Vec<crate::model::Server> {
    urls.iter().map(|url| crate::model::Server::new(*url)).collect()
}

fn yaml_scalar(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(value) => Some(value.clone()),
        YamlValue::Bool(value) => Some(value.to_string()),
        YamlValue::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

fn flatten_yaml(
    config: &mut OasConfig,
    prefix: Option<&str>,
    value: &YamlValue,
) -> Result<(), ConfigError> {
    match value {
        YamlValue::Mapping(mapping) => {
            for (key, value) in mapping {
                let key = yaml_scalar(key)
                    .ok_or_else(|| ConfigError::parse("yaml", "keys must be scalars"))?;
                let key = match prefix {
                    Some(prefix) => format!("{}.{}", prefix, key),
                    None => key,
                };
                flatten_yaml(config, Some(&key), value)?;
            }
        }
        YamlValue::Sequence(entries) => {
            let key = prefix.unwrap_or_default();
            let values = entries
                .iter()
                .map(|entry| yaml_scalar(entry).ok_or_else(|| ConfigError::invalid_value(key, "nested list")))
                .collect::<Result<Vec<_>, _>>()?;
            config.set(key, values.join(","));
        }
        YamlValue::Null => {}
        scalar => {
            let key = prefix.unwrap_or_default();
            let value = yaml_scalar(scalar).ok_or_else(|| ConfigError::invalid_value(key, "tagged value"))?;
            config.set(key, value);
        }
    }
    Ok(())
}
