pub mod json_path;
pub mod version;

use crate::types::json_path::JsonPath;
use crate::{EXTENSION_PREFIX, PATH_SEPARATOR};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    Header,
    Query,
    Cookie,
    Path,
}

impl Display for ParameterIn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = String::from(match self {
            ParameterIn::Header => "header",
            ParameterIn::Query => "query",
            ParameterIn::Cookie => "cookie",
            ParameterIn::Path => "path",
        });
        write!(f, "{}", str)
    }
}

impl FromStr for ParameterIn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "header" => Ok(ParameterIn::Header),
            "query" => Ok(ParameterIn::Query),
            "cookie" => Ok(ParameterIn::Cookie),
            "path" => Ok(ParameterIn::Path),
            other => Err(format!("unknown parameter location '{}'", other)),
        }
    }
}

/// Vendor extensions of one model element.
///
/// Keys are stored as given; only `x-` keys are written out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    pub fn new() -> Self {
        Extensions(IndexMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies every entry of `other` over this map, replacing equal keys.
    pub fn extend(&mut self, other: Extensions) {
        self.0.extend(other.0);
    }
}

impl<K, V> FromIterator<(K, V)> for Extensions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Extensions(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for Extensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        self.serialize_entries(&mut map)?;
        map.end()
    }
}

impl Extensions {
    /// Writes the `x-` entries into a map that is already being serialized.
    pub(crate) fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        for (name, value) in &self.0 {
            if name.starts_with(EXTENSION_PREFIX) {
                map.serialize_entry(name, value)?;
            } else {
                log::debug!("Skipping extension '{}' without the x- prefix", name);
            }
        }
        Ok(())
    }
}

/// Implemented by entities that may live in a `components` collection and
/// therefore be the target of a `$ref`.
pub trait Referenceable {
    /// Name of the `components` collection holding this entity.
    const COMPONENT: &'static str;
}

/// A Reference Object: a `$ref` plus the `summary`/`description` that 3.1
/// allows next to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Reference {
    pub fn new(reference: impl Into<String>) -> Self {
        Reference {
            reference: reference.into(),
            summary: None,
            description: None,
        }
    }

    /// Builds a reference to `#/components/<collection>/<name>` for `T`.
    pub fn component<T: Referenceable>(name: &str) -> Self {
        Reference::new(JsonPath::component(T::COMPONENT, name).to_fragment())
    }

    /// Expands a short name into a component reference, keeping anything
    /// that already looks like a pointer or URI untouched.
    pub fn expand<T: Referenceable>(reference: &str) -> Self {
        if reference.contains(PATH_SEPARATOR) {
            Reference::new(reference)
        } else {
            Reference::component::<T>(reference)
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = reference.into();
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn set_summary(&mut self, summary: Option<String>) {
        self.summary = summary;
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.set_summary(Some(summary.into()));
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(Some(description.into()));
        self
    }

    /// The component name, when this reference points into the local
    /// `components` collection of `T`.
    pub fn component_name<T: Referenceable>(&self) -> Option<&str> {
        let prefix = JsonPath::component(T::COMPONENT, "").to_fragment();
        self.reference
            .strip_prefix(prefix.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Either a reference to a reusable definition or the definition itself.
///
/// The two forms are exclusive; replacing one with the other drops the
/// previous content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    Ref(Reference),
    Item(T),
}

impl<T> RefOr<T> {
    pub fn is_ref(&self) -> bool {
        matches!(self, RefOr::Ref(_))
    }

    pub fn reference(&self) -> Option<&Reference> {
        match self {
            RefOr::Ref(reference) => Some(reference),
            RefOr::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&T> {
        match self {
            RefOr::Ref(_) => None,
            RefOr::Item(item) => Some(item),
        }
    }

    pub fn as_item_mut(&mut self) -> Option<&mut T> {
        match self {
            RefOr::Ref(_) => None,
            RefOr::Item(item) => Some(item),
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            RefOr::Ref(_) => None,
            RefOr::Item(item) => Some(item),
        }
    }

    /// Replaces whatever this holds with a reference.
    pub fn set_reference(&mut self, reference: Reference) {
        *self = RefOr::Ref(reference);
    }
}

impl<T: Referenceable> RefOr<T> {
    /// A reference built from a short component name or a full `$ref`.
    pub fn component_ref(reference: &str) -> Self {
        RefOr::Ref(Reference::expand::<T>(reference))
    }
}

impl<T> From<T> for RefOr<T> {
    fn from(item: T) -> Self {
        RefOr::Item(item)
    }
}
