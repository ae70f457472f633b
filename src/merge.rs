//! Combining two descriptions of the same element, as happens when a static
//! document, a model reader and annotations all describe one API.
//!
//! `a.merge(b)` folds `b` into `a`:
//!
//! * a value set in `b` replaces the one in `a`, an unset value keeps `a`'s;
//! * maps merge entry by entry, entries present on both sides recursively;
//! * tags merge by `name`, servers by `url`, parameters by `name` and `in`;
//! * `security` is replaced whenever `b` declares it, even as an empty list;
//! * an incoming `$ref` replaces whatever was there.

use crate::model::*;
use crate::types::{Extensions, ParameterIn, RefOr};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::Value;

pub trait Merge {
    fn merge(&mut self, other: Self);
}

impl Merge for String {
    fn merge(&mut self, other: Self) {
        *self = other;
    }
}

impl Merge for Value {
    fn merge(&mut self, other: Self) {
        *self = other;
    }
}

/// Scope lists and `dependentRequired` entries accumulate.
impl Merge for Vec<String> {
    fn merge(&mut self, other: Self) {
        for entry in other {
            if !self.contains(&entry) {
                self.push(entry);
            }
        }
    }
}

impl Merge for Extensions {
    fn merge(&mut self, other: Self) {
        self.extend(other);
    }
}

impl<T: Merge> Merge for Box<T> {
    fn merge(&mut self, other: Self) {
        (**self).merge(*other);
    }
}

impl<T: Merge> Merge for Option<T> {
    fn merge(&mut self, other: Self) {
        let Some(theirs) = other else {
            return;
        };
        match self {
            Some(mine) => mine.merge(theirs),
            None => *self = Some(theirs),
        }
    }
}

impl<T: Merge> Merge for RefOr<T> {
    fn merge(&mut self, other: Self) {
        match other {
            RefOr::Item(theirs) => match self {
                RefOr::Item(mine) => mine.merge(theirs),
                RefOr::Ref(_) => *self = RefOr::Item(theirs),
            },
            reference => *self = reference,
        }
    }
}

impl<T: Merge> Merge for IndexMap<String, T> {
    fn merge(&mut self, other: Self) {
        for (name, theirs) in other {
            match self.entry(name) {
                Entry::Occupied(mut entry) => entry.get_mut().merge(theirs),
                Entry::Vacant(entry) => {
                    entry.insert(theirs);
                }
            }
        }
    }
}

/// Merges `theirs` into `mine`, pairing entries with equal keys and
/// appending the rest.
fn merge_keyed<T, K, F>(mine: &mut Option<Vec<T>>, theirs: Option<Vec<T>>, key: F)
where
    T: Merge,
    K: PartialEq,
    F: Fn(&T) -> Option<K>,
{
    let Some(theirs) = theirs else {
        return;
    };
    let entries = mine.get_or_insert_with(Vec::new);
    for incoming in theirs {
        let existing = key(&incoming).and_then(|incoming_key| {
            entries
                .iter()
                .position(|entry| key(entry).as_ref() == Some(&incoming_key))
        });
        match existing {
            Some(index) => entries[index].merge(incoming),
            None => entries.push(incoming),
        }
    }
}

fn merge_strings(mine: &mut Option<Vec<String>>, theirs: Option<Vec<String>>) {
    mine.merge(theirs);
}

fn replace<T>(mine: &mut Option<T>, theirs: Option<T>) {
    if theirs.is_some() {
        *mine = theirs;
    }
}

fn tag_key(tag: &Tag) -> Option<String> {
    tag.name.clone()
}

fn server_key(server: &Server) -> Option<String> {
    server.url.clone()
}

#[derive(PartialEq)]
enum ParameterKey {
    Inline(Option<String>, Option<ParameterIn>),
    Ref(String),
}

fn parameter_key(parameter: &RefOr<Parameter>) -> Option<ParameterKey> {
    match parameter {
        RefOr::Ref(reference) => Some(ParameterKey::Ref(reference.reference().to_string())),
        RefOr::Item(parameter) => Some(ParameterKey::Inline(
            parameter.name.clone(),
            parameter.location,
        )),
    }
}

macro_rules! merge_field {
    (value, $mine:expr, $theirs:expr) => {
        replace(&mut $mine, $theirs)
    };
    (nested, $mine:expr, $theirs:expr) => {
        $mine.merge($theirs)
    };
    (strings, $mine:expr, $theirs:expr) => {
        merge_strings(&mut $mine, $theirs)
    };
    (tags, $mine:expr, $theirs:expr) => {
        merge_keyed(&mut $mine, $theirs, tag_key)
    };
    (servers, $mine:expr, $theirs:expr) => {
        merge_keyed(&mut $mine, $theirs, server_key)
    };
    (parameters, $mine:expr, $theirs:expr) => {
        merge_keyed(&mut $mine, $theirs, parameter_key)
    };
}

macro_rules! impl_merge {
    ($ty:ty { $($kind:ident $field:ident),* $(,)? }) => {
        impl Merge for $ty {
            fn merge(&mut self, other: Self) {
                $( merge_field!($kind, self.$field, other.$field); )*
            }
        }
    };
}

impl_merge!(OpenApi {
    nested info,
    value json_schema_dialect,
    servers servers,
    nested paths,
    nested webhooks,
    nested components,
    value security,
    tags tags,
    nested external_docs,
    nested extensions,
});

impl_merge!(Info {
    value title,
    value summary,
    value description,
    value terms_of_service,
    nested contact,
    nested license,
    value version,
    nested extensions,
});

impl_merge!(Contact {
    value name,
    value url,
    value email,
    nested extensions,
});

impl_merge!(License {
    value name,
    value identifier,
    value url,
    nested extensions,
});

impl_merge!(ExternalDocumentation {
    value description,
    value url,
    nested extensions,
});

impl_merge!(Tag {
    value name,
    value description,
    nested external_docs,
    nested extensions,
});

impl_merge!(Server {
    value url,
    value description,
    nested variables,
    nested extensions,
});

impl_merge!(ServerVariable {
    value enumeration,
    value default_value,
    value description,
    nested extensions,
});

impl_merge!(ServerVariables {
    nested variables,
    nested extensions,
});

impl_merge!(Paths {
    nested path_items,
    nested extensions,
});

impl_merge!(PathItem {
    value summary,
    value description,
    nested get,
    nested put,
    nested post,
    nested delete,
    nested options,
    nested head,
    nested patch,
    nested trace,
    servers servers,
    parameters parameters,
    nested extensions,
});

impl_merge!(Operation {
    strings tags,
    value summary,
    value description,
    nested external_docs,
    value operation_id,
    parameters parameters,
    nested request_body,
    nested responses,
    nested callbacks,
    value deprecated,
    value security,
    servers servers,
    nested extensions,
});

impl_merge!(Parameter {
    value name,
    value location,
    value description,
    value required,
    value deprecated,
    value allow_empty_value,
    value style,
    value explode,
    value allow_reserved,
    nested schema,
    value example,
    nested examples,
    nested content,
    nested extensions,
});

impl_merge!(Header {
    value description,
    value required,
    value deprecated,
    value allow_empty_value,
    value style,
    value explode,
    nested schema,
    value example,
    nested examples,
    nested content,
    nested extensions,
});

impl_merge!(RequestBody {
    value description,
    nested content,
    value required,
    nested extensions,
});

impl_merge!(Content {
    nested media_types,
});

impl_merge!(MediaType {
    nested schema,
    value example,
    nested examples,
    nested encoding,
    nested extensions,
});

impl_merge!(Encoding {
    value content_type,
    nested headers,
    value style,
    value explode,
    value allow_reserved,
    nested extensions,
});

impl_merge!(ApiResponses {
    nested default_response,
    nested responses,
    nested extensions,
});

impl_merge!(ApiResponse {
    value description,
    nested headers,
    nested content,
    nested links,
    nested extensions,
});

impl_merge!(Callback {
    nested path_items,
    nested extensions,
});

impl_merge!(Link {
    value operation_ref,
    value operation_id,
    nested parameters,
    value request_body,
    value description,
    nested server,
    nested extensions,
});

impl_merge!(Example {
    value summary,
    value description,
    value value,
    value external_value,
    nested extensions,
});

impl_merge!(Components {
    nested schemas,
    nested responses,
    nested parameters,
    nested examples,
    nested request_bodies,
    nested headers,
    nested security_schemes,
    nested links,
    nested callbacks,
    nested path_items,
    nested extensions,
});

impl_merge!(SecurityRequirement {
    nested schemes,
});

impl_merge!(SecurityScheme {
    value scheme_type,
    value description,
    value name,
    value location,
    value scheme,
    value bearer_format,
    nested flows,
    value open_id_connect_url,
    nested extensions,
});

impl_merge!(OAuthFlows {
    nested implicit,
    nested password,
    nested client_credentials,
    nested authorization_code,
    nested extensions,
});

impl_merge!(OAuthFlow {
    value authorization_url,
    value token_url,
    value refresh_url,
    nested scopes,
    nested extensions,
});

impl_merge!(Scopes {
    nested scopes,
    nested extensions,
});

impl_merge!(Discriminator {
    value property_name,
    nested mapping,
    nested extensions,
});

impl_merge!(Xml {
    value name,
    value namespace,
    value prefix,
    value attribute,
    value wrapped,
    nested extensions,
});

impl_merge!(Schema {
    value schema_type,
    value format,
    value title,
    value description,
    value default_value,
    value enumeration,
    value const_value,
    value multiple_of,
    value minimum,
    value exclusive_minimum,
    value maximum,
    value exclusive_maximum,
    value max_length,
    value min_length,
    value pattern,
    value max_items,
    value min_items,
    value unique_items,
    value max_properties,
    value min_properties,
    strings required,
    nested properties,
    value additional_properties,
    nested items,
    value prefix_items,
    nested contains,
    value max_contains,
    value min_contains,
    value all_of,
    value any_of,
    value one_of,
    nested not,
    nested if_schema,
    nested then_schema,
    nested else_schema,
    nested dependent_schemas,
    nested dependent_required,
    nested pattern_properties,
    nested property_names,
    nested unevaluated_items,
    nested unevaluated_properties,
    value read_only,
    value write_only,
    value deprecated,
    value example,
    value examples,
    nested external_docs,
    nested discriminator,
    nested xml,
    value nullable,
    value comment,
    value content_encoding,
    value content_media_type,
    nested content_schema,
    value schema_uri,
    value id,
    value anchor,
    nested defs,
    nested extensions,
});
