//! The OpenAPI document model.
//!
//! Every property is reachable through three methods generated by
//! `accessors!`: a getter named after the field, a `set_` method that is the
//! single place the field is written, and a `with_` method that calls the
//! setter and returns `self` for chained construction.

use crate::types::Extensions;
use serde_json::Value;

macro_rules! accessors {
    (@ str $field:ident : $fty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            pub fn [<set_ $field>](&mut self, $field: Option<String>) {
                self.$field = $field;
            }

            pub fn [<with_ $field>](mut self, $field: impl Into<String>) -> Self {
                self.[<set_ $field>](Some($field.into()));
                self
            }
        }
    };

    (@ copy $field:ident : $fty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<$fty> {
                self.$field
            }

            pub fn [<set_ $field>](&mut self, $field: Option<$fty>) {
                self.$field = $field;
            }

            pub fn [<with_ $field>](mut self, $field: $fty) -> Self {
                self.[<set_ $field>](Some($field));
                self
            }
        }
    };

    (@ opt $field:ident : $fty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<&$fty> {
                self.$field.as_ref()
            }

            pub fn [<$field _mut>](&mut self) -> Option<&mut $fty> {
                self.$field.as_mut()
            }

            pub fn [<set_ $field>](&mut self, $field: Option<$fty>) {
                self.$field = $field;
            }

            pub fn [<with_ $field>](mut self, $field: impl Into<$fty>) -> Self {
                self.[<set_ $field>](Some($field.into()));
                self
            }
        }
    };

    (@ boxed $field:ident : $fty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<&$fty> {
                self.$field.as_deref()
            }

            pub fn [<$field _mut>](&mut self) -> Option<&mut $fty> {
                self.$field.as_deref_mut()
            }

            pub fn [<set_ $field>](&mut self, $field: Option<$fty>) {
                self.$field = $field.map(Box::new);
            }

            pub fn [<with_ $field>](mut self, $field: impl Into<$fty>) -> Self {
                self.[<set_ $field>](Some($field.into()));
                self
            }
        }
    };

    (@ list $field:ident / $single:ident : $fty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<&[$fty]> {
                self.$field.as_deref()
            }

            pub fn [<$field _mut>](&mut self) -> Option<&mut Vec<$fty>> {
                self.$field.as_mut()
            }

            pub fn [<set_ $field>](&mut self, $field: Option<Vec<$fty>>) {
                self.$field = $field;
            }

            pub fn [<with_ $field>](mut self, $field: Vec<$fty>) -> Self {
                self.[<set_ $field>](Some($field));
                self
            }

            pub fn [<add_ $single>](&mut self, $single: impl Into<$fty>) -> &mut Self {
                self.$field.get_or_insert_with(Vec::new).push($single.into());
                self
            }

            /// Removes the first entry equal to the argument.
            pub fn [<remove_ $single>](&mut self, $single: &$fty) {
                if let Some(entries) = self.$field.as_mut() {
                    if let Some(position) = entries.iter().position(|entry| entry == $single) {
                        entries.remove(position);
                    }
                }
            }
        }
    };

    (@ map $field:ident / $single:ident : $fty:ty) => {
        paste::paste! {
            pub fn $field(&self) -> Option<&indexmap::IndexMap<String, $fty>> {
                self.$field.as_ref()
            }

            pub fn [<$field _mut>](&mut self) -> Option<&mut indexmap::IndexMap<String, $fty>> {
                self.$field.as_mut()
            }

            pub fn [<set_ $field>](&mut self, $field: Option<indexmap::IndexMap<String, $fty>>) {
                self.$field = $field;
            }

            pub fn [<with_ $field>](mut self, $field: indexmap::IndexMap<String, $fty>) -> Self {
                self.[<set_ $field>](Some($field));
                self
            }

            pub fn [<add_ $single>](&mut self, name: impl Into<String>, $single: impl Into<$fty>) -> &mut Self {
                self.$field
                    .get_or_insert_with(indexmap::IndexMap::new)
                    .insert(name.into(), $single.into());
                self
            }

            pub fn [<remove_ $single>](&mut self, name: &str) -> Option<$fty> {
                self.$field.as_mut().and_then(|entries| entries.shift_remove(name))
            }
        }
    };

    ($ty:ty { $($kind:ident $field:ident $(/ $single:ident)? : $fty:ty),* $(,)? }) => {
        impl $ty {
            $( accessors!(@ $kind $field $(/ $single)? : $fty); )*
        }
    };
}

/// Accessors for the map-shaped entities (`Paths`, `Callback`, `ApiResponses`,
/// `ServerVariables`, `Content`, `Scopes`, `SecurityRequirement`). Only named
/// operations are exposed; the map itself is never handed out mutably.
macro_rules! named_collection {
    ($ty:ty, $entries:ident / $single:ident : $vty:ty) => {
        paste::paste! {
            impl $ty {
                pub fn $entries(&self) -> &indexmap::IndexMap<String, $vty> {
                    &self.$entries
                }

                pub fn [<set_ $entries>](&mut self, $entries: indexmap::IndexMap<String, $vty>) {
                    self.$entries = $entries;
                }

                pub fn [<with_ $entries>](mut self, $entries: indexmap::IndexMap<String, $vty>) -> Self {
                    self.[<set_ $entries>]($entries);
                    self
                }

                pub fn [<add_ $single>](&mut self, name: impl Into<String>, $single: impl Into<$vty>) -> &mut Self {
                    self.$entries.insert(name.into(), $single.into());
                    self
                }

                pub fn [<with_ $single>](mut self, name: impl Into<String>, $single: impl Into<$vty>) -> Self {
                    self.[<add_ $single>](name, $single);
                    self
                }

                pub fn [<remove_ $single>](&mut self, name: &str) -> Option<$vty> {
                    self.$entries.shift_remove(name)
                }

                pub fn [<has_ $single>](&self, name: &str) -> bool {
                    self.$entries.contains_key(name)
                }

                pub fn $single(&self, name: &str) -> Option<&$vty> {
                    self.$entries.get(name)
                }

                pub fn [<$single _mut>](&mut self, name: &str) -> Option<&mut $vty> {
                    self.$entries.get_mut(name)
                }

                pub fn len(&self) -> usize {
                    self.$entries.len()
                }

                pub fn is_empty(&self) -> bool {
                    self.$entries.is_empty()
                }
            }
        }
    };
}

macro_rules! extensible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::model::Extensible for $ty {
                fn extensions(&self) -> &$crate::types::Extensions {
                    &self.extensions
                }

                fn extensions_mut(&mut self) -> &mut $crate::types::Extensions {
                    &mut self.extensions
                }
            }
        )*
    };
}

pub mod callback;
pub mod components;
pub mod example;
pub mod header;
pub mod info;
pub mod link;
pub mod media;
pub mod openapi;
pub mod operation;
pub mod parameter;
pub mod paths;
pub mod request_body;
pub mod responses;
pub mod schema;
pub mod security;
pub mod server;
pub mod tag;

pub use callback::Callback;
pub use components::Components;
pub use example::Example;
pub use header::{Header, HeaderStyle};
pub use info::{Contact, Info, License};
pub use link::Link;
pub use media::{Content, Encoding, EncodingStyle, MediaType};
pub use openapi::OpenApi;
pub use operation::Operation;
pub use parameter::{Parameter, ParameterStyle};
pub use paths::{PathItem, Paths};
pub use request_body::RequestBody;
pub use responses::{ApiResponse, ApiResponses};
pub use schema::{AdditionalProperties, Discriminator, Schema, SchemaType, Xml};
pub use security::{
    OAuthFlow, OAuthFlows, Scopes, SecurityIn, SecurityRequirement, SecurityScheme,
    SecuritySchemeType,
};
pub use server::{Server, ServerVariable, ServerVariables};
pub use tag::{ExternalDocumentation, Tag};

/// Model elements that carry vendor extensions.
pub trait Extensible {
    fn extensions(&self) -> &Extensions;

    fn extensions_mut(&mut self) -> &mut Extensions;

    fn set_extensions(&mut self, extensions: Extensions) {
        *self.extensions_mut() = extensions;
    }

    fn extension(&self, name: &str) -> Option<&Value> {
        self.extensions().get(name)
    }

    fn add_extension(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self
    where
        Self: Sized,
    {
        self.extensions_mut().insert(name, value);
        self
    }

    fn with_extension(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.add_extension(name, value);
        self
    }

    fn remove_extension(&mut self, name: &str) -> Option<Value> {
        self.extensions_mut().remove(name)
    }
}
