//! Evaluation of security requirements against the credentials a request
//! presents.
//!
//! A [`SecurityRequirement`] is a conjunction: every scheme it names must be
//! presented with every listed scope. A list of requirements is a
//! disjunction: any one satisfied requirement is enough. An empty list, like
//! an empty requirement, asks for no authentication at all.

use crate::model::{OpenApi, Operation, SecurityRequirement};
use std::collections::{HashMap, HashSet};

/// Security schemes a request presents, each with the scopes it grants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    schemes: HashMap<String, HashSet<String>>,
}

impl Credentials {
    pub fn new() -> Self {
        Credentials::default()
    }

    /// Adds a scheme, keeping any scopes it was already granted.
    pub fn add_scheme(&mut self, name: impl Into<String>) -> &mut Self {
        self.schemes.entry(name.into()).or_default();
        self
    }

    pub fn with_scheme(mut self, name: impl Into<String>) -> Self {
        self.add_scheme(name);
        self
    }

    pub fn with_scopes<I, S>(mut self, name: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes
            .entry(name.into())
            .or_default()
            .extend(scopes.into_iter().map(Into::into));
        self
    }

    pub fn has_scheme(&self, name: &str) -> bool {
        self.schemes.contains_key(name)
    }

    pub fn scopes(&self, name: &str) -> Option<&HashSet<String>> {
        self.schemes.get(name)
    }

    pub fn grants(&self, name: &str, scope: &str) -> bool {
        self.schemes
            .get(name)
            .is_some_and(|scopes| scopes.contains(scope))
    }
}

impl SecurityRequirement {
    /// Every named scheme is presented with all of its required scopes.
    pub fn is_satisfied_by(&self, credentials: &Credentials) -> bool {
        self.schemes().iter().all(|(name, scopes)| {
            credentials.has_scheme(name)
                && scopes.iter().all(|scope| credentials.grants(name, scope))
        })
    }
}

/// Whether any of `requirements` is satisfied.
pub fn requirements_satisfied(
    requirements: &[SecurityRequirement],
    credentials: &Credentials,
) -> bool {
    if requirements.is_empty() {
        log::debug!("No security requirements, access allowed");
        return true;
    }
    match requirements
        .iter()
        .position(|requirement| requirement.is_satisfied_by(credentials))
    {
        Some(index) => {
            log::debug!("Security requirement {} satisfied", index);
            true
        }
        None => {
            log::debug!("None of {} security requirements satisfied", requirements.len());
            false
        }
    }
}

/// The requirements that apply to `operation`.
///
/// Operation-level `security` replaces the document-level list whenever it
/// is declared, even when declared empty; only an undeclared list falls
/// back to the document.
pub fn effective_security<'a>(
    open_api: &'a OpenApi,
    operation: &'a Operation,
) -> &'a [SecurityRequirement] {
    operation
        .security()
        .or_else(|| open_api.security())
        .unwrap_or_default()
}

pub fn operation_satisfied(
    open_api: &OpenApi,
    operation: &Operation,
    credentials: &Credentials,
) -> bool {
    requirements_satisfied(effective_security(open_api, operation), credentials)
}

/// Scheme names used by a requirement anywhere in the document that have no
/// entry in `components.securitySchemes`.
pub fn undefined_schemes(open_api: &OpenApi) -> Vec<String> {
    let declared = open_api
        .components()
        .and_then(|components| components.security_schemes());
    let is_declared = |name: &str| declared.is_some_and(|schemes| schemes.contains_key(name));

    let mut requirements: Vec<&SecurityRequirement> =
        open_api.security().unwrap_or_default().iter().collect();
    if let Some(paths) = open_api.paths() {
        for item in paths.path_items().values().filter_map(|item| item.as_item()) {
            for (_, operation) in item.operations() {
                requirements.extend(operation.security().unwrap_or_default());
            }
        }
    }

    let mut missing: Vec<String> = Vec::new();
    for requirement in requirements {
        for name in requirement.schemes().keys() {
            if !is_declared(name.as_str()) && !missing.contains(name) {
                missing.push(name.clone());
            }
        }
    }
    missing
}
