use crate::declare::Declaration;
use crate::error::FactoryError;
use crate::factory::OasFactory;
use crate::model::SecurityRequirement;

/// One scheme with the scopes it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirementDecl {
    pub name: String,
    pub scopes: Vec<String>,
}

impl SecurityRequirementDecl {
    pub fn new(name: impl Into<String>) -> Self {
        SecurityRequirementDecl {
            name: name.into(),
            scopes: Vec::new(),
        }
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    fn add_to(&self, requirement: &mut SecurityRequirement) {
        match requirement.scheme_mut(&self.name) {
            Some(scopes) => {
                for scope in &self.scopes {
                    if !scopes.contains(scope) {
                        scopes.push(scope.clone());
                    }
                }
            }
            None => {
                requirement.add_scheme(self.name.clone(), self.scopes.clone());
            }
        }
    }
}

/// A bare list of requirements is a choice: each one becomes its own
/// alternative.
impl Declaration for [SecurityRequirementDecl] {
    type Output = Vec<SecurityRequirement>;

    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError> {
        self.iter()
            .map(|decl| {
                let mut requirement = factory.create_security_requirement()?;
                decl.add_to(&mut requirement);
                Ok::<_, FactoryError>(requirement)
            })
            .collect()
    }
}

/// Requirements that must all hold together. An empty set needs no
/// authentication at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirementsSet {
    pub requirements: Vec<SecurityRequirementDecl>,
}

impl SecurityRequirementsSet {
    pub fn new(requirements: Vec<SecurityRequirementDecl>) -> Self {
        SecurityRequirementsSet { requirements }
    }
}

impl Declaration for SecurityRequirementsSet {
    type Output = SecurityRequirement;

    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError> {
        let mut requirement = factory.create_security_requirement()?;
        for decl in &self.requirements {
            decl.add_to(&mut requirement);
        }
        Ok(requirement)
    }
}

/// Alternative sets; satisfying any one of them is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirementsSets {
    pub sets: Vec<SecurityRequirementsSet>,
}

impl SecurityRequirementsSets {
    pub fn new(sets: Vec<SecurityRequirementsSet>) -> Self {
        SecurityRequirementsSets { sets }
    }
}

impl Declaration for SecurityRequirementsSets {
    type Output = Vec<SecurityRequirement>;

    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError> {
        self.sets.iter().map(|set| set.build(factory)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::security::{Credentials, requirements_satisfied};
    use serde_json::json;

    fn sets() -> SecurityRequirementsSets {
        SecurityRequirementsSets::new(vec![
            SecurityRequirementsSet::new(vec![
                SecurityRequirementDecl::new("api_key"),
                SecurityRequirementDecl::new("oauth").with_scopes(["write"]),
            ]),
            SecurityRequirementsSet::new(vec![SecurityRequirementDecl::new("basic")]),
        ])
    }

    #[test]
    fn test_sets_become_alternatives() {
        let requirements = sets().build(&OasFactory::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&requirements).unwrap(),
            json!([{ "api_key": [], "oauth": ["write"] }, { "basic": [] }])
        );
    }

    #[test]
    fn test_set_semantics() {
        let requirements = sets().build(&OasFactory::default()).unwrap();
        let basic = Credentials::new().with_scheme("basic");
        let api_key = Credentials::new().with_scheme("api_key");
        let both = Credentials::new()
            .with_scheme("api_key")
            .with_scopes("oauth", ["write"]);
        assert!(requirements_satisfied(&requirements, &basic));
        assert!(!requirements_satisfied(&requirements, &api_key));
        assert!(requirements_satisfied(&requirements, &both));
    }

    #[test]
    fn test_bare_list_is_disjunction() {
        let decls = [
            SecurityRequirementDecl::new("api_key"),
            SecurityRequirementDecl::new("basic"),
        ];
        let requirements = decls.build(&OasFactory::default()).unwrap();
        assert_eq!(requirements.len(), 2);
        assert!(requirements_satisfied(
            &requirements,
            &Credentials::new().with_scheme("basic")
        ));
    }

    #[test]
    fn test_empty_set_needs_no_authentication() {
        let requirements = SecurityRequirementsSets::new(vec![SecurityRequirementsSet::default()])
            .build(&OasFactory::default())
            .unwrap();
        assert_eq!(serde_json::to_value(&requirements).unwrap(), json!([{}]));
        assert!(requirements_satisfied(&requirements, &Credentials::new()));
    }
}
