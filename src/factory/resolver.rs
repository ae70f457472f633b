use crate::error::FactoryError;
use crate::factory::kind::{Constructible, ModelKind};
use crate::model::*;
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// Produces a fresh, empty instance of one model type.
pub type Constructor = Arc<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// Supplies the implementation behind every model type.
pub trait OasFactoryResolver: Send + Sync {
    fn create_object(&self, kind: ModelKind) -> Result<Box<dyn Any + Send>, FactoryError>;
}

/// A link-time registration of an alternative resolver, picked up by
/// [`OasFactory::discover`](crate::factory::OasFactory::discover).
pub struct ResolverRegistration {
    pub name: &'static str,
    /// The registration with the highest priority wins.
    pub priority: i32,
    pub create: fn() -> Arc<dyn OasFactoryResolver>,
}

inventory::collect!(ResolverRegistration);

fn construct<T: Constructible>() -> Box<dyn Any + Send> {
    Box::new(T::default())
}

fn constructor<T: Constructible>() -> Constructor {
    Arc::new(construct::<T>)
}

/// Resolver backed by a concurrent registry of constructors, preloaded with
/// the `Default` of every model type.
pub struct DefaultFactoryResolver {
    constructors: DashMap<ModelKind, Constructor>,
}

impl DefaultFactoryResolver {
    pub fn new() -> Self {
        let resolver = DefaultFactoryResolver {
            constructors: DashMap::new(),
        };
        resolver.register_type::<Components>();
        resolver.register_type::<ExternalDocumentation>();
        resolver.register_type::<OpenApi>();
        resolver.register_type::<Operation>();
        resolver.register_type::<PathItem>();
        resolver.register_type::<Paths>();
        resolver.register_type::<Callback>();
        resolver.register_type::<Example>();
        resolver.register_type::<Header>();
        resolver.register_type::<Info>();
        resolver.register_type::<Contact>();
        resolver.register_type::<License>();
        resolver.register_type::<Link>();
        resolver.register_type::<Content>();
        resolver.register_type::<Discriminator>();
        resolver.register_type::<Encoding>();
        resolver.register_type::<MediaType>();
        resolver.register_type::<Schema>();
        resolver.register_type::<Xml>();
        resolver.register_type::<Parameter>();
        resolver.register_type::<RequestBody>();
        resolver.register_type::<ApiResponse>();
        resolver.register_type::<ApiResponses>();
        resolver.register_type::<OAuthFlow>();
        resolver.register_type::<OAuthFlows>();
        resolver.register_type::<Scopes>();
        resolver.register_type::<SecurityRequirement>();
        resolver.register_type::<SecurityScheme>();
        resolver.register_type::<Server>();
        resolver.register_type::<ServerVariable>();
        resolver.register_type::<ServerVariables>();
        resolver.register_type::<Tag>();
        resolver
    }

    fn register_type<T: Constructible>(&self) {
        self.constructors.insert(T::KIND, constructor::<T>());
    }

    /// Replaces the constructor for `kind`, returning the previous one.
    pub fn register<F>(&self, kind: ModelKind, create: F) -> Option<Constructor>
    where
        F: Fn() -> Box<dyn Any + Send> + Send + Sync + 'static,
    {
        log::debug!("Registering constructor for {}", kind);
        self.constructors.insert(kind, Arc::new(create))
    }

    pub fn unregister(&self, kind: ModelKind) -> Option<Constructor> {
        self.constructors.remove(&kind).map(|(_, create)| create)
    }

    pub fn contains(&self, kind: ModelKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for DefaultFactoryResolver {
    fn default() -> Self {
        DefaultFactoryResolver::new()
    }
}

impl OasFactoryResolver for DefaultFactoryResolver {
    fn create_object(&self, kind: ModelKind) -> Result<Box<dyn Any + Send>, FactoryError> {
        // Clone the constructor out so no shard lock is held while it runs.
        let create = match self.constructors.get(&kind) {
            Some(create) => Arc::clone(create.value()),
            None => return Err(FactoryError::no_constructor(&kind)),
        };
        Ok(create())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_preloaded() {
        let resolver = DefaultFactoryResolver::new();
        assert_eq!(resolver.len(), ModelKind::ALL.len());
        for kind in ModelKind::ALL {
            assert!(resolver.contains(*kind));
        }
    }

    #[test]
    fn test_register_replaces() {
        let resolver = DefaultFactoryResolver::new();
        let previous = resolver.register(ModelKind::Info, || {
            Box::new(Info::default().with_version("0.0.1"))
        });
        assert!(previous.is_some());
        let created = resolver.create_object(ModelKind::Info).unwrap();
        let info = created.downcast::<Info>().unwrap();
        assert_eq!(info.version(), Some("0.0.1"));
    }

    #[test]
    fn test_missing_constructor() {
        let resolver = DefaultFactoryResolver::new();
        assert!(resolver.unregister(ModelKind::Tag).is_some());
        assert_eq!(
            resolver.create_object(ModelKind::Tag).err(),
            Some(FactoryError::NoConstructor("Tag".to_string()))
        );
    }
}
