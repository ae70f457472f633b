use crate::config::OasConfig;
use crate::error::FilterError;
use crate::filter::{FilterSummary, OasFilter, filter_document};
use crate::model::OpenApi;

/// A filter that can be selected by name through `mp.openapi.filter`.
///
/// ```ignore
/// inventory::submit! {
///     FilterRegistration::new("com.example.AuditFilter", || Box::new(AuditFilter::default()))
/// }
/// ```
pub struct FilterRegistration {
    pub name: &'static str,
    pub create: fn() -> Box<dyn OasFilter>,
}

impl FilterRegistration {
    pub const fn new(name: &'static str, create: fn() -> Box<dyn OasFilter>) -> Self {
        FilterRegistration { name, create }
    }
}

inventory::collect!(FilterRegistration);

/// Lookup over every submitted [`FilterRegistration`].
pub struct FilterRegistry;

impl FilterRegistry {
    /// A new instance of the filter registered as `name`.
    pub fn resolve(name: &str) -> Result<Box<dyn OasFilter>, FilterError> {
        let name = name.trim();
        inventory::iter::<FilterRegistration>
            .into_iter()
            .find(|registration| registration.name == name)
            .map(|registration| (registration.create)())
            .ok_or_else(|| FilterError::unknown_filter(name))
    }

    pub fn names() -> Vec<&'static str> {
        inventory::iter::<FilterRegistration>
            .into_iter()
            .map(|registration| registration.name)
            .collect()
    }

    pub fn contains(name: &str) -> bool {
        inventory::iter::<FilterRegistration>
            .into_iter()
            .any(|registration| registration.name == name)
    }
}

/// Runs the filter named by `mp.openapi.filter`, if one is configured.
pub fn filter_with_config(
    open_api: &mut OpenApi,
    config: &OasConfig,
) -> Result<Option<FilterSummary>, FilterError> {
    let Some(name) = config.filter() else {
        log::debug!("No filter configured");
        return Ok(None);
    };
    let mut filter = FilterRegistry::resolve(name)?;
    log::debug!("Running filter {}", name);
    Ok(Some(filter_document(open_api, filter.as_mut())))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{Info, Tag};

    struct DropInternalTags;

    impl OasFilter for DropInternalTags {
        fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
            if tag.name() == Some("internal") {
                None
            } else {
                Some(tag)
            }
        }
    }

    inventory::submit! {
        FilterRegistration::new("test.DropInternalTags", || Box::new(DropInternalTags))
    }

    #[test]
    fn test_resolve_registered() {
        assert!(FilterRegistry::contains("test.DropInternalTags"));
        assert!(FilterRegistry::names().contains(&"test.DropInternalTags"));
        assert!(FilterRegistry::resolve(" test.DropInternalTags ").is_ok());
        assert_eq!(
            FilterRegistry::resolve("test.Missing").err(),
            Some(FilterError::UnknownFilter("test.Missing".to_string()))
        );
    }

    #[test]
    fn test_filter_with_config() {
        let mut document = OpenApi::new(Info::new("Pets", "1.0.0"))
            .with_tags(vec![Tag::new("pets"), Tag::new("internal")]);
        let config = OasConfig::from_pairs([("mp.openapi.filter", "test.DropInternalTags")]);
        let summary = filter_with_config(&mut document, &config).unwrap();
        assert_eq!(summary.map(|summary| summary.removed), Some(1));
        assert_eq!(document.tags().map(<[_]>::len), Some(1));

        let unconfigured = OasConfig::default();
        assert_eq!(filter_with_config(&mut document, &unconfigured).unwrap(), None);
    }
}
