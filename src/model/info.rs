use crate::types::Extensions;
use serde::Serialize;

/// Metadata about the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) terms_of_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) license: Option<License>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) version: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Info::default().with_title(title).with_version(version)
    }
}

accessors!(Info {
    str title: String,
    str summary: String,
    str description: String,
    str terms_of_service: String,
    opt contact: Contact,
    opt license: License,
    str version: String,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(Contact {
    str name: String,
    str url: String,
    str email: String,
});

/// License of the exposed API. `identifier` (an SPDX expression) and `url`
/// are alternatives in 3.1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct License {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(License {
    str name: String,
    str identifier: String,
    str url: String,
});

extensible!(Info, Contact, License);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_info_omits_unset_fields() {
        let info = Info::new("Pets", "1.0.0")
            .with_terms_of_service("https://example.com/terms")
            .with_license(License::default().with_name("Apache 2.0").with_identifier("Apache-2.0"));
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "title": "Pets",
                "termsOfService": "https://example.com/terms",
                "license": { "name": "Apache 2.0", "identifier": "Apache-2.0" },
                "version": "1.0.0"
            })
        );
    }

    #[test]
    fn test_contact_mut_access() {
        let mut info = Info::default().with_contact(Contact::default());
        if let Some(contact) = info.contact_mut() {
            contact.set_email(Some("api@example.com".to_string()));
        }
        assert_eq!(
            info.contact().and_then(|contact| contact.email()),
            Some("api@example.com")
        );
    }
}
