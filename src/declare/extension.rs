use crate::model::Extensible;
use serde_json::Value;

/// A vendor extension. With `parse_value` the value is read as JSON, so
/// `{"a": 1}` becomes an object rather than a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionDecl {
    pub name: String,
    pub value: String,
    pub parse_value: bool,
}

impl ExtensionDecl {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ExtensionDecl {
            name: name.into(),
            value: value.into(),
            parse_value: false,
        }
    }

    pub fn parsed(mut self) -> Self {
        self.parse_value = true;
        self
    }

    /// The value as it should appear in the document. A value that fails to
    /// parse is kept as the raw string.
    pub fn to_value(&self) -> Value {
        if !self.parse_value {
            return Value::String(self.value.clone());
        }
        match serde_json::from_str(&self.value) {
            Ok(value) => value,
            Err(e) => {
                log::warn!(
                    "Extension '{}' is not valid JSON ({}), keeping it as a string",
                    self.name,
                    e
                );
                Value::String(self.value.clone())
            }
        }
    }

    pub fn apply_to<T: Extensible>(&self, target: &mut T) {
        target.add_extension(self.name.clone(), self.to_value());
    }
}

pub fn apply_extensions<T: Extensible>(target: &mut T, extensions: &[ExtensionDecl]) {
    for extension in extensions {
        extension.apply_to(target);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Operation;
    use serde_json::json;

    #[test]
    fn test_parse_value() {
        let mut operation = Operation::default();
        ExtensionDecl::new("x-custom", r#"{"key": "value", "count": 2}"#)
            .parsed()
            .apply_to(&mut operation);
        assert_eq!(
            operation.extension("x-custom"),
            Some(&json!({"key": "value", "count": 2}))
        );
    }

    #[test]
    fn test_raw_value() {
        let extension = ExtensionDecl::new("x-custom", r#"{"key": "value"}"#);
        assert_eq!(extension.to_value(), json!(r#"{"key": "value"}"#));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let extension = ExtensionDecl::new("x-broken", "{not json").parsed();
        assert_eq!(extension.to_value(), json!("{not json"));
    }
}
