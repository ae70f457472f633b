use crate::declare::{Declaration, ExtensionDecl, apply_extensions};
use crate::error::FactoryError;
use crate::factory::OasFactory;
use crate::model::{Schema, SchemaType};
use crate::types::RefOr;
use serde_json::{Number, Value};

const UNSET_MAX: i32 = i32::MIN;
const UNSET_MIN: i32 = i32::MAX;

/// A schema as declared on a type or property.
///
/// Integer bounds that cannot be left empty use out-of-range sentinels:
/// `max_items`, `max_length` and `max_properties` are unset at `i32::MIN`,
/// `min_items` at `i32::MAX`. `min_length` and `min_properties` are unset
/// at `0`, as is `multiple_of`. Numeric `minimum`/`maximum` are strings so
/// that the empty string means unset.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDecl {
    pub name: String,
    pub title: String,
    pub description: String,
    pub reference: String,
    pub schema_type: Option<SchemaType>,
    pub format: String,
    pub nullable: bool,
    pub multiple_of: f64,
    pub maximum: String,
    pub exclusive_maximum: bool,
    pub minimum: String,
    pub exclusive_minimum: bool,
    pub max_length: i32,
    pub min_length: i32,
    pub pattern: String,
    pub max_items: i32,
    pub min_items: i32,
    pub unique_items: bool,
    pub max_properties: i32,
    pub min_properties: i32,
    /// Marks this schema as required within its parent's `required` list.
    pub required: bool,
    pub required_properties: Vec<String>,
    pub properties: Vec<SchemaDecl>,
    pub items: Option<Box<SchemaDecl>>,
    pub all_of: Vec<String>,
    pub any_of: Vec<String>,
    pub one_of: Vec<String>,
    pub not: String,
    pub enumeration: Vec<String>,
    pub default_value: String,
    pub example: String,
    pub read_only: bool,
    pub write_only: bool,
    pub deprecated: bool,
    pub discriminator_property: String,
    pub discriminator_mapping: Vec<(String, String)>,
    pub external_docs_url: String,
    pub comment: String,
    pub hidden: bool,
    pub extensions: Vec<ExtensionDecl>,
}

impl Default for SchemaDecl {
    fn default() -> Self {
        SchemaDecl {
            name: String::new(),
            title: String::new(),
            description: String::new(),
            reference: String::new(),
            schema_type: None,
            format: String::new(),
            nullable: false,
            multiple_of: 0.0,
            maximum: String::new(),
            exclusive_maximum: false,
            minimum: String::new(),
            exclusive_minimum: false,
            max_length: UNSET_MAX,
            min_length: 0,
            pattern: String::new(),
            max_items: UNSET_MAX,
            min_items: UNSET_MIN,
            unique_items: false,
            max_properties: UNSET_MAX,
            min_properties: 0,
            required: false,
            required_properties: Vec::new(),
            properties: Vec::new(),
            items: None,
            all_of: Vec::new(),
            any_of: Vec::new(),
            one_of: Vec::new(),
            not: String::new(),
            enumeration: Vec::new(),
            default_value: String::new(),
            example: String::new(),
            read_only: false,
            write_only: false,
            deprecated: false,
            discriminator_property: String::new(),
            discriminator_mapping: Vec::new(),
            external_docs_url: String::new(),
            comment: String::new(),
            hidden: false,
            extensions: Vec::new(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// A bound counts when it is neither its sentinel nor negative.
fn bound(value: i32, unset: i32) -> Option<u64> {
    if value == unset {
        return None;
    }
    u64::try_from(value).ok()
}

fn number_from_f64(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}

fn parse_number(field: &str, value: &str) -> Option<Number> {
    if value.is_empty() {
        return None;
    }
    match value.trim().parse::<Number>() {
        Ok(number) => Some(number),
        Err(e) => {
            log::warn!("Ignoring {} '{}': {}", field, value, e);
            None
        }
    }
}

/// A literal attribute read in the light of the schema type: strings stay
/// strings, anything else is tried as JSON first.
fn literal(schema_type: Option<SchemaType>, value: &str) -> Value {
    if schema_type == Some(SchemaType::String) {
        return Value::String(value.to_string());
    }
    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
}

fn schema_ref(reference: &str) -> RefOr<Schema> {
    RefOr::component_ref(reference)
}

impl SchemaDecl {
    pub fn new(name: impl Into<String>) -> Self {
        SchemaDecl {
            name: name.into(),
            ..SchemaDecl::default()
        }
    }

    pub fn of_type(schema_type: SchemaType) -> Self {
        SchemaDecl {
            schema_type: Some(schema_type),
            ..SchemaDecl::default()
        }
    }

    /// Builds the schema, or a reference when `reference` is set. Returns
    /// `None` for a hidden declaration.
    pub fn build_schema(&self, factory: &OasFactory) -> Result<Option<RefOr<Schema>>, FactoryError> {
        if self.hidden {
            return Ok(None);
        }
        if !self.reference.is_empty() {
            return Ok(Some(schema_ref(&self.reference)));
        }

        let mut schema = factory.create_schema()?;
        if let Some(schema_type) = self.schema_type {
            schema.add_schema_type(schema_type);
        }
        schema.set_title(non_empty(&self.title));
        schema.set_description(non_empty(&self.description));
        schema.set_format(non_empty(&self.format));
        schema.set_pattern(non_empty(&self.pattern));
        schema.set_comment(non_empty(&self.comment));
        if self.nullable {
            schema.set_nullable(Some(true));
        }

        if self.multiple_of != 0.0 {
            schema.set_multiple_of(number_from_f64(self.multiple_of));
        }
        schema.set_maximum(parse_number("maximum", &self.maximum));
        if self.exclusive_maximum && schema.maximum().is_some() {
            schema.set_exclusive_maximum(Some(true));
        }
        schema.set_minimum(parse_number("minimum", &self.minimum));
        if self.exclusive_minimum && schema.minimum().is_some() {
            schema.set_exclusive_minimum(Some(true));
        }

        schema.set_max_length(bound(self.max_length, UNSET_MAX));
        schema.set_min_length(bound(self.min_length, 0));
        schema.set_max_items(bound(self.max_items, UNSET_MAX));
        schema.set_min_items(bound(self.min_items, UNSET_MIN));
        schema.set_max_properties(bound(self.max_properties, UNSET_MAX));
        schema.set_min_properties(bound(self.min_properties, 0));
        if self.unique_items {
            schema.set_unique_items(Some(true));
        }

        for name in &self.required_properties {
            schema.add_required_property(name.clone());
        }
        for property in &self.properties {
            let Some(built) = property.build_schema(factory)? else {
                continue;
            };
            if property.required && !schema.required().is_some_and(|r| r.contains(&property.name)) {
                schema.add_required_property(property.name.clone());
            }
            schema.add_property(property.name.clone(), built);
        }
        if let Some(items) = &self.items {
            schema.set_items(items.build_schema(factory)?);
        }
        for reference in &self.all_of {
            schema.add_all_of(schema_ref(reference));
        }
        for reference in &self.any_of {
            schema.add_any_of(schema_ref(reference));
        }
        for reference in &self.one_of {
            schema.add_one_of(schema_ref(reference));
        }
        if !self.not.is_empty() {
            schema.set_not(Some(schema_ref(&self.not)));
        }

        for value in &self.enumeration {
            schema.add_enum_value(literal(self.schema_type, value));
        }
        if !self.default_value.is_empty() {
            schema.set_default_value(Some(literal(self.schema_type, &self.default_value)));
        }
        if !self.example.is_empty() {
            schema.set_example(Some(literal(self.schema_type, &self.example)));
        }
        if self.read_only {
            schema.set_read_only(Some(true));
        }
        if self.write_only {
            schema.set_write_only(Some(true));
        }
        if self.deprecated {
            schema.set_deprecated(Some(true));
        }

        if !self.discriminator_property.is_empty() {
            let mut discriminator = factory.create_discriminator()?;
            discriminator.set_property_name(Some(self.discriminator_property.clone()));
            for (value, reference) in &self.discriminator_mapping {
                discriminator.add_mapping(value.clone(), reference.clone());
            }
            schema.set_discriminator(Some(discriminator));
        }
        if !self.external_docs_url.is_empty() {
            let docs = factory
                .create_external_documentation()?
                .with_url(self.external_docs_url.clone());
            schema.set_external_docs(Some(docs));
        }
        apply_extensions(&mut schema, &self.extensions);
        Ok(Some(RefOr::Item(schema)))
    }
}

impl Declaration for SchemaDecl {
    type Output = Option<RefOr<Schema>>;

    fn build(&self, factory: &OasFactory) -> Result<Self::Output, FactoryError> {
        self.build_schema(factory)
    }
}
