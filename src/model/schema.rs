use crate::model::ExternalDocumentation;
use crate::types::version::SchemaDialect;
use crate::types::{Extensions, RefOr, Referenceable};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Number, Value};

/// One entry of a schema's `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Integer,
    Number,
    Boolean,
    String,
    Object,
    Array,
    Null,
}

/// `additionalProperties`: either a schema for the extra properties or a
/// plain allow/deny flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Schema(Box<RefOr<Schema>>),
    Bool(bool),
}

impl From<bool> for AdditionalProperties {
    fn from(allowed: bool) -> Self {
        AdditionalProperties::Bool(allowed)
    }
}

impl From<Schema> for AdditionalProperties {
    fn from(schema: Schema) -> Self {
        AdditionalProperties::Schema(Box::new(RefOr::Item(schema)))
    }
}

impl From<RefOr<Schema>> for AdditionalProperties {
    fn from(schema: RefOr<Schema>) -> Self {
        AdditionalProperties::Schema(Box::new(schema))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mapping: Option<IndexMap<String, String>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Discriminator {
    pub fn new(property_name: impl Into<String>) -> Self {
        Discriminator::default().with_property_name(property_name)
    }
}

accessors!(Discriminator {
    str property_name: String,
    map mapping / mapping: String,
});

/// XML naming hints for a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Xml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) attribute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) wrapped: Option<bool>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(Xml {
    str name: String,
    str namespace: String,
    str prefix: String,
    copy attribute: bool,
    copy wrapped: bool,
});

/// A JSON Schema describing a value, covering the OpenAPI 3.0 subset and the
/// 2020-12 vocabulary used by OpenAPI 3.1.
///
/// Numeric bounds keep the 3.0 shape in memory (`minimum` plus an
/// `exclusive_minimum` flag); serialization renders them for the schema's
/// dialect. A bound without its flag is inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub(crate) schema_type: Option<Vec<SchemaType>>,
    pub(crate) format: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) default_value: Option<Value>,
    pub(crate) enumeration: Option<Vec<Value>>,
    pub(crate) const_value: Option<Value>,
    pub(crate) multiple_of: Option<Number>,
    pub(crate) minimum: Option<Number>,
    pub(crate) exclusive_minimum: Option<bool>,
    pub(crate) maximum: Option<Number>,
    pub(crate) exclusive_maximum: Option<bool>,
    pub(crate) max_length: Option<u64>,
    pub(crate) min_length: Option<u64>,
    pub(crate) pattern: Option<String>,
    pub(crate) max_items: Option<u64>,
    pub(crate) min_items: Option<u64>,
    pub(crate) unique_items: Option<bool>,
    pub(crate) max_properties: Option<u64>,
    pub(crate) min_properties: Option<u64>,
    pub(crate) required: Option<Vec<String>>,
    pub(crate) properties: Option<IndexMap<String, RefOr<Schema>>>,
    pub(crate) additional_properties: Option<AdditionalProperties>,
    pub(crate) items: Option<Box<RefOr<Schema>>>,
    pub(crate) prefix_items: Option<Vec<RefOr<Schema>>>,
    pub(crate) contains: Option<Box<RefOr<Schema>>>,
    pub(crate) max_contains: Option<u64>,
    pub(crate) min_contains: Option<u64>,
    pub(crate) all_of: Option<Vec<RefOr<Schema>>>,
    pub(crate) any_of: Option<Vec<RefOr<Schema>>>,
    pub(crate) one_of: Option<Vec<RefOr<Schema>>>,
    pub(crate) not: Option<Box<RefOr<Schema>>>,
    pub(crate) if_schema: Option<Box<RefOr<Schema>>>,
    pub(crate) then_schema: Option<Box<RefOr<Schema>>>,
    pub(crate) else_schema: Option<Box<RefOr<Schema>>>,
    pub(crate) dependent_schemas: Option<IndexMap<String, RefOr<Schema>>>,
    pub(crate) dependent_required: Option<IndexMap<String, Vec<String>>>,
    pub(crate) pattern_properties: Option<IndexMap<String, RefOr<Schema>>>,
    pub(crate) property_names: Option<Box<RefOr<Schema>>>,
    pub(crate) unevaluated_items: Option<Box<RefOr<Schema>>>,
    pub(crate) unevaluated_properties: Option<Box<RefOr<Schema>>>,
    pub(crate) read_only: Option<bool>,
    pub(crate) write_only: Option<bool>,
    pub(crate) deprecated: Option<bool>,
    pub(crate) example: Option<Value>,
    pub(crate) examples: Option<Vec<Value>>,
    pub(crate) external_docs: Option<ExternalDocumentation>,
    pub(crate) discriminator: Option<Discriminator>,
    pub(crate) xml: Option<Xml>,
    pub(crate) nullable: Option<bool>,
    pub(crate) comment: Option<String>,
    pub(crate) content_encoding: Option<String>,
    pub(crate) content_media_type: Option<String>,
    pub(crate) content_schema: Option<Box<RefOr<Schema>>>,
    pub(crate) schema_uri: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) anchor: Option<String>,
    pub(crate) defs: Option<IndexMap<String, RefOr<Schema>>>,
    pub(crate) extensions: Extensions,
    dialect: SchemaDialect,
}

accessors!(Schema {
    list schema_type / schema_type: SchemaType,
    str format: String,
    str title: String,
    str description: String,
    opt default_value: Value,
    list enumeration / enum_value: Value,
    opt const_value: Value,
    opt multiple_of: Number,
    opt minimum: Number,
    copy exclusive_minimum: bool,
    opt maximum: Number,
    copy exclusive_maximum: bool,
    copy max_length: u64,
    copy min_length: u64,
    str pattern: String,
    copy max_items: u64,
    copy min_items: u64,
    copy unique_items: bool,
    copy max_properties: u64,
    copy min_properties: u64,
    list required / required_property: String,
    map properties / property: RefOr<Schema>,
    opt additional_properties: AdditionalProperties,
    boxed items: RefOr<Schema>,
    list prefix_items / prefix_item: RefOr<Schema>,
    boxed contains: RefOr<Schema>,
    copy max_contains: u64,
    copy min_contains: u64,
    list all_of / all_of: RefOr<Schema>,
    list any_of / any_of: RefOr<Schema>,
    list one_of / one_of: RefOr<Schema>,
    boxed not: RefOr<Schema>,
    boxed if_schema: RefOr<Schema>,
    boxed then_schema: RefOr<Schema>,
    boxed else_schema: RefOr<Schema>,
    map dependent_schemas / dependent_schema: RefOr<Schema>,
    map dependent_required / dependent_requirement: Vec<String>,
    map pattern_properties / pattern_property: RefOr<Schema>,
    boxed property_names: RefOr<Schema>,
    boxed unevaluated_items: RefOr<Schema>,
    boxed unevaluated_properties: RefOr<Schema>,
    copy read_only: bool,
    copy write_only: bool,
    copy deprecated: bool,
    opt example: Value,
    list examples / example: Value,
    opt external_docs: ExternalDocumentation,
    opt discriminator: Discriminator,
    opt xml: Xml,
    copy nullable: bool,
    str comment: String,
    str content_encoding: String,
    str content_media_type: String,
    boxed content_schema: RefOr<Schema>,
    str schema_uri: String,
    str id: String,
    str anchor: String,
    map defs / def: RefOr<Schema>,
});

impl Schema {
    pub fn of_type(schema_type: SchemaType) -> Self {
        Schema::default().with_schema_type(vec![schema_type])
    }

    /// `{"type": "array", "items": ...}`
    pub fn array_of(items: impl Into<RefOr<Schema>>) -> Self {
        Schema::of_type(SchemaType::Array).with_items(items)
    }

    pub fn dialect(&self) -> SchemaDialect {
        self.dialect
    }

    pub fn set_dialect(&mut self, dialect: SchemaDialect) {
        self.dialect = dialect;
    }

    pub fn with_dialect(mut self, dialect: SchemaDialect) -> Self {
        self.set_dialect(dialect);
        self
    }

    /// Sets the rendering dialect on this schema and every inline schema
    /// nested below it.
    pub fn stamp_dialect(&mut self, dialect: SchemaDialect) {
        self.dialect = dialect;
        self.retain_subschemas(&mut |child| {
            if let Some(schema) = child.as_item_mut() {
                schema.stamp_dialect(dialect);
            }
            true
        });
    }

    /// Whether `type` lists `null` or the 3.0 `nullable` flag is set.
    pub fn allows_null(&self) -> bool {
        self.nullable == Some(true)
            || self
                .schema_type
                .as_ref()
                .is_some_and(|types| types.contains(&SchemaType::Null))
    }

    /// Visits every directly nested schema slot and drops the ones for which
    /// `keep` returns false. Single-valued slots become unset, list and map
    /// entries are removed.
    pub(crate) fn retain_subschemas(&mut self, keep: &mut dyn FnMut(&mut RefOr<Schema>) -> bool) {
        for slot in [
            &mut self.items,
            &mut self.contains,
            &mut self.not,
            &mut self.if_schema,
            &mut self.then_schema,
            &mut self.else_schema,
            &mut self.property_names,
            &mut self.unevaluated_items,
            &mut self.unevaluated_properties,
            &mut self.content_schema,
        ] {
            retain_boxed(slot, keep);
        }
        for list in [
            &mut self.prefix_items,
            &mut self.all_of,
            &mut self.any_of,
            &mut self.one_of,
        ] {
            if let Some(entries) = list.as_mut() {
                entries.retain_mut(|entry| keep(entry));
            }
        }
        for map in [
            &mut self.properties,
            &mut self.dependent_schemas,
            &mut self.pattern_properties,
            &mut self.defs,
        ] {
            if let Some(entries) = map.as_mut() {
                entries.retain(|_, entry| keep(entry));
            }
        }
        let keep_additional = match self.additional_properties.as_mut() {
            Some(AdditionalProperties::Schema(schema)) => keep(schema),
            _ => true,
        };
        if !keep_additional {
            self.additional_properties = None;
        }
    }

    fn serialize_type<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        match self.dialect {
            SchemaDialect::Draft202012 => {
                let mut types = self.schema_type.clone().unwrap_or_default();
                if self.nullable == Some(true) && !types.contains(&SchemaType::Null) {
                    if types.is_empty() {
                        log::debug!("Omitting 'nullable' from a schema without 'type'");
                    } else {
                        types.push(SchemaType::Null);
                    }
                }
                serialize_types(map, &types)
            }
            SchemaDialect::OpenApi30 => {
                let types: Vec<SchemaType> = self
                    .schema_type
                    .iter()
                    .flatten()
                    .copied()
                    .filter(|schema_type| *schema_type != SchemaType::Null)
                    .collect();
                serialize_types(map, &types)?;
                if self.allows_null() {
                    map.serialize_entry("nullable", &true)?;
                } else if let Some(nullable) = self.nullable {
                    map.serialize_entry("nullable", &nullable)?;
                }
                Ok(())
            }
        }
    }

    fn serialize_bound<M: SerializeMap>(
        &self,
        map: &mut M,
        inclusive_key: &'static str,
        exclusive_key: &'static str,
        bound: Option<&Number>,
        exclusive: Option<bool>,
    ) -> Result<(), M::Error> {
        match self.dialect {
            SchemaDialect::OpenApi30 => {
                if let Some(bound) = bound {
                    map.serialize_entry(inclusive_key, bound)?;
                }
                if let Some(exclusive) = exclusive {
                    map.serialize_entry(exclusive_key, &exclusive)?;
                }
            }
            SchemaDialect::Draft202012 => match (bound, exclusive) {
                (Some(bound), Some(true)) => map.serialize_entry(exclusive_key, bound)?,
                (Some(bound), _) => map.serialize_entry(inclusive_key, bound)?,
                (None, Some(true)) => {
                    log::debug!("Dropping '{}' without a bound", exclusive_key);
                }
                (None, _) => {}
            },
        }
        Ok(())
    }
}

fn retain_boxed(
    slot: &mut Option<Box<RefOr<Schema>>>,
    keep: &mut dyn FnMut(&mut RefOr<Schema>) -> bool,
) {
    let kept = match slot.as_deref_mut() {
        Some(schema) => keep(schema),
        None => true,
    };
    if !kept {
        *slot = None;
    }
}

fn serialize_types<M: SerializeMap>(map: &mut M, types: &[SchemaType]) -> Result<(), M::Error> {
    match types {
        [] => Ok(()),
        [single] => map.serialize_entry("type", single),
        several => map.serialize_entry("type", several),
    }
}

fn is_zero(number: &Number) -> bool {
    number.as_f64() == Some(0.0)
}

macro_rules! entry {
    ($map:ident, $key:literal, $value:expr) => {
        if let Some(value) = $value.as_ref() {
            $map.serialize_entry($key, value)?;
        }
    };
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        entry!(map, "$schema", self.schema_uri);
        entry!(map, "$id", self.id);
        entry!(map, "$anchor", self.anchor);
        entry!(map, "$comment", self.comment);
        self.serialize_type(&mut map)?;
        entry!(map, "format", self.format);
        entry!(map, "title", self.title);
        entry!(map, "description", self.description);
        entry!(map, "default", self.default_value);
        entry!(map, "enum", self.enumeration);
        entry!(map, "const", self.const_value);
        if let Some(multiple_of) = self.multiple_of.as_ref().filter(|n| !is_zero(n)) {
            map.serialize_entry("multipleOf", multiple_of)?;
        }
        self.serialize_bound(
            &mut map,
            "minimum",
            "exclusiveMinimum",
            self.minimum.as_ref(),
            self.exclusive_minimum,
        )?;
        self.serialize_bound(
            &mut map,
            "maximum",
            "exclusiveMaximum",
            self.maximum.as_ref(),
            self.exclusive_maximum,
        )?;
        entry!(map, "maxLength", self.max_length);
        entry!(map, "minLength", self.min_length);
        entry!(map, "pattern", self.pattern);
        entry!(map, "maxItems", self.max_items);
        entry!(map, "minItems", self.min_items);
        entry!(map, "uniqueItems", self.unique_items);
        entry!(map, "maxProperties", self.max_properties);
        entry!(map, "minProperties", self.min_properties);
        entry!(map, "required", self.required);
        entry!(map, "properties", self.properties);
        entry!(map, "additionalProperties", self.additional_properties);
        entry!(map, "items", self.items);
        entry!(map, "prefixItems", self.prefix_items);
        entry!(map, "contains", self.contains);
        entry!(map, "maxContains", self.max_contains);
        entry!(map, "minContains", self.min_contains);
        entry!(map, "allOf", self.all_of);
        entry!(map, "anyOf", self.any_of);
        entry!(map, "oneOf", self.one_of);
        entry!(map, "not", self.not);
        if self.if_schema.is_some() {
            entry!(map, "if", self.if_schema);
            entry!(map, "then", self.then_schema);
            entry!(map, "else", self.else_schema);
        } else if self.then_schema.is_some() || self.else_schema.is_some() {
            log::debug!("Omitting 'then'/'else' from a schema without 'if'");
        }
        entry!(map, "dependentSchemas", self.dependent_schemas);
        entry!(map, "dependentRequired", self.dependent_required);
        entry!(map, "patternProperties", self.pattern_properties);
        entry!(map, "propertyNames", self.property_names);
        entry!(map, "unevaluatedItems", self.unevaluated_items);
        entry!(map, "unevaluatedProperties", self.unevaluated_properties);
        entry!(map, "readOnly", self.read_only);
        entry!(map, "writeOnly", self.write_only);
        entry!(map, "deprecated", self.deprecated);
        entry!(map, "example", self.example);
        entry!(map, "examples", self.examples);
        entry!(map, "externalDocs", self.external_docs);
        entry!(map, "discriminator", self.discriminator);
        entry!(map, "xml", self.xml);
        entry!(map, "contentEncoding", self.content_encoding);
        entry!(map, "contentMediaType", self.content_media_type);
        entry!(map, "contentSchema", self.content_schema);
        entry!(map, "$defs", self.defs);
        self.extensions.serialize_entries(&mut map)?;
        map.end()
    }
}

impl Referenceable for Schema {
    const COMPONENT: &'static str = "schemas";
}

extensible!(Schema, Discriminator, Xml);

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Extensible;
    use serde_json::json;

    #[test]
    fn test_empty_schema() {
        assert_eq!(serde_json::to_value(Schema::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_max_items_unset_and_zero_differ() {
        let unset = Schema::of_type(SchemaType::Array);
        let zero = Schema::of_type(SchemaType::Array).with_max_items(0);
        assert_eq!(
            serde_json::to_value(&unset).unwrap(),
            json!({ "type": "array" })
        );
        assert_eq!(
            serde_json::to_value(&zero).unwrap(),
            json!({ "type": "array", "maxItems": 0 })
        );
    }

    #[test]
    fn test_multiple_of_zero_is_unset() {
        let schema = Schema::of_type(SchemaType::Integer).with_multiple_of(0);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "integer" })
        );
        let schema = schema.with_multiple_of(5);
        assert_eq!(serde_json::to_value(&schema).unwrap()["multipleOf"], json!(5));
    }

    #[test]
    fn test_exclusive_bounds_per_dialect() {
        let schema = Schema::of_type(SchemaType::Number)
            .with_minimum(1)
            .with_exclusive_minimum(true)
            .with_maximum(10);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "number", "exclusiveMinimum": 1, "maximum": 10 })
        );
        let legacy = schema.with_dialect(SchemaDialect::OpenApi30);
        assert_eq!(
            serde_json::to_value(&legacy).unwrap(),
            json!({ "type": "number", "minimum": 1, "exclusiveMinimum": true, "maximum": 10 })
        );
    }

    #[test]
    fn test_nullable_per_dialect() {
        let schema = Schema::of_type(SchemaType::String).with_nullable(true);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": ["string", "null"] })
        );
        let legacy = Schema::default()
            .with_schema_type(vec![SchemaType::String, SchemaType::Null])
            .with_dialect(SchemaDialect::OpenApi30);
        assert_eq!(
            serde_json::to_value(&legacy).unwrap(),
            json!({ "type": "string", "nullable": true })
        );
    }

    #[test]
    fn test_nullable_without_type() {
        let schema = Schema::default().with_nullable(true);
        assert_eq!(serde_json::to_value(&schema).unwrap(), json!({}));
    }

    #[test]
    fn test_only_prefixed_extensions_are_written() {
        let schema = Schema::of_type(SchemaType::Object)
            .with_extension("x-internal", true)
            .with_extension("internal", true);
        assert_eq!(schema.extensions().len(), 2);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "object", "x-internal": true })
        );
    }

    #[test]
    fn test_then_without_if_is_omitted() {
        let schema = Schema::default().with_then_schema(Schema::of_type(SchemaType::String));
        assert_eq!(serde_json::to_value(&schema).unwrap(), json!({}));
        let schema = schema.with_if_schema(Schema::default().with_required(vec!["kind".into()]));
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "if": { "required": ["kind"] }, "then": { "type": "string" } })
        );
    }

    #[test]
    fn test_composition_and_properties() {
        let mut pet = Schema::of_type(SchemaType::Object);
        pet.add_property("name", Schema::of_type(SchemaType::String))
            .add_required_property("name")
            .add_one_of(RefOr::<Schema>::component_ref("Cat"))
            .add_one_of(RefOr::<Schema>::component_ref("Dog"));
        pet.set_discriminator(Some(Discriminator::new("petType")));
        assert_eq!(
            serde_json::to_value(&pet).unwrap(),
            json!({
                "type": "object",
                "required": ["name"],
                "properties": { "name": { "type": "string" } },
                "oneOf": [
                    { "$ref": "#/components/schemas/Cat" },
                    { "$ref": "#/components/schemas/Dog" }
                ],
                "discriminator": { "propertyName": "petType" }
            })
        );
    }

    #[test]
    fn test_read_only_and_write_only_are_kept() {
        let schema = Schema::default().with_read_only(true).with_write_only(true);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "readOnly": true, "writeOnly": true })
        );
    }

    #[test]
    fn test_stamp_reaches_nested_schemas() {
        let mut schema = Schema::array_of(Schema::of_type(SchemaType::Integer).with_nullable(true))
            .with_additional_properties(Schema::default().with_nullable(true));
        schema.stamp_dialect(SchemaDialect::OpenApi30);
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["items"], json!({ "type": "integer", "nullable": true }));
        assert_eq!(value["additionalProperties"], json!({ "nullable": true }));
    }

    #[test]
    fn test_retain_subschemas_drops_entries() {
        let mut schema = Schema::default()
            .with_items(Schema::of_type(SchemaType::String))
            .with_all_of(vec![
                Schema::of_type(SchemaType::String).into(),
                Schema::of_type(SchemaType::Integer).into(),
            ]);
        schema.retain_subschemas(&mut |child| {
            child
                .as_item()
                .and_then(Schema::schema_type)
                .is_some_and(|types| types != [SchemaType::String])
        });
        assert!(schema.items().is_none());
        assert_eq!(schema.all_of().map(<[_]>::len), Some(1));
    }
}
