//! Serde model of the parts of an OpenAPI/Swagger document the generator reads.
//!
//! Only the fields that influence the emitted types are modelled; everything
//! else in the document (paths, info, servers, ...) is ignored during
//! deserialization. Every name-keyed mapping is an [`IndexMap`] so generated
//! blocks and property lines follow the order of the input file.
//!
//! ## Shapes
//!
//! A [`Definition`] takes one of three forms:
//!
//! - a `properties` map with an optional `required` list
//! - an `allOf` list composing references and inline property sets
//! - `type: "array"` with an `items.$ref` pointing at another definition
//!
//! Deserialization is lenient. A schema node or field whose shape is not the
//! modelled one (a boolean schema, an `items` list, a numeric `description`)
//! reads as absent instead of failing the whole document, so such a property
//! resolves to `unknown`.

use std::fmt;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Named definitions, keyed by definition name.
pub type Definitions = IndexMap<String, Definition>;

/// Properties of a definition, keyed by property name.
pub type Properties = IndexMap<String, Property>;

/// The top-level schema document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaDocument {
    /// Version indicator used by Swagger 2.x documents.
    #[serde(deserialize_with = "lenient")]
    pub swagger: Option<String>,
    /// Version indicator used by OpenAPI 3.x documents.
    #[serde(deserialize_with = "lenient")]
    pub openapi: Option<String>,
    /// Legacy (2.x) definitions map.
    #[serde(deserialize_with = "lenient_map")]
    pub definitions: Option<Definitions>,
    /// Modern (3.x) components container.
    #[serde(deserialize_with = "lenient")]
    pub components: Option<Components>,
}

/// The `components` object of an OpenAPI 3.x document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Components {
    /// Named schemas, the 3.x counterpart of `definitions`.
    #[serde(deserialize_with = "lenient_map")]
    pub schemas: Option<Definitions>,
}

/// A named, reusable type shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<TypeField>,
    #[serde(deserialize_with = "lenient_map")]
    pub properties: Option<Properties>,
    #[serde(rename = "allOf", deserialize_with = "lenient_list")]
    pub all_of: Option<Vec<AllOfPart>>,
    #[serde(deserialize_with = "lenient")]
    pub items: Option<Items>,
    #[serde(deserialize_with = "lenient")]
    pub required: Option<Vec<String>>,
}

impl Definition {
    /// Returns `true` when the definition is an array alias (`type: "array"`).
    pub fn is_array(&self) -> bool {
        self.kind.as_ref().and_then(TypeField::primary) == Some("array")
    }
}

/// A single property of a definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(rename = "$ref", deserialize_with = "lenient")]
    pub reference: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub kind: Option<TypeField>,
    #[serde(deserialize_with = "lenient")]
    pub items: Option<Items>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub format: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub nullable: Option<bool>,
    #[serde(rename = "readOnly", deserialize_with = "lenient")]
    pub read_only: Option<bool>,
}

impl Property {
    /// The primitive kind of the property, ignoring a `null` entry in list-valued types.
    pub fn primitive(&self) -> Option<&str> {
        self.kind.as_ref().and_then(TypeField::primary)
    }

    /// A property is nullable through `nullable: true` or a `null` entry in its type list.
    pub fn is_nullable(&self) -> bool {
        self.nullable == Some(true) || self.kind.as_ref().is_some_and(TypeField::includes_null)
    }

    /// Whether the property is marked `readOnly: true`.
    pub fn is_read_only(&self) -> bool {
        self.read_only == Some(true)
    }

    /// The direct `$ref` of the property, if any.
    pub fn reference(&self) -> Option<&str> {
        non_empty(self.reference.as_deref())
    }

    /// The `$ref` of the array item type, if any.
    pub fn item_reference(&self) -> Option<&str> {
        self.items.as_ref().and_then(Items::reference)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    pub fn format(&self) -> Option<&str> {
        non_empty(self.format.as_deref())
    }
}

/// One fragment of an `allOf` composition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AllOfPart {
    #[serde(rename = "$ref", deserialize_with = "lenient")]
    pub reference: Option<String>,
    #[serde(deserialize_with = "lenient_map")]
    pub properties: Option<Properties>,
}

impl AllOfPart {
    /// The referenced definition this part intersects with, if any.
    pub fn reference(&self) -> Option<&str> {
        non_empty(self.reference.as_deref())
    }
}

/// The `items` of an array definition or array property.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Items {
    #[serde(rename = "$ref", deserialize_with = "lenient")]
    pub reference: Option<String>,
}

impl Items {
    /// The `$ref` of the item type, if any.
    pub fn reference(&self) -> Option<&str> {
        non_empty(self.reference.as_deref())
    }
}

/// The `type` keyword: a single kind, or a list of kinds (OpenAPI 3.1).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeField {
    Single(String),
    Many(Vec<String>),
}

impl TypeField {
    /// The first kind that is not `null`.
    pub fn primary(&self) -> Option<&str> {
        match self {
            Self::Single(kind) => Some(kind.as_str()),
            Self::Many(kinds) => kinds.iter().map(String::as_str).find(|k| *k != "null"),
        }
    }

    pub fn includes_null(&self) -> bool {
        match self {
            Self::Single(_) => false,
            Self::Many(kinds) => kinds.iter().any(|k| k == "null"),
        }
    }
}

/// Which extraction strategy applies to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaVersion {
    /// Swagger/OpenAPI 2.x, reads `definitions`.
    Legacy,
    /// OpenAPI 3.x, reads `components.schemas`.
    Modern,
    /// Missing version field, or one that starts with neither `2` nor `3`.
    Unsupported(Option<String>),
}

/// The mapping a set of types was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionSource {
    Definitions,
    ComponentsSchemas,
}

impl fmt::Display for DefinitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definitions => write!(f, "v2 definitions"),
            Self::ComponentsSchemas => write!(f, "v3 components.schemas"),
        }
    }
}

impl SchemaDocument {
    /// The raw version string: `swagger`, falling back to `openapi`.
    pub fn version_string(&self) -> Option<&str> {
        self.swagger.as_deref().or(self.openapi.as_deref())
    }

    /// Classifies the document by the leading digit of its version string.
    pub fn version(&self) -> SchemaVersion {
        match self.version_string() {
            Some(v) if v.starts_with('2') => SchemaVersion::Legacy,
            Some(v) if v.starts_with('3') => SchemaVersion::Modern,
            other => SchemaVersion::Unsupported(other.map(str::to_string)),
        }
    }

    /// The definitions mapping for the given source, if the document has one.
    pub fn definitions_for(&self, source: DefinitionSource) -> Option<&Definitions> {
        match source {
            DefinitionSource::Definitions => self.definitions.as_ref(),
            DefinitionSource::ComponentsSchemas => {
                self.components.as_ref().and_then(|c| c.schemas.as_ref())
            }
        }
    }
}

/// Returns the final segment of a slash-delimited reference.
///
/// `#/definitions/Pet` and `#/components/schemas/Pet` both resolve to `Pet`.
pub fn ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Upper-cases the first character, leaving the remainder unchanged.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolves a reference to the capitalized type name it points at.
pub fn ref_type_name(reference: &str) -> String {
    capitalize(ref_name(reference))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Reads a field, falling back to its default when the value has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Reads a name-keyed map of schema nodes; a malformed node becomes its default.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<Option<IndexMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .map(|(name, node)| (name, T::deserialize(node).unwrap_or_default()))
            .collect(),
    ))
}

/// Reads a list of schema nodes; a malformed node becomes its default.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Array(nodes) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        nodes
            .into_iter()
            .map(|node| T::deserialize(node).unwrap_or_default())
            .collect(),
    ))
}
