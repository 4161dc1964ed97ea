#![deny(missing_docs)]

//! # Resource Domain
//!
//! Typed view of an Eve-style `DOMAIN` registry: one [`ResourceDescriptor`]
//! per exposed resource, keyed by resource name, in declaration order.
//!
//! Descriptors are loaded one at a time so a malformed entry is reported
//! against its own resource name rather than as an anonymous parse failure.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Ordered registry of resources, keyed by resource name.
pub type Domain = IndexMap<String, ResourceDescriptor>;

/// HTTP verbs a resource may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Lowercase verb as used for Path Item Object keys.
    pub fn as_key(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key().to_uppercase())
    }
}

/// Eve field rule types understood when deriving definitions.
///
/// Unknown rule types fall back to [`FieldType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// `string`
    String,
    /// `integer`
    Integer,
    /// `float`
    Float,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `datetime`
    Datetime,
    /// `objectid`
    Objectid,
    /// `list`
    List,
    /// `dict`
    Dict,
    /// Any other Eve type (`media`, `point`, ...).
    #[serde(other)]
    Other,
}

/// Validation rule attached to one field of a resource schema.
///
/// Only the keys that affect documentation are read; the rest of the rule is
/// ignored. Values of an unexpected shape degrade to their defaults instead
/// of rejecting the domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Eve rule type. A list of types resolves to its first known entry.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_field_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_type: Option<FieldType>,
    /// Whether the field must be present on insert.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub required: bool,
    /// Element rule for `list` fields.
    #[serde(
        default,
        deserialize_with = "deserialize_nested_rule",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema: Option<Box<FieldRule>>,
}

fn deserialize_field_type<'de, D>(deserializer: D) -> Result<Option<FieldType>, D::Error>
where
    D: Deserializer<'de>,
{
    let parse = |value: &Value| {
        serde_json::from_value::<FieldType>(value.clone()).unwrap_or(FieldType::Other)
    };
    let field_type = match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Array(types) => Some(
            types
                .iter()
                .map(parse)
                .find(|t| *t != FieldType::Other)
                .unwrap_or(FieldType::Other),
        ),
        other => Some(parse(&other)),
    };
    Ok(field_type)
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

fn deserialize_nested_rule<'de, D>(deserializer: D) -> Result<Option<Box<FieldRule>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rule = match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value::<FieldRule>(value).ok(),
        _ => None,
    };
    Ok(rule.map(Box::new))
}

/// Configuration record describing one exposed API resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Path template, without the leading slash (e.g. `people`).
    pub url: String,
    /// Plural display name (e.g. `People`).
    pub resource_title: String,
    /// Singular display name, also the definition name (e.g. `Person`).
    pub item_title: String,
    /// Collection-level verbs.
    pub resource_methods: Vec<Method>,
    /// Item-level verbs.
    pub item_methods: Vec<Method>,
    /// Hides the resource from generated documentation.
    #[serde(default)]
    pub disable_documentation: bool,
    /// Field rules, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<IndexMap<String, FieldRule>>,
}

impl ResourceDescriptor {
    /// Name of the item identifier placeholder: `lowercase(item_title) + "Id"`.
    pub fn item_id(&self) -> String {
        format!("{}Id", self.item_title.to_lowercase())
    }

    /// URL of the collection endpoint.
    pub fn collection_url(&self) -> String {
        format!("/{}", self.url)
    }

    /// URL of the item endpoint for the given identifier placeholder.
    pub fn item_url(&self, item_id: &str) -> String {
        format!("/{}/{{{}}}", self.url, item_id)
    }

    /// JSON pointer to this resource's definition.
    pub fn definition_ref(&self) -> String {
        format!("#/definitions/{}", self.item_title)
    }

    /// True if `method` is enabled at collection level.
    pub fn allows_resource(&self, method: Method) -> bool {
        self.resource_methods.contains(&method)
    }

    /// True if `method` is enabled at item level.
    pub fn allows_item(&self, method: Method) -> bool {
        self.item_methods.contains(&method)
    }
}

/// Parses a domain from JSON text.
pub fn parse_domain_json(content: &str) -> AppResult<Domain> {
    let raw: IndexMap<String, Value> = serde_json::from_str(content)?;
    descriptors_from_raw(raw)
}

/// Parses a domain from YAML text.
pub fn parse_domain_yaml(content: &str) -> AppResult<Domain> {
    let raw: IndexMap<String, Value> = serde_yaml::from_str(content)?;
    descriptors_from_raw(raw)
}

/// Reads a domain file. `.json` files are parsed as JSON, anything else as YAML.
pub fn load_domain(path: &Path) -> AppResult<Domain> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::General(format!("Failed to read domain {:?}: {}", path, e)))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let domain = if is_json {
        parse_domain_json(&content)?
    } else {
        parse_domain_yaml(&content)?
    };
    tracing::debug!(path = ?path, resources = domain.len(), "loaded domain");
    Ok(domain)
}

/// Undocumented resources are never validated: if one does not describe a
/// full descriptor it is dropped, since it contributes nothing either way.
fn descriptors_from_raw(raw: IndexMap<String, Value>) -> AppResult<Domain> {
    let mut domain = Domain::new();

    for (name, value) in raw {
        let disabled = matches!(value.get("disable_documentation"), Some(Value::Bool(true)));

        match serde_json::from_value::<ResourceDescriptor>(value) {
            Ok(descriptor) => {
                domain.insert(name, descriptor);
            }
            Err(e) if disabled => {
                tracing::debug!(resource = %name, error = %e, "dropping undocumented resource");
            }
            Err(e) => {
                return Err(AppError::InvalidResource {
                    resource: name,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(domain)
}
