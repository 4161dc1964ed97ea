#![deny(missing_docs)]

//! # Swagger 2.0 Models
//!
//! Serializable subset of the Swagger 2.0 object model that the builders emit.
//!
//! Field declaration order is the serialization order, and every map is an
//! [`IndexMap`], so the rendered JSON/YAML is stable and diffable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of URL template to Path Item Object.
pub type PathsDocument = IndexMap<String, PathItem>;

/// Ordered mapping of definition name to schema.
pub type Definitions = IndexMap<String, Schema>;

/// Schema Object (or a `$ref` to one).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// JSON pointer to a named definition.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Primitive or container type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Format hint for primitive types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Element schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Object properties.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    /// Names of required properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    /// `{"$ref": pointer}`.
    pub fn reference(pointer: impl Into<String>) -> Self {
        Self {
            reference: Some(pointer.into()),
            ..Default::default()
        }
    }

    /// `{"type": "array", "items": items}`.
    pub fn array_of(items: Schema) -> Self {
        Self {
            schema_type: Some("array".into()),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// A bare primitive type with an optional format.
    pub fn primitive(schema_type: &str, format: Option<&str>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            format: format.map(str::to_string),
            ..Default::default()
        }
    }
}

/// Parameter Object. The `in` key selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "in", rename_all = "lowercase")]
pub enum Parameter {
    /// Parameter taken from the URL template.
    Path {
        /// Placeholder name.
        name: String,
        /// Always true for path parameters.
        required: bool,
        /// Human readable description.
        description: String,
        /// Primitive type.
        #[serde(rename = "type")]
        param_type: String,
        /// Format hint.
        format: String,
    },
    /// Request payload.
    Body {
        /// Payload name.
        name: String,
        /// Whether a payload must be sent.
        required: bool,
        /// Payload schema.
        schema: Schema,
    },
}

impl Parameter {
    /// Name of the parameter regardless of location.
    pub fn name(&self) -> &str {
        match self {
            Parameter::Path { name, .. } | Parameter::Body { name, .. } => name,
        }
    }
}

/// Response Object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Human readable description.
    pub description: String,
    /// Payload schema, when documented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// Operation Object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Short summary.
    pub summary: String,
    /// Parameters, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code.
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// An operation answering `200` with `response`.
    pub fn ok(summary: String, parameters: Vec<Parameter>, response: Response) -> Self {
        let mut responses = IndexMap::new();
        responses.insert("200".to_string(), response);
        Self {
            summary,
            parameters,
            responses,
        }
    }
}

/// Path Item Object. Only enabled verbs are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// `GET`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// `PUT`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// `POST`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// `PATCH`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// `DELETE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

impl PathItem {
    /// Present verbs with their operations, in serialization order.
    pub fn operations(&self) -> Vec<(&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("patch", &self.patch),
            ("delete", &self.delete),
        ]
        .into_iter()
        .filter_map(|(verb, op)| op.as_ref().map(|op| (verb, op)))
        .collect()
    }

    /// True when no verb is documented.
    pub fn is_empty(&self) -> bool {
        self.operations().is_empty()
    }
}
