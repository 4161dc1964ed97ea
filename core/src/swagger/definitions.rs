#![deny(missing_docs)]

//! # Definitions
//!
//! Derives the `definitions` section from each resource's field rules, so
//! the `$ref` pointers emitted by the path builder resolve.

use crate::domain::{Domain, FieldRule, FieldType};
use crate::swagger::models::{Definitions, Schema};

/// Builds one object definition per documented resource.
///
/// Definitions are keyed by `item_title`, in domain order. A resource without
/// field rules gets a bare `{type: object}`, so every `$ref` emitted for it
/// still resolves.
pub fn build_definitions(domain: &Domain) -> Definitions {
    let mut definitions = Definitions::new();

    for (name, rd) in domain {
        if rd.disable_documentation {
            continue;
        }

        let mut object = Schema::primitive("object", None);
        for (field, rule) in rd.schema.iter().flatten() {
            object.properties.insert(field.clone(), property_schema(rule));
            if rule.required {
                object.required.push(field.clone());
            }
        }

        if definitions.insert(rd.item_title.clone(), object).is_some() {
            tracing::warn!(
                resource = %name,
                definition = %rd.item_title,
                "item_title shared with an earlier resource, definition replaced"
            );
        }
    }

    definitions
}

/// Maps one Eve field rule onto a Swagger property schema.
pub fn property_schema(rule: &FieldRule) -> Schema {
    match rule.field_type {
        Some(FieldType::Integer) => Schema::primitive("integer", None),
        Some(FieldType::Float) | Some(FieldType::Number) => Schema::primitive("number", None),
        Some(FieldType::Boolean) => Schema::primitive("boolean", None),
        Some(FieldType::Datetime) => Schema::primitive("string", Some("date-time")),
        Some(FieldType::Objectid) => Schema::primitive("string", Some("objectid")),
        Some(FieldType::Dict) => Schema::primitive("object", None),
        Some(FieldType::List) => {
            let items = rule
                .schema
                .as_deref()
                .filter(|inner| inner.field_type.is_some())
                .map(property_schema)
                .unwrap_or_else(|| Schema::primitive("string", None));
            Schema::array_of(items)
        }
        Some(FieldType::String) | Some(FieldType::Other) | None => {
            Schema::primitive("string", None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_domain_yaml;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const DOMAIN: &str = r#"
people:
  url: people
  resource_title: People
  item_title: Person
  resource_methods: [GET]
  item_methods: []
  schema:
    name: {type: string, required: true}
    age: {type: integer}
    born: {type: datetime}
    friends: {type: list, schema: {type: objectid}}
    tags: {type: list}
    address: {type: dict, schema: {city: {type: string}}}
    email: {required: true}
hidden:
  url: hidden
  resource_title: Hidden
  item_title: Secret
  resource_methods: [GET]
  item_methods: []
  disable_documentation: true
  schema:
    code: {type: string}
bare:
  url: bare
  resource_title: Bares
  item_title: Bare
  resource_methods: [GET]
  item_methods: []
"#;

    #[test]
    fn test_definitions_follow_schema() {
        let domain = parse_domain_yaml(DOMAIN).unwrap();
        let definitions = build_definitions(&domain);
        let names: Vec<&str> = definitions.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Person", "Bare"]);
        assert_eq!(
            serde_json::to_value(&definitions["Bare"]).unwrap(),
            json!({"type": "object"})
        );

        let value = serde_json::to_value(&definitions["Person"]).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "age": {"type": "integer"},
                    "born": {"type": "string", "format": "date-time"},
                    "friends": {"type": "array", "items": {"type": "string", "format": "objectid"}},
                    "tags": {"type": "array", "items": {"type": "string"}},
                    "address": {"type": "object"},
                    "email": {"type": "string"}
                },
                "required": ["name", "email"]
            })
        );
    }

    #[test]
    fn test_required_omitted_when_empty() {
        let domain = parse_domain_yaml(
            "tags:\n  url: tags\n  resource_title: Tags\n  item_title: Tag\n  resource_methods: []\n  item_methods: []\n  schema:\n    label: {type: string}\n",
        )
        .unwrap();
        let value = serde_json::to_value(&build_definitions(&domain)["Tag"]).unwrap();
        assert!(value.get("required").is_none());
    }

    #[test]
    fn test_shared_item_title_keeps_last_definition() {
        let domain = parse_domain_yaml(
            "a:\n  url: a\n  resource_title: As\n  item_title: Thing\n  resource_methods: [GET]\n  item_methods: []\n  schema:\n    first: {type: string}\nb:\n  url: b\n  resource_title: Bs\n  item_title: Thing\n  resource_methods: [GET]\n  item_methods: []\n  schema:\n    second: {type: integer}\n",
        )
        .unwrap();
        let definitions = build_definitions(&domain);
        assert_eq!(definitions.len(), 1);
        let props: Vec<&str> = definitions["Thing"]
            .properties
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(props, vec!["second"]);
    }
}
