#![deny(missing_docs)]

//! # Path Builder
//!
//! Walks a [`Domain`] and emits one Path Item Object per enabled endpoint.
//!
//! Output order follows the domain's declaration order, with a resource's
//! collection path inserted before its item path.

use crate::domain::{Domain, Method, ResourceDescriptor};
use crate::swagger::models::{PathItem, PathsDocument};
use crate::swagger::operations;

/// Builds the `paths` section for a borrowed domain.
#[derive(Debug, Clone, Copy)]
pub struct PathBuilder<'a> {
    domain: &'a Domain,
}

impl<'a> PathBuilder<'a> {
    /// Creates a builder over `domain`.
    pub fn new(domain: &'a Domain) -> Self {
        Self { domain }
    }

    /// Produces the ordered paths document.
    pub fn build(&self) -> PathsDocument {
        let mut paths = PathsDocument::new();

        for (name, rd) in self.domain {
            if rd.disable_documentation {
                tracing::debug!(resource = %name, "documentation disabled, skipping");
                continue;
            }

            if !rd.resource_methods.is_empty() {
                let url = rd.collection_url();
                tracing::debug!(resource = %name, url = %url, "collection path");
                paths.insert(url, collection_item(rd));
            }

            if !rd.item_methods.is_empty() {
                let item_id = rd.item_id();
                let url = rd.item_url(&item_id);
                tracing::debug!(resource = %name, url = %url, "item path");
                paths.insert(url, document_item(rd, &item_id));
            }
        }

        tracing::info!(
            resources = self.domain.len(),
            paths = paths.len(),
            "built swagger paths"
        );
        paths
    }
}

/// Shorthand for `PathBuilder::new(domain).build()`.
pub fn build_paths(domain: &Domain) -> PathsDocument {
    PathBuilder::new(domain).build()
}

fn collection_item(rd: &ResourceDescriptor) -> PathItem {
    PathItem {
        get: rd
            .allows_resource(Method::Get)
            .then(|| operations::get_collection(rd)),
        post: rd
            .allows_resource(Method::Post)
            .then(|| operations::post_collection(rd)),
        delete: rd
            .allows_resource(Method::Delete)
            .then(|| operations::delete_collection(rd)),
        ..Default::default()
    }
}

fn document_item(rd: &ResourceDescriptor, item_id: &str) -> PathItem {
    PathItem {
        get: rd
            .allows_item(Method::Get)
            .then(|| operations::get_item(rd, item_id)),
        put: rd
            .allows_item(Method::Put)
            .then(|| operations::put_item(rd, item_id)),
        patch: rd
            .allows_item(Method::Patch)
            .then(|| operations::patch_item(rd, item_id)),
        delete: rd
            .allows_item(Method::Delete)
            .then(|| operations::delete_item(rd, item_id)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_domain_yaml;

    fn domain(yaml: &str) -> Domain {
        parse_domain_yaml(yaml).unwrap()
    }

    #[test]
    fn test_collection_only() {
        let d = domain(
            "tags:\n  url: tags\n  resource_title: Tags\n  item_title: Tag\n  resource_methods: [GET]\n  item_methods: []\n",
        );
        let paths = build_paths(&d);
        let keys: Vec<&str> = paths.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/tags"]);
    }

    #[test]
    fn test_item_only() {
        let d = domain(
            "tags:\n  url: tags\n  resource_title: Tags\n  item_title: Tag\n  resource_methods: []\n  item_methods: [PATCH]\n",
        );
        let paths = build_paths(&d);
        let keys: Vec<&str> = paths.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/tags/{tagId}"]);
        let verbs: Vec<&str> = paths["/tags/{tagId}"]
            .operations()
            .into_iter()
            .map(|(verb, _)| verb)
            .collect();
        assert_eq!(verbs, vec!["patch"]);
    }

    #[test]
    fn test_disabled_resource_contributes_nothing() {
        let d = domain(
            "hidden:\n  url: hidden\n  resource_title: Hidden\n  item_title: Secret\n  resource_methods: [GET, POST, DELETE]\n  item_methods: [GET, PUT, PATCH, DELETE]\n  disable_documentation: true\n",
        );
        assert!(build_paths(&d).is_empty());
    }

    #[test]
    fn test_verbs_outside_scope_are_ignored() {
        // PUT has no collection-level meaning, POST none at item level.
        let d = domain(
            "tags:\n  url: tags\n  resource_title: Tags\n  item_title: Tag\n  resource_methods: [PUT]\n  item_methods: [POST]\n",
        );
        let paths = build_paths(&d);
        assert!(paths["/tags"].is_empty());
        assert!(paths["/tags/{tagId}"].is_empty());
    }

    #[test]
    fn test_nested_url_template() {
        let d = crate::domain::parse_domain_json(
            r#"{"comments": {"url": "posts/<regex('[a-f0-9]{24}'):post>/comments",
                "resource_title": "Comments", "item_title": "Comment",
                "resource_methods": ["GET"], "item_methods": ["GET"]}}"#,
        )
        .unwrap();
        let paths = build_paths(&d);
        let keys: Vec<&str> = paths.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "/posts/<regex('[a-f0-9]{24}'):post>/comments",
                "/posts/<regex('[a-f0-9]{24}'):post>/comments/{commentId}",
            ]
        );
    }

    #[test]
    fn test_empty_domain() {
        assert!(build_paths(&Domain::new()).is_empty());
    }
}
