#![deny(missing_docs)]

//! # Evedoc Core
//!
//! Derives Swagger 2.0 documentation from an Eve-style resource domain.
//!
//! ```
//! use evedoc_core::{build_paths, parse_domain_yaml};
//!
//! let domain = parse_domain_yaml(
//!     "people:\n  url: people\n  resource_title: People\n  item_title: Person\n  resource_methods: [GET]\n  item_methods: [GET]\n",
//! ).unwrap();
//! let paths = build_paths(&domain);
//! assert!(paths.contains_key("/people/{personId}"));
//! ```

/// Shared error types.
pub mod error;

/// Resource domain model and loaders.
pub mod domain;

/// Swagger document generation.
pub mod swagger;

pub use domain::{
    load_domain, parse_domain_json, parse_domain_yaml, Domain, FieldRule, FieldType, Method,
    ResourceDescriptor,
};
pub use error::{AppError, AppResult};
pub use swagger::{
    build_definitions, build_paths, Info, Operation, Parameter, PathBuilder, PathItem,
    PathsDocument, Response, Schema, SwaggerDocument,
};
