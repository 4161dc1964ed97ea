#![deny(missing_docs)]

//! # Swagger Generation
//!
//! Swagger 2.0 object model and the builders that derive it from a domain.

/// Serializable Swagger 2.0 objects.
pub mod models;

/// Per-verb operation builders.
pub mod operations;

/// `paths` section builder.
pub mod paths;

/// `definitions` section builder.
pub mod definitions;

/// Root document assembly.
pub mod document;

pub use definitions::build_definitions;
pub use document::{Info, SwaggerDocument, SWAGGER_VERSION};
pub use models::{Definitions, Operation, Parameter, PathItem, PathsDocument, Response, Schema};
pub use paths::{build_paths, PathBuilder};
