#![deny(missing_docs)]

//! # Document Assembly
//!
//! Wraps the generated `paths` and `definitions` in a Swagger 2.0 root object.

use crate::domain::Domain;
use crate::error::AppResult;
use crate::swagger::definitions::build_definitions;
use crate::swagger::models::{Definitions, PathsDocument};
use crate::swagger::paths::build_paths;
use serde::{Deserialize, Serialize};

/// Swagger version string written to every document.
pub const SWAGGER_VERSION: &str = "2.0";

/// Info Object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Info {
    /// Creates an Info Object without description.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }
}

/// Root Swagger 2.0 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// Always [`SWAGGER_VERSION`].
    pub swagger: String,
    /// Metadata.
    pub info: Info,
    /// URL prefix shared by all paths.
    #[serde(rename = "basePath", default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Endpoints.
    pub paths: PathsDocument,
    /// Named schemas referenced from `paths`.
    #[serde(default, skip_serializing_if = "Definitions::is_empty")]
    pub definitions: Definitions,
}

impl SwaggerDocument {
    /// Generates the full document for `domain`.
    pub fn generate(domain: &Domain, info: Info, base_path: Option<String>) -> Self {
        Self {
            swagger: SWAGGER_VERSION.to_string(),
            info,
            base_path,
            paths: build_paths(domain),
            definitions: build_definitions(domain),
        }
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// YAML rendering.
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
