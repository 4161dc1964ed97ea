#![deny(missing_docs)]

//! # Output
//!
//! Shared rendering and writing of generated documents.

use evedoc_core::{AppError, AppResult};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Serialization format for generated output.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Output arguments shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format.
    #[clap(long, value_enum, default_value = "json")]
    pub format: Format,

    /// File to write. Prints to stdout when absent.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

/// Renders `value` in the requested format.
pub fn render<T: Serialize>(value: &T, format: Format) -> AppResult<String> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

/// Renders `value` and writes it to the configured destination.
///
/// Rendering happens before any file is touched.
pub fn emit<T: Serialize>(value: &T, args: &OutputArgs) -> AppResult<()> {
    let text = render(value, args.format)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::General(format!("Failed to create output dir: {}", e))
                })?;
            }
            fs::write(path, text)
                .map_err(|e| AppError::General(format!("Failed to write {:?}: {}", path, e)))?;
            tracing::info!(path = ?path, "wrote output");
        }
        None => println!("{}", text.trim_end()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_render_formats() {
        let value = json!({"swagger": "2.0"});
        assert_eq!(render(&value, Format::Json).unwrap(), "{\n  \"swagger\": \"2.0\"\n}");
        let yaml = render(&value, Format::Yaml).unwrap();
        assert!(yaml.starts_with("swagger:"));
        assert!(yaml.contains("2.0"));
    }

    #[test]
    fn test_emit_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs/nested/swagger.json");
        let args = OutputArgs {
            format: Format::Json,
            output: Some(path.clone()),
        };
        emit(&json!({"paths": {}}), &args).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("\"paths\""));
    }
}
