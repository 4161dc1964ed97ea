#![deny(missing_docs)]

//! # Document Command
//!
//! Emits a complete Swagger 2.0 document: info, paths and definitions.

use crate::output::{emit, OutputArgs};
use evedoc_core::{load_domain, AppError, AppResult, Info, SwaggerDocument};
use std::path::PathBuf;

/// Arguments for the document command.
#[derive(clap::Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Domain file (`.json`, otherwise YAML).
    #[clap(long, env = "EVEDOC_DOMAIN")]
    pub domain: PathBuf,

    /// API title written to `info.title`.
    #[clap(long, default_value = "API")]
    pub title: String,

    /// API version written to `info.version`.
    #[clap(long = "api-version", default_value = "1.0")]
    pub api_version: String,

    /// Optional `info.description`.
    #[clap(long)]
    pub description: Option<String>,

    /// Optional `basePath` (e.g. `/api/v1`).
    #[clap(long)]
    pub base_path: Option<String>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Executes the document command.
pub fn execute(args: &DocumentArgs) -> AppResult<()> {
    if !args.domain.exists() {
        return Err(AppError::General(format!(
            "Domain file not found: {:?}",
            args.domain
        )));
    }

    let domain = load_domain(&args.domain)?;
    let mut info = Info::new(args.title.clone(), args.api_version.clone());
    info.description = args.description.clone();

    let document = SwaggerDocument::generate(&domain, info, args.base_path.clone());
    emit(&document, &args.output)
}
