#![deny(missing_docs)]

//! # Paths Command
//!
//! Emits the Swagger `paths` section for a domain file.

use crate::output::{emit, OutputArgs};
use evedoc_core::{build_paths, load_domain, AppError, AppResult};
use std::path::PathBuf;

/// Arguments for the paths command.
#[derive(clap::Args, Debug, Clone)]
pub struct PathsArgs {
    /// Domain file (`.json`, otherwise YAML).
    #[clap(long, env = "EVEDOC_DOMAIN")]
    pub domain: PathBuf,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Executes the paths command.
pub fn execute(args: &PathsArgs) -> AppResult<()> {
    if !args.domain.exists() {
        return Err(AppError::General(format!(
            "Domain file not found: {:?}",
            args.domain
        )));
    }

    let domain = load_domain(&args.domain)?;
    let paths = build_paths(&domain);
    emit(&paths, &args.output)
}
