#![deny(missing_docs)]

//! # Evedoc CLI
//!
//! Command Line Interface for generating Swagger documentation from an
//! Eve-style resource domain.
//!
//! Supported Commands:
//! - `paths`: Emits only the `paths` section.
//! - `document`: Emits a full Swagger 2.0 document.

use clap::{Parser, Subcommand};
use evedoc_core::AppResult;

mod document;
mod logging;
mod output;
mod paths;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Swagger documentation for Eve-style domains")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the Swagger `paths` section.
    Paths(paths::PathsArgs),
    /// Generate a complete Swagger 2.0 document.
    Document(document::DocumentArgs),
}

fn main() -> AppResult<()> {
    logging::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Paths(args) => paths::execute(args)?,
        Commands::Document(args) => document::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_document_flags() {
        let cli = Cli::try_parse_from([
            "evedoc",
            "document",
            "--domain",
            "domain.yaml",
            "--title",
            "People API",
            "--format",
            "yaml",
        ])
        .unwrap();
        match cli.command {
            Commands::Document(args) => {
                assert_eq!(args.title, "People API");
                assert_eq!(args.api_version, "1.0");
                assert_eq!(args.output.format, output::Format::Yaml);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
