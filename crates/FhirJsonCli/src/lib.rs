//! # FHIR JSON CLI
//!
//! Command-line front end for the `fhir-model` crate. It decodes a FHIR JSON
//! document for a chosen version, reports its `resourceType` and writes the
//! canonical re-encoding, or lists the discriminators a version registers.
//!
//! ## Command Line Options
//!
//! ```text
//! -i, --input <INPUT>               Path to a FHIR JSON document (or use stdin if not provided)
//! -o, --output <OUTPUT>             Output file path (defaults to stdout)
//!     --fhir-version <VERSION>      FHIR version to use [env: FHIR_JSON_VERSION] [default: R4]
//! -p, --pretty                      Indent the re-encoded document [env: FHIR_JSON_PRETTY]
//!     --list-types                  Print the registered discriminators and exit
//!     --log-level <LEVEL>           Log level (error, warn, info, debug, trace) [env: FHIR_JSON_LOG_LEVEL] [default: warn]
//! -h, --help                        Print help
//! ```
//!
//! ## Usage Examples
//!
//! ### Re-encode a document
//! ```bash
//! fhir-json --input patient.json --pretty
//! ```
//!
//! ### Read from stdin with STU3
//! ```bash
//! cat medication_statement.json | fhir-json --fhir-version STU3
//! ```
//!
//! ### List R4 types
//! ```bash
//! fhir-json --list-types
//! ```
//!
//! A document that fails to decode ends the process with a non-zero status and
//! the error on stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fhir_model::{FhirVersion, ParserConfig};
use tracing::info;

/// Command-line arguments for `fhir-json`.
#[derive(Parser, Debug)]
#[command(name = "fhir-json")]
#[command(about = "Decode and re-encode FHIR JSON documents")]
pub struct Args {
    /// Path to a FHIR JSON document (or use stdin if not provided)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// FHIR version to use
    #[arg(long, value_enum, env = "FHIR_JSON_VERSION", default_value_t = FhirVersion::R4)]
    pub fhir_version: FhirVersion,

    /// Indent the re-encoded document
    #[arg(long, short = 'p', env = "FHIR_JSON_PRETTY")]
    pub pretty: bool,

    /// Print the registered discriminators and exit
    #[arg(long)]
    pub list_types: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "FHIR_JSON_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            pretty_print: self.pretty,
        }
    }
}

/// Decodes `json` as a resource of `version` and re-encodes it.
pub fn reencode(version: FhirVersion, json: &str, config: ParserConfig) -> Result<String> {
    let resource = fhir_model::parse_resource(version, json)
        .with_context(|| format!("Failed to decode FHIR {} document", version))?;
    info!(
        resource_type = resource.resource_type(),
        id = resource.id().unwrap_or("-"),
        "Decoded resource"
    );
    resource
        .to_json(config)
        .with_context(|| format!("Failed to encode {}", resource.resource_type()))
}

/// One discriminator per line, elements first.
pub fn list_types(version: FhirVersion) -> String {
    let mut out = String::new();
    for name in fhir_model::registered_types(version) {
        out.push_str(name);
        out.push('\n');
    }
    out
}

pub fn run(args: &Args) -> Result<()> {
    let rendered = if args.list_types {
        list_types(args.fhir_version)
    } else {
        let json = read_input(args.input.as_ref())?;
        let mut rendered = reencode(args.fhir_version, &json, args.parser_config())?;
        rendered.push('\n');
        rendered
    };
    write_output(args.output.as_ref(), &rendered)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&PathBuf>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
