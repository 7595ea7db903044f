//! `fractal-validate`: checks a Fractal Field taxonomy for structural completeness.
//!
//! Validates the built-in reference taxonomy, or a JSON document given with
//! `--input`, and prints the report to stdout as markdown, HTML or JSON.
//!
//! **Usage:**
//! ```
//! fractal-validate [--input <file.json>] [--config <options.toml>]
//!                  [--expect-field <name>]... [--petals <n>] [--depth <n>]
//!                  [--format markdown|html|json]
//! ```
//!
//! Exits non-zero if the taxonomy is not structurally complete.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fractal_field_conformance::{
    generate_validation_report, render_report_html, validate_json_file, validate_reference,
    ValidationOptions, ValidationResult,
};
use tracing::info;

/// Output rendering of the validation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Markdown report.
    Markdown,
    /// Markdown report rendered to HTML.
    Html,
    /// The structured result as pretty-printed JSON.
    Json,
}

/// Validate a Fractal Field taxonomy.
#[derive(Parser)]
#[command(
    name = "fractal-validate",
    about = "Validate the structural completeness of a Fractal Field taxonomy"
)]
struct Args {
    /// JSON taxonomy to validate (default: the built-in reference taxonomy).
    #[arg(long)]
    input: Option<PathBuf>,

    /// TOML file with validation options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field name that must be present; repeat for several. Replaces the
    /// configured names.
    #[arg(long = "expect-field", value_name = "NAME")]
    expect_field: Vec<String>,

    /// Required number of petals per field.
    #[arg(long)]
    petals: Option<usize>,

    /// Node levels below each petal to check.
    #[arg(long)]
    depth: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,
}

impl Args {
    /// Builds options from the config file, then applies flag overrides.
    fn options(&self) -> Result<ValidationOptions> {
        let mut options = match &self.config {
            Some(path) => ValidationOptions::from_toml_file(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => ValidationOptions::default(),
        };
        if !self.expect_field.is_empty() {
            options.expected_field_names = self.expect_field.clone();
        }
        if let Some(petals) = self.petals {
            options = options.with_petal_count(petals);
        }
        if let Some(depth) = self.depth {
            options = options.with_node_depth(depth);
        }
        Ok(options)
    }
}

fn render(result: &ValidationResult, format: Format) -> Result<String> {
    Ok(match format {
        Format::Markdown => generate_validation_report(result),
        Format::Html => render_report_html(result),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(result)
                .context("Failed to serialize validation result")?;
            json.push('\n');
            json
        }
    })
}

fn main() -> Result<()> {
    fractal_field_clients::init_tracing();
    let args = Args::parse();
    let options = args.options()?;

    let result = match &args.input {
        Some(path) => {
            info!(input = %path.display(), "validating taxonomy document");
            validate_json_file(path, &options)
                .with_context(|| format!("Failed to validate {}", path.display()))?
        }
        None => {
            info!("validating reference taxonomy");
            validate_reference(&options)
        }
    };

    print!("{}", render(&result, args.format)?);

    if !result.is_valid {
        eprintln!(
            "Validation FAILED: {} field(s) incomplete.",
            result.failure_count()
        );
        process::exit(1);
    }

    Ok(())
}
