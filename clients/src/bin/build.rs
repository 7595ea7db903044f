//! `fractal-build`: writes the reference Fractal Field taxonomy and its
//! validation report to the output directory.
//!
//! **Outputs:**
//! - `<out>/fractal-field.json`: the taxonomy as a JSON field array
//! - `<out>/validation-report.md`: the structural validation report
//!
//! **Usage:**
//! ```
//! fractal-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fractal_field::serializer::json;
use fractal_field::Taxonomy;
use fractal_field_conformance::{generate_validation_report, validate_reference, ValidationOptions};

/// Build the Fractal Field taxonomy artifacts.
#[derive(Parser)]
#[command(name = "fractal-build", about = "Build Fractal Field taxonomy artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    fractal_field_clients::init_tracing();
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let taxonomy = Taxonomy::full();

    println!(
        "Fractal Field taxonomy v{}: {} fields, {} petals, {} nodes",
        taxonomy.version,
        taxonomy.fields.len(),
        taxonomy.petal_count(),
        taxonomy.node_count()
    );

    // Validate first; never publish an incomplete taxonomy.
    let result = validate_reference(&ValidationOptions::default());
    if !result.is_valid {
        bail!("Reference taxonomy is incomplete: {}", result.summary);
    }

    // JSON
    let json_path = out.join("fractal-field.json");
    let json_str = json::to_json(taxonomy)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .context("Failed to serialize taxonomy to JSON")?;
    fs::write(&json_path, &json_str)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    println!("  Written: {}", json_path.display());

    // Validation report
    let report_path = out.join("validation-report.md");
    fs::write(&report_path, generate_validation_report(&result))
        .with_context(|| format!("Failed to write {}", report_path.display()))?;
    println!("  Written: {}", report_path.display());

    println!("{}", result.summary);
    Ok(())
}
