//! Fractal Field structural validator.
//!
//! This crate checks that a Fractal Field taxonomy is structurally complete
//! against a fixed shape contract and renders the outcome as a markdown
//! report.
//!
//! # Checks
//!
//! | Level | Constraint |
//! |-------|------------|
//! | Field | every expected name is present; petal count equals the expected count |
//! | Petal | at least one recursive node; `name`, `glyph`, `description`, `pNumber` present |
//! | Node | `name`, `glyph`, `color`, `description`, `rNumber`, `rName` present |
//!
//! # Entry Point
//!
//! ```
//! use fractal_field_conformance::{
//!     generate_validation_report, validate_reference, ValidationOptions,
//! };
//!
//! let result = validate_reference(&ValidationOptions::default());
//! assert!(result.is_valid);
//! let markdown = generate_validation_report(&result);
//! assert!(markdown.starts_with("# Fractal Field Validation Report"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod markdown;
pub mod options;
pub mod report;
pub mod shape;
pub mod validators;

pub use error::LoadError;
pub use markdown::{generate_validation_report, render_report_html};
pub use options::ValidationOptions;
pub use report::{FieldValidationResult, ValidationResult};
pub use shape::{FieldShape, NodeShape, PetalShape};
pub use validators::json::{validate_json_file, validate_json_str, validate_json_value};
pub use validators::structure::validate_fractal_field_structure;

use fractal_field::Taxonomy;

/// Validates the reference taxonomy ([`Taxonomy::full`]).
pub fn validate_reference(options: &ValidationOptions) -> ValidationResult {
    validate_fractal_field_structure(&Taxonomy::full().fields, options)
}
