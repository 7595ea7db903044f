//! Structural validators.
//!
//! - [`structure`]: the completeness walk over any [`FieldShape`](crate::shape::FieldShape) input
//! - [`json`]: loading and validating raw JSON documents

pub mod json;
pub mod structure;
