//! JSON serializer for the Fractal Field taxonomy.
//!
//! Produces a single JSON array of field objects in display order, through
//! the model's `Serialize` derives. Keys use the camelCase names of the
//! shape contract (`dominantResonance`, `pNumber`, `rNumber`, `rName`); a
//! node's `children` key is emitted only when the node is a branch.

use serde_json::Value;

use crate::model::{Field, Taxonomy};

/// Serializes the complete taxonomy to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if serialization fails.
pub fn to_json(taxonomy: &Taxonomy) -> serde_json::Result<Value> {
    fields_to_json(&taxonomy.fields)
}

/// Serializes a slice of fields to a JSON array.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if serialization fails.
pub fn fields_to_json(fields: &[Field]) -> serde_json::Result<Value> {
    serde_json::to_value(fields)
}
