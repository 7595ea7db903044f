//! Validation options: which fields must exist, how many petals each
//! carries, and how deep node checks descend.
//!
//! Options can be built in code or read from TOML:
//!
//! ```toml
//! expected_field_names = ["Tata", "Atlas"]
//! expected_petal_count = 6
//! node_depth = 2
//! ```
//!
//! Every key is optional; absent keys take the [`Default`] value.

use std::path::Path;

use fractal_field::{CANONICAL_FIELD_NAMES, CANONICAL_PETAL_COUNT};
use serde::Deserialize;

use crate::error::LoadError;

/// Node depth checked by the reference validator: a petal's direct children.
pub const DEFAULT_NODE_DEPTH: usize = 1;

/// Shape constraints the validator checks a field sequence against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    /// Names that must be present among the validated fields.
    pub expected_field_names: Vec<String>,
    /// Required number of petals per field.
    pub expected_petal_count: usize,
    /// Number of node levels below a petal whose properties are checked.
    /// `1` checks a petal's direct children only.
    pub node_depth: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            expected_field_names: CANONICAL_FIELD_NAMES.iter().map(|n| (*n).to_owned()).collect(),
            expected_petal_count: CANONICAL_PETAL_COUNT,
            node_depth: DEFAULT_NODE_DEPTH,
        }
    }
}

impl ValidationOptions {
    /// Creates options expecting `names`, with default petal count and depth.
    pub fn expecting<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_field_names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the required petal count.
    #[must_use]
    pub fn with_petal_count(mut self, expected_petal_count: usize) -> Self {
        self.expected_petal_count = expected_petal_count;
        self
    }

    /// Sets the node depth. A depth of `0` is treated as `1`.
    #[must_use]
    pub fn with_node_depth(mut self, node_depth: usize) -> Self {
        self.node_depth = node_depth.max(DEFAULT_NODE_DEPTH);
        self
    }

    /// Parses options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Config`] if the text is not valid TOML or carries
    /// unknown keys or values of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, LoadError> {
        let options: Self = toml::from_str(text)?;
        let depth = options.node_depth;
        Ok(options.with_node_depth(depth))
    }

    /// Reads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, or
    /// [`LoadError::Config`] if it cannot be parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference() {
        let options = ValidationOptions::default();
        assert_eq!(options.expected_field_names, ["Tata", "Atlas", "Dojo", "ObiWan"]);
        assert_eq!(options.expected_petal_count, 6);
        assert_eq!(options.node_depth, 1);
    }

    #[test]
    fn toml_keys_are_optional() {
        let options = ValidationOptions::from_toml_str("expected_petal_count = 3\n");
        assert!(matches!(
            options,
            Ok(ref o) if o.expected_petal_count == 3 && o.expected_field_names.len() == 4
        ));
    }

    #[test]
    fn toml_zero_depth_is_clamped() {
        let options = ValidationOptions::from_toml_str("node_depth = 0\n");
        assert!(matches!(options, Ok(ref o) if o.node_depth == 1));
    }

    #[test]
    fn toml_depth_is_kept() {
        let options = ValidationOptions::from_toml_str("node_depth = 3\nexpected_field_names = []\n");
        assert!(matches!(
            options,
            Ok(ref o) if o.node_depth == 3 && o.expected_field_names.is_empty()
        ));
    }

    #[test]
    fn toml_unknown_key_is_rejected() {
        let options = ValidationOptions::from_toml_str("petals = 6\n");
        assert!(matches!(options, Err(LoadError::Config(_))));
    }

    #[test]
    fn builder_overrides() {
        let options = ValidationOptions::expecting(["Tata"])
            .with_petal_count(2)
            .with_node_depth(3);
        assert_eq!(options.expected_field_names, ["Tata"]);
        assert_eq!(options.expected_petal_count, 2);
        assert_eq!(options.node_depth, 3);
    }
}
