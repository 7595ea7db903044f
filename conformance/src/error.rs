//! Errors raised while loading validator input or options.
//!
//! Validation findings are never errors; they are recorded in the
//! [`ValidationResult`](crate::ValidationResult). Only reading and parsing
//! the raw input can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a taxonomy document or a validation options file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("failed to parse taxonomy JSON")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its top level is not an array of fields.
    #[error("taxonomy JSON must be an array of fields, found {found}")]
    NotAnArray {
        /// JSON kind found at the top level (e.g., `"object"`).
        found: &'static str,
    },

    /// The options file is not valid TOML for [`ValidationOptions`](crate::ValidationOptions).
    #[error("failed to parse validation options")]
    Config(#[from] toml::de::Error),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
