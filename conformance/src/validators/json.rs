//! Raw JSON taxonomy validator.
//!
//! Accepts a document that has not been deserialized into typed entities
//! (for example a registry export) and runs the structural checks over it
//! by key presence. The document must be a JSON array of field objects.

use std::path::Path;

use serde_json::Value;

use crate::error::LoadError;
use crate::options::ValidationOptions;
use crate::report::ValidationResult;
use crate::validators::structure::validate_fractal_field_structure;

/// Validates a parsed JSON document.
///
/// # Errors
///
/// Returns [`LoadError::NotAnArray`] if `value` is not a JSON array.
pub fn validate_json_value(
    value: &Value,
    options: &ValidationOptions,
) -> Result<ValidationResult, LoadError> {
    let fields = value.as_array().ok_or(LoadError::NotAnArray {
        found: json_kind(value),
    })?;
    Ok(validate_fractal_field_structure(fields, options))
}

/// Parses and validates a JSON document.
///
/// # Errors
///
/// Returns [`LoadError::Json`] if `text` is not valid JSON, or
/// [`LoadError::NotAnArray`] if its top level is not an array.
pub fn validate_json_str(
    text: &str,
    options: &ValidationOptions,
) -> Result<ValidationResult, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    validate_json_value(&value, options)
}

/// Reads, parses and validates a JSON document from disk.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise the
/// errors of [`validate_json_str`].
pub fn validate_json_file(
    path: &Path,
    options: &ValidationOptions,
) -> Result<ValidationResult, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    validate_json_str(&text, options)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_root_is_rejected() {
        let err = validate_json_str(r#"{"fields": []}"#, &ValidationOptions::default());
        assert!(matches!(err, Err(LoadError::NotAnArray { found: "object" })));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = validate_json_str("[{", &ValidationOptions::default());
        assert!(matches!(err, Err(LoadError::Json(_))));
    }

    #[test]
    fn field_without_petals_reads_as_empty() {
        let options = ValidationOptions::expecting(["Tata"]);
        let result = validate_json_str(r#"[{"name": "Tata"}]"#, &options);
        let details = result.map(|r| r.field_results[0].incomplete_details.clone());
        assert!(matches!(details, Ok(ref d) if d == &["Expected 6 petals, found 0"]));
    }

    #[test]
    fn unnamed_field_uses_placeholder() {
        let options = ValidationOptions::expecting(Vec::<String>::new()).with_petal_count(0);
        let result = validate_json_str(r#"[{"petals": []}]"#, &options);
        let name = result.map(|r| r.field_results[0].field_name.clone());
        assert!(matches!(name, Ok(ref n) if n == "<unnamed>"));
    }

    #[test]
    fn html_report_escapes_document_names() {
        let options = ValidationOptions::expecting(Vec::<String>::new()).with_petal_count(0);
        let result = validate_json_str(
            r#"[{"petals": []}, {"name": "<img src=x onerror=alert(1)>", "petals": []}]"#,
            &options,
        );
        let html = result.map(|r| crate::render_report_html(&r)).unwrap_or_default();
        assert!(html.contains("<h2>✅ &lt;unnamed&gt;</h2>"), "{}", html);
        assert!(html.contains("<h2>✅ &lt;img src=x onerror=alert(1)&gt;</h2>"), "{}", html);
        assert!(!html.contains("<img"));
    }
}
