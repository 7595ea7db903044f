//! Validation report types: per-field outcomes and the aggregated result.

use serde::Serialize;

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidationResult {
    /// Name of the field (or of the expected field that is missing).
    pub field_name: String,
    /// True if no check on this field failed.
    pub is_complete: bool,
    /// Number of petals observed on the field.
    pub petal_count: usize,
    /// Number of petals the field was expected to carry.
    pub expected_petal_count: usize,
    /// Issue messages in discovery order.
    pub incomplete_details: Vec<String>,
}

impl FieldValidationResult {
    /// Creates a complete result for a present field; issues are added with
    /// [`FieldValidationResult::fail`].
    pub fn new(
        field_name: impl Into<String>,
        petal_count: usize,
        expected_petal_count: usize,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            is_complete: true,
            petal_count,
            expected_petal_count,
            incomplete_details: Vec::new(),
        }
    }

    /// Creates the result for an expected field absent from the input.
    pub fn missing(field_name: impl Into<String>, expected_petal_count: usize) -> Self {
        let field_name = field_name.into();
        let detail = format!("Field \"{}\" is missing entirely", field_name);
        Self {
            field_name,
            is_complete: false,
            petal_count: 0,
            expected_petal_count,
            incomplete_details: vec![detail],
        }
    }

    /// Marks the field incomplete and records `detail`.
    pub fn fail(&mut self, detail: impl Into<String>) {
        self.is_complete = false;
        self.incomplete_details.push(detail.into());
    }
}

/// Aggregated result of a structural validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff every entry in `field_results` is complete.
    pub is_valid: bool,
    /// Missing expected fields first, then every present field in input order.
    pub field_results: Vec<FieldValidationResult>,
    /// One-line human-readable summary.
    pub summary: String,
}

impl ValidationResult {
    /// Returns the number of complete field results.
    pub fn complete_count(&self) -> usize {
        self.field_results.iter().filter(|r| r.is_complete).count()
    }

    /// Returns the number of incomplete field results.
    pub fn failure_count(&self) -> usize {
        self.field_results.len() - self.complete_count()
    }

    /// Returns the result for `field_name`, if one was produced.
    pub fn find(&self, field_name: &str) -> Option<&FieldValidationResult> {
        self.field_results.iter().find(|r| r.field_name == field_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_incomplete() {
        let result = FieldValidationResult::missing("Dojo", 6);
        assert!(!result.is_complete);
        assert_eq!(result.petal_count, 0);
        assert_eq!(result.expected_petal_count, 6);
        assert_eq!(result.incomplete_details, ["Field \"Dojo\" is missing entirely"]);
    }

    #[test]
    fn fail_records_detail_in_order() {
        let mut result = FieldValidationResult::new("Tata", 5, 6);
        assert!(result.is_complete);
        result.fail("first");
        result.fail("second");
        assert!(!result.is_complete);
        assert_eq!(result.incomplete_details, ["first", "second"]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = ValidationResult {
            is_valid: false,
            field_results: vec![FieldValidationResult::missing("Atlas", 6)],
            summary: "Only 0 of 4 fields are structurally complete".to_owned(),
        };
        let value = serde_json::to_value(&result).unwrap_or_default();
        assert_eq!(value["isValid"], false);
        assert_eq!(value["fieldResults"][0]["fieldName"], "Atlas");
        assert_eq!(value["fieldResults"][0]["expectedPetalCount"], 6);
        assert_eq!(result.failure_count(), 1);
        assert_eq!(result.complete_count(), 0);
    }
}
