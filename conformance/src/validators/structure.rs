//! Structural completeness validator.
//!
//! Walks a field sequence and records, per field, every shape constraint it
//! violates:
//! - each expected field name is present
//! - each field carries the expected number of petals
//! - each petal has at least one recursive node
//! - each petal and node carries its required properties
//!
//! Findings are data, never errors: the walk always produces a
//! [`ValidationResult`].

use std::collections::HashSet;

use tracing::{debug, info};

use crate::options::ValidationOptions;
use crate::report::{FieldValidationResult, ValidationResult};
use crate::shape::{display_name, FieldShape, NodeShape, PetalShape};

/// Validates the structural completeness of `fields` against `options`.
///
/// Result order: expected names absent from `fields` first (in the order of
/// `options.expected_field_names`), then every field of `fields` in input
/// order, whether or not its name was expected.
pub fn validate_fractal_field_structure<F: FieldShape>(
    fields: &[F],
    options: &ValidationOptions,
) -> ValidationResult {
    let mut field_results = Vec::with_capacity(fields.len());

    let present: HashSet<&str> = fields.iter().filter_map(FieldShape::name).collect();
    for name in &options.expected_field_names {
        if !present.contains(name.as_str()) {
            debug!(field = %name, "expected field is missing");
            field_results.push(FieldValidationResult::missing(
                name.as_str(),
                options.expected_petal_count,
            ));
        }
    }

    for field in fields {
        let result = validate_field(field, options);
        debug!(
            field = %result.field_name,
            complete = result.is_complete,
            issues = result.incomplete_details.len(),
            "validated field"
        );
        field_results.push(result);
    }

    let is_valid = field_results.iter().all(|r| r.is_complete);
    let summary = summarize(is_valid, fields.len(), &field_results, options);
    info!(valid = is_valid, %summary, "structural validation finished");

    ValidationResult {
        is_valid,
        field_results,
        summary,
    }
}

/// Builds the one-line summary.
///
/// The failure form counts complete entries over all results (missing
/// fields included) against the number of expected names; the success form
/// reports the number of fields actually supplied.
fn summarize(
    is_valid: bool,
    field_count: usize,
    field_results: &[FieldValidationResult],
    options: &ValidationOptions,
) -> String {
    if is_valid {
        format!(
            "All {} fields are structurally complete with {} petals each",
            field_count, options.expected_petal_count
        )
    } else {
        let complete = field_results.iter().filter(|r| r.is_complete).count();
        format!(
            "Only {} of {} fields are structurally complete",
            complete,
            options.expected_field_names.len()
        )
    }
}

fn validate_field<F: FieldShape>(field: &F, options: &ValidationOptions) -> FieldValidationResult {
    let petals = field.petals();
    let mut result = FieldValidationResult::new(
        display_name(field.name()),
        petals.len(),
        options.expected_petal_count,
    );

    if petals.len() != options.expected_petal_count {
        result.fail(format!(
            "Expected {} petals, found {}",
            options.expected_petal_count,
            petals.len()
        ));
    }

    for petal in petals {
        check_petal(petal, options, &mut result);
    }

    result
}

fn check_petal<P: PetalShape>(
    petal: &P,
    options: &ValidationOptions,
    result: &mut FieldValidationResult,
) {
    let petal_name = display_name(petal.name());
    let children = petal.children();

    if children.is_none_or(|c| c.is_empty()) {
        result.fail(format!("Petal \"{}\" has no recursive nodes", petal_name));
    }

    let missing = petal.missing_properties();
    if !missing.is_empty() {
        result.fail(format!(
            "Petal \"{}\" is missing required properties: {}",
            petal_name,
            missing.join(", ")
        ));
    }

    if let Some(children) = children {
        let location = format!("in petal \"{}\"", petal_name);
        for node in children {
            check_node(node, &location, 1, options, result);
        }
    }
}

/// Checks `node` at `depth` (1 = direct child of a petal). `location` is the
/// message fragment that places the node, e.g. `in petal "registry"`.
fn check_node<N: NodeShape>(
    node: &N,
    location: &str,
    depth: usize,
    options: &ValidationOptions,
    result: &mut FieldValidationResult,
) {
    let node_name = display_name(node.name());

    let missing = node.missing_properties();
    if !missing.is_empty() {
        result.fail(format!(
            "Node \"{}\" {} is missing required properties: {}",
            node_name,
            location,
            missing.join(", ")
        ));
    }

    if depth >= options.node_depth {
        return;
    }

    if let Some(children) = node.children() {
        if children.is_empty() {
            result.fail(format!(
                "Node \"{}\" {} has an empty children list",
                node_name, location
            ));
        }
        let nested = format!("under node \"{}\" {}", node_name, location);
        for child in children {
            check_node(child, &nested, depth + 1, options, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use fractal_field::{Field, PrimePetal, RecursiveNode, Taxonomy};
    use serde_json::json;

    use super::*;

    fn node(name: &str) -> RecursiveNode {
        RecursiveNode::new(name, "⬣", "bg-red-500", "test node", 11, "Registry")
    }

    fn petal(name: &str, p_number: u8) -> PrimePetal {
        PrimePetal::new(name, "◎", "test petal", p_number, vec![node("a"), node("b")])
    }

    fn field(name: &str, petal_count: usize) -> Field {
        let petals = (0..petal_count)
            .map(|i| petal(&format!("petal_{}", i), (2 * i + 1) as u8))
            .collect();
        Field::new(name, "bg-red-500", "🔴", "test field", "◎ P1", petals)
    }

    #[test]
    fn reference_taxonomy_is_valid() {
        let result =
            validate_fractal_field_structure(&Taxonomy::full().fields, &ValidationOptions::default());
        assert!(result.is_valid, "{:#?}", result);
        assert_eq!(result.field_results.len(), 4);
        assert_eq!(
            result.summary,
            "All 4 fields are structurally complete with 6 petals each"
        );
    }

    #[test]
    fn empty_input_reports_every_expected_field() {
        let fields: Vec<Field> = Vec::new();
        let result = validate_fractal_field_structure(&fields, &ValidationOptions::default());
        assert!(!result.is_valid);
        let names: Vec<&str> = result.field_results.iter().map(|r| r.field_name.as_str()).collect();
        assert_eq!(names, ["Tata", "Atlas", "Dojo", "ObiWan"]);
        assert!(result.field_results.iter().all(|r| !r.is_complete));
        assert_eq!(result.summary, "Only 0 of 4 fields are structurally complete");
    }

    #[test]
    fn single_expected_field_passes() {
        let options = ValidationOptions::expecting(["Tata"]);
        let result = validate_fractal_field_structure(&[field("Tata", 6)], &options);
        assert!(result.is_valid);
        assert!(result.field_results[0].incomplete_details.is_empty());
        assert_eq!(
            result.summary,
            "All 1 fields are structurally complete with 6 petals each"
        );
    }

    #[test]
    fn wrong_petal_count() {
        let options = ValidationOptions::expecting(["Tata"]);
        let result = validate_fractal_field_structure(&[field("Tata", 4)], &options);
        let tata = &result.field_results[0];
        assert!(!tata.is_complete);
        assert_eq!(tata.petal_count, 4);
        assert_eq!(tata.incomplete_details, ["Expected 6 petals, found 4"]);
    }

    #[test]
    fn petal_without_nodes() {
        let mut tata = field("Tata", 6);
        tata.petals[2].children.clear();
        let options = ValidationOptions::expecting(["Tata"]);
        let result = validate_fractal_field_structure(&[tata], &options);
        assert_eq!(
            result.field_results[0].incomplete_details,
            ["Petal \"petal_2\" has no recursive nodes"]
        );
    }

    #[test]
    fn missing_fields_precede_present_fields() {
        let fields = [field("Yoda", 6), field("Atlas", 6)];
        let result = validate_fractal_field_structure(&fields, &ValidationOptions::default());
        let names: Vec<&str> = result.field_results.iter().map(|r| r.field_name.as_str()).collect();
        assert_eq!(names, ["Tata", "Dojo", "ObiWan", "Yoda", "Atlas"]);
        // Unexpected fields are validated but never flagged as missing.
        assert!(result.field_results[3].is_complete);
        assert!(result.field_results[4].is_complete);
        assert_eq!(result.summary, "Only 2 of 4 fields are structurally complete");
    }

    #[test]
    fn raw_petal_and_node_key_checks() {
        let fields = json!([{
            "name": "Tata",
            "petals": [
                { "name": "source_core", "glyph": "◎", "children": [
                    { "name": "axioms", "glyph": "⬣", "color": "bg-red-500",
                      "description": "d", "rNumber": 11 }
                ]},
                { "name": "registry", "glyph": "⭣", "description": "d", "pNumber": 11,
                  "children": [] }
            ]
        }]);
        let options = ValidationOptions::expecting(["Tata"]).with_petal_count(2);
        let fields = fields.as_array().cloned().unwrap_or_default();
        let result = validate_fractal_field_structure(&fields, &options);
        assert_eq!(
            result.field_results[0].incomplete_details,
            [
                "Petal \"source_core\" is missing required properties: description, pNumber",
                "Node \"axioms\" in petal \"source_core\" is missing required properties: rName",
                "Petal \"registry\" has no recursive nodes",
            ]
        );
    }

    #[test]
    fn grandchildren_ignored_at_default_depth() {
        let mut tata = field("Tata", 6);
        tata.petals[0].children[0] = node("a").with_children(vec![]);
        let options = ValidationOptions::expecting(["Tata"]);
        let result = validate_fractal_field_structure(&[tata], &options);
        assert!(result.is_valid);
    }

    #[test]
    fn deeper_checks_flag_empty_children() {
        let mut tata = field("Tata", 6);
        tata.petals[0].children[0] = node("a").with_children(vec![node("b").with_children(vec![])]);
        let options = ValidationOptions::expecting(["Tata"]).with_node_depth(3);
        let result = validate_fractal_field_structure(&[tata], &options);
        assert_eq!(
            result.field_results[0].incomplete_details,
            ["Node \"b\" under node \"a\" in petal \"petal_0\" has an empty children list"]
        );
    }

    #[test]
    fn deeper_checks_flag_grandchild_keys() {
        let fields = json!([{
            "name": "Tata",
            "petals": [{
                "name": "p", "glyph": "◎", "description": "d", "pNumber": 1,
                "children": [{
                    "name": "a", "glyph": "⬣", "color": "c", "description": "d",
                    "rNumber": 11, "rName": "Registry",
                    "children": [{ "name": "b", "glyph": "⬣" }]
                }]
            }]
        }]);
        let options = ValidationOptions::expecting(["Tata"])
            .with_petal_count(1)
            .with_node_depth(2);
        let fields = fields.as_array().cloned().unwrap_or_default();
        let result = validate_fractal_field_structure(&fields, &options);
        assert_eq!(
            result.field_results[0].incomplete_details,
            ["Node \"b\" under node \"a\" in petal \"p\" is missing required properties: \
              color, description, rNumber, rName"]
        );
    }
}
