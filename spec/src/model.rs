//! Core taxonomy model types.
//!
//! These types represent the Fractal Field taxonomy as typed Rust data: a
//! three-level tree of [`Field`] → [`PrimePetal`] → [`RecursiveNode`]. Every
//! element exclusively owns its children; there are no back references.
//! The top-level entry point is [`Taxonomy::full()`](crate::Taxonomy::full).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A leaf-or-branch element within a petal, tagged with an R-code category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecursiveNode {
    /// Identifier, unique among its siblings (e.g., `"axioms_foundational"`).
    pub name: String,
    /// Single symbolic glyph (e.g., `"⬣"`).
    pub glyph: String,
    /// Semantic color tag (e.g., `"bg-red-500"`).
    pub color: String,
    /// Free-text description.
    pub description: String,
    /// R-code category, 0–11.
    pub r_number: u8,
    /// Label of the R-code category (e.g., `"Registry"`).
    pub r_name: String,
    /// Nested nodes. `None` marks a leaf; `Some` must be non-empty.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub children: Option<Vec<RecursiveNode>>,
}

impl RecursiveNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        glyph: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
        r_number: u8,
        r_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            color: color.into(),
            description: description.into(),
            r_number,
            r_name: r_name.into(),
            children: None,
        }
    }

    /// Turns this node into a branch owning `children`.
    #[must_use]
    pub fn with_children(mut self, children: Vec<RecursiveNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Returns true if this node is a leaf (no child sequence at all).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns true if every child sequence in this subtree is non-empty.
    ///
    /// An explicitly empty `children` list is incomplete; a leaf is complete.
    #[must_use]
    pub fn is_structurally_complete(&self) -> bool {
        match &self.children {
            None => true,
            Some(children) => {
                !children.is_empty() && children.iter().all(Self::is_structurally_complete)
            }
        }
    }
}

/// A second-level grouping under a [`Field`], tagged with an odd P-code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PrimePetal {
    /// Identifier (e.g., `"source_core"`).
    pub name: String,
    /// Single symbolic glyph (e.g., `"◎"`).
    pub glyph: String,
    /// Free-text description.
    pub description: String,
    /// P-code; one of 1, 3, 5, 7, 9, 11 in the reference data.
    pub p_number: u8,
    /// Recursive nodes of this petal, in display order.
    pub children: Vec<RecursiveNode>,
}

impl PrimePetal {
    /// Creates a petal owning `children`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        glyph: impl Into<String>,
        description: impl Into<String>,
        p_number: u8,
        children: Vec<RecursiveNode>,
    ) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            description: description.into(),
            p_number,
            children,
        }
    }
}

/// A top-level taxonomy category (Tata, Atlas, Dojo, ObiWan).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Field {
    /// Field name (e.g., `"Tata"`).
    pub name: String,
    /// Semantic color tag.
    pub color: String,
    /// Emoji shown next to the field name.
    pub emoji: String,
    /// Free-text description.
    pub description: String,
    /// Label of the field's dominant resonance (e.g., `"◎ P1"`).
    pub dominant_resonance: String,
    /// Petals of this field, in P-code order.
    pub petals: Vec<PrimePetal>,
}

impl Field {
    /// Creates a field owning `petals`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        emoji: impl Into<String>,
        description: impl Into<String>,
        dominant_resonance: impl Into<String>,
        petals: Vec<PrimePetal>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            emoji: emoji.into(),
            description: description.into(),
            dominant_resonance: dominant_resonance.into(),
            petals,
        }
    }

    /// Looks up a petal by name. Returns `None` if not found.
    #[must_use]
    pub fn find_petal(&self, name: &str) -> Option<&PrimePetal> {
        self.petals.iter().find(|p| p.name == name)
    }

    /// Returns the number of direct petal children across all petals.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.petals.iter().map(|p| p.children.len()).sum()
    }
}

/// The complete Fractal Field taxonomy.
#[derive(Debug)]
pub struct Taxonomy {
    /// Taxonomy version; the `fractal-field` package version.
    pub version: &'static str,
    /// All fields in display order.
    pub fields: Vec<Field>,
}

impl Taxonomy {
    /// Looks up a field by name. Returns `None` if not found.
    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the field names in display order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Returns the total number of petals across all fields.
    #[must_use]
    pub fn petal_count(&self) -> usize {
        self.fields.iter().map(|f| f.petals.len()).sum()
    }

    /// Returns the total number of petal-level nodes across all fields.
    ///
    /// Nodes nested below another node are not counted.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.fields.iter().map(Field::node_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> RecursiveNode {
        RecursiveNode::new(name, "⬣", "bg-red-500", "test node", 11, "Registry")
    }

    #[test]
    fn leaf_is_complete() {
        let node = leaf("a");
        assert!(node.is_leaf());
        assert!(node.is_structurally_complete());
    }

    #[test]
    fn empty_children_is_incomplete() {
        let node = leaf("a").with_children(vec![]);
        assert!(!node.is_leaf());
        assert!(!node.is_structurally_complete());
    }

    #[test]
    fn incomplete_grandchild_propagates() {
        let node = leaf("a").with_children(vec![leaf("b").with_children(vec![])]);
        assert!(!node.is_structurally_complete());

        let node = leaf("a").with_children(vec![leaf("b"), leaf("c")]);
        assert!(node.is_structurally_complete());
    }

    #[test]
    fn find_petal_by_name() {
        let field = Field::new(
            "Tata",
            "bg-red-500",
            "🔴",
            "Source/Core",
            "◎ P1",
            vec![PrimePetal::new("source_core", "◎", "core", 1, vec![leaf("a")])],
        );
        assert_eq!(field.find_petal("source_core").map(|p| p.p_number), Some(1));
        assert!(field.find_petal("registry").is_none());
        assert_eq!(field.node_count(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn node_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(leaf("a")).unwrap_or_default();
        assert_eq!(value["rNumber"], 11);
        assert_eq!(value["rName"], "Registry");
        assert!(value.get("children").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn node_children_default_to_none() {
        let json = r#"{"name":"a","glyph":"⬣","color":"bg-red-500",
            "description":"d","rNumber":2,"rName":"Reflection/Audit"}"#;
        let node: Result<RecursiveNode, _> = serde_json::from_str(json);
        assert!(matches!(node, Ok(n) if n.children.is_none() && n.r_number == 2));
    }
}
