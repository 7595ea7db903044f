//! Shape views over validator input.
//!
//! The structural checks are written once against three traits and run
//! over two kinds of input:
//!
//! - typed [`fractal_field`] entities, whose required properties always exist
//!   (only counts and emptiness can fail);
//! - raw [`serde_json::Value`] documents, where required properties are
//!   checked by key presence. A key holding `null` counts as present; a
//!   non-object value lacks every key.

use fractal_field::{Field, PrimePetal, RecursiveNode};
use serde_json::Value;

/// Properties every petal must carry, in report order.
pub const REQUIRED_PETAL_PROPERTIES: [&str; 4] = ["name", "glyph", "description", "pNumber"];

/// Properties every node must carry, in report order.
pub const REQUIRED_NODE_PROPERTIES: [&str; 6] =
    ["name", "glyph", "color", "description", "rNumber", "rName"];

/// Placeholder used in messages for elements without a readable name.
pub const UNNAMED: &str = "<unnamed>";

/// Returns `name`, or [`UNNAMED`] when it is absent.
pub fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or(UNNAMED)
}

/// A top-level field as seen by the validator.
pub trait FieldShape {
    /// Petal representation.
    type Petal: PetalShape;

    /// Field name, if readable.
    fn name(&self) -> Option<&str>;

    /// Petals in input order. Absent petals read as an empty slice.
    fn petals(&self) -> &[Self::Petal];
}

/// A petal as seen by the validator.
pub trait PetalShape {
    /// Node representation.
    type Node: NodeShape;

    /// Petal name, if readable.
    fn name(&self) -> Option<&str>;

    /// Entries of [`REQUIRED_PETAL_PROPERTIES`] this petal lacks, in order.
    fn missing_properties(&self) -> Vec<&'static str>;

    /// Child nodes, or `None` when the petal has no child sequence.
    fn children(&self) -> Option<&[Self::Node]>;
}

/// A recursive node as seen by the validator.
pub trait NodeShape: Sized {
    /// Node name, if readable.
    fn name(&self) -> Option<&str>;

    /// Entries of [`REQUIRED_NODE_PROPERTIES`] this node lacks, in order.
    fn missing_properties(&self) -> Vec<&'static str>;

    /// Nested nodes, or `None` for a leaf.
    fn children(&self) -> Option<&[Self]>;
}

impl FieldShape for Field {
    type Petal = PrimePetal;

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn petals(&self) -> &[PrimePetal] {
        &self.petals
    }
}

impl PetalShape for PrimePetal {
    type Node = RecursiveNode;

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn missing_properties(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn children(&self) -> Option<&[RecursiveNode]> {
        Some(self.children.as_slice())
    }
}

impl NodeShape for RecursiveNode {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn missing_properties(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn children(&self) -> Option<&[RecursiveNode]> {
        self.children.as_deref()
    }
}

fn str_key<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn array_key<'a>(value: &'a Value, key: &str) -> Option<&'a [Value]> {
    value.get(key).and_then(Value::as_array).map(Vec::as_slice)
}

fn missing_keys(value: &Value, required: &[&'static str]) -> Vec<&'static str> {
    match value.as_object() {
        Some(map) => required
            .iter()
            .copied()
            .filter(|key| !map.contains_key(*key))
            .collect(),
        None => required.to_vec(),
    }
}

impl FieldShape for Value {
    type Petal = Value;

    fn name(&self) -> Option<&str> {
        str_key(self, "name")
    }

    fn petals(&self) -> &[Value] {
        array_key(self, "petals").unwrap_or(&[])
    }
}

impl PetalShape for Value {
    type Node = Value;

    fn name(&self) -> Option<&str> {
        str_key(self, "name")
    }

    fn missing_properties(&self) -> Vec<&'static str> {
        missing_keys(self, &REQUIRED_PETAL_PROPERTIES)
    }

    fn children(&self) -> Option<&[Value]> {
        array_key(self, "children")
    }
}

impl NodeShape for Value {
    fn name(&self) -> Option<&str> {
        str_key(self, "name")
    }

    fn missing_properties(&self) -> Vec<&'static str> {
        missing_keys(self, &REQUIRED_NODE_PROPERTIES)
    }

    fn children(&self) -> Option<&[Value]> {
        array_key(self, "children")
    }
}
