//! Fractal Field taxonomy encoded as typed Rust data.
//!
//! The `fractal-field` crate provides the complete reference taxonomy:
//! 4 fields, 24 prime petals and 52 recursive nodes, as static Rust data
//! structures, along with a serializer that produces the JSON shape
//! consumed by validators and presentation layers.
//!
//! # Entry Point
//!
//! ```
//! let taxonomy = fractal_field::Taxonomy::full();
//! assert_eq!(taxonomy.fields.len(), 4);
//! ```
//!
//! # Serialization
//!
//! ```
//! let taxonomy = fractal_field::Taxonomy::full();
//! let json = fractal_field::serializer::json::to_json(taxonomy)?;
//! assert!(json.is_array());
//! # Ok::<(), serde_json::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fields;
pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use fields::{CANONICAL_FIELD_NAMES, CANONICAL_PETAL_COUNT};
pub use model::{Field, PrimePetal, RecursiveNode, Taxonomy};

impl Taxonomy {
    /// Returns the reference Fractal Field taxonomy.
    ///
    /// Assembly order is the display order:
    /// `Tata → Atlas → Dojo → ObiWan`
    #[must_use]
    pub fn full() -> &'static Taxonomy {
        static TAXONOMY: std::sync::OnceLock<Taxonomy> = std::sync::OnceLock::new();
        TAXONOMY.get_or_init(|| Taxonomy {
            version: env!("CARGO_PKG_VERSION"),
            fields: vec![
                fields::tata::field(),
                fields::atlas::field(),
                fields::dojo::field(),
                fields::obiwan::field(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::CANONICAL_P_NUMBERS;

    #[test]
    fn field_count() {
        assert_eq!(Taxonomy::full().fields.len(), 4);
    }

    #[test]
    fn field_order_matches_canonical_names() {
        assert_eq!(Taxonomy::full().field_names(), CANONICAL_FIELD_NAMES);
    }

    #[test]
    fn petal_count() {
        // 4 fields x 6 petals.
        assert_eq!(Taxonomy::full().petal_count(), 24);
        for field in &Taxonomy::full().fields {
            assert_eq!(
                field.petals.len(),
                CANONICAL_PETAL_COUNT,
                "Wrong petal count in {}",
                field.name
            );
        }
    }

    #[test]
    fn node_count() {
        // Tata 12, Atlas 12, Dojo 13, ObiWan 15.
        assert_eq!(Taxonomy::full().node_count(), 52);
    }

    #[test]
    fn petals_follow_odd_p_codes() {
        for field in &Taxonomy::full().fields {
            let codes: Vec<u8> = field.petals.iter().map(|p| p.p_number).collect();
            assert_eq!(codes, CANONICAL_P_NUMBERS, "P-codes out of order in {}", field.name);
        }
    }

    #[test]
    fn r_codes_in_domain() {
        for field in &Taxonomy::full().fields {
            for petal in &field.petals {
                for node in &petal.children {
                    assert!(node.r_number <= 11, "R-code out of range: {}", node.name);
                }
            }
        }
    }

    #[test]
    fn every_petal_has_nodes() {
        for field in &Taxonomy::full().fields {
            for petal in &field.petals {
                assert!(
                    !petal.children.is_empty(),
                    "Petal {} in {} has no nodes",
                    petal.name,
                    field.name
                );
                assert!(petal.children.iter().all(RecursiveNode::is_structurally_complete));
            }
        }
    }

    #[test]
    fn node_names_unique_within_petal() {
        for field in &Taxonomy::full().fields {
            for petal in &field.petals {
                let mut names = std::collections::HashSet::new();
                for node in &petal.children {
                    assert!(
                        names.insert(node.name.as_str()),
                        "Duplicate node {} in {}/{}",
                        node.name,
                        field.name,
                        petal.name
                    );
                }
            }
        }
    }

    #[test]
    fn version_tracks_package() {
        assert_eq!(Taxonomy::full().version, env!("CARGO_PKG_VERSION"));
        assert_eq!(Taxonomy::full().version, "0.1.0");
    }

    #[test]
    fn find_field_by_name() {
        let dojo = Taxonomy::full().find_field("Dojo");
        assert_eq!(dojo.map(|f| f.dominant_resonance.as_str()), Some("⬢ P7"));
        assert!(Taxonomy::full().find_field("Yoda").is_none());
    }
}
