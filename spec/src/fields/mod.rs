//! Reference field modules.
//!
//! Each sub-module encodes one field of the Fractal Field taxonomy as Rust
//! data. Modules are listed in display order; see [`crate::Taxonomy::full`]
//! for the assembly sequence.

pub mod tata;
pub mod atlas;
pub mod dojo;
pub mod obiwan;

/// Names of the four canonical fields, in display order.
pub const CANONICAL_FIELD_NAMES: [&str; 4] = ["Tata", "Atlas", "Dojo", "ObiWan"];

/// Number of petals every canonical field carries.
pub const CANONICAL_PETAL_COUNT: usize = 6;

/// P-codes carried by the petals of every canonical field, in order.
pub const CANONICAL_P_NUMBERS: [u8; 6] = [1, 3, 5, 7, 9, 11];
