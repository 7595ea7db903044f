//! Serializers for the Fractal Field taxonomy.
//!
//! - **JSON** ([`json`]): the field array in the camelCase shape read by
//!   validators, output to `public/fractal-field.json`

pub mod json;
