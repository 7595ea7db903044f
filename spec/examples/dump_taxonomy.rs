//! Demonstrates loading the reference taxonomy and serializing it.
//!
//! Run with: `cargo run --example dump_taxonomy -p fractal-field`

fn main() {
    let taxonomy = fractal_field::Taxonomy::full();

    println!("Fractal Field taxonomy v{}", taxonomy.version);
    println!("  Fields:  {}", taxonomy.fields.len());
    println!("  Petals:  {}", taxonomy.petal_count());
    println!("  Nodes:   {}", taxonomy.node_count());
    println!();

    for field in &taxonomy.fields {
        println!(
            "  {} {:8} {:>2} petals  [{}]",
            field.emoji,
            field.name,
            field.petals.len(),
            field.dominant_resonance,
        );
        for petal in &field.petals {
            println!(
                "      P{:<2} {} {:28} {} nodes",
                petal.p_number,
                petal.glyph,
                petal.name,
                petal.children.len()
            );
        }
    }

    println!();

    // Serialize to JSON (show first 200 chars).
    let json_str = fractal_field::serializer::json::to_json(taxonomy)
        .and_then(|json| serde_json::to_string_pretty(&json))
        .unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON output ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(200)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);
}
