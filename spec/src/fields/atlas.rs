//! `Atlas` field: Identity / Mapping.
//!
//! Atlas maps identity and knowledge architecture into patterns.
//!
//! **Dominant resonance:** `▲ P3`.

use crate::model::{Field, PrimePetal, RecursiveNode};

/// Returns the `Atlas` field.
#[must_use]
pub fn field() -> Field {
    Field::new(
        "Atlas",
        "bg-green-500",
        "🟢",
        "Identity / Mapping; Knowledge Architecture, Pattern",
        "▲ P3",
        petals(),
    )
}

fn petals() -> Vec<PrimePetal> {
    vec![
        PrimePetal::new(
            "primal_cartography",
            "◎",
            "Foundational knowledge structures, first principles of mapping",
            1,
            vec![
                RecursiveNode::new(
                    "core_axiom_library",
                    "⬣",
                    "bg-red-500",
                    "Core truths and principles for mapping",
                    11,
                    "Registry",
                ),
                RecursiveNode::new(
                    "ontological_input_signals",
                    "◍",
                    "bg-green-500",
                    "Foundational concepts for ontology",
                    1,
                    "Signal/Input",
                ),
            ],
        ),
        PrimePetal::new(
            "identity_map",
            "▲",
            "Core identity models, entity relationship maps",
            3,
            vec![
                RecursiveNode::new(
                    "dna_identity_blueprints",
                    "⬣",
                    "bg-red-500",
                    "Individual/Family/Entity ID structures",
                    11,
                    "Registry",
                ),
                RecursiveNode::new(
                    "entity_relationship_graphs",
                    "▲",
                    "bg-green-500",
                    "Mapping connections",
                    3,
                    "Triad Substructure",
                ),
            ],
        ),
        PrimePetal::new(
            "knowledge_vessel",
            "⭟",
            "Active models, LLMs, learning systems, quantum-neural processor",
            5,
            vec![
                RecursiveNode::new(
                    "active_ai_models",
                    "⬟",
                    "bg-blue-500",
                    "Running AI models, LLMs",
                    5,
                    "Execution Vessel",
                ),
                RecursiveNode::new(
                    "quantum_neural_processor_outputs",
                    "✶",
                    "bg-yellow-500",
                    "Creative Output from P5 vessel, e.g. QNP results",
                    6,
                    "Creative Output",
                ),
            ],
        ),
        PrimePetal::new(
            "resonance_patterns",
            "⬢",
            "Life patterns, frequency maps, geometric overlays",
            7,
            vec![
                RecursiveNode::new(
                    "chakra_energetic_overlays",
                    "⧫",
                    "bg-purple-500",
                    "Energetic mapping",
                    7,
                    "Soulstate Insight",
                ),
                RecursiveNode::new(
                    "frequency_pattern_analysis",
                    "⧫",
                    "bg-amber-800",
                    "Resonance analysis",
                    7,
                    "Soulstate Insight",
                ),
            ],
        ),
        PrimePetal::new(
            "pattern_intelligence",
            "✦",
            "Pattern recognition, cognitive mapping, analytics",
            9,
            vec![
                RecursiveNode::new(
                    "recognized_fractal_patterns",
                    "✶",
                    "bg-blue-500",
                    "Identified patterns",
                    6,
                    "Creative Output",
                ),
                RecursiveNode::new(
                    "knowledge_access_interfaces",
                    "⬖",
                    "bg-yellow-500",
                    "Access to patterns/knowledge",
                    9,
                    "Interface Layer",
                ),
            ],
        ),
        PrimePetal::new(
            "registry_sync",
            "⭣",
            "Registry/Archive for ATLAS, emphasizing sync role",
            11,
            vec![
                RecursiveNode::new(
                    "atlas_registry.json",
                    "📄",
                    "bg-gray-500",
                    "JSON registry file for ATLAS",
                    0,
                    "File",
                ),
                RecursiveNode::new(
                    "README.md",
                    "📄",
                    "bg-gray-500",
                    "Documentation for ATLAS registry",
                    0,
                    "File",
                ),
            ],
        ),
    ]
}
