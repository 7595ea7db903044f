//! `ObiWan` field: Observer / Reflection.
//!
//! ObiWan observes, reflects and remembers: cognition and memory.
//!
//! **Dominant resonance:** `⬟ P5 & ✦ P9`.

use crate::model::{Field, PrimePetal, RecursiveNode};

/// Returns the `ObiWan` field.
#[must_use]
pub fn field() -> Field {
    Field::new(
        "ObiWan",
        "bg-purple-500",
        "🟣",
        "Operation / Echo & Cognition / Expression; Observer, Reflection, Cognition, Memory",
        "⬟ P5 & ✦ P9",
        petals(),
    )
}

fn petals() -> Vec<PrimePetal> {
    vec![
        PrimePetal::new(
            "observer_core",
            "◎",
            "Fundamental observation principles, witness consciousness, harmony monitoring",
            1,
            vec![
                RecursiveNode::new(
                    "observer_axioms_principles",
                    "⬣",
                    "bg-red-500",
                    "Core observation truths",
                    11,
                    "Registry",
                ),
                RecursiveNode::new(
                    "raw_awareness_input_signals",
                    "◍",
                    "bg-green-500",
                    "Unprocessed awareness data",
                    1,
                    "Signal/Input",
                ),
            ],
        ),
        PrimePetal::new(
            "witness_framework",
            "▲",
            "Frameworks for reflection, structured meditation, meta-awareness structure",
            3,
            vec![
                RecursiveNode::new(
                    "meditation_reflection_frameworks",
                    "▲",
                    "bg-blue-500",
                    "Structured reflection methods",
                    3,
                    "Triad Substructure",
                ),
                RecursiveNode::new(
                    "reflection_protocol_audits",
                    "⬰",
                    "bg-yellow-500",
                    "Methods & logs of reflection",
                    2,
                    "Reflection/Audit",
                ),
            ],
        ),
        PrimePetal::new(
            "reflective_memory",
            "⭟",
            "Storing observations, echoes, processed memory, synthesis",
            5,
            vec![
                RecursiveNode::new(
                    "synthesized_insights_essence",
                    "⧫",
                    "bg-green-500",
                    "Integrated understanding, meta-awareness",
                    7,
                    "Soulstate Insight",
                ),
                RecursiveNode::new(
                    "persona_journals_logs",
                    "⬘",
                    "bg-blue-500",
                    "Personal logs, evolving identity streams",
                    8,
                    "Temporal Memory",
                ),
                RecursiveNode::new(
                    "oowl_memory_system_logs",
                    "⬣",
                    "bg-amber-800",
                    "Logs from specific memory systems like OOWL",
                    11,
                    "Registry",
                ),
            ],
        ),
        PrimePetal::new(
            "memory_patterns",
            "⬢",
            "Memory formation, recall patterns, temporal awareness, dream processing",
            7,
            vec![
                RecursiveNode::new(
                    "chronological_memory_timelines",
                    "⬘",
                    "bg-purple-500",
                    "Organized memory structures",
                    8,
                    "Temporal Memory",
                ),
                RecursiveNode::new(
                    "dream_emotional_resonance",
                    "⧫",
                    "bg-amber-800",
                    "Emotional memory patterns, dream analysis",
                    7,
                    "Soulstate Insight",
                ),
            ],
        ),
        PrimePetal::new(
            "cognitive_expression",
            "✦",
            "Active cognition, creative output, interfaces",
            9,
            vec![
                RecursiveNode::new(
                    "generated_knowledge_maps",
                    "✶",
                    "bg-orange-500",
                    "Visual/conceptual maps",
                    6,
                    "Creative Output",
                ),
                RecursiveNode::new(
                    "developed_cognitive_models",
                    "✶",
                    "bg-blue-500",
                    "Models of thought/understanding",
                    6,
                    "Creative Output",
                ),
                RecursiveNode::new(
                    "creative_outputs_poetry_art",
                    "✶",
                    "bg-purple-500",
                    "Poetry, symbolic art",
                    6,
                    "Creative Output",
                ),
                RecursiveNode::new(
                    "user_interaction_interfaces",
                    "⬖",
                    "bg-yellow-500",
                    "Voice streams, UI elements",
                    9,
                    "Interface Layer",
                ),
            ],
        ),
        PrimePetal::new(
            "registry",
            "⭣",
            "Registry/Archive for OBIWAN",
            11,
            vec![
                RecursiveNode::new(
                    "obiwan_registry.json",
                    "📄",
                    "bg-gray-500",
                    "JSON registry file for OBIWAN",
                    0,
                    "File",
                ),
                RecursiveNode::new(
                    "README.md",
                    "📄",
                    "bg-gray-500",
                    "Documentation for OBIWAN registry",
                    0,
                    "File",
                ),
            ],
        ),
    ]
}
