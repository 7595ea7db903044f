//! `Tata` field: Source / Core.
//!
//! Tata anchors the taxonomy: integrity, law, physics and the Trident.
//!
//! **Dominant resonance:** `◎ P1`.

use crate::model::{Field, PrimePetal, RecursiveNode};

/// Returns the `Tata` field.
#[must_use]
pub fn field() -> Field {
    Field::new(
        "Tata",
        "bg-red-500",
        "🔴",
        "Source/Core; Integrity, Law, Physics, Trident",
        "◎ P1",
        petals(),
    )
}

fn petals() -> Vec<PrimePetal> {
    vec![
        PrimePetal::new(
            "source_core",
            "◎",
            "Core truths, foundational anchors, Trident physics, Jacques Rich legacy",
            1,
            vec![
                RecursiveNode::new(
                    "axioms_foundational",
                    "⬣",
                    "bg-red-500",
                    "Foundational principles, core system laws",
                    11,
                    "Registry",
                ),
                RecursiveNode::new(
                    "legacy_data_anchors",
                    "⬣",
                    "bg-green-500",
                    "Jacques Rich legacy documents, historical truths",
                    11,
                    "Registry",
                ),
            ],
        ),
        PrimePetal::new(
            "integrity_structure",
            "▲",
            "System integrity rules, lawful structures, identity validation",
            3,
            vec![
                RecursiveNode::new(
                    "legal_trust_structures",
                    "⬣",
                    "bg-blue-500",
                    "Legal documents, corporate/trust structures",
                    11,
                    "Registry",
                ),
                RecursiveNode::new(
                    "compliance_verification_logs",
                    "⬰",
                    "bg-yellow-500",
                    "Logs of compliance checks, audits",
                    2,
                    "Reflection/Audit",
                ),
            ],
        ),
        PrimePetal::new(
            "verification_vessel",
            "⭟",
            "Processes and tools for verification, certification",
            5,
            vec![
                RecursiveNode::new(
                    "certified_artifacts_evidence",
                    "⬣",
                    "bg-yellow-500",
                    "Verified/certified evidence or data",
                    11,
                    "Registry",
                ),
                RecursiveNode::new(
                    "verification_protocols_output",
                    "✶",
                    "bg-blue-500",
                    "Generated protocols/reports from verification ops",
                    6,
                    "Creative Output",
                ),
            ],
        ),
        PrimePetal::new(
            "temporal_records",
            "⬢",
            "Historical patterns, timed events, lineage, sequence validation",
            7,
            vec![
                RecursiveNode::new(
                    "chronological_event_logs",
                    "⬘",
                    "bg-purple-500",
                    "Specific historical events, timelines",
                    8,
                    "Temporal Memory",
                ),
                RecursiveNode::new(
                    "lineage_succession_data",
                    "⬘",
                    "bg-amber-800",
                    "Bloodlines, provenance",
                    8,
                    "Temporal Memory",
                ),
            ],
        ),
        PrimePetal::new(
            "sovereign_wisdom",
            "✦",
            "Sovereign thought, legal reasoning, ethical frameworks",
            9,
            vec![
                RecursiveNode::new(
                    "legal_ethical_frameworks",
                    "✶",
                    "bg-orange-500",
                    "Developed legal/ethical structures",
                    6,
                    "Creative Output",
                ),
                RecursiveNode::new(
                    "governance_interfaces",
                    "⬖",
                    "bg-fuchsia-500",
                    "Boundaries for ethical/legal decisions",
                    9,
                    "Interface Layer",
                ),
            ],
        ),
        PrimePetal::new(
            "registry",
            "⭣",
            "Registry/Archive for TATA",
            11,
            vec![
                RecursiveNode::new(
                    "tata_registry.json",
                    "📄",
                    "bg-gray-500",
                    "JSON registry file for TATA",
                    0,
                    "File",
                ),
                RecursiveNode::new(
                    "README.md",
                    "📄",
                    "bg-gray-500",
                    "Documentation for TATA registry",
                    0,
                    "File",
                ),
            ],
        ),
    ]
}
