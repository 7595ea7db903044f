//! `Dojo` field: Life Pattern / Enactment.
//!
//! Dojo is where processes run: execution, crucible and choreography.
//!
//! **Dominant resonance:** `⬢ P7`.

use crate::model::{Field, PrimePetal, RecursiveNode};

/// Returns the `Dojo` field.
#[must_use]
pub fn field() -> Field {
    Field::new(
        "Dojo",
        "bg-blue-500",
        "🔵",
        "Life Pattern / Enactment; Execution, Crucible, Process",
        "⬢ P7",
        petals(),
    )
}

fn petals() -> Vec<PrimePetal> {
    vec![
        PrimePetal::new(
            "primal_crucible",
            "◎",
            "Core process principles, execution fundamentals",
            1,
            vec![
                RecursiveNode::new(
                    "execution_principles_base",
                    "⬣",
                    "bg-red-500",
                    "Fundamental execution laws/axioms",
                    11,
                    "Registry",
                ),
                RecursiveNode::new(
                    "process_trigger_inputs",
                    "◍",
                    "bg-green-500",
                    "Process triggers",
                    1,
                    "Signal/Input",
                ),
            ],
        ),
        PrimePetal::new(
            "choreography_structure",
            "▲",
            "Defining process flows, task links, operational structures",
            3,
            vec![
                RecursiveNode::new(
                    "docker_process_configs",
                    "⬣",
                    "bg-yellow-500",
                    "Configuration files for processes",
                    11,
                    "Registry",
                ),
                RecursiveNode::new(
                    "task_dependency_links",
                    "⬕",
                    "bg-purple-500",
                    "Linking tasks/processes",
                    4,
                    "Sync/Transfer",
                ),
            ],
        ),
        PrimePetal::new(
            "chakra_vessel",
            "⭟",
            "Active chakra processes, bootstrapping operations",
            5,
            vec![
                RecursiveNode::new(
                    "bootstrap_execution_scripts",
                    "⬟",
                    "bg-purple-500",
                    "Setup/initiation scripts",
                    5,
                    "Execution Vessel",
                ),
                RecursiveNode::new(
                    "chakra_flow_control_sync",
                    "⬕",
                    "bg-amber-800",
                    "Managing energy/data flows",
                    4,
                    "Sync/Transfer",
                ),
            ],
        ),
        PrimePetal::new(
            "execution_core",
            "⬢",
            "Runtime operations, DOJO 3-Pulse system, container state",
            7,
            vec![
                RecursiveNode::new(
                    "temporal_truth_verification_process",
                    "⬟",
                    "bg-red-500",
                    "Scripts for 3-Pulse System",
                    5,
                    "Execution Vessel",
                ),
                RecursiveNode::new(
                    "live_container_state_signals",
                    "◍",
                    "bg-amber-800",
                    "Live status from containers",
                    1,
                    "Signal/Input",
                ),
                RecursiveNode::new(
                    "runtime_error_logs",
                    "⬰",
                    "bg-green-500",
                    "Operational logs, error logs",
                    2,
                    "Reflection/Audit",
                ),
            ],
        ),
        PrimePetal::new(
            "execution_intelligence",
            "✦",
            "Higher-order processing, execution optimization",
            9,
            vec![
                RecursiveNode::new(
                    "process_optimization_outputs",
                    "✶",
                    "bg-orange-500",
                    "Optimized execution paths/strategies",
                    6,
                    "Creative Output",
                ),
                RecursiveNode::new(
                    "process_control_interfaces",
                    "⬖",
                    "bg-purple-500",
                    "Interfaces for managing/monitoring execution",
                    9,
                    "Interface Layer",
                ),
            ],
        ),
        PrimePetal::new(
            "registry",
            "⭣",
            "Registry/Archive for DOJO",
            11,
            vec![
                RecursiveNode::new(
                    "dojo_registry.json",
                    "📄",
                    "bg-gray-500",
                    "JSON registry file for DOJO",
                    0,
                    "File",
                ),
                RecursiveNode::new(
                    "README.md",
                    "📄",
                    "bg-gray-500",
                    "Documentation for DOJO registry",
                    0,
                    "File",
                ),
            ],
        ),
    ]
}
