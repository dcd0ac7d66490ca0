//! Test fixtures and data builders for consistent test data
//!
//! The reference scenario: budget 1000, an AM4/DDR4 build drawing
//! 65 W + 150 W on a 300 W PSU, costing 870 and scoring 165.

use crate::core::{BuildKit, Component, ComponentRegistry};

pub const REFERENCE_BUDGET: i64 = 1000;

/// The five compatible parts of the reference build.
pub fn reference_components() -> Vec<Component> {
    [
        ("C1", "CPU", "50", "200", "AM4", "65"),
        ("M1", "Motherboard", "10", "100", "AM4", "DDR4"),
        ("G1", "GPU", "80", "400", "8GB", "150"),
        ("R1", "RAM", "20", "80", "DDR4", "16GB"),
        ("P1", "PSU", "5", "90", "300", "Bronze"),
    ]
    .into_iter()
    .map(|(id, kind, score, cost, spec1, spec2)| {
        Component::from_fields(id, kind, score, cost, spec1, spec2)
            .expect("reference component fields are valid")
    })
    .collect()
}

pub fn reference_registry() -> ComponentRegistry {
    reference_components().into_iter().collect()
}

/// Kit `K1` using every reference part.
pub fn reference_kit() -> BuildKit {
    BuildKit::new("K1", "C1", "M1", "G1", "R1", "P1")
}

/// The reference registry plus alternates that break one rule each:
/// `P2` is a 200 W PSU, `R2` is DDR5 memory, `C2` is an LGA1700 CPU and
/// `G2` is an expensive GPU.
pub fn extended_registry() -> ComponentRegistry {
    let mut registry = reference_registry();
    for (id, kind, score, cost, spec1, spec2) in [
        ("P2", "PSU", "5", "60", "200", "Bronze"),
        ("R2", "RAM", "25", "120", "DDR5", "32GB"),
        ("C2", "CPU", "60", "250", "LGA1700", "125"),
        ("G2", "GPU", "150", "900", "16GB", "200"),
    ] {
        registry.register(
            Component::from_fields(id, kind, score, cost, spec1, spec2)
                .expect("extended component fields are valid"),
        );
    }
    registry
}

/// The reference scenario in the line-oriented text input format.
pub fn reference_text_input() -> String {
    "\
# budget
1000
5
C1 CPU 50 200 AM4 65
M1 Motherboard 10 100 AM4 DDR4
G1 GPU 80 400 8GB 150
R1 RAM 20 80 DDR4 16GB
P1 PSU 5 90 300 Bronze
1
K1 C1 M1 G1 R1 P1
"
    .to_string()
}

/// The reference scenario as a JSON input document.
pub fn reference_json_input() -> String {
    serde_json::json!({
        "budget": 1000,
        "components": [
            {"id": "C1", "type": "CPU", "score": 50, "cost": 200, "spec1": "AM4", "spec2": 65},
            {"id": "M1", "type": "Motherboard", "score": 10, "cost": 100, "spec1": "AM4", "spec2": "DDR4"},
            {"id": "G1", "type": "GPU", "score": 80, "cost": 400, "spec1": "8GB", "spec2": 150},
            {"id": "R1", "type": "RAM", "score": 20, "cost": 80, "spec1": "DDR4"},
            {"id": "P1", "type": "PSU", "score": 5, "cost": 90, "spec1": 300}
        ],
        "kits": [
            {"id": "K1", "cpu": "C1", "motherboard": "M1", "gpu": "G1", "ram": "R1", "psu": "P1"}
        ]
    })
    .to_string()
}
