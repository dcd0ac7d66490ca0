use serde::{Serialize, Serializer};
use std::fmt;

/// Why a kit was rejected. Renders as the human-readable message shown in
/// reports and serializes as that same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    MissingComponents(Vec<String>),
    OverBudget,
    SocketMismatch,
    RamTypeMismatch,
    InsufficientPower,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MissingComponents(ids) => {
                write!(f, "Missing components: {}", ids.join(", "))
            }
            FailureReason::OverBudget => f.write_str("Over budget"),
            FailureReason::SocketMismatch => f.write_str("CPU and Motherboard socket mismatch"),
            FailureReason::RamTypeMismatch => f.write_str("RAM and Motherboard type mismatch"),
            FailureReason::InsufficientPower => f.write_str("PSU wattage insufficient"),
        }
    }
}

impl Serialize for FailureReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Joins reasons the way every report line lists them.
pub fn join_reasons(reasons: &[FailureReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
