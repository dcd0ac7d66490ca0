//! Typed component records
//!
//! A component carries its per-type attributes in a [`ComponentSpec`] variant,
//! so rules ask the variant for a socket or TDP instead of probing fields.

use crate::error::{Result, ValidatorError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Cpu,
    Motherboard,
    Gpu,
    Ram,
    Psu,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Cpu,
        ComponentKind::Motherboard,
        ComponentKind::Gpu,
        ComponentKind::Ram,
        ComponentKind::Psu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Cpu => "CPU",
            ComponentKind::Motherboard => "Motherboard",
            ComponentKind::Gpu => "GPU",
            ComponentKind::Ram => "RAM",
            ComponentKind::Psu => "PSU",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown component type '{s}'"))
    }
}

/// Attributes that only make sense for one kind of component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentSpec {
    Cpu { socket: String, tdp: u32 },
    Motherboard { socket: String, ram_type: String },
    Gpu { tdp: u32 },
    Ram { ram_type: String },
    Psu { wattage: u32 },
}

impl ComponentSpec {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentSpec::Cpu { .. } => ComponentKind::Cpu,
            ComponentSpec::Motherboard { .. } => ComponentKind::Motherboard,
            ComponentSpec::Gpu { .. } => ComponentKind::Gpu,
            ComponentSpec::Ram { .. } => ComponentKind::Ram,
            ComponentSpec::Psu { .. } => ComponentKind::Psu,
        }
    }

    pub fn socket(&self) -> Option<&str> {
        match self {
            ComponentSpec::Cpu { socket, .. } | ComponentSpec::Motherboard { socket, .. } => {
                Some(socket.as_str())
            }
            _ => None,
        }
    }

    pub fn ram_type(&self) -> Option<&str> {
        match self {
            ComponentSpec::Motherboard { ram_type, .. } | ComponentSpec::Ram { ram_type } => {
                Some(ram_type.as_str())
            }
            _ => None,
        }
    }

    pub fn tdp(&self) -> Option<u32> {
        match self {
            ComponentSpec::Cpu { tdp, .. } | ComponentSpec::Gpu { tdp } => Some(*tdp),
            _ => None,
        }
    }

    pub fn wattage(&self) -> Option<u32> {
        match self {
            ComponentSpec::Psu { wattage } => Some(*wattage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub id: String,
    pub performance_score: u32,
    pub cost: u32,
    pub spec: ComponentSpec,
    /// The free-form attribute strings as they were entered, kept for display.
    pub raw_specs: (String, String),
}

impl Component {
    /// Builds a component from the six free-form fields of an input record.
    ///
    /// Score, cost and the numeric attribute of the type (TDP or wattage) must
    /// parse as non-negative integers. Anything else is a fatal input error.
    pub fn from_fields(
        id: &str,
        type_name: &str,
        performance_score: &str,
        cost: &str,
        spec1: &str,
        spec2: &str,
    ) -> Result<Self> {
        let kind = ComponentKind::from_str(type_name)
            .map_err(|_| ValidatorError::unknown_component_type(id, type_name))?;

        let performance_score = parse_non_negative(id, "performance_score", performance_score)?;
        let cost = parse_non_negative(id, "cost", cost)?;

        let spec = match kind {
            ComponentKind::Cpu => ComponentSpec::Cpu {
                socket: spec1.to_string(),
                tdp: parse_non_negative(id, "tdp", spec2)?,
            },
            ComponentKind::Motherboard => ComponentSpec::Motherboard {
                socket: spec1.to_string(),
                ram_type: spec2.to_string(),
            },
            ComponentKind::Gpu => ComponentSpec::Gpu {
                tdp: parse_non_negative(id, "tdp", spec2)?,
            },
            ComponentKind::Ram => ComponentSpec::Ram {
                ram_type: spec1.to_string(),
            },
            ComponentKind::Psu => ComponentSpec::Psu {
                wattage: parse_non_negative(id, "wattage", spec1)?,
            },
        };

        Ok(Self {
            id: id.to_string(),
            performance_score,
            cost,
            spec,
            raw_specs: (spec1.to_string(), spec2.to_string()),
        })
    }

    pub fn kind(&self) -> ComponentKind {
        self.spec.kind()
    }
}

fn parse_non_negative(component_id: &str, field: &str, value: &str) -> Result<u32> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| ValidatorError::invalid_number(component_id, field, value))?;
    if parsed < 0 {
        return Err(ValidatorError::negative_value(component_id, field, parsed));
    }
    u32::try_from(parsed).map_err(|_| ValidatorError::invalid_number(component_id, field, value))
}
