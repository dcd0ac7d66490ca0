use crate::core::component::{Component, ComponentKind};
use crate::core::registry::ComponentRegistry;
use serde::{Deserialize, Serialize};

/// One candidate build: a component id for each of the five slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildKit {
    pub id: String,
    pub cpu: String,
    pub motherboard: String,
    pub gpu: String,
    pub ram: String,
    pub psu: String,
}

impl BuildKit {
    pub fn new(
        id: impl Into<String>,
        cpu: impl Into<String>,
        motherboard: impl Into<String>,
        gpu: impl Into<String>,
        ram: impl Into<String>,
        psu: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            cpu: cpu.into(),
            motherboard: motherboard.into(),
            gpu: gpu.into(),
            ram: ram.into(),
            psu: psu.into(),
        }
    }

    /// Slot assignments in fixed order: CPU, Motherboard, GPU, RAM, PSU.
    pub fn slots(&self) -> [(ComponentKind, &str); 5] {
        [
            (ComponentKind::Cpu, self.cpu.as_str()),
            (ComponentKind::Motherboard, self.motherboard.as_str()),
            (ComponentKind::Gpu, self.gpu.as_str()),
            (ComponentKind::Ram, self.ram.as_str()),
            (ComponentKind::Psu, self.psu.as_str()),
        ]
    }

    pub fn component_id(&self, slot: ComponentKind) -> &str {
        match slot {
            ComponentKind::Cpu => &self.cpu,
            ComponentKind::Motherboard => &self.motherboard,
            ComponentKind::Gpu => &self.gpu,
            ComponentKind::Ram => &self.ram,
            ComponentKind::Psu => &self.psu,
        }
    }

    /// Looks every slot up in the registry.
    ///
    /// Returns the ids that could not be found, in slot order, when any slot
    /// is unresolved.
    pub fn resolve<'a>(
        &self,
        registry: &'a ComponentRegistry,
    ) -> Result<ResolvedKit<'a>, Vec<String>> {
        let missing: Vec<String> = self
            .slots()
            .iter()
            .filter(|(_, id)| !registry.contains(id))
            .map(|(_, id)| id.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let lookup = |slot: ComponentKind| -> Result<&'a Component, Vec<String>> {
            let id = self.component_id(slot);
            let component = registry.get(id).ok_or_else(|| vec![id.to_string()])?;
            if component.kind() != slot {
                tracing::warn!(
                    kit = self.id.as_str(),
                    slot = slot.as_str(),
                    component = id,
                    kind = component.kind().as_str(),
                    "Slot holds a component of a different kind"
                );
            }
            Ok(component)
        };

        Ok(ResolvedKit {
            cpu: lookup(ComponentKind::Cpu)?,
            motherboard: lookup(ComponentKind::Motherboard)?,
            gpu: lookup(ComponentKind::Gpu)?,
            ram: lookup(ComponentKind::Ram)?,
            psu: lookup(ComponentKind::Psu)?,
        })
    }
}

/// A kit whose five slots all point at registered components.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedKit<'a> {
    pub cpu: &'a Component,
    pub motherboard: &'a Component,
    pub gpu: &'a Component,
    pub ram: &'a Component,
    pub psu: &'a Component,
}

impl<'a> ResolvedKit<'a> {
    pub fn components(&self) -> [&'a Component; 5] {
        [self.cpu, self.motherboard, self.gpu, self.ram, self.psu]
    }
}
