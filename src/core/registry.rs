//! In-memory component inventory keyed by component id

use crate::core::component::Component;
use std::collections::HashMap;

/// Components in insertion order, with a lookup index by id.
///
/// Registering an id twice replaces the earlier record but keeps its
/// original position, so listings stay in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: Vec<Component>,
    index: HashMap<String, usize>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component. Returns the record it replaced, if any.
    pub fn register(&mut self, component: Component) -> Option<Component> {
        match self.index.get(&component.id) {
            Some(&position) => {
                tracing::warn!(
                    component = component.id.as_str(),
                    "Duplicate component id replaces earlier record"
                );
                Some(std::mem::replace(&mut self.components[position], component))
            }
            None => {
                self.index
                    .insert(component.id.clone(), self.components.len());
                self.components.push(component);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.index.get(id).map(|&position| &self.components[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }
}

impl FromIterator<Component> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut registry = ComponentRegistry::new();
        for component in iter {
            registry.register(component);
        }
        registry
    }
}
