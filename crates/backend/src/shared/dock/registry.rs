//! Tab registry: tab id → rendered content and optional custom header.
//!
//! Registration only exists on [`TabRegistryBuilder`]. Once built, the
//! registry is immutable and shared read-only by every request.

use std::collections::HashMap;

use contracts::shared::component::Component;
use contracts::shared::dock::{ConfigError, DockModel};

#[derive(Debug, Clone, PartialEq)]
pub struct TabEntry {
    pub content: Component,
    pub header: Option<Component>,
}

#[derive(Debug, Default)]
pub struct TabRegistryBuilder {
    entries: HashMap<String, TabEntry>,
    order: Vec<String>,
}

impl TabRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or overwrites) the entry for `id`.
    pub fn register(
        &mut self,
        id: &str,
        content: Component,
        header: Option<Component>,
    ) -> &mut Self {
        if self
            .entries
            .insert(id.to_string(), TabEntry { content, header })
            .is_some()
        {
            tracing::debug!("tab '{}' registered again, previous entry replaced", id);
        } else {
            self.order.push(id.to_string());
        }
        self
    }

    /// Attaches a custom header to an already registered tab.
    pub fn set_header(&mut self, id: &str, header: Component) -> Result<&mut Self, ConfigError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| ConfigError::UnknownTabId(id.to_string()))?;
        entry.header = Some(header);
        Ok(self)
    }

    pub fn build(self) -> TabRegistry {
        TabRegistry {
            entries: self.entries,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabRegistry {
    entries: HashMap<String, TabEntry>,
    /// Registration order, used when forwarding tab contents to the client.
    order: Vec<String>,
}

impl TabRegistry {
    pub fn resolve(&self, id: &str) -> Result<&Component, ConfigError> {
        self.entries
            .get(id)
            .map(|e| &e.content)
            .ok_or_else(|| ConfigError::UnknownTabId(id.to_string()))
    }

    /// Missing headers are not an error; the client draws its default chrome.
    pub fn resolve_header(&self, id: &str) -> Option<&Component> {
        self.entries.get(id).and_then(|e| e.header.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TabEntry)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|e| (id.as_str(), e)))
    }

    /// Every tab in the model must have a registered entry.
    pub fn check_integrity(&self, model: &DockModel) -> Result<(), ConfigError> {
        for id in model.tab_ids() {
            self.resolve(id)?;
        }
        let unused: Vec<&str> = self
            .order
            .iter()
            .map(String::as_str)
            .filter(|id| model.find_tab(id).is_none())
            .collect();
        if !unused.is_empty() {
            tracing::warn!("registered tabs not referenced by the layout: {:?}", unused);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::component::Element;
    use serde_json::json;

    fn registry() -> TabRegistry {
        let mut builder = TabRegistryBuilder::new();
        builder
            .register("a", Element::new("h4").child("A").into(), None)
            .register(
                "b",
                Element::new("h4").child("B").into(),
                Some(Component::text("B header")),
            );
        builder.build()
    }

    #[test]
    fn test_resolve_registered_and_unknown() {
        let reg = registry();
        assert!(reg.resolve("a").is_ok());
        assert_eq!(
            reg.resolve("zzz"),
            Err(ConfigError::UnknownTabId("zzz".into()))
        );
    }

    #[test]
    fn test_missing_header_is_not_an_error() {
        let reg = registry();
        assert_eq!(reg.resolve_header("a"), None);
        assert_eq!(reg.resolve_header("b"), Some(&Component::text("B header")));
        assert_eq!(reg.resolve_header("zzz"), None);
    }

    #[test]
    fn test_reregistration_overwrites_and_keeps_order() {
        let mut builder = TabRegistryBuilder::new();
        builder
            .register("a", Component::text("old"), None)
            .register("b", Component::text("b"), None)
            .register("a", Component::text("new"), None);
        let reg = builder.build();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.resolve("a").unwrap(), &Component::text("new"));
        let ids: Vec<&str> = reg.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_set_header_requires_registration() {
        let mut builder = TabRegistryBuilder::new();
        assert!(builder.set_header("a", Component::text("h")).is_err());
        builder.register("a", Component::text("a"), None);
        assert!(builder.set_header("a", Component::text("h")).is_ok());
        assert!(builder.build().resolve_header("a").is_some());
    }

    #[test]
    fn test_integrity_gap_is_reported() {
        let model = DockModel::from_value(json!({
            "layout": { "type": "row", "children": [
                { "type": "tabset", "children": [
                    { "type": "tab", "id": "a", "name": "A" },
                    { "type": "tab", "id": "c", "name": "C" }
                ] }
            ] }
        }))
        .unwrap();
        assert_eq!(
            registry().check_integrity(&model),
            Err(ConfigError::UnknownTabId("c".into()))
        );
    }
}
