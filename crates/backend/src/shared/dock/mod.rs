//! Process-wide dock: validated layout model plus tab registry.

pub mod registry;

use contracts::shared::component::{Component, Element};
use contracts::shared::dock::{ConfigError, DockModel, TabCount};
use serde_json::{Map, Value};

use crate::shared::config::DockConfig;

pub use registry::{TabEntry, TabRegistry, TabRegistryBuilder};

/// Immutable after startup; rendering never mutates it.
#[derive(Debug, Clone)]
pub struct DockApp {
    model: DockModel,
    registry: TabRegistry,
    free_tab_limit: usize,
    debug_mode: bool,
}

impl DockApp {
    /// Validates the model and checks that every tab it names is registered.
    pub fn new(
        model: DockModel,
        registry: TabRegistry,
        config: &DockConfig,
    ) -> Result<Self, ConfigError> {
        model.validate()?;
        registry.check_integrity(&model)?;
        Ok(Self {
            model,
            registry,
            free_tab_limit: config.free_tab_limit,
            debug_mode: config.debug_mode,
        })
    }

    pub fn model(&self) -> &DockModel {
        &self.model
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn free_tab_limit(&self) -> usize {
        self.free_tab_limit
    }

    pub fn tab_count(&self) -> TabCount {
        self.model.count_tabs()
    }

    /// Builds the complete dock element for the given API key.
    ///
    /// An empty key counts as no key. Without a key the model is trimmed to
    /// the free tier limit.
    pub fn render(&self, id: &str, api_key: Option<&str>) -> Component {
        let api_key = api_key.filter(|k| !k.is_empty());
        let tab_count = self.model.count_tabs();
        let limited =
            api_key.is_none() && self.model.exceeds_free_tier_limit(self.free_tab_limit);

        let model = if limited {
            if self.debug_mode {
                tracing::info!(
                    "free tier: showing {} of {} tabs, enter an API key to unlock the rest",
                    self.free_tab_limit,
                    tab_count.total
                );
            }
            self.model.limit_to_free_tier(self.free_tab_limit)
        } else {
            self.model.clone()
        };

        let mut headers = Map::new();
        let mut tabs = Vec::with_capacity(self.registry.len());
        for (tab_id, entry) in self.registry.iter() {
            if let Some(header) = &entry.header {
                headers.insert(tab_id.to_string(), header.to_value());
            }
            tabs.push(
                Element::new("tab")
                    .with_id(tab_id)
                    .child(entry.content.clone()),
            );
        }

        Element::new("dock")
            .with_id(id)
            .prop("model", model.to_value())
            .prop("headers", Value::Object(headers))
            .prop("apiKey", api_key.map(Value::from).unwrap_or(Value::Null))
            .prop("freeTabLimit", self.free_tab_limit)
            .prop("limited", limited)
            .prop(
                "tabCount",
                serde_json::to_value(tab_count).unwrap_or(Value::Null),
            )
            .prop("debugMode", self.debug_mode)
            .children(tabs)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model() -> DockModel {
        DockModel::from_value(json!({
            "borders": [
                { "type": "border", "location": "left", "size": 200,
                  "children": [ { "type": "tab", "id": "left", "name": "Left" } ] }
            ],
            "layout": { "type": "row", "children": [
                { "type": "tabset", "children": [
                    { "type": "tab", "id": "one", "name": "One" },
                    { "type": "tab", "id": "two", "name": "Two" }
                ] }
            ] }
        }))
        .unwrap()
    }

    fn registry() -> TabRegistry {
        let mut builder = TabRegistryBuilder::new();
        builder
            .register("left", Component::text("left"), Some(Component::text("L")))
            .register("one", Component::text("one"), None)
            .register("two", Component::text("two"), None);
        builder.build()
    }

    fn config(limit: usize) -> DockConfig {
        DockConfig {
            free_tab_limit: limit,
            debug_mode: false,
        }
    }

    #[test]
    fn test_new_rejects_integrity_gap() {
        let mut builder = TabRegistryBuilder::new();
        builder.register("left", Component::text("left"), None);
        let err = DockApp::new(model(), builder.build(), &config(3)).unwrap_err();
        assert_eq!(err, ConfigError::UnknownTabId("one".into()));
    }

    #[test]
    fn test_render_without_key_is_limited() {
        let app = DockApp::new(model(), registry(), &config(2)).unwrap();
        let dock = app.render("dock", None);
        let el = dock.as_element().unwrap();
        assert_eq!(el.kind, "dock");
        assert_eq!(el.get_prop("limited"), Some(&json!(true)));
        assert_eq!(el.get_prop("apiKey"), Some(&Value::Null));
        let rendered = DockModel::from_value(el.get_prop("model").unwrap().clone()).unwrap();
        assert_eq!(rendered.tab_ids(), vec!["left", "one"]);
        assert_eq!(el.get_prop("tabCount").unwrap()["total"], 3);
        // every registered tab is forwarded, even when hidden by the limit
        assert_eq!(el.children.len(), 3);
        assert_eq!(el.get_prop("headers").unwrap()["left"], json!("L"));
    }

    #[test]
    fn test_empty_key_counts_as_absent() {
        let app = DockApp::new(model(), registry(), &config(2)).unwrap();
        assert_eq!(app.render("dock", Some("")), app.render("dock", None));
    }

    #[test]
    fn test_render_with_key_is_full_and_passes_key_through() {
        let app = DockApp::new(model(), registry(), &config(2)).unwrap();
        let dock = app.render("dock", Some("secret-123"));
        let el = dock.as_element().unwrap();
        assert_eq!(el.get_prop("limited"), Some(&json!(false)));
        assert_eq!(el.get_prop("apiKey"), Some(&json!("secret-123")));
        assert_eq!(el.get_prop("model"), Some(&app.model().to_value()));
    }

    #[test]
    fn test_within_limit_renders_full_model_without_key() {
        let app = DockApp::new(model(), registry(), &config(3)).unwrap();
        let dock = app.render("dock", None);
        let el = dock.as_element().unwrap();
        assert_eq!(el.get_prop("limited"), Some(&json!(false)));
        assert_eq!(el.get_prop("model"), Some(&app.model().to_value()));
    }
}
