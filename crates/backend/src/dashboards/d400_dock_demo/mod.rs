//! Dock demo page: layout, tab contents, charts and bindings.

pub mod bindings;
pub mod charts;
pub mod layout;
pub mod page;
pub mod tabs;

use contracts::shared::component::Component;

use crate::shared::app_state::AppState;
use crate::shared::callbacks::BindingTable;
use crate::shared::config::DockConfig;
use crate::shared::dock::DockApp;

/// Builds and validates everything the demo serves.
///
/// Any configuration error is fatal: the server must not start with it.
pub fn build_state(config: &DockConfig) -> anyhow::Result<AppState> {
    let model = layout::dock_model()?;
    let dock = DockApp::new(model, tabs::tab_registry(), config)?;
    let bindings = BindingTable::new(bindings::bindings())?;
    let page = page::page_layout();

    // Ids only have to exist once the dock is rendered; report the strays.
    for descriptor in bindings.descriptors() {
        for prop in descriptor.inputs.iter().chain(descriptor.outputs.iter()) {
            if !is_rendered(&page, &dock, &prop.id) {
                tracing::warn!(
                    "binding '{}' refers to '{}', which is not in the page",
                    descriptor.name,
                    prop.id
                );
            }
        }
    }

    tracing::info!(
        "dock demo ready: {} tabs, {} bindings",
        dock.tab_count().total,
        bindings.len()
    );

    Ok(AppState {
        dock,
        bindings,
        page,
    })
}

fn is_rendered(page: &Component, dock: &DockApp, id: &str) -> bool {
    page.find(id).is_some()
        || dock
            .registry()
            .iter()
            .any(|(_, entry)| entry.content.find(id).is_some())
}
