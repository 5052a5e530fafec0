use contracts::shared::component::Component;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::renderer::render_component;
use crate::shared::state::api;
use crate::shared::state::PageStore;

/// Dock demo page: loads the page layout and binding table, then sends the
/// initial update that fills every server output.
#[component]
pub fn DockDemoPage() -> impl IntoView {
    let store = PageStore::new();
    let (layout, set_layout) = signal(None::<Component>);
    let (load_error, set_load_error) = signal(None::<String>);

    spawn_local(async move {
        let bindings = match api::get_dependencies().await {
            Ok(bindings) => bindings,
            Err(err) => {
                log::error!("Failed to load page dependencies: {}", err);
                set_load_error.set(Some(err));
                return;
            }
        };
        let page = match api::get_page_layout().await {
            Ok(page) => page,
            Err(err) => {
                log::error!("Failed to load page layout: {}", err);
                set_load_error.set(Some(err));
                return;
            }
        };

        log::info!("page loaded: {} bindings", bindings.len());
        store.set_bindings(bindings);
        store.seed(&page);
        set_layout.set(Some(page));
        store.dispatch(None);
    });

    view! {
        {move || load_error.get().map(|msg| view! {
            <div class="alert alert--error">{format!("Failed to load the page: {msg}")}</div>
        })}
        {move || store.error.get().map(|msg| view! {
            <div class="alert alert--warning">{format!("Update failed: {msg}")}</div>
        })}
        {move || match layout.get() {
            Some(page) => render_component(page, store),
            None if load_error.get().is_none() => view! {
                <div class="page__loading">"Loading..."</div>
            }.into_any(),
            None => ().into_any(),
        }}
    }
}
