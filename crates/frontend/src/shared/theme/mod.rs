//! Colour scheme of the page.
//!
//! The switch in the page header toggles a single boolean that lives in the
//! browser only. The scheme is written to the `data-color-scheme` attribute of
//! `<html>` and persisted in localStorage; the server is never asked.

use contracts::dashboards::d400_dock_demo::COLOR_SCHEME_ATTRIBUTE;
use leptos::prelude::*;
use thaw::Switch;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Value of the `data-color-scheme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

const COLOR_SCHEME_STORAGE_KEY: &str = "color-scheme-dark";

/// Missing or unreadable entries mean light.
fn load_from_storage() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(COLOR_SCHEME_STORAGE_KEY).ok().flatten())
        .map(|s| s == "true")
        .unwrap_or(false)
}

fn save_to_storage(dark: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(COLOR_SCHEME_STORAGE_KEY, if dark { "true" } else { "false" });
    }
}

fn apply_color_scheme(scheme: ColorScheme) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute(COLOR_SCHEME_ATTRIBUTE, scheme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// `true` when the dark scheme is active.
    pub dark: RwSignal<bool>,
}

/// Provides the colour scheme to children and keeps `<html>` and storage in
/// sync with it.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_from_storage();
    let dark = RwSignal::new(initial);

    // Apply before the first paint so there is no flash of the wrong scheme
    apply_color_scheme(ColorScheme::from_dark(initial));

    Effect::new(move |prev: Option<bool>| {
        let current = dark.get();
        if prev.is_some() {
            apply_color_scheme(ColorScheme::from_dark(current));
            save_to_storage(current);
            log::debug!("color scheme set to {}", ColorScheme::from_dark(current).as_str());
        }
        current
    });

    provide_context(ThemeContext { dark });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// The header switch bound to the theme context.
#[component]
pub fn ColorSchemeSwitch(#[prop(into)] id: String) -> impl IntoView {
    let ctx = use_theme();

    view! {
        <span id=id class="color-scheme-switch">
            <Switch checked=ctx.dark label="Dark mode"/>
        </span>
    }
}
