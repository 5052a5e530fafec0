use once_cell::sync::OnceCell;

use contracts::shared::component::Component;

use crate::shared::callbacks::BindingTable;
use crate::shared::config::Config;
use crate::shared::dock::DockApp;

/// Everything shared by all sessions. Read-only once initialized.
#[derive(Debug)]
pub struct AppState {
    pub dock: DockApp,
    pub bindings: BindingTable,
    pub page: Component,
}

static APP_STATE: OnceCell<AppState> = OnceCell::new();

pub fn initialize_app_state(config: &Config) -> anyhow::Result<()> {
    let state = crate::dashboards::d400_dock_demo::build_state(&config.dock)?;
    APP_STATE
        .set(state)
        .map_err(|_| anyhow::anyhow!("application state already initialized"))
}

pub fn get_app_state() -> &'static AppState {
    APP_STATE
        .get()
        .expect("Application state has not been initialized")
}

#[cfg(test)]
pub fn init_for_tests() -> &'static AppState {
    APP_STATE.get_or_init(|| {
        crate::dashboards::d400_dock_demo::build_state(&Default::default())
            .expect("demo state must build")
    })
}
