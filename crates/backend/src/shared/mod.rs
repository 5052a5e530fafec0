pub mod app_state;
pub mod callbacks;
pub mod config;
pub mod dock;
pub mod format;
