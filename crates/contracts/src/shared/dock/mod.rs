//! Dock layout tree shared between the server and the client.

pub mod model;
pub mod tab_limit;
pub mod validation;

pub use model::*;
pub use tab_limit::{TabCount, DEFAULT_FREE_TAB_LIMIT};
pub use validation::ConfigError;
