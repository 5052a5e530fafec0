pub mod api_utils;
pub mod renderer;
pub mod state;
pub mod theme;
