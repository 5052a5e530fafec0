pub mod d400_dock_demo;

pub use d400_dock_demo::ui::DockDemoPage;
