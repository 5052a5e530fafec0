pub mod page;

pub use page::DockDemoPage;
