pub mod callbacks;
pub mod component;
pub mod dock;
