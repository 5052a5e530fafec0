pub mod api;
pub mod page_store;
pub mod prop_store;

pub use page_store::PageStore;
pub use prop_store::PropStore;
