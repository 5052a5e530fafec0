pub mod chart_type;

pub use chart_type::ChartType;
