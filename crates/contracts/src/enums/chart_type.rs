use serde::{Deserialize, Serialize};

/// Chart kinds offered by the chart type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Scatter,
}

impl ChartType {
    pub fn code(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Scatter => "scatter",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Scatter => "Scatter Chart",
        }
    }

    pub fn all() -> [ChartType; 3] {
        [ChartType::Line, ChartType::Bar, ChartType::Scatter]
    }

    /// Unknown codes yield `None`; callers pick their own fallback.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "line" => Some(ChartType::Line),
            "bar" => Some(ChartType::Bar),
            "scatter" => Some(ChartType::Scatter),
            _ => None,
        }
    }
}
