//! Sample charts shown in the main view.

use contracts::enums::ChartType;
use contracts::shared::component::{Component, Element};
use serde_json::{json, Value};

/// Fixed five-point `month,value` sample series.
pub const SAMPLE_SERIES: [(&str, i64); 5] = [
    ("January", 10),
    ("February", 11),
    ("March", 9),
    ("April", 16),
    ("May", 14),
];

pub const INVALID_CHART_TEXT: &str = "Invalid chart type selected";

const CHART_HEIGHT: u32 = 400;
const SERIES_COLOR: &str = "blue.6";
const SERIES_LABEL: &str = "Sample Data";

pub fn month_value_data() -> Value {
    Value::Array(
        SAMPLE_SERIES
            .iter()
            .map(|(month, value)| json!({ "month": month, "value": value }))
            .collect(),
    )
}

/// The sample series reindexed as `(x, y)` with x starting at 1.
pub fn xy_points() -> Vec<(i64, i64)> {
    SAMPLE_SERIES
        .iter()
        .enumerate()
        .map(|(i, (_, value))| (i as i64 + 1, *value))
        .collect()
}

/// Renders the chart for `chart_type`; unknown types get the fallback text.
pub fn render_chart(chart_type: Option<ChartType>) -> Component {
    match chart_type {
        Some(ChartType::Line) => category_chart("line-chart"),
        Some(ChartType::Bar) => category_chart("bar-chart"),
        Some(ChartType::Scatter) => scatter_chart(),
        None => Element::new("div").child(INVALID_CHART_TEXT).into(),
    }
}

fn category_chart(kind: &str) -> Component {
    Element::new(kind)
        .prop("h", CHART_HEIGHT)
        .prop("dataKey", "month")
        .prop("data", month_value_data())
        .prop("withLegend", true)
        .prop("xAxisLabel", "Month")
        .prop("yAxisLabel", "Value")
        .prop(
            "series",
            json!([{ "name": "value", "color": SERIES_COLOR, "label": SERIES_LABEL }]),
        )
        .into()
}

fn scatter_chart() -> Component {
    let points: Vec<Value> = xy_points()
        .into_iter()
        .map(|(x, y)| json!({ "x": x, "y": y }))
        .collect();

    Element::new("scatter-chart")
        .prop("h", CHART_HEIGHT)
        .prop(
            "data",
            json!([{ "color": SERIES_COLOR, "name": SERIES_LABEL, "data": points }]),
        )
        .prop("dataKey", json!({ "x": "x", "y": "y" }))
        .prop("withLegend", true)
        .prop("xAxisLabel", "X Value")
        .prop("yAxisLabel", "Y Value")
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_bar_use_month_series() {
        for (t, kind) in [(ChartType::Line, "line-chart"), (ChartType::Bar, "bar-chart")] {
            let chart = render_chart(Some(t));
            let el = chart.as_element().unwrap();
            assert_eq!(el.kind, kind);
            assert_eq!(el.get_prop("dataKey"), Some(&json!("month")));
            assert_eq!(
                el.get_prop("data"),
                Some(&json!([
                    { "month": "January", "value": 10 },
                    { "month": "February", "value": 11 },
                    { "month": "March", "value": 9 },
                    { "month": "April", "value": 16 },
                    { "month": "May", "value": 14 }
                ]))
            );
        }
    }

    #[test]
    fn test_scatter_reindexes_series() {
        assert_eq!(xy_points(), vec![(1, 10), (2, 11), (3, 9), (4, 16), (5, 14)]);
        let chart = render_chart(Some(ChartType::Scatter));
        let el = chart.as_element().unwrap();
        assert_eq!(el.kind, "scatter-chart");
        assert_eq!(
            el.get_prop("data").unwrap()[0]["data"],
            json!([
                { "x": 1, "y": 10 }, { "x": 2, "y": 11 }, { "x": 3, "y": 9 },
                { "x": 4, "y": 16 }, { "x": 5, "y": 14 }
            ])
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_text() {
        let chart = render_chart(None);
        let el = chart.as_element().unwrap();
        assert_eq!(el.kind, "div");
        assert_eq!(el.children, vec![Component::text(INVALID_CHART_TEXT)]);
    }
}
