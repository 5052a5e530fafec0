//! Small SVG charts for the `line-chart`, `bar-chart` and `scatter-chart`
//! elements.

use contracts::shared::component::Element;
use leptos::prelude::*;
use serde_json::Value;

const WIDTH: f64 = 600.0;
const PADDING: f64 = 40.0;
const DEFAULT_HEIGHT: f64 = 300.0;

/// Mantine palette names used by the server; anything else passes through.
pub fn palette_color(name: &str) -> String {
    match name {
        "blue.6" => "#228be6".to_string(),
        "red.6" => "#fa5252".to_string(),
        "green.6" => "#40c057".to_string(),
        other => other.to_string(),
    }
}

/// Linear map of `v` from `[min, max]` onto `[lo, hi]`.
pub fn scale(v: f64, min: f64, max: f64, lo: f64, hi: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return (lo + hi) / 2.0;
    }
    lo + (v - min) / (max - min) * (hi - lo)
}

/// Numbers in SVG attributes are written with one decimal.
fn num(v: f64) -> String {
    format!("{v:.1}")
}

fn str_prop<'a>(element: &'a Element, key: &str) -> Option<&'a str> {
    element.get_prop(key).and_then(Value::as_str)
}

fn chart_height(element: &Element) -> f64 {
    element
        .get_prop("h")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_HEIGHT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: String,
}

fn first_series(element: &Element) -> (Option<String>, Series) {
    let series = element.get_prop("series").and_then(|s| s.get(0));
    let key = series
        .and_then(|s| s.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let label = series
        .and_then(|s| s.get("label"))
        .and_then(Value::as_str)
        .or(key.as_deref())
        .unwrap_or_default()
        .to_string();
    let color = series
        .and_then(|s| s.get("color"))
        .and_then(Value::as_str)
        .map(palette_color)
        .unwrap_or_else(|| palette_color("blue.6"));
    (key, Series { label, color })
}

/// `(category, value)` pairs of the first series.
pub fn category_points(element: &Element) -> Vec<(String, f64)> {
    let data_key = str_prop(element, "dataKey").unwrap_or("x");
    let (series_key, _) = first_series(element);
    let series_key = series_key.unwrap_or_else(|| "value".to_string());

    element
        .get_prop("data")
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(|row| {
                    let category = row.get(data_key)?.as_str()?.to_string();
                    let value = row.get(&series_key)?.as_f64()?;
                    Some((category, value))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `(x, y)` points of the first scatter series.
pub fn scatter_points(element: &Element) -> (Series, Vec<(f64, f64)>) {
    let keys = element.get_prop("dataKey");
    let x_key = keys
        .and_then(|k| k.get("x"))
        .and_then(Value::as_str)
        .unwrap_or("x");
    let y_key = keys
        .and_then(|k| k.get("y"))
        .and_then(Value::as_str)
        .unwrap_or("y");

    let first = element.get_prop("data").and_then(|d| d.get(0));
    let series = Series {
        label: first
            .and_then(|s| s.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        color: first
            .and_then(|s| s.get("color"))
            .and_then(Value::as_str)
            .map(palette_color)
            .unwrap_or_else(|| palette_color("blue.6")),
    };
    let points = first
        .and_then(|s| s.get("data"))
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .filter_map(|p| Some((p.get(x_key)?.as_f64()?, p.get(y_key)?.as_f64()?)))
                .collect()
        })
        .unwrap_or_default();
    (series, points)
}

fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        return (0.0, 1.0);
    }
    (min.min(0.0), max)
}

#[component]
fn Axes(height: f64, x_label: String, y_label: String) -> impl IntoView {
    let bottom = height - PADDING;
    view! {
        <line x1=num(PADDING) y1=num(PADDING) x2=num(PADDING) y2=num(bottom) stroke="currentColor"/>
        <line
            x1=num(PADDING)
            y1=num(bottom)
            x2=num(WIDTH - PADDING)
            y2=num(bottom)
            stroke="currentColor"
        />
        <text x=num(WIDTH / 2.0) y=num(height - 5.0) text-anchor="middle" font-size="12">
            {x_label}
        </text>
        <text
            x="12"
            y=num(height / 2.0)
            font-size="12"
            transform=format!("rotate(-90 12 {})", num(height / 2.0))
        >
            {y_label}
        </text>
    }
}

#[component]
pub fn CategoryChart(element: Element) -> impl IntoView {
    let height = chart_height(&element);
    let points = category_points(&element);
    let (_, series) = first_series(&element);
    let is_bar = element.kind == "bar-chart";
    let x_label = str_prop(&element, "xAxisLabel").unwrap_or_default().to_string();
    let y_label = str_prop(&element, "yAxisLabel").unwrap_or_default().to_string();

    let (min, max) = value_range(points.iter().map(|(_, v)| *v));
    let slot = (WIDTH - 2.0 * PADDING) / points.len().max(1) as f64;
    let bottom = height - PADDING;
    let placed: Vec<(String, f64, f64)> = points
        .into_iter()
        .enumerate()
        .map(|(i, (category, v))| {
            let x = PADDING + slot * (i as f64 + 0.5);
            let y = scale(v, min, max, bottom, PADDING);
            (category, x, y)
        })
        .collect();

    let marks = if is_bar {
        let color = series.color.clone();
        placed
            .iter()
            .map(|(_, x, y)| {
                view! {
                    <rect
                        x=num(x - slot * 0.3)
                        y=num(*y)
                        width=num(slot * 0.6)
                        height=num(bottom - y)
                        fill=color.clone()
                    />
                }
            })
            .collect_view()
            .into_any()
    } else {
        let line: String = placed
            .iter()
            .map(|(_, x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        view! { <polyline points=line fill="none" stroke=series.color.clone() stroke-width="2"/> }
            .into_any()
    };

    let ticks = placed
        .into_iter()
        .map(|(category, x, _)| {
            view! {
                <text x=num(x) y=num(bottom + 16.0) text-anchor="middle" font-size="11">
                    {category}
                </text>
            }
        })
        .collect_view();

    view! {
        <figure class=format!("dc-{}", element.kind)>
            <svg viewBox=format!("0 0 {} {}", WIDTH, height) width="100%" height=num(height)>
                <Axes height=height x_label=x_label y_label=y_label/>
                {marks}
                {ticks}
            </svg>
            <figcaption style=format!("color: {};", series.color)>{series.label.clone()}</figcaption>
        </figure>
    }
}

#[component]
pub fn ScatterChart(element: Element) -> impl IntoView {
    let height = chart_height(&element);
    let (series, points) = scatter_points(&element);
    let x_label = str_prop(&element, "xAxisLabel").unwrap_or_default().to_string();
    let y_label = str_prop(&element, "yAxisLabel").unwrap_or_default().to_string();

    let (x_min, x_max) = value_range(points.iter().map(|(x, _)| *x));
    let (y_min, y_max) = value_range(points.iter().map(|(_, y)| *y));
    let bottom = height - PADDING;
    let color = series.color.clone();
    let dots = points
        .into_iter()
        .map(|(x, y)| {
            let cx = scale(x, x_min, x_max, PADDING, WIDTH - PADDING);
            let cy = scale(y, y_min, y_max, bottom, PADDING);
            view! { <circle cx=num(cx) cy=num(cy) r="5" fill=color.clone()/> }
        })
        .collect_view();

    view! {
        <figure class="dc-scatter-chart">
            <svg viewBox=format!("0 0 {} {}", WIDTH, height) width="100%" height=num(height)>
                <Axes height=height x_label=x_label y_label=y_label/>
                {dots}
            </svg>
            <figcaption style=format!("color: {};", series.color)>{series.label.clone()}</figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line_chart() -> Element {
        Element::new("line-chart")
            .prop("dataKey", "month")
            .prop(
                "data",
                json!([
                    { "month": "January", "value": 10 },
                    { "month": "February", "value": 11 },
                    { "month": "March" }
                ]),
            )
            .prop(
                "series",
                json!([{ "name": "value", "color": "blue.6", "label": "Sample Data" }]),
            )
    }

    #[test]
    fn test_category_points_skip_incomplete_rows() {
        assert_eq!(
            category_points(&line_chart()),
            vec![("January".to_string(), 10.0), ("February".to_string(), 11.0)]
        );
        let (key, series) = first_series(&line_chart());
        assert_eq!(key.as_deref(), Some("value"));
        assert_eq!(series.label, "Sample Data");
        assert_eq!(series.color, "#228be6");
    }

    #[test]
    fn test_scatter_points() {
        let chart = Element::new("scatter-chart")
            .prop("dataKey", json!({ "x": "x", "y": "y" }))
            .prop(
                "data",
                json!([{ "name": "Sample Data", "color": "blue.6",
                         "data": [{ "x": 1, "y": 10 }, { "x": 2, "y": 11 }] }]),
            );
        let (series, points) = scatter_points(&chart);
        assert_eq!(series.label, "Sample Data");
        assert_eq!(points, vec![(1.0, 10.0), (2.0, 11.0)]);
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(scale(10.0, 0.0, 10.0, 360.0, 40.0), 40.0);
        // flat range sits in the middle
        assert_eq!(scale(3.0, 3.0, 3.0, 0.0, 10.0), 5.0);
        assert_eq!(value_range(std::iter::empty()), (0.0, 1.0));
        assert_eq!(value_range([9.0, 16.0].into_iter()), (0.0, 16.0));
    }
}
