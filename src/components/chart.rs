//! Inline SVG line chart for the leads-over-time series. No charting crate;
//! the series is small (at most one point per day) and a polyline is enough.

use leptos::*;

use leadboard_client::reports::SeriesPoint;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 220.0;
const PAD_X: f64 = 36.0;
const PAD_Y: f64 = 18.0;

/// Project the series onto chart coordinates. Points are spread evenly on
/// the x axis; y is scaled to the series maximum (at least 1, so a flat
/// all-zero series sits on the baseline instead of dividing by zero).
pub fn project(points: &[SeriesPoint]) -> Vec<(f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = points.iter().map(|p| p.count).max().unwrap_or(0).max(1) as f64;
    let span_x = WIDTH - 2.0 * PAD_X;
    let span_y = HEIGHT - 2.0 * PAD_Y;
    let step = if points.len() > 1 {
        span_x / (points.len() - 1) as f64
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PAD_X + step * i as f64;
            let y = HEIGHT - PAD_Y - (point.count as f64 / max) * span_y;
            (x, y)
        })
        .collect()
}

fn polyline(points: &[SeriesPoint]) -> String {
    project(points)
        .into_iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn LeadChart(#[prop(into)] series: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    view! {
        <div class="lead-chart">
            {move || {
                let points = series.get();
                if points.is_empty() {
                    view! { <p class="chart-empty">"No lead activity in this period."</p> }
                        .into_view()
                } else {
                    let line = polyline(&points);
                    let dots = project(&points);
                    let first_label = points.first().map(|p| p.date.clone()).unwrap_or_default();
                    let last_label = points.last().map(|p| p.date.clone()).unwrap_or_default();
                    view! {
                        <svg
                            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                            preserveAspectRatio="xMidYMid meet"
                            role="img"
                        >
                            <line
                                class="chart-axis"
                                x1=PAD_X
                                y1={HEIGHT - PAD_Y}
                                x2={WIDTH - PAD_X}
                                y2={HEIGHT - PAD_Y}
                            ></line>
                            <polyline class="chart-line" fill="none" points=line></polyline>
                            {dots
                                .into_iter()
                                .zip(points.iter())
                                .map(|((x, y), point)| {
                                    let title = format!("{}: {}", point.date, point.count);
                                    view! {
                                        <circle class="chart-dot" cx=x cy=y r="3">
                                            <title>{title}</title>
                                        </circle>
                                    }
                                })
                                .collect_view()}
                        </svg>
                        <div class="chart-labels">
                            <span>{first_label}</span>
                            <span>{last_label}</span>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
