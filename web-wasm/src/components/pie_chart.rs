//! Pie chart component
//!
//! Hand-built SVG over the geometry in mars-common; no charting library.

use leptos::prelude::*;

use mars_common::chart::{pie_slices, slice_path};

/// Fixed slice colors: good then bad.
pub const SLICE_COLORS: [&str; 2] = ["#1E3F66", "#BCD2E8"];

const VIEWBOX: f64 = 200.0;
const CENTER: f64 = VIEWBOX / 2.0;
const RADIUS: f64 = VIEWBOX / 2.0 - 4.0;

/// SVG path + fill color for each wedge, good first. Zero counts draw no
/// wedge, so colors stay attached to the values that survive.
fn wedges(good: u32, bad: u32) -> Vec<(String, &'static str)> {
    let data: Vec<(f64, &'static str)> = [
        (f64::from(good), SLICE_COLORS[0]),
        (f64::from(bad), SLICE_COLORS[1]),
    ]
    .into_iter()
    .filter(|(value, _)| *value > 0.0)
    .collect();

    let values: Vec<f64> = data.iter().map(|(value, _)| *value).collect();
    pie_slices(&values)
        .iter()
        .zip(data)
        .map(|(slice, (_, color))| (slice_path(CENTER, CENTER, RADIUS, slice), color))
        .collect()
}

#[component]
pub fn PieChart(good: u32, bad: u32) -> impl IntoView {
    view! {
        <div class="chart-container">
            <svg viewBox=format!("0 0 {VIEWBOX} {VIEWBOX}") role="img">
                <title>"Good versus bad PDFs"</title>
                {wedges(good, bad)
                    .into_iter()
                    .map(|(d, color)| view! { <path d=d fill=color /> })
                    .collect_view()}
            </svg>
            <ul class="chart-legend">
                <li>
                    <span class="swatch" style=format!("background:{}", SLICE_COLORS[0])></span>
                    "Good PDFs"
                </li>
                <li>
                    <span class="swatch" style=format!("background:{}", SLICE_COLORS[1])></span>
                    "Bad PDFs"
                </li>
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_wedges_in_good_bad_order() {
        let wedges = wedges(7, 3);
        assert_eq!(wedges.len(), 2);
        assert_eq!(wedges[0].1, SLICE_COLORS[0]);
        assert_eq!(wedges[1].1, SLICE_COLORS[1]);
    }

    #[test]
    fn test_zero_good_keeps_bad_color() {
        let wedges = wedges(0, 5);
        assert_eq!(wedges.len(), 1);
        assert_eq!(wedges[0].1, SLICE_COLORS[1]);
    }

    #[test]
    fn test_empty_result_draws_nothing() {
        assert!(wedges(0, 0).is_empty());
    }
}
