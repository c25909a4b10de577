//! Pie chart geometry
//!
//! Angle spans and SVG arc paths for the good/bad pie. Kept as pure math
//! so the proportions are testable off the DOM.

use std::f64::consts::TAU;

/// One wedge of the pie. Angles are radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub value: f64,
    pub start: f64,
    pub end: f64,
}

impl Slice {
    /// Angular span in radians.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Splits the circle proportionally to `values`, skipping non-positive
/// entries. Returns an empty vec when there is nothing to draw.
pub fn pie_slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut angle = 0.0;
    for &value in values {
        if value <= 0.0 {
            continue;
        }
        let span = value / total * TAU;
        slices.push(Slice {
            value,
            start: angle,
            end: angle + span,
        });
        angle += span;
    }
    slices
}

/// Point on the circle at a clockwise angle measured from 12 o'clock.
fn point_at(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for one slice of a pie centered at (`cx`, `cy`).
///
/// A slice spanning the whole circle has coincident arc endpoints, which
/// a single SVG arc cannot express; it is drawn as two half arcs instead.
pub fn slice_path(cx: f64, cy: f64, r: f64, slice: &Slice) -> String {
    if slice.span() >= TAU - 1e-9 {
        let (top_x, top_y) = point_at(cx, cy, r, 0.0);
        let (bottom_x, bottom_y) = point_at(cx, cy, r, TAU / 2.0);
        return format!(
            "M {top_x:.3} {top_y:.3} \
             A {r} {r} 0 1 1 {bottom_x:.3} {bottom_y:.3} \
             A {r} {r} 0 1 1 {top_x:.3} {top_y:.3} Z"
        );
    }

    let (start_x, start_y) = point_at(cx, cy, r, slice.start);
    let (end_x, end_y) = point_at(cx, cy, r, slice.end);
    let large_arc = i32::from(slice.span() > TAU / 2.0);
    format!(
        "M {cx} {cy} L {start_x:.3} {start_y:.3} \
         A {r} {r} 0 {large_arc} 1 {end_x:.3} {end_y:.3} Z"
    )
}
