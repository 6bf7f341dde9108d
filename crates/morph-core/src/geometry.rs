// File: crates/morph-core/src/geometry.rs
// Summary: Canvas-derived bounds for generated points.

use crate::types::{AXIS_PADDING, POINT_RADIUS};

/// Valid placement area for chart points, in canvas pixels.
///
/// Values grow upwards: a value `v` is drawn at `baseline_y - v`, so
/// `max_value` is the tallest value that still clears the top padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointBounds {
    pub radius: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub baseline_y: f64,
    pub max_value: f64,
}

impl PointBounds {
    pub fn from_canvas(width: i32, height: i32) -> Self {
        let pad = AXIS_PADDING as f64;
        let r = POINT_RADIUS as f64;
        let (w, h) = (width as f64, height as f64);
        Self {
            radius: r,
            min_x: pad * 2.0,
            max_x: (w - pad * 2.0).max(pad * 2.0),
            baseline_y: h - pad - r,
            max_value: (h - pad * 2.0 - r * 2.0).max(0.0),
        }
    }

    /// Horizontal room between the first and the last point.
    #[inline]
    pub fn span_x(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Highest point on screen (smallest y).
    #[inline]
    pub fn top_y(&self) -> f64 {
        self.baseline_y - self.max_value
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y <= self.baseline_y && y >= self.top_y()
    }
}
