// File: crates/morph-core/src/generate.rs
// Summary: Random dataset generator producing evenly spaced chart points.

use rand::Rng;

use crate::config::AnimationConfig;
use crate::geometry::PointBounds;
use crate::point::Point;

/// Generate between `min_points` and `max_points` points (inclusive),
/// spread left to right across `bounds` with random integer heights.
///
/// The horizontal gap is floored to whole pixels, so the last point can sit
/// slightly left of `max_x`. A single point sits at `min_x`.
pub fn generate_points<R: Rng>(rng: &mut R, config: &AnimationConfig, bounds: &PointBounds) -> Vec<Point> {
    let lo = config.min_points.max(1);
    let hi = config.max_points.max(lo);
    let count = rng.gen_range(lo..=hi);
    let gap = if count > 1 { (bounds.span_x() / (count - 1) as f64).floor() } else { 0.0 };
    let max_value = bounds.max_value.floor().max(0.0) as u32;

    (0..count)
        .map(|i| {
            let value = rng.gen_range(0..=max_value) as f64;
            Point::with_steps(bounds.min_x + gap * i as f64, bounds.baseline_y - value, config.steps)
        })
        .collect()
}
