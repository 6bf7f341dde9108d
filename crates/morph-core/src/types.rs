// File: crates/morph-core/src/types.rs
// Summary: Shared constants (canvas size, paddings, animation defaults).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: i32 = 450;

/// Gap between the canvas edge and the axis lines, in pixels.
pub const AXIS_PADDING: i32 = 40;
/// Radius of a point marker, in pixels.
pub const POINT_RADIUS: i32 = 5;

pub const DEFAULT_MIN_POINTS: usize = 2;
pub const DEFAULT_MAX_POINTS: usize = 10;
/// Largest accepted `max_points`; datasets are allocated up front.
pub const MAX_POINTS_LIMIT: usize = 10_000;
/// Ticks per transition.
pub const DEFAULT_STEPS: u32 = 30;
/// Whole transition duration; 30 ms per tick at the default step count.
pub const DEFAULT_TOTAL_TIME_MS: u64 = 900;
