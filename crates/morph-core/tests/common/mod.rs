// File: crates/morph-core/tests/common/mod.rs
// Purpose: Shared helpers for integration tests.

#![allow(dead_code)]

use morph_core::Point;

pub const EPS: f64 = 1e-9;

pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

pub fn assert_close(got: (f64, f64), want: (f64, f64)) {
    assert!(
        (got.0 - want.0).abs() <= EPS && (got.1 - want.1).abs() <= EPS,
        "expected {want:?}, got {got:?}"
    );
}

/// Renderer that keeps a copy of every frame it is handed.
#[derive(Default)]
pub struct Recorder {
    pub frames: Vec<Vec<(f64, f64)>>,
}

impl morph_core::Renderer for Recorder {
    fn render(&mut self, points: &[Point]) -> anyhow::Result<()> {
        self.frames.push(points.iter().map(Point::coordinates).collect());
        Ok(())
    }
}
