// File: crates/morph-core/src/point.rs
// Summary: Chart point with an optional animation target and tick-based interpolation.

use crate::types::DEFAULT_STEPS;

/// A chart point in canvas pixels.
///
/// While a target is set the point travels from its origin (the position at
/// the time the target or position was last assigned) to the target in
/// `steps` equal ticks. Positions are interpolated from the origin on every
/// tick rather than accumulated, and the last tick lands exactly on the
/// target.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    origin: (f64, f64),
    target: Option<(f64, f64)>,
    steps: u32,
    tick: u32,
}

impl Point {
    /// A settled point using `DEFAULT_STEPS` for any later target. Use
    /// [`Point::with_steps`] when the tick count comes from a config.
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_steps(x, y, DEFAULT_STEPS)
    }

    pub fn with_steps(x: f64, y: f64, steps: u32) -> Self {
        Self { x, y, origin: (x, y), target: None, steps: steps.max(1), tick: 0 }
    }

    /// A point sitting at `start` and heading for `end` over `steps` ticks.
    pub fn transition(start: (f64, f64), end: (f64, f64), steps: u32) -> Self {
        let mut p = Self::with_steps(start.0, start.1, steps);
        p.set_target_coordinates(end.0, end.1);
        p
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn target_coordinates(&self) -> Option<(f64, f64)> {
        self.target
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Change the tick count; the remaining distance is re-split from here.
    pub fn set_steps(&mut self, steps: u32) {
        self.steps = steps.max(1);
        self.restart();
    }

    /// Move the point. A pending target is kept and approached from the new position.
    pub fn set_coordinates(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.restart();
    }

    pub fn set_target_coordinates(&mut self, x: f64, y: f64) {
        self.target = Some((x, y));
        self.restart();
    }

    /// Exchange position and target. No-op without a target.
    pub fn swap_coordinates(&mut self) {
        if let Some((tx, ty)) = self.target {
            self.target = Some((self.x, self.y));
            self.x = tx;
            self.y = ty;
            self.restart();
        }
    }

    /// Per-tick displacement, or `None` when there is nowhere to go.
    pub fn step_delta(&self) -> Option<(f64, f64)> {
        let (tx, ty) = self.target?;
        let n = self.steps as f64;
        Some(((tx - self.origin.0) / n, (ty - self.origin.1) / n))
    }

    /// Ticks taken since the origin was last reset.
    pub fn ticks_taken(&self) -> u32 {
        self.tick
    }

    /// True when there is no target or the target has been reached.
    pub fn is_settled(&self) -> bool {
        match self.target {
            None => true,
            Some(t) => self.tick >= self.steps || t == (self.x, self.y),
        }
    }

    /// Advance one tick towards the target.
    pub fn advance(&mut self) {
        let Some((tx, ty)) = self.target else { return };
        if self.tick >= self.steps {
            return;
        }
        self.tick += 1;
        if self.tick == self.steps {
            self.x = tx;
            self.y = ty;
        } else {
            let t = self.tick as f64 / self.steps as f64;
            self.x = self.origin.0 + (tx - self.origin.0) * t;
            self.y = self.origin.1 + (ty - self.origin.1) * t;
        }
    }

    fn restart(&mut self) {
        self.origin = (self.x, self.y);
        self.tick = 0;
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
