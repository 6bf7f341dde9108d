// File: crates/morph-core/src/scheduler.rs
// Summary: Animation scheduler owning the chart state and driving one morph at a time.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info, warn};
use rand::Rng;

use crate::config::{AnimationConfig, ParameterForm};
use crate::error::{ChartError, ConfigError};
use crate::generate::generate_points;
use crate::geometry::PointBounds;
use crate::point::Point;
use crate::render::Renderer;
use crate::resample::resample;
use crate::timer::RepeatingTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is animating.
    Idle,
    /// Points moved; carries the step counter after the tick.
    Advanced(u32),
    /// The last step was rendered and the destination is now current.
    Finished,
}

/// One morph in flight. `steps` and the tick interval are captured at start,
/// so reconfiguring only affects the next morph.
struct Transition {
    working: Vec<Point>,
    destination: Vec<Point>,
    steps: u32,
    step: u32,
}

/// Chart context: configuration, settled points, and the running morph.
pub struct AnimationScheduler {
    config: AnimationConfig,
    current: Vec<Point>,
    transition: Option<Transition>,
    timer: RepeatingTimer,
}

impl AnimationScheduler {
    pub fn new(config: AnimationConfig, initial: Vec<Point>) -> Result<Self, ChartError> {
        if initial.is_empty() {
            return Err(ChartError::InvalidPointCount { old: 0, new: 0 });
        }
        let timer = RepeatingTimer::new(config.step_time());
        Ok(Self { config, current: initial, transition: None, timer })
    }

    /// Start with a random dataset drawn with `config`.
    pub fn with_random_points<R: Rng>(config: AnimationConfig, rng: &mut R, bounds: &PointBounds) -> Result<Self, ChartError> {
        Self::new(config, generate_points(rng, &config, bounds))
    }

    pub fn state(&self) -> SchedulerState {
        if self.transition.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.transition.is_some()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Takes effect on the next morph; a running one keeps its own steps and interval.
    pub fn set_config(&mut self, config: AnimationConfig) {
        debug!("config updated: {:?}", config);
        self.config = config;
    }

    /// Parse and apply a parameter form. On error the previous config stays active.
    pub fn apply_form(&mut self, form: &ParameterForm) -> Result<(), ConfigError> {
        match form.parse() {
            Ok(cfg) => {
                self.set_config(cfg);
                Ok(())
            }
            Err(e) => {
                warn!("rejected parameters ({e}); keeping {:?}", self.config);
                Err(e)
            }
        }
    }

    /// Last settled sequence.
    pub fn current_points(&self) -> &[Point] {
        &self.current
    }

    /// Points being animated, or the settled ones when idle.
    pub fn working_points(&self) -> &[Point] {
        match &self.transition {
            Some(t) => &t.working,
            None => &self.current,
        }
    }

    /// Ticks taken by the running morph; 0 when idle.
    pub fn step(&self) -> u32 {
        self.transition.as_ref().map_or(0, |t| t.step)
    }

    /// Interval of the running morph, or the one the next morph will use.
    pub fn step_time(&self) -> Duration {
        if self.timer.is_active() {
            self.timer.interval()
        } else {
            self.config.step_time()
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Draw the settled points, e.g. on first load.
    pub fn render_current<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<()> {
        renderer.render(&self.current)
    }

    /// Begin morphing towards `new_points`.
    ///
    /// Returns `Ok(false)` without touching any state when a morph is
    /// already running.
    pub fn animated_change(&mut self, new_points: Vec<Point>, now: Instant) -> Result<bool, ChartError> {
        if self.is_running() {
            debug!("morph already running (step {}); request dropped", self.step());
            return Ok(false);
        }
        let steps = self.config.steps.max(1);
        let working = resample(&self.current, &new_points, steps)?;
        info!(
            "morph {} -> {} points over {} steps ({:?}/step)",
            self.current.len(),
            new_points.len(),
            steps,
            self.config.step_time()
        );
        self.transition = Some(Transition { working, destination: new_points, steps, step: 0 });
        self.timer.start(self.config.step_time(), now);
        Ok(true)
    }

    /// Generate a fresh dataset with the active config and morph to it.
    /// Dropped (and nothing is generated) while a morph is running.
    pub fn request_random_change<R: Rng>(&mut self, rng: &mut R, bounds: &PointBounds, now: Instant) -> Result<bool, ChartError> {
        if self.is_running() {
            debug!("morph already running; random change dropped");
            return Ok(false);
        }
        let new_points = generate_points(rng, &self.config, bounds);
        self.animated_change(new_points, now)
    }

    /// Advance every working point one step and render them.
    ///
    /// The last step settles the morph even when rendering it fails; the
    /// render error is returned after the destination becomes current.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<TickOutcome> {
        let Some(t) = self.transition.as_mut() else {
            return Ok(TickOutcome::Idle);
        };
        t.step += 1;
        for p in t.working.iter_mut() {
            p.advance();
        }
        let rendered = renderer.render(&t.working);

        if t.step < t.steps {
            rendered?;
            return Ok(TickOutcome::Advanced(t.step));
        }
        self.finish();
        rendered?;
        Ok(TickOutcome::Finished)
    }

    /// Tick if the timer is due at `now`.
    pub fn poll<R: Renderer + ?Sized>(&mut self, now: Instant, renderer: &mut R) -> Result<Option<TickOutcome>> {
        if !self.timer.poll(now) {
            return Ok(None);
        }
        self.tick(renderer).map(Some)
    }

    /// Sleep through the remaining ticks of the running morph.
    pub fn run_blocking<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        while let Some(deadline) = self.next_deadline() {
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            self.poll(Instant::now(), renderer)?;
        }
        Ok(())
    }

    /// Stop the timer and settle on the destination of the running morph.
    pub fn cancel(&mut self) {
        if let Some(t) = &self.transition {
            info!("morph cancelled at step {}/{}", t.step, t.steps);
        }
        self.finish();
    }

    fn finish(&mut self) {
        self.timer.cancel();
        if let Some(t) = self.transition.take() {
            debug!("morph settled on {} points after {} steps", t.destination.len(), t.step);
            self.current = t.destination;
        }
    }
}
