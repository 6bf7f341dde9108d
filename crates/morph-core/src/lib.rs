// File: crates/morph-core/src/lib.rs
// Summary: Core library entry point; exports point morphing, scheduling and frame rendering.

pub mod config;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod point;
pub mod render;
pub mod resample;
pub mod scheduler;
pub mod theme;
pub mod timer;
pub mod types;

pub use config::{AnimationConfig, ParameterForm};
pub use error::{ChartError, ConfigError};
pub use generate::generate_points;
pub use geometry::PointBounds;
pub use point::Point;
pub use render::{RenderOptions, Renderer, SkiaRenderer};
pub use resample::resample;
pub use scheduler::{AnimationScheduler, SchedulerState, TickOutcome};
pub use theme::Theme;
pub use timer::RepeatingTimer;
