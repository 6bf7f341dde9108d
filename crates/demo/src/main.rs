// File: crates/demo/src/main.rs
// Summary: Headless demo; plays random morphs through the scheduler and writes PNG frames plus an optional CSV trace.

mod cli;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use morph_core::{
    AnimationConfig, AnimationScheduler, ParameterForm, Point, PointBounds, RenderOptions, Renderer, SkiaRenderer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();
    debug!("Started; args: {:?}", cli);

    let base = match &cli.config {
        Some(path) => AnimationConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => AnimationConfig::default(),
    };

    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        theme: morph_core::theme::find(&cli.theme),
        ..RenderOptions::default()
    };
    let bounds = PointBounds::from_canvas(opts.width, opts.height);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scheduler = AnimationScheduler::with_random_points(base, &mut rng, &bounds)?;

    // Flags behave like a submitted parameter form: bad input keeps the previous config.
    if cli.has_parameter_overrides() {
        let mut form = ParameterForm::from(scheduler.config());
        if let Some(v) = &cli.min_points { form.min_points = v.clone(); }
        if let Some(v) = &cli.max_points { form.max_points = v.clone(); }
        if let Some(v) = &cli.steps { form.steps = v.clone(); }
        if let Some(v) = &cli.time { form.total_time_ms = v.clone(); }
        if let Err(e) = scheduler.apply_form(&form) {
            eprintln!("Ignoring parameters: {e}");
        }
    }
    info!("Using {:?}", scheduler.config());

    let mut sink = FrameSink::new(opts, &cli.out, cli.all_frames, cli.trace.as_deref())?;
    scheduler.render_current(&mut sink)?;
    sink.write_settled(0)?;

    for transition in 1..=cli.transitions {
        sink.begin(transition);
        if !scheduler.request_random_change(&mut rng, &bounds, Instant::now())? {
            continue;
        }
        if cli.realtime {
            scheduler.run_blocking(&mut sink)?;
        } else {
            while scheduler.is_running() {
                scheduler.tick(&mut sink)?;
            }
        }
        let out = sink.write_settled(transition)?;
        println!("Morph {} settled on {} points; wrote {}", transition, scheduler.current_points().len(), out.display());
    }

    sink.finish()?;
    Ok(())
}

#[derive(Serialize)]
struct TraceRow {
    transition: usize,
    tick: u32,
    index: usize,
    x: f64,
    y: f64,
}

/// Renders frames through Skia and optionally records them to disk.
struct FrameSink {
    skia: SkiaRenderer,
    out_dir: PathBuf,
    all_frames: bool,
    trace: Option<csv::Writer<File>>,
    transition: usize,
    tick: u32,
}

impl FrameSink {
    fn new(opts: RenderOptions, out_dir: &Path, all_frames: bool, trace: Option<&Path>) -> Result<Self> {
        std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
        let trace = match trace {
            Some(path) => Some(csv::Writer::from_path(path).with_context(|| format!("opening {}", path.display()))?),
            None => None,
        };
        Ok(Self { skia: SkiaRenderer::new(opts)?, out_dir: out_dir.to_path_buf(), all_frames, trace, transition: 0, tick: 0 })
    }

    fn begin(&mut self, transition: usize) {
        self.transition = transition;
        self.tick = 0;
    }

    fn write_settled(&mut self, transition: usize) -> Result<PathBuf> {
        let out = self.out_dir.join(format!("morph_{transition:03}_settled.png"));
        self.skia.write_png(&out)?;
        Ok(out)
    }

    fn finish(mut self) -> Result<()> {
        if let Some(w) = self.trace.as_mut() {
            w.flush()?;
        }
        info!("Rendered {} frames", self.skia.frames());
        Ok(())
    }
}

impl Renderer for FrameSink {
    fn render(&mut self, points: &[Point]) -> Result<()> {
        self.skia.render(points)?;
        if self.transition > 0 {
            self.tick += 1;
        }

        if let Some(w) = self.trace.as_mut() {
            for (index, p) in points.iter().enumerate() {
                let (x, y) = p.coordinates();
                w.serialize(TraceRow { transition: self.transition, tick: self.tick, index, x, y })?;
            }
        }
        if self.all_frames && self.transition > 0 {
            let out = self.out_dir.join(format!("morph_{:03}_tick_{:03}.png", self.transition, self.tick));
            self.skia.write_png(&out)?;
        }
        Ok(())
    }
}
