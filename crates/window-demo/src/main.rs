// File: crates/window-demo/src/main.rs
// Summary: Interactive morph chart in a window; click for a new dataset, P to reload parameters, Esc to quit.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use morph_core::types::{HEIGHT, WIDTH};
use morph_core::{AnimationConfig, AnimationScheduler, PointBounds, RenderOptions, SkiaRenderer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(version, about = "Morphing line chart window", long_about = None)]
struct Cli {
    /// Parameter file re-read when P is pressed
    #[arg(long, default_value = "morph.toml")]
    params: PathBuf,

    /// Seed for reproducible datasets
    #[arg(long)]
    seed: Option<u64>,

    /// Color preset: classic, dark or light
    #[arg(long, default_value_t = String::from("classic"))]
    theme: String,

    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    #[arg(long = "loglevel", default_value_t = String::from("info"))]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();
    debug!("Started; args: {:?}", cli);

    let config = load_params(&cli.params).unwrap_or_default();
    let opts = RenderOptions {
        width: cli.width.max(1),
        height: cli.height.max(1),
        theme: morph_core::theme::find(&cli.theme),
        ..RenderOptions::default()
    };
    let bounds = PointBounds::from_canvas(opts.width, opts.height);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scheduler = AnimationScheduler::with_random_points(config, &mut rng, &bounds)?;
    let mut renderer = SkiaRenderer::new(opts)?;
    scheduler.render_current(&mut renderer)?;

    // Window + softbuffer setup; the chart canvas maps 1:1 to physical pixels
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Morph Chart")
        .with_inner_size(winit::dpi::PhysicalSize::new(opts.width as u32, opts.height as u32))
        .with_resizable(false)
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;
    let (w, h) = (NonZeroU32::new(opts.width as u32), NonZeroU32::new(opts.height as u32));
    if let (Some(w), Some(h)) = (w, h) {
        surface.resize(w, h).map_err(|e| anyhow::anyhow!("softbuffer resize: {e}"))?;
    }

    info!("Click the chart for a new dataset; press P to reload {}", cli.params.display());
    let params = cli.params;

    event_loop.run(move |event, _, cf| {
        let mut quit = false;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => quit = true,
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Err(e) = scheduler.request_random_change(&mut rng, &bounds, Instant::now()) {
                        error!("morph request failed: {e}");
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => quit = true,
                    VirtualKeyCode::P => {
                        if let Some(cfg) = load_params(&params) {
                            scheduler.set_config(cfg);
                        }
                        if let Err(e) = scheduler.request_random_change(&mut rng, &bounds, Instant::now()) {
                            error!("morph request failed: {e}");
                        }
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => match scheduler.poll(Instant::now(), &mut renderer) {
                Ok(Some(_)) => window.request_redraw(),
                Ok(None) => {}
                Err(e) => {
                    error!("tick failed: {e:#}");
                    quit = true;
                }
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut renderer, &mut surface) {
                    error!("present failed: {e:#}");
                }
            }
            _ => {}
        }

        if quit {
            scheduler.cancel();
            *cf = ControlFlow::Exit;
            return;
        }
        *cf = match scheduler.next_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
    });
}

/// Read the parameter file; a missing or invalid file keeps whatever config is active.
fn load_params(path: &Path) -> Option<AnimationConfig> {
    match AnimationConfig::load(path) {
        Ok(cfg) => {
            info!("Loaded {:?} from {}", cfg, path.display());
            Some(cfg)
        }
        Err(e) => {
            warn!("Not using {}: {e}", path.display());
            None
        }
    }
}

/// Copy the renderer's last frame into the window (softbuffer expects 0RGB).
fn present(renderer: &mut SkiaRenderer, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, _, _, _) = renderer.rgba8()?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("softbuffer buffer: {e}"))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        frame[i] = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow::anyhow!("softbuffer present: {e}"))?;
    Ok(())
}
