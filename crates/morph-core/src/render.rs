// File: crates/morph-core/src/render.rs
// Summary: Render callback trait and a Skia CPU raster renderer for chart frames.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::point::Point;
use crate::theme::Theme;
use crate::types::{AXIS_PADDING, HEIGHT, POINT_RADIUS, WIDTH};

/// Receives the point sequence once per animation tick (and once at load).
pub trait Renderer {
    fn render(&mut self, points: &[Point]) -> Result<()>;
}

impl<F> Renderer for F
where
    F: FnMut(&[Point]) -> Result<()>,
{
    fn render(&mut self, points: &[Point]) -> Result<()> {
        self(points)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_markers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: Theme::classic(), draw_markers: true }
    }
}

/// Draws frames into an owned raster surface. The last frame stays on the
/// surface until the next `render` call and can be read back or encoded.
pub struct SkiaRenderer {
    opts: RenderOptions,
    surface: skia::Surface,
    frames: u64,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        surface.canvas().clear(opts.theme.background);
        Ok(Self { opts, surface, frames: 0 })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Read the current frame back as tightly packed, unpremultiplied RGBA8.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (self.opts.width.max(1), self.opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        let image = self.surface.image_snapshot();
        if !image.read_pixels(&info, &mut pixels, row_bytes, (0, 0), skia::image::CachingHint::Disallow) {
            anyhow::bail!("reading back frame pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing frame to {}", path.display()))?;
        Ok(())
    }
}

impl Renderer for SkiaRenderer {
    fn render(&mut self, points: &[Point]) -> Result<()> {
        let opts = self.opts;
        let canvas = self.surface.canvas();
        canvas.clear(opts.theme.background);

        draw_axis(canvas, opts.width, opts.height, &opts.theme);
        draw_polyline(canvas, points, &opts.theme);
        if opts.draw_markers {
            draw_markers(canvas, points, &opts.theme);
        }

        self.frames += 1;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_axis(canvas: &skia::Canvas, w: i32, h: i32, theme: &Theme) {
    let p = AXIS_PADDING as f32;
    let (w, h) = (w as f32, h as f32);

    let mut path = skia::Path::new();
    path.move_to((p, p));
    path.line_to((p, h - p));
    path.line_to((w - p, h - p));

    canvas.draw_path(&path, &stroke_paint(theme.axis_line, 1.0));
}

fn draw_polyline(canvas: &skia::Canvas, points: &[Point], theme: &Theme) {
    let Some((first, rest)) = points.split_first() else { return };

    let mut path = skia::Path::new();
    let (x0, y0) = first.coordinates();
    path.move_to((x0 as f32, y0 as f32));
    for p in rest {
        let (x, y) = p.coordinates();
        path.line_to((x as f32, y as f32));
    }

    canvas.draw_path(&path, &stroke_paint(theme.line_stroke, 1.0));
}

fn draw_markers(canvas: &skia::Canvas, points: &[Point], theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.marker_fill);
    let outline = stroke_paint(theme.marker_stroke, 1.0);

    let r = POINT_RADIUS as f32;
    for p in points {
        let (x, y) = p.coordinates();
        let c = (x as f32, y as f32);
        canvas.draw_circle(c, r, &fill);
        canvas.draw_circle(c, r, &outline);
    }
}
