// File: crates/morph-core/src/theme.rs
// Summary: Color presets for the morph chart frames.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub line_stroke: skia::Color,
    pub marker_fill: skia::Color,
    pub marker_stroke: skia::Color,
}

impl Theme {
    /// Plain canvas look: white background, black strokes, hollow white markers.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            line_stroke: skia::Color::from_argb(255, 0, 0, 0),
            marker_fill: skia::Color::from_argb(255, 255, 255, 255),
            marker_stroke: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    /// Slate background with an amber line.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 26, 30, 38),
            axis_line: skia::Color::from_argb(255, 128, 138, 152),
            line_stroke: skia::Color::from_argb(255, 236, 168, 58),
            marker_fill: skia::Color::from_argb(255, 26, 30, 38),
            marker_stroke: skia::Color::from_argb(255, 236, 168, 58),
        }
    }

    /// Paper background with a brick-red line.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 245, 241, 232),
            axis_line: skia::Color::from_argb(255, 96, 84, 72),
            line_stroke: skia::Color::from_argb(255, 176, 58, 46),
            marker_fill: skia::Color::from_argb(255, 245, 241, 232),
            marker_stroke: skia::Color::from_argb(255, 176, 58, 46),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
