//! The drawing operations the show needs from a render target.

use crate::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    /// Glyph height in canvas units.
    pub size: f32,
}

impl Font {
    /// Font sized as a fraction of the canvas height, rounded down like a CSS pixel size.
    pub fn for_canvas(family: &str, canvas_height: f32, ratio: f32) -> Self {
        Self {
            family: family.to_string(),
            size: (canvas_height * ratio).floor(),
        }
    }
}

/// Width of a string in a given font.
pub trait TextMetrics {
    fn measure_text(&self, text: &str, font: &Font) -> f32;

    /// Top and height of the box a glyph with this baseline covers.
    fn glyph_extent(&self, baseline: f32, font: &Font) -> (f32, f32) {
        (baseline - font.size, font.size)
    }
}

/// A 2D canvas. Coordinates are canvas units with the origin top-left.
pub trait Surface: TextMetrics {
    fn size(&self) -> (f32, f32);

    /// Blends `color` at opacity `alpha` over the rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32);

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb);

    /// Draws `text` with its left edge at `x` and its baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: Rgb);
}
