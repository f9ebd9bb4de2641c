//! Glyph boxes for the centered text block.

use crate::Rgb;
use crate::surface::{Font, TextMetrics};

/// One character of the display text and its lit state.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    pub ch: char,
    /// Top-left corner.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Where the glyph is drawn from.
    pub baseline: f32,
    pub lit: bool,
    pub color: Rgb,
    /// Frames left before `lit` clears.
    pub lit_timer: i32,
}

/// Lays out `text` centered on a canvas of `size`, one record per character
/// (spaces and repeats included) in reading order.
///
/// Each line is centered horizontally on its measured width and the block
/// is centered vertically. A line's `y` is its baseline; the glyph box is
/// whatever `metrics` says a glyph on that baseline covers, one font size
/// above it unless the backend knows better.
pub fn compute_layout<M: TextMetrics>(
    text: &str,
    font: &Font,
    size: (f32, f32),
    line_height: f32,
    metrics: &M,
) -> Vec<GlyphRecord> {
    let (width, height) = size;
    let lines: Vec<&str> = text.split('\n').collect();
    let line_height = font.size * line_height;
    let start_y = (height - lines.len() as f32 * line_height) / 2.0;

    let mut glyphs = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for (index, line) in lines.iter().enumerate() {
        let mut x = (width - metrics.measure_text(line, font)) / 2.0;
        let y = start_y + index as f32 * line_height;
        let (top, glyph_height) = metrics.glyph_extent(y, font);

        for ch in line.chars() {
            let w = metrics.measure_text(ch.encode_utf8(&mut buf), font);
            glyphs.push(GlyphRecord {
                ch,
                x,
                y: top,
                width: w,
                height: glyph_height,
                baseline: y,
                lit: false,
                color: (0, 0, 0),
                lit_timer: 0,
            });
            x += w;
        }
    }
    glyphs
}
