//! A persistent framebuffer drawn to the terminal with half-block cells.
//!
//! Each terminal cell holds two pixels stacked vertically (`▄` with the top
//! pixel as background and the bottom pixel as foreground). Canvas
//! coordinates are `scale` units per pixel, so the show keeps screen-sized
//! physics however small the terminal is. Text is one character per cell on a
//! separate layer that fades with the pixels under it.

use crate::Rgb;
use crate::surface::{Font, Surface, TextMetrics};
use std::io::Write;

type Color = (f32, f32, f32);

#[derive(Clone, Copy)]
struct TextCell {
    ch: char,
    color: Color,
}

pub struct TerminalCanvas {
    /// Pixels across (terminal columns).
    width: usize,
    /// Pixels down (terminal rows * 2).
    height: usize,
    scale: f32,
    pixels: Vec<Color>,
    text: Vec<Option<TextCell>>,
    output_buf: Vec<u8>,
}

impl TerminalCanvas {
    pub fn new(width: usize, height: usize, scale: f32, background: Rgb) -> Self {
        let rows = height.div_ceil(2);
        Self {
            width,
            height,
            scale,
            pixels: vec![to_float(background); width * height],
            text: vec![None; width * rows],
            output_buf: Vec::with_capacity(width * height * 25),
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| to_rgb(self.pixels[y * self.width + x]))
    }

    /// Character and color of the text layer at a terminal cell.
    pub fn text_at(&self, column: usize, row: usize) -> Option<(char, Rgb)> {
        if column >= self.width {
            return None;
        }
        self.text
            .get(row * self.width + column)
            .copied()
            .flatten()
            .map(|cell| (cell.ch, to_rgb(cell.color)))
    }

    /// Canvas x at the middle of a terminal column.
    pub fn column_to_canvas(&self, column: u16) -> f32 {
        (column as f32 + 0.5) * self.scale
    }

    /// Writes the whole frame as ANSI true-color escapes.
    pub fn present<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let mut prev_bg: Rgb = (255, 255, 255);
        let mut prev_fg: Rgb = (255, 255, 255);
        let mut buf = [0u8; 4];

        for y in (0..self.height).step_by(2) {
            let row = y / 2;
            for x in 0..self.width {
                let top = self.pixels[y * self.width + x];
                let bot = if y + 1 < self.height {
                    self.pixels[(y + 1) * self.width + x]
                } else {
                    top
                };

                let (bg, fg, glyph) = match self.text[row * self.width + x] {
                    Some(cell) => {
                        let mid = ((top.0 + bot.0) / 2.0, (top.1 + bot.1) / 2.0, (top.2 + bot.2) / 2.0);
                        (to_rgb(mid), to_rgb(cell.color), cell.ch.encode_utf8(&mut buf) as &str)
                    }
                    None => (to_rgb(top), to_rgb(bot), "▄"),
                };

                // Only emit color codes if changed
                if bg != prev_bg {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", bg.0, bg.1, bg.2)?;
                    prev_bg = bg;
                }
                if fg != prev_fg {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", fg.0, fg.1, fg.2)?;
                    prev_fg = fg;
                }
                self.output_buf.extend_from_slice(glyph.as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_bg = (255, 255, 255);
            prev_fg = (255, 255, 255);
            if y + 2 < self.height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()?;
        Ok(())
    }

    /// Text row holding a glyph on `baseline`: the one containing its vertical center.
    fn text_row(&self, baseline: f32, font: &Font) -> f32 {
        ((baseline - font.size / 2.0) / (2.0 * self.scale)).floor()
    }

    /// Pixel range covering `[start, start + len)` in canvas units, clipped to `limit`.
    fn span(&self, start: f32, len: f32, limit: usize) -> std::ops::Range<usize> {
        let lo = (start / self.scale).floor().max(0.0) as usize;
        let hi = ((start + len) / self.scale).ceil().max(0.0) as usize;
        lo.min(limit)..hi.min(limit)
    }
}

impl TextMetrics for TerminalCanvas {
    /// Monospace: every character takes one column.
    fn measure_text(&self, text: &str, _font: &Font) -> f32 {
        text.chars().count() as f32 * self.scale
    }

    /// A glyph covers exactly the cell it is drawn into.
    fn glyph_extent(&self, baseline: f32, font: &Font) -> (f32, f32) {
        let cell = 2.0 * self.scale;
        (self.text_row(baseline, font) * cell, cell)
    }
}

impl Surface for TerminalCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width as f32 * self.scale, self.height as f32 * self.scale)
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        let color = to_float(color);
        let alpha = alpha.clamp(0.0, 1.0);
        let blend = |dst: &mut Color| {
            dst.0 += (color.0 - dst.0) * alpha;
            dst.1 += (color.1 - dst.1) * alpha;
            dst.2 += (color.2 - dst.2) * alpha;
        };

        let xs = self.span(x, w, self.width);
        let ys = self.span(y, h, self.height);
        if xs.is_empty() || ys.is_empty() {
            return;
        }
        for py in ys.clone() {
            for px in xs.clone() {
                blend(&mut self.pixels[py * self.width + px]);
            }
        }

        // text cells fade along with the pixels they cover
        let rows = (ys.start / 2)..ys.end.div_ceil(2);
        for row in rows {
            for col in xs.clone() {
                if let Some(cell) = self.text[row * self.width + col].as_mut() {
                    blend(&mut cell.color);
                }
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let color = to_float(color);
        let (px, py) = (cx / self.scale, cy / self.scale);
        let reach = radius.max(0.5 * self.scale);
        let r = reach / self.scale;

        let xs = self.span(cx - reach, 2.0 * reach, self.width);
        let ys = self.span(cy - reach, 2.0 * reach, self.height);
        for y in ys {
            for x in xs.clone() {
                let dx = x as f32 + 0.5 - px;
                let dy = y as f32 + 0.5 - py;
                if dx * dx + dy * dy <= r * r {
                    self.pixels[y * self.width + x] = color;
                }
            }
        }

        // anything smaller than a pixel still lights the pixel it sits in
        if px >= 0.0 && py >= 0.0 && px < self.width as f32 && py < self.height as f32 {
            self.pixels[py as usize * self.width + px as usize] = color;
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &Font, color: Rgb) {
        let row = self.text_row(y, font);
        if x < -self.scale / 2.0 || row < 0.0 {
            return;
        }
        let row = row as usize;
        if row >= self.height.div_ceil(2) {
            return;
        }

        let first = (x / self.scale + 0.5).floor() as usize;
        for (i, ch) in text.chars().enumerate() {
            let col = first + i;
            if col >= self.width {
                break;
            }
            self.text[row * self.width + col] = Some(TextCell {
                ch,
                color: to_float(color),
            });
        }
    }
}

fn to_float(c: Rgb) -> Color {
    (c.0 as f32, c.1 as f32, c.2 as f32)
}

fn to_rgb(c: Color) -> Rgb {
    (
        c.0.round().clamp(0.0, 255.0) as u8,
        c.1.round().clamp(0.0, 255.0) as u8,
        c.2.round().clamp(0.0, 255.0) as u8,
    )
}
