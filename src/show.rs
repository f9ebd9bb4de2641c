//! One fireworks show: particle sets, glyphs and the per-frame tick.

use crate::burst::explode;
use crate::config::ShowConfig;
use crate::illumination::{decay, illuminate};
use crate::launcher::Launcher;
use crate::layout::{GlyphRecord, compute_layout};
use crate::particle::Particle;
use crate::surface::{Font, Surface};

pub struct Show {
    config: ShowConfig,
    width: f32,
    height: f32,
    font: Font,
    glyphs: Vec<GlyphRecord>,
    rising: Vec<Particle>,
    burst: Vec<Particle>,
    launcher: Launcher,
    pressed: bool,
    rng: fastrand::Rng,
}

impl Show {
    /// Sets up a show for `surface`, laying the text out against its metrics.
    pub fn new<S: Surface>(config: ShowConfig, surface: &S) -> Self {
        Self::with_rng(config, surface, fastrand::Rng::new())
    }

    pub fn with_rng<S: Surface>(config: ShowConfig, surface: &S, rng: fastrand::Rng) -> Self {
        let (width, height) = surface.size();
        let font = Font::for_canvas(&config.font_family, height, config.font_size_ratio);
        let glyphs = compute_layout(&config.text, &font, (width, height), config.line_height, surface);
        log::info!(
            "show on {width:.0}x{height:.0} canvas, {} glyphs at {}px {}",
            glyphs.len(),
            font.size,
            font.family
        );

        Self {
            launcher: Launcher::new(&config),
            config,
            width,
            height,
            font,
            glyphs,
            rising: Vec::new(),
            burst: Vec::new(),
            pressed: false,
            rng,
        }
    }

    /// Runs one frame: fade, text, launches, rising particles, bursts.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        surface.fill_rect(0.0, 0.0, self.width, self.height, self.config.background, self.config.trail_alpha);

        // decay first so a glyph hit this frame keeps its fresh timer
        decay(&mut self.glyphs);
        self.draw_text(surface);

        let size = (self.width, self.height);
        if let Some(p) = self.launcher.advance(size, &self.config, &mut self.rng) {
            self.rising.push(p);
        }

        let detonation_y = self.height * self.config.detonation_fraction;
        let rising = std::mem::take(&mut self.rising);
        for mut p in rising {
            p.update(self.config.gravity);
            p.render(surface);
            if p.y <= detonation_y {
                let shell = explode((p.x, p.y), &self.config, &mut self.rng);
                self.burst.extend(shell);
            } else if p.is_alive(self.width, self.height) {
                self.rising.push(p);
            } else {
                // peaked below the detonation line and fell back out
                log::debug!("dud at x={:.1}", p.x);
            }
        }

        let burst = std::mem::take(&mut self.burst);
        self.burst = Vec::with_capacity(burst.len());
        for mut p in burst {
            p.update(self.config.gravity);
            p.render(surface);
            illuminate(&p, &mut self.glyphs, self.config.lit_frames);
            if p.is_alive(self.width, self.height) {
                self.burst.push(p);
            }
        }
    }

    fn draw_text<S: Surface>(&self, surface: &mut S) {
        let mut buf = [0u8; 4];
        for glyph in &self.glyphs {
            let color = if glyph.lit { glyph.color } else { self.config.text_color };
            surface.fill_text(glyph.ch.encode_utf8(&mut buf), glyph.x, glyph.baseline, &self.font, color);
        }
    }

    /// Press at canvas `x`: a rising particle leaves the bottom edge right away.
    pub fn pointer_down(&mut self, x: f32) {
        self.pressed = true;
        let p = self.launcher.rising_at(x, self.height, &self.config, &mut self.rng);
        log::debug!("pointer launch at x={x:.1}");
        self.rising.push(p);
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn glyphs(&self) -> &[GlyphRecord] {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut [GlyphRecord] {
        &mut self.glyphs
    }

    pub fn rising(&self) -> &[Particle] {
        &self.rising
    }

    pub fn burst(&self) -> &[Particle] {
        &self.burst
    }

    /// Adds a particle to the burst set, e.g. to replay a known position.
    pub fn inject_burst(&mut self, particle: Particle) {
        self.burst.push(particle);
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }
}
