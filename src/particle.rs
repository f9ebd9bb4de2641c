use crate::Rgb;
use crate::config::ShowConfig;
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Drawn radius.
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

impl Particle {
    pub fn new(origin: (f32, f32), velocity: (f32, f32), size: (f32, f32), color: Rgb) -> Self {
        Self {
            x: origin.0,
            y: origin.1,
            vx: velocity.0,
            vy: velocity.1,
            width: size.0,
            height: size.1,
            color,
        }
    }

    /// Advances one frame. Position moves by the velocity from before gravity is applied.
    pub fn update(&mut self, gravity: f32) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += gravity;
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.fill_circle(self.x, self.y, self.width, self.color);
    }

    /// Only the right and bottom edges retire a particle; anything above or
    /// left of the canvas is kept until gravity brings it back.
    pub fn is_alive(&self, width: f32, height: f32) -> bool {
        !(self.x >= width || self.y >= height)
    }
}

pub fn random_color(rng: &mut fastrand::Rng) -> Rgb {
    (rng.u8(..), rng.u8(..), rng.u8(..))
}

/// Width and height drawn independently from the configured size range.
pub fn random_size(config: &ShowConfig, rng: &mut fastrand::Rng) -> (f32, f32) {
    let span = config.size_max - config.size_min;
    let w = (config.size_min + rng.f32() * span) * config.size_scale;
    let h = (config.size_min + rng.f32() * span) * config.size_scale;
    (w, h)
}
