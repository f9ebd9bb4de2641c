use crate::config::ShowConfig;
use crate::particle::{Particle, random_color, random_size};

/// Emits rising particles: one per click, plus one every `launch_interval` frames.
#[derive(Debug, Clone)]
pub struct Launcher {
    timer: u32,
    interval: u32,
}

impl Launcher {
    pub fn new(config: &ShowConfig) -> Self {
        Self {
            timer: 0,
            interval: config.launch_interval,
        }
    }

    /// Frames counted since the last automatic launch.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// A particle leaving the bottom edge at `x`, heading straight up.
    pub fn rising_at(&self, x: f32, canvas_height: f32, config: &ShowConfig, rng: &mut fastrand::Rng) -> Particle {
        Particle::new(
            (x, canvas_height),
            (0.0, -config.rise_speed),
            random_size(config, rng),
            random_color(rng),
        )
    }

    /// Counts one frame and returns the automatic launch when it is due.
    pub fn advance(
        &mut self,
        size: (f32, f32),
        config: &ShowConfig,
        rng: &mut fastrand::Rng,
    ) -> Option<Particle> {
        self.timer += 1;
        if self.timer < self.interval {
            return None;
        }
        self.timer = 0;

        let (width, height) = size;
        let left = width * (1.0 - config.launch_spread) / 2.0;
        let x = left + rng.f32() * width * config.launch_spread;
        log::trace!("timed launch at x={x:.1}");
        Some(self.rising_at(x, height, config, rng))
    }
}
