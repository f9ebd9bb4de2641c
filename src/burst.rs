use crate::config::ShowConfig;
use crate::particle::{Particle, random_color, random_size};

/// Scatters a random number of particles from `origin`.
///
/// Each axis of the velocity is uniform in `[-r, r)` where `r` is the burst
/// speed, then `vy` is clamped so the speed stays within `r`. That keeps the
/// burst round rather than square.
pub fn explode(origin: (f32, f32), config: &ShowConfig, rng: &mut fastrand::Rng) -> Vec<Particle> {
    let count = rng.usize(config.burst_min..config.burst_max);
    let radius = config.burst_speed;

    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let vx = (rng.f32() - 0.5) * radius * 2.0;
        let vy = clamp_vertical(vx, (rng.f32() - 0.5) * radius * 2.0, radius);
        particles.push(Particle::new(
            origin,
            (vx, vy),
            random_size(config, rng),
            random_color(rng),
        ));
    }
    log::debug!("burst of {count} at ({:.1}, {:.1})", origin.0, origin.1);
    particles
}

/// Limits `|vy|` to `sqrt(radius² - vx²)`, keeping its sign. When `|vx|`
/// already exceeds the radius there is no valid bound and `vy` is returned
/// unchanged.
pub fn clamp_vertical(vx: f32, vy: f32, radius: f32) -> f32 {
    let room = radius * radius - vx * vx;
    if room < 0.0 {
        return vy;
    }
    let bound = room.sqrt();
    if vy.abs() > bound { bound.copysign(vy) } else { vy }
}
