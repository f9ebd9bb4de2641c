//! Letters that glow in the color of the last particle that touched them.

use crate::layout::GlyphRecord;
use crate::particle::Particle;

/// Lights every glyph whose box (edges included) contains the particle.
/// A later hit overwrites the color and restarts the timer.
pub fn illuminate(particle: &Particle, glyphs: &mut [GlyphRecord], lit_frames: i32) {
    for glyph in glyphs.iter_mut() {
        if particle.x >= glyph.x
            && particle.x <= glyph.x + glyph.width
            && particle.y >= glyph.y
            && particle.y <= glyph.y + glyph.height
        {
            glyph.color = particle.color;
            glyph.lit = true;
            glyph.lit_timer = lit_frames;
        }
    }
}

/// Counts down lit glyphs by one frame. The color is left in place when a glyph goes dark.
pub fn decay(glyphs: &mut [GlyphRecord]) {
    for glyph in glyphs.iter_mut().filter(|g| g.lit) {
        glyph.lit_timer -= 1;
        if glyph.lit_timer <= 0 {
            glyph.lit = false;
        }
    }
}
