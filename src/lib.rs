//! Terminal fireworks over a line of text that lights up wherever a burst
//! particle strikes it.
//!
//! The simulation lives in [`show::Show`] and only talks to the outside world
//! through the [`surface::Surface`] trait, so it can be driven by the terminal
//! canvas in [`canvas`] or by any other backend.

pub mod burst;
pub mod canvas;
pub mod config;
pub mod effects;
pub mod error;
pub mod illumination;
pub mod launcher;
pub mod layout;
pub mod particle;
pub mod show;
pub mod surface;

/// 24-bit color, as used throughout the effects.
pub type Rgb = (u8, u8, u8);
