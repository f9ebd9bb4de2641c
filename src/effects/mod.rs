use crate::config::ShowConfig;
use crossterm::event::Event;
use std::io::{BufWriter, Stdout};

pub mod fireworks;

pub trait Effect {
    /// `width` is in terminal columns, `height` in half-block pixels (rows * 2).
    fn new(width: usize, height: usize, config: &ShowConfig) -> Self
    where
        Self: Sized;
    fn update(&mut self, dt: f32);
    fn render(&mut self, stdout: &mut BufWriter<Stdout>) -> std::io::Result<()>;
    fn handle_event(&mut self, _event: &Event) {}
}
