use super::Effect;
use crate::canvas::TerminalCanvas;
use crate::config::ShowConfig;
use crate::show::Show;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use std::io::{BufWriter, Stdout};

/// Fireworks over the configured text, drawn on a half-block canvas.
pub struct FireworksEffect {
    canvas: TerminalCanvas,
    show: Show,
}

impl FireworksEffect {
    pub fn show(&self) -> &Show {
        &self.show
    }

    pub fn canvas(&self) -> &TerminalCanvas {
        &self.canvas
    }
}

impl Effect for FireworksEffect {
    fn new(width: usize, height: usize, config: &ShowConfig) -> Self {
        let canvas = TerminalCanvas::new(width, height, config.scale_for(height), config.background);
        let show = Show::new(config.clone(), &canvas);
        Self { canvas, show }
    }

    // One call is one frame; the host already runs at a fixed 60 Hz step.
    fn update(&mut self, _dt: f32) {
        self.show.tick(&mut self.canvas);
    }

    fn render(&mut self, stdout: &mut BufWriter<Stdout>) -> std::io::Result<()> {
        self.canvas.present(stdout)
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::Mouse(MouseEvent { kind, column, .. }) = event {
            match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let x = self.canvas.column_to_canvas(*column);
                    self.show.pointer_down(x);
                }
                MouseEventKind::Up(MouseButton::Left) => self.show.pointer_up(),
                _ => {}
            }
        }
    }
}
