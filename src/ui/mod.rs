pub mod flappy_scene;
pub mod pixel_buf;
pub mod surface;

pub use surface::{DrawCommand, RecordingSurface, Surface};

use crate::core::game_loop::Display;
use crate::game::FlappyGame;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, game: &FlappyGame) {
    let size = frame.size();
    flappy_scene::render_flappy_screen(frame, size, game);
}

/// Presents the game on a ratatui terminal.
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Display for TerminalDisplay<B> {
    fn present(&mut self, game: &FlappyGame) -> io::Result<()> {
        self.terminal.draw(|frame| draw_ui(frame, game))?;
        Ok(())
    }
}
