//! Keyboard input from the terminal.
//!
//! Maps crossterm key events onto `FlappyInput` and feeds them to the game
//! loop without blocking.

use crate::core::game_loop::InputSource;
use crate::game::FlappyInput;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Translate a key event into a game input.
pub fn map_key(key: KeyEvent) -> FlappyInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return FlappyInput::Quit;
    }
    match key.code {
        KeyCode::Char(' ') => FlappyInput::Jump,
        KeyCode::Char('r') | KeyCode::Char('R') => FlappyInput::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => FlappyInput::Quit,
        _ => FlappyInput::Other,
    }
}

/// Non-blocking reader over the terminal event queue.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn drain(&mut self) -> io::Result<Vec<FlappyInput>> {
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Releases and auto-repeats would double up jumps
                if key.kind == KeyEventKind::Press {
                    inputs.push(map_key(key));
                }
            }
        }
        Ok(inputs)
    }
}
