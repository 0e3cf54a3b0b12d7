//! Drawing primitives the game renderer targets.

use crate::game::Bounds;
use ratatui::style::Color;

/// Something the renderer can paint on, in logical playfield pixels.
pub trait Surface {
    /// Fill an axis-aligned rectangle. Parts outside the surface are clipped.
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Draw a line of text whose baseline starts at (`x`, `y`).
    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: u16, color: Color);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        bounds: Bounds,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        size: u16,
        color: Color,
    },
}

/// Surface that keeps every draw call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangles drawn in the given color.
    pub fn rects(&self, color: Color) -> Vec<Bounds> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { bounds, color: c } if *c == color => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    /// Text of every text command, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.commands.push(DrawCommand::FillRect { bounds, color });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: u16, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            size,
            color,
        });
    }
}
