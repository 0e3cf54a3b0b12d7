//! Terminal surface: logical pixels scaled onto half-block cells.
//!
//! Each terminal cell shows two vertical pixels by drawing `▀` with the top
//! pixel as foreground and the bottom pixel as background. Text is kept on a
//! separate cell layer and drawn over the pixels.

use super::surface::Surface;
use crate::game::Bounds;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Text at or above this size is drawn bold.
const BOLD_TEXT_SIZE: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    ch: char,
    color: Color,
    bold: bool,
}

/// Pixel buffer covering a terminal area of `cols` x `rows` cells.
#[derive(Debug, Clone)]
pub struct PixelBuf {
    cols: u16,
    rows: u16,
    /// Logical size the renderer draws in
    logical_width: i32,
    logical_height: i32,
    /// `cols * rows * 2` pixels, row-major
    px: Vec<Color>,
    /// `cols * rows` text cells, row-major
    glyphs: Vec<Option<Glyph>>,
}

/// Map `v` from a `from`-sized axis onto a `to`-sized one, rounding down.
fn scale(v: i32, from: i32, to: u16) -> i64 {
    (i64::from(v) * i64::from(to)).div_euclid(i64::from(from.max(1)))
}

impl PixelBuf {
    pub fn new(cols: u16, rows: u16, logical_width: i32, logical_height: i32) -> Self {
        let cells = usize::from(cols) * usize::from(rows);
        Self {
            cols,
            rows,
            logical_width,
            logical_height,
            px: vec![Color::Reset; cells * 2],
            glyphs: vec![None; cells],
        }
    }

    fn pixel_height(&self) -> u16 {
        self.rows.saturating_mul(2)
    }

    /// Color of the pixel at (`x`, `y`), in buffer pixels.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.cols || y >= self.pixel_height() {
            return None;
        }
        self.px
            .get(usize::from(y) * usize::from(self.cols) + usize::from(x))
            .copied()
    }

    /// Character drawn by text at cell (`col`, `row`), if any.
    pub fn text_at(&self, col: u16, row: u16) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.glyphs
            .get(usize::from(row) * usize::from(self.cols) + usize::from(col))
            .copied()
            .flatten()
            .map(|g| g.ch)
    }
}

impl Surface for PixelBuf {
    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        if bounds.width <= 0 || bounds.height <= 0 {
            return;
        }
        let ph = self.pixel_height();

        let x0 = scale(bounds.x, self.logical_width, self.cols);
        let mut x1 = scale(bounds.right(), self.logical_width, self.cols);
        let y0 = scale(bounds.y, self.logical_height, ph);
        let mut y1 = scale(bounds.bottom(), self.logical_height, ph);
        // Anything with area stays at least one pixel wide and tall
        if x1 == x0 {
            x1 += 1;
        }
        if y1 == y0 {
            y1 += 1;
        }

        let x0 = x0.clamp(0, i64::from(self.cols));
        let x1 = x1.clamp(0, i64::from(self.cols));
        let y0 = y0.clamp(0, i64::from(ph));
        let y1 = y1.clamp(0, i64::from(ph));

        let cols = usize::from(self.cols);
        for y in y0..y1 {
            for x in x0..x1 {
                // Clamped to the buffer above, so both are small and non-negative
                let idx = y as usize * cols + x as usize;
                self.px[idx] = color;
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: u16, color: Color) {
        // The baseline sits at the bottom of the glyph row
        let row = scale(y, self.logical_height, self.rows) - 1;
        if row < 0 || row >= i64::from(self.rows) {
            return;
        }
        let col = scale(x, self.logical_width, self.cols);
        let bold = size >= BOLD_TEXT_SIZE;

        let cols = i64::from(self.cols);
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i64;
            if c < 0 {
                continue;
            }
            if c >= cols {
                break;
            }
            let idx = (row * cols + c) as usize;
            self.glyphs[idx] = Some(Glyph { ch, color, bold });
        }
    }
}

impl Widget for &PixelBuf {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(self.cols);
        let height = area.height.min(self.rows);
        let cols = usize::from(self.cols);

        for row in 0..height {
            for col in 0..width {
                let top = self.px[usize::from(row) * 2 * cols + usize::from(col)];
                let bottom = self.px[(usize::from(row) * 2 + 1) * cols + usize::from(col)];
                let cell = buf.get_mut(area.x + col, area.y + row);

                match self.glyphs[usize::from(row) * cols + usize::from(col)] {
                    Some(glyph) => {
                        let mut style = Style::default().fg(glyph.color).bg(top);
                        if glyph.bold {
                            style = style.add_modifier(Modifier::BOLD);
                        }
                        cell.set_char(glyph.ch).set_style(style);
                    }
                    None => {
                        cell.set_symbol("▀")
                            .set_style(Style::default().fg(top).bg(bottom));
                    }
                }
            }
        }
    }
}
