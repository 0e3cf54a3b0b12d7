//! UI rendering for Flappy Bird.

use super::pixel_buf::PixelBuf;
use super::surface::Surface;
use crate::build_info::{BUILD_COMMIT, BUILD_DATE};
use crate::game::{Bounds, FlappyGame};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SKY: Color = Color::Rgb(0, 255, 255);
const BIRD: Color = Color::Rgb(255, 255, 0);
const PIPE: Color = Color::Rgb(0, 255, 0);
const SCORE_TEXT: Color = Color::Rgb(0, 0, 0);
const GAME_OVER_TEXT: Color = Color::Rgb(255, 0, 0);

const SCORE_SIZE: u16 = 30;
const TITLE_SIZE: u16 = 50;

const CONTROLS: [(&str, &str); 3] = [("[Space]", "Jump"), ("[R]", "Restart"), ("[Esc]", "Quit")];

const INFO_WIDTH: u16 = 22;
const STATUS_HEIGHT: u16 = 2;
const PLAYFIELD_MIN_HEIGHT: u16 = 10;

/// Draw the playfield onto `surface`. Reads the game, never changes it.
pub fn render_flappy<S: Surface>(game: &FlappyGame, surface: &mut S) {
    let config = &game.config;

    surface.fill_rect(
        Bounds::new(0, 0, config.screen_width, config.screen_height),
        SKY,
    );

    surface.fill_rect(game.bird_bounds(), BIRD);

    for pipe in &game.pipes {
        surface.fill_rect(*pipe, PIPE);
    }

    surface.draw_text(
        10,
        30,
        &format!("Score: {}", game.score),
        SCORE_SIZE,
        SCORE_TEXT,
    );

    if game.is_game_over() {
        let x = config.screen_width / 2 - 150;
        let y = config.screen_height / 2;
        surface.draw_text(x, y, "Game Over", TITLE_SIZE, GAME_OVER_TEXT);
        surface.draw_text(
            x,
            y + 50,
            "Press 'R' to Restart",
            SCORE_SIZE,
            GAME_OVER_TEXT,
        );
    }
}

/// Areas of the terminal screen.
///
/// ```text
/// ┌─ Flappy Bird ──────────────┬─ Info ───┐
/// │ playfield                  │ score    │
/// │                            │ state    │
/// │ status + controls          │ ...      │
/// └────────────────────────────┴──────────┘
/// ```
struct ScreenAreas {
    playfield: Rect,
    status: Rect,
    info: Rect,
}

/// Render the whole Flappy Bird screen: bordered playfield, status bar and
/// info panel. The border turns red once the bird has crashed.
pub fn render_flappy_screen(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let areas = render_frame(frame, area, game);
    render_play_area(frame, areas.playfield, game);
    render_status(frame, areas.status, game);
    render_info_panel(frame, areas.info, game);
}

fn render_frame(frame: &mut Frame, area: Rect, game: &FlappyGame) -> ScreenAreas {
    let border = if game.is_game_over() {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(PLAYFIELD_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(columns[0]);

    ScreenAreas {
        playfield: rows[0],
        status: rows[1],
        info: columns[1],
    }
}

/// Scale the playfield onto the content area.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let mut pixels = PixelBuf::new(
        area.width,
        area.height,
        game.config.screen_width,
        game.config.screen_height,
    );
    render_flappy(game, &mut pixels);
    frame.render_widget(&pixels, area);
}

/// Status message for the current phase, then the key legend.
fn status_lines(game: &FlappyGame) -> Vec<Line<'static>> {
    let message = if game.is_game_over() {
        Span::styled(
            format!("Crashed with {} points. Press R to fly again.", game.score),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::styled(
            format!("Score: {}", game.score),
            Style::default().fg(Color::Green),
        )
    };

    let mut legend = Vec::new();
    for (key, action) in CONTROLS {
        if !legend.is_empty() {
            legend.push(Span::raw("  "));
        }
        legend.push(Span::styled(key, Style::default().fg(Color::White)));
        legend.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    vec![Line::from(message), Line::from(legend)]
}

fn render_status(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.height == 0 {
        return;
    }
    let status = Paragraph::new(status_lines(game)).alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (state, state_color) = if game.is_game_over() {
        ("Game over", Color::Red)
    } else {
        ("Flying", Color::Green)
    };

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(state, Style::default().fg(state_color)),
        ]),
        Line::from(vec![
            Span::styled(" Ticks: ", label),
            Span::styled(
                format!("{}", game.tick_count),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gap: ", label),
            Span::styled(
                format!("{}px", game.config.pipe_gap),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", BUILD_DATE), label)),
        Line::from(Span::styled(format!(" {}", BUILD_COMMIT), label)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
