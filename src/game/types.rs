//! Flappy Bird data structures.
//!
//! The whole game is one owned `FlappyGame` value: the bird, the ordered pipe
//! sequence, the score and the phase. Everything that mutates it lives in
//! `logic.rs`; the renderer only ever sees `&FlappyGame`.

use crate::core::config::GameConfig;
use rand::Rng;

/// Axis-aligned rectangle in logical playfield pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap test. Rectangles that only share an edge do not
    /// intersect, and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The player. Only the vertical axis moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bird {
    /// Top edge in pixels from the top of the playfield.
    pub y: i32,
    /// Pixels per tick, positive = downward.
    pub velocity: i32,
}

/// Engine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}

/// Main game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlappyGame {
    pub config: GameConfig,
    pub bird: Bird,
    /// Pipes in left-to-right order, upper then lower for each pair.
    pub pipes: Vec<Bounds>,
    /// Pipe pairs passed since the last reset.
    pub score: u32,
    pub phase: GamePhase,
    /// Physics ticks run since the last reset.
    pub tick_count: u64,
}

impl FlappyGame {
    /// Create a running game with the initial pipe pairs in place.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let mut game = Self {
            bird: Bird {
                y: config.center_y(),
                velocity: 0,
            },
            config,
            pipes: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            tick_count: 0,
        };
        game.spawn_initial_pipes(rng);
        game
    }

    /// Put the game back into its freshly constructed state.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.pipes.clear();
        self.bird = Bird {
            y: self.config.center_y(),
            velocity: 0,
        };
        self.score = 0;
        self.phase = GamePhase::Running;
        self.tick_count = 0;
        self.spawn_initial_pipes(rng);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Collision box of the bird at its current height.
    pub fn bird_bounds(&self) -> Bounds {
        Bounds::new(
            self.config.bird_x,
            self.bird.y,
            self.config.bird_size,
            self.config.bird_size,
        )
    }

    fn spawn_initial_pipes<R: Rng>(&mut self, rng: &mut R) {
        let spacing = self.config.pair_spacing();
        let mut x = self.config.screen_width;
        for _ in 0..self.config.pipe_pairs {
            self.spawn_pipe_pair(x, rng);
            x = x.saturating_add(spacing);
        }
    }

    /// Append an upper/lower pipe pair at `x` sharing one random gap.
    ///
    /// The config must have passed `validate`; an empty gap range panics.
    pub fn spawn_pipe_pair<R: Rng>(&mut self, x: i32, rng: &mut R) {
        let config = &self.config;
        let gap_end = config.gap_top_min.saturating_add(config.gap_top_range);
        let gap_top = rng.gen_range(config.gap_top_min..gap_end);
        let lower_top = gap_top + config.pipe_gap;

        let upper = Bounds::new(x, 0, config.pipe_width, gap_top);
        let lower = Bounds::new(
            x,
            lower_top,
            config.pipe_width,
            config.screen_height - lower_top,
        );
        self.pipes.push(upper);
        self.pipes.push(lower);
    }

    /// Where the next recycled pair goes: one spacing behind the rightmost
    /// pair, but never closer than the right edge.
    pub fn next_pair_x(&self) -> i32 {
        match self.pipes.last() {
            Some(last) => last
                .x
                .saturating_add(self.config.pair_spacing())
                .max(self.config.screen_width),
            None => self.config.screen_width,
        }
    }
}
