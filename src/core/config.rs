//! Game configuration.
//!
//! Every tunable the engine reads lives here. The defaults reproduce the
//! reference 800x600 game; `validate` is run once at startup so the engine
//! never has to deal with impossible geometry at runtime.

use super::constants::*;
use std::time::Duration;
use thiserror::Error;

/// Reasons a configuration is rejected at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("screen must be at least 1x1, got {width}x{height}")]
    InvalidScreen { width: i32, height: i32 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: i64 },

    #[error("gap top must not be negative, got {0}")]
    NegativeGapTop(i32),

    #[error("gap ending at {gap_bottom} does not fit in a screen {screen_height} pixels tall")]
    GapOffScreen { gap_bottom: i32, screen_height: i32 },

    #[error("pipe pairs spaced {spacing}px apart would expire together at scroll speed {speed}")]
    PairsTooDense { spacing: i32, speed: i32 },

    #[error("{name} does not fit in 32-bit pixel coordinates")]
    Overflow { name: &'static str },
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Logical playfield width in pixels
    pub screen_width: i32,

    /// Logical playfield height in pixels
    pub screen_height: i32,

    /// Fixed horizontal position of the bird, used for drawing and collision
    pub bird_x: i32,

    /// Side length of the bird's square
    pub bird_size: i32,

    /// Velocity added every tick (pixels/tick²)
    pub gravity: i32,

    /// Upward velocity a jump sets (applied as a negative value)
    pub jump_strength: i32,

    pub pipe_width: i32,

    /// Vertical size of the opening between upper and lower pipe
    pub pipe_gap: i32,

    /// Pixels every pipe moves left per tick
    pub scroll_speed: i32,

    /// Number of pipe pairs kept on the field
    pub pipe_pairs: usize,

    /// Smallest gap top
    pub gap_top_min: i32,

    /// Number of distinct gap tops, starting at `gap_top_min`
    pub gap_top_range: i32,

    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bird_x: BIRD_X,
            bird_size: BIRD_SIZE,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            scroll_speed: PIPE_SCROLL_SPEED,
            pipe_pairs: PIPE_PAIRS,
            gap_top_min: GAP_TOP_MIN,
            gap_top_range: GAP_TOP_RANGE,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Reference game with several pipe pairs on screen at once.
    pub fn with_pipe_pairs(pipe_pairs: usize) -> Self {
        Self {
            pipe_pairs,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Vertical center of the playfield, where the bird starts.
    pub fn center_y(&self) -> i32 {
        self.screen_height / 2
    }

    /// Horizontal distance between consecutive pipe pairs.
    pub fn pair_spacing(&self) -> i32 {
        let pairs = i64::try_from(self.pipe_pairs.max(1)).unwrap_or(i64::MAX);
        let span = i64::from(self.screen_width) + i64::from(self.pipe_width);
        i32::try_from(span / pairs).unwrap_or(i32::MAX)
    }

    /// Reject configurations that would produce overlapping or off-screen
    /// pipes, a frozen game, or more than one expiring pair per tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let positives = [
            ("bird size", i64::from(self.bird_size)),
            ("gravity", i64::from(self.gravity)),
            ("jump strength", i64::from(self.jump_strength)),
            ("pipe width", i64::from(self.pipe_width)),
            ("pipe gap", i64::from(self.pipe_gap)),
            ("scroll speed", i64::from(self.scroll_speed)),
            ("pipe pairs", i64::try_from(self.pipe_pairs).unwrap_or(i64::MAX)),
            ("gap top range", i64::from(self.gap_top_range)),
            (
                "tick interval",
                i64::try_from(self.tick_interval_ms).unwrap_or(i64::MAX),
            ),
        ];
        for (name, value) in positives {
            if value <= 0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.gap_top_min < 0 {
            return Err(ConfigError::NegativeGapTop(self.gap_top_min));
        }

        // Largest possible gap top plus the gap itself must stay on screen
        let gap_bottom = checked_sum(
            "gap bottom",
            &[self.gap_top_min, self.gap_top_range, -1, self.pipe_gap],
        )?;
        if gap_bottom > self.screen_height {
            return Err(ConfigError::GapOffScreen {
                gap_bottom,
                screen_height: self.screen_height,
            });
        }

        // Pipes spawn up to one field width past the right edge
        checked_sum(
            "pipe field",
            &[
                self.screen_width,
                self.pipe_width,
                self.screen_width,
                self.pipe_width,
            ],
        )?;
        checked_sum("bird right edge", &[self.bird_x, self.bird_size])?;
        // A running bird is at most screen_height down and falling at most
        // screen_height + gravity per tick
        checked_sum(
            "fall reach",
            &[
                self.screen_height,
                self.screen_height,
                self.gravity,
                self.bird_size,
            ],
        )?;

        let spacing = self.pair_spacing();
        if self.pipe_pairs > 1 && spacing <= self.scroll_speed {
            return Err(ConfigError::PairsTooDense {
                spacing,
                speed: self.scroll_speed,
            });
        }

        Ok(())
    }
}

/// Sum pixel quantities in i64 and insist the result is a valid i32.
fn checked_sum(name: &'static str, parts: &[i32]) -> Result<i32, ConfigError> {
    let total: i64 = parts.iter().copied().map(i64::from).sum();
    i32::try_from(total).map_err(|_| ConfigError::Overflow { name })
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
