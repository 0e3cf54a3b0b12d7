//! Flappy Bird - Terminal Arcade Game Library
//!
//! This module exposes the game engine, game loop and renderer for testing
//! and for the binary.

pub mod build_info;
pub mod core;
pub mod game;
pub mod input;
pub mod terminal;
pub mod ui;

pub use crate::core::config::{ConfigError, GameConfig};
pub use crate::core::constants::*;
pub use crate::core::game_loop::{
    run, Display, FixedRateTicker, InputSource, RunSummary, TickSource,
};
pub use crate::game::{Bounds, FlappyGame, FlappyInput, GamePhase, TickOutcome};
