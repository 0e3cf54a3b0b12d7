//! Core configuration and the game loop.

pub mod config;
pub mod constants;
pub mod game_loop;

pub use config::*;
pub use constants::*;
pub use game_loop::*;
