//! Flappy Bird.
//!
//! A real-time action game where the player keeps a bird airborne by jumping
//! and steers it through gaps in scrolling pipe pairs. Gravity pulls the bird
//! down each tick, and hitting a pipe or leaving the screen ends the game
//! until the player restarts.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
