//! Fixed-rate game loop.
//!
//! The loop is split from its collaborators so it can be driven without a
//! real clock or terminal:
//! - `TickSource` decides when (and whether) the next tick happens
//! - `InputSource` hands over the key presses that arrived since the last tick
//! - `Display` shows the current state
//!
//! Each tick waits for the tick boundary, applies pending input in arrival
//! order, advances the game once, then presents it.

use crate::game::{process_input, process_tick, FlappyGame, FlappyInput};
use rand::Rng;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

/// Paces the loop.
pub trait TickSource {
    /// Block until the next tick is due. Returns false when no more ticks
    /// will come and the loop should end.
    fn wait_for_tick(&mut self) -> bool;
}

/// Delivers player input.
pub trait InputSource {
    /// Every input received since the previous call, oldest first.
    fn drain(&mut self) -> io::Result<Vec<FlappyInput>>;
}

/// Shows the game.
pub trait Display {
    fn present(&mut self, game: &FlappyGame) -> io::Result<()>;
}

/// Wall-clock ticks at a constant period.
pub struct FixedRateTicker {
    period: Duration,
    next_tick: Instant,
}

impl FixedRateTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_tick: Instant::now() + period,
        }
    }
}

impl TickSource for FixedRateTicker {
    fn wait_for_tick(&mut self) -> bool {
        let now = Instant::now();
        if self.next_tick > now {
            thread::sleep(self.next_tick - now);
            self.next_tick += self.period;
        } else {
            // Fell behind (suspended terminal, slow draw): resync instead of
            // firing a burst of catch-up ticks
            self.next_tick = now + self.period;
        }
        true
    }
}

/// Totals for one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks the loop went through, including frozen game-over ticks
    pub ticks: u64,
    /// Games that ended in a crash
    pub crashes: u32,
    /// Highest score reached in any game of the session
    pub best_score: u32,
    /// The player asked to quit (as opposed to the tick source running dry)
    pub quit: bool,
}

/// Run the game until the player quits or the tick source stops.
pub fn run<T, I, D, R>(
    game: &mut FlappyGame,
    ticks: &mut T,
    input: &mut I,
    display: &mut D,
    rng: &mut R,
) -> io::Result<RunSummary>
where
    T: TickSource,
    I: InputSource,
    D: Display,
    R: Rng,
{
    let mut summary = RunSummary::default();
    display.present(game)?;

    while ticks.wait_for_tick() {
        for key in input.drain()? {
            if key == FlappyInput::Quit {
                summary.quit = true;
                log::info!("quit requested");
                return Ok(summary);
            }
            process_input(game, key, rng);
        }

        let outcome = process_tick(game, rng);
        summary.ticks += 1;
        if outcome.crashed {
            summary.crashes += 1;
        }
        summary.best_score = summary.best_score.max(game.score);

        display.present(game)?;
    }

    Ok(summary)
}
