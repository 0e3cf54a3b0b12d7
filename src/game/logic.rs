//! Game logic for Flappy Bird: input, physics, collision detection, and
//! pipe recycling.

use super::types::{FlappyGame, GamePhase};
use rand::Rng;

/// Input actions for Flappy Bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Jump (Space).
    Jump,
    /// Start over after a crash (R).
    Restart,
    /// Leave the game (Esc, q, Ctrl-C). Handled by the game loop.
    Quit,
    /// Any other key.
    Other,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Physics ran this tick (false once the game is over)
    pub advanced: bool,
    /// The bird hit a pipe or left the screen this tick
    pub crashed: bool,
    /// A pipe pair expired and was replaced this tick
    pub scored: bool,
}

/// Process player input for the flappy bird game.
pub fn process_input<R: Rng>(game: &mut FlappyGame, input: FlappyInput, rng: &mut R) {
    match input {
        FlappyInput::Jump if !game.is_game_over() => {
            game.bird.velocity = -game.config.jump_strength;
        }
        FlappyInput::Restart if game.is_game_over() => {
            log::info!("restarting after score {}", game.score);
            game.reset(rng);
        }
        _ => {}
    }
}

/// Process one game tick: gravity, pipe scrolling, collision detection,
/// then pipe recycling and scoring. Does nothing once the game is over.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if game.is_game_over() {
        return outcome;
    }
    outcome.advanced = true;
    game.tick_count += 1;

    // Gravity applies every tick, jump or not
    game.bird.velocity += game.config.gravity;
    game.bird.y += game.bird.velocity;

    let speed = game.config.scroll_speed;
    for pipe in &mut game.pipes {
        pipe.x -= speed;
    }

    if check_collision(game) {
        game.phase = GamePhase::GameOver;
        outcome.crashed = true;
        log::info!(
            "game over: score {} after {} ticks (bird y {})",
            game.score,
            game.tick_count,
            game.bird.y
        );
    }

    // Recycling still runs on the tick that crashed
    outcome.scored = recycle_pipes(game, rng);
    outcome
}

/// True if the bird has left the screen vertically or overlaps any pipe.
///
/// Only the bird's top edge is tested against the screen bounds, so 0 and
/// `screen_height` are both still in play.
pub fn check_collision(game: &FlappyGame) -> bool {
    let y = game.bird.y;
    let out_of_bounds = y < 0 || y > game.config.screen_height;

    let bird = game.bird_bounds();
    let hit_pipe = game.pipes.iter().any(|pipe| pipe.intersects(&bird));

    out_of_bounds || hit_pipe
}

/// Replace the leftmost pipe pair once it has fully left the screen.
/// At most one pair is recycled per call. Returns true if a pair was passed.
pub fn recycle_pipes<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> bool {
    let expired = match game.pipes.first() {
        Some(leftmost) => leftmost.x < -game.config.pipe_width,
        None => false,
    };
    if !expired {
        return false;
    }

    let end = game.pipes.len().min(2);
    game.pipes.drain(..end);
    let x = game.next_pair_x();
    game.spawn_pipe_pair(x, rng);
    game.score += 1;
    log::debug!("pipe pair passed, score {}", game.score);
    true
}
