//! Integration test: Game loop scheduling
//!
//! Drives `run` with a virtual tick source, scripted input and a recording
//! display, so ordering can be checked without a clock or terminal.

use flappy_bird::{
    run, Display, FlappyGame, FlappyInput, GameConfig, InputSource, TickSource,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::io;

/// Yields a fixed number of ticks, then stops.
struct CountedTicks {
    remaining: u32,
}

impl TickSource for CountedTicks {
    fn wait_for_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// One batch of inputs per tick; empty once the script runs out.
struct ScriptedInput {
    batches: VecDeque<Vec<FlappyInput>>,
}

impl ScriptedInput {
    fn none() -> Self {
        Self {
            batches: VecDeque::new(),
        }
    }

    fn new(batches: Vec<Vec<FlappyInput>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self) -> io::Result<Vec<FlappyInput>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}

/// Keeps a snapshot of every presented frame.
#[derive(Default)]
struct RecordingDisplay {
    frames: Vec<FlappyGame>,
}

impl Display for RecordingDisplay {
    fn present(&mut self, game: &FlappyGame) -> io::Result<()> {
        self.frames.push(game.clone());
        Ok(())
    }
}

struct FailingInput;

impl InputSource for FailingInput {
    fn drain(&mut self) -> io::Result<Vec<FlappyInput>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "input gone"))
    }
}

fn setup() -> (FlappyGame, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let game = FlappyGame::new(GameConfig::default(), &mut rng);
    (game, rng)
}

// =============================================================================
// Tick Pacing Tests
// =============================================================================

#[test]
fn test_runs_one_update_per_tick() {
    let (mut game, mut rng) = setup();
    let mut display = RecordingDisplay::default();
    let summary = run(
        &mut game,
        &mut CountedTicks { remaining: 5 },
        &mut ScriptedInput::none(),
        &mut display,
        &mut rng,
    )
    .unwrap();

    assert_eq!(summary.ticks, 5);
    assert!(!summary.quit);
    assert_eq!(game.tick_count, 5);
    // 1+2+3+4+5 = 15 pixels of fall
    assert_eq!(game.bird.y, 315);
    assert_eq!(game.pipes[0].x, 775);
}

#[test]
fn test_presents_initial_frame_and_every_tick() {
    let (mut game, mut rng) = setup();
    let initial = game.clone();
    let mut display = RecordingDisplay::default();
    run(
        &mut game,
        &mut CountedTicks { remaining: 3 },
        &mut ScriptedInput::none(),
        &mut display,
        &mut rng,
    )
    .unwrap();

    assert_eq!(display.frames.len(), 4);
    assert_eq!(display.frames[0], initial);
    assert_eq!(display.frames[1].tick_count, 1);
    assert_eq!(display.frames[3], game);
}

#[test]
fn test_zero_ticks_only_presents() {
    let (mut game, mut rng) = setup();
    let initial = game.clone();
    let mut display = RecordingDisplay::default();
    let summary = run(
        &mut game,
        &mut CountedTicks { remaining: 0 },
        &mut ScriptedInput::none(),
        &mut display,
        &mut rng,
    )
    .unwrap();

    assert_eq!(summary.ticks, 0);
    assert_eq!(display.frames.len(), 1);
    assert_eq!(game, initial);
}

// =============================================================================
// Input Ordering Tests
// =============================================================================

#[test]
fn test_input_applied_before_update() {
    let (mut game, mut rng) = setup();
    let mut display = RecordingDisplay::default();
    run(
        &mut game,
        &mut CountedTicks { remaining: 1 },
        &mut ScriptedInput::new(vec![vec![FlappyInput::Jump]]),
        &mut display,
        &mut rng,
    )
    .unwrap();

    // Jump set -15, then gravity made it -14
    assert_eq!(game.bird.velocity, -14);
    assert_eq!(game.bird.y, 286);
}

#[test]
fn test_repeated_jumps_do_not_stack() {
    let (mut game, mut rng) = setup();
    let mut display = RecordingDisplay::default();
    run(
        &mut game,
        &mut CountedTicks { remaining: 1 },
        &mut ScriptedInput::new(vec![vec![
            FlappyInput::Jump,
            FlappyInput::Jump,
            FlappyInput::Jump,
        ]]),
        &mut display,
        &mut rng,
    )
    .unwrap();

    assert_eq!(game.bird.velocity, -14);
}

#[test]
fn test_quit_stops_before_update() {
    let (mut game, mut rng) = setup();
    let mut display = RecordingDisplay::default();
    let summary = run(
        &mut game,
        &mut CountedTicks { remaining: 10 },
        &mut ScriptedInput::new(vec![
            vec![],
            vec![FlappyInput::Jump, FlappyInput::Quit, FlappyInput::Jump],
        ]),
        &mut display,
        &mut rng,
    )
    .unwrap();

    assert!(summary.quit);
    assert_eq!(summary.ticks, 1);
    assert_eq!(game.tick_count, 1);
    // The jump before Quit was applied, the tick after it never ran
    assert_eq!(game.bird.velocity, -15);
    assert_eq!(display.frames.len(), 2);
}

#[test]
fn test_input_error_propagates() {
    let (mut game, mut rng) = setup();
    let mut display = RecordingDisplay::default();
    let err = run(
        &mut game,
        &mut CountedTicks { remaining: 3 },
        &mut FailingInput,
        &mut display,
        &mut rng,
    )
    .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(game.tick_count, 0);
}

// =============================================================================
// Session Summary Tests
// =============================================================================

#[test]
fn test_crash_then_restart_counts_crash() {
    let (mut game, mut rng) = setup();
    let mut display = RecordingDisplay::default();

    // With no input the bird falls off the bottom well within 40 ticks
    let mut script = vec![vec![]; 40];
    script.push(vec![FlappyInput::Restart]);
    let summary = run(
        &mut game,
        &mut CountedTicks { remaining: 41 },
        &mut ScriptedInput::new(script),
        &mut display,
        &mut rng,
    )
    .unwrap();

    assert_eq!(summary.crashes, 1);
    assert_eq!(summary.ticks, 41);
    assert!(!game.is_game_over());
    // Restart happened at the start of tick 41, which then ran once
    assert_eq!(game.tick_count, 1);
    assert_eq!(game.bird.y, 301);
    assert!(display.frames.iter().any(|f| f.is_game_over()));
}

#[test]
fn test_frozen_ticks_still_present() {
    let (mut game, mut rng) = setup();
    game.bird.y = 700;
    let mut display = RecordingDisplay::default();
    let summary = run(
        &mut game,
        &mut CountedTicks { remaining: 4 },
        &mut ScriptedInput::none(),
        &mut display,
        &mut rng,
    )
    .unwrap();

    assert_eq!(summary.crashes, 1);
    assert_eq!(summary.ticks, 4);
    assert_eq!(game.tick_count, 1);
    assert_eq!(display.frames.len(), 5);
    assert_eq!(display.frames[2], display.frames[4]);
}
