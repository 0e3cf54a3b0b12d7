// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 20; // 50 Hz

// Playfield
pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

// Bird
pub const BIRD_X: i32 = 100;
pub const BIRD_SIZE: i32 = 30;
pub const GRAVITY: i32 = 1;
pub const JUMP_STRENGTH: i32 = 15;

// Pipes
pub const PIPE_WIDTH: i32 = 100;
pub const PIPE_GAP: i32 = 150;
pub const PIPE_SCROLL_SPEED: i32 = 5;
pub const PIPE_PAIRS: usize = 1;

// Gap top is drawn uniformly from [GAP_TOP_MIN, GAP_TOP_MIN + GAP_TOP_RANGE)
pub const GAP_TOP_MIN: i32 = 100;
pub const GAP_TOP_RANGE: i32 = 200;
