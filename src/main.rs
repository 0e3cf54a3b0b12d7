use flappy_bird::build_info;
use flappy_bird::input::TerminalInput;
use flappy_bird::terminal::{restore_on_panic, TerminalGuard};
use flappy_bird::ui::TerminalDisplay;
use flappy_bird::{run, FixedRateTicker, FlappyGame, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    // Quiet by default: anything below warn would land on the game screen
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = GameConfig::default();
    config.validate()?;
    log::info!("starting {}", build_info::version_line());
    log::info!("config: {:?}", config);

    let mut rng = StdRng::from_entropy();
    let mut game = FlappyGame::new(config, &mut rng);

    // Setup terminal; the guard restores it however this block is left
    restore_on_panic();
    let summary = {
        let _guard = TerminalGuard::enter(io::stdout())?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut display = TerminalDisplay::new(Terminal::new(backend)?);
        display.terminal_mut().hide_cursor()?;

        let mut ticker = FixedRateTicker::new(game.config.tick_interval());
        let mut input = TerminalInput;
        run(&mut game, &mut ticker, &mut input, &mut display, &mut rng)?
    };

    log::info!(
        "session over: {} ticks, {} crashes, best score {}",
        summary.ticks,
        summary.crashes,
        summary.best_score
    );
    Ok(())
}
