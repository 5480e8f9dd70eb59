//! Terminal runner (default binary).
//!
//! Drives a `GameState` at a fixed frame rate: keys are applied as they
//! arrive, gravity fires on the frames chosen by `GravityClock`, and the
//! snapshot is redrawn every frame through the diffing renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameConfig, GameSnapshot, GameState, GravityClock, LineClearPolicy};
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{
    GameAction, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_LEVEL, FRAME_RATE,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u16,

    /// Level (sets the gravity speed)
    #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
    level: u32,

    /// Seed for the piece generator (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Use the legacy row-by-row line clear (row 0 is never cleared)
    #[arg(long)]
    legacy_line_clear: bool,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let policy = if self.legacy_line_clear {
            LineClearPolicy::Legacy
        } else {
            LineClearPolicy::Compacting
        };
        let config = GameConfig::new()
            .with_size(self.width, self.height)
            .with_level(self.level)
            .with_line_clear(policy);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Validate before touching the terminal so errors print normally.
    let game = GameState::new(args.game_config())?;
    info!(seed = game.seed(), level = game.level(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let exited = term.exit();
    result.and(exited)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    game.start();

    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut clock = GravityClock::new(game.level());
    let mut paused = false;

    let frame = Duration::from_millis(1000 / u64::from(FRAME_RATE));
    let frame_ms = frame.as_millis() as u32;
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut frame_start = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, paused, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Drain input until the frame is over.
        while let Some(timeout) = frame.checked_sub(frame_start.elapsed()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = game.score(), lines = game.lines(), "quit");
                        return Ok(());
                    }
                    let Some(action) = input.handle_key(key) else {
                        continue;
                    };
                    match action {
                        GameAction::Pause => {
                            paused = !paused;
                            input.reset();
                            debug!(paused, "pause toggled");
                        }
                        GameAction::Restart => {
                            game.restart();
                            clock.reset();
                            input.reset();
                            paused = false;
                        }
                        _ if paused => {}
                        _ => {
                            game.apply_action(action);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
        frame_start = Instant::now();

        input.update(frame_ms);
        if !paused && !game.is_game_over() && clock.advance(input.soft_drop_held()) {
            game.tick_gravity();
        }

        if let Some(event) = game.take_last_event() {
            if event.lines_cleared > 0 {
                info!(
                    lines = event.lines_cleared,
                    delta = event.score_delta,
                    score = game.score(),
                    "lines cleared"
                );
            }
        }
    }
}
