//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from `term`.
//! Logs go to stderr through `env_logger`; run with `RUST_LOG=debug 2>game.log`
//! to keep them off the board.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameConfig, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{DEFAULT_AXIS_X, DEFAULT_AXIS_Y, INITIAL_TILES, WIN_COUNT};

/// Slide tiles, merge equal neighbours, reach the goal tile.
#[derive(Debug, Parser)]
#[command(name = "tui-2048", version, about)]
struct Args {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_AXIS_Y)]
    rows: u8,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_AXIS_X)]
    cols: u8,

    /// Tile value that wins the game (power of two, at least 4)
    #[arg(long, default_value_t = WIN_COUNT)]
    win: u32,

    /// Tiles spawned when a game starts
    #[arg(long, default_value_t = INITIAL_TILES)]
    initial_tiles: usize,

    /// RNG seed; defaults to one derived from the clock
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = GameConfig::new(args.rows, args.cols, args.win, args.initial_tiles)
        .context("invalid game settings")?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!(
        "starting {}x{} game, goal {}, seed {}",
        config.axis_y,
        config.axis_x,
        config.win_count,
        seed
    );

    let mut game = GameState::with_config(config, seed)?;
    game.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_ok() {
        println!(
            "score {} | best tile {} | moves {} | seed {}",
            game.score(),
            game.max_tile(),
            game.moves(),
            game.seed()
        );
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Nothing moves on its own: block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    log::trace!("key {:?} -> {}", key.code, action.as_str());
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
