//! TETRIS STACK - piece-management simulator
//!
//! A lookahead queue of upcoming pieces, a reserve stack, and swap operations
//! between them, driven from a terminal menu.

mod error;
mod game;
mod menu;
mod piece;
mod queue;
mod settings;
mod source;
mod stack;
mod swap;
mod ui;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use game::{Action, Game};
use menu::Menu;
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use std::{
    io::{self, stdout},
    time::Duration,
};

/// Target frame rate
const TARGET_FPS: u64 = 30;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

/// Get the app temp directory, creating it if needed
fn temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("tetris-stack");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    // Setup tracing to a per-session log file
    let log_dir = temp_dir();
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tetris_stack=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "tetris-stack starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    // Load settings
    let settings = Settings::load();

    // Fixed seed from settings for reproducible runs, random otherwise
    let game = match settings.pieces.seed {
        Some(seed) => {
            tracing::info!("using fixed seed {} from settings", seed);
            Game::with_seed(seed)
        }
        None => Game::new(),
    };

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app and capture result
    let result = run_app(&mut terminal, game, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    // Save settings
    if let Err(e) = settings.save() {
        eprintln!("Warning: Could not save settings: {}", e);
    }

    match &result {
        Ok(game) => {
            println!("\nThanks for playing Tetris Stack!");
            println!(
                "Pieces played: {} | Reserved pieces used: {}",
                game.pieces_played, game.reserved_used
            );
        }
        Err(_) => {}
    }

    result.map(|_| ())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut game: Game,
    settings: &Settings,
) -> io::Result<Game> {
    let mut menu = Menu::new();

    loop {
        terminal.draw(|frame| ui::render(frame, &game, &menu, settings))?;

        if !event::poll(FRAME_DURATION)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = match key.code {
            KeyCode::Up => {
                menu.move_up();
                None
            }
            KeyCode::Down => {
                menu.move_down();
                None
            }
            KeyCode::Enter => Some(menu.selected_action()),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(digit) => menu.shortcut_action(digit),
            _ => None,
        };

        if let Some(action) = action {
            if action == Action::Quit {
                tracing::info!("quit requested");
                return Ok(game);
            }
            game.process_action(action);
        }
    }
}
