//! hangman - terminal word guessing for one player or two
//!
//! Guess the word before the figure is complete.

mod app;
mod config;
mod game;
mod logging;
mod tui;

use app::AppCoordinator;
use clap::Parser;
use config::Cli;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tracing::{debug, info};
use tui::Tui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging is best effort; the game runs without it
    match logging::init(&cli.log_level) {
        Ok(path) => info!(path = %path.display(), "logging started"),
        Err(e) => eprintln!("hangman: logging disabled: {}", e),
    }

    let mut coordinator = AppCoordinator::new(cli.game_defaults(), cli.seed);

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let poll_interval = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        if event::poll(poll_interval)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    match key.code {
                        KeyCode::Char('c') if ctrl => coordinator.quit(),
                        _ if ctrl => {}
                        KeyCode::Esc => coordinator.on_esc(),
                        KeyCode::Enter => coordinator.on_enter(),
                        KeyCode::Backspace => coordinator.on_backspace(),
                        KeyCode::Up => coordinator.on_up(),
                        KeyCode::Down => coordinator.on_down(),
                        KeyCode::Left => coordinator.on_left(),
                        KeyCode::Right => coordinator.on_right(),
                        KeyCode::Char(c) => coordinator.on_char(c),
                        other => debug!(key = ?other, "unhandled key"),
                    }
                }
            }
        }

        if coordinator.should_quit {
            break;
        }
    }

    info!("exiting");
    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
