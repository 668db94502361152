//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore first so the panic message is readable
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_loop(&mut terminal, storage, settings);

    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, storage: &Storage, settings: &Settings) -> Result<()> {
    let mut app = App::new(storage, settings);
    if let Err(e) = app.reload() {
        app.set_error(format!("Failed to load expenses: {}", e));
    }

    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        let event = events.next().context("Terminal event reader stopped")?;
        handle_event(&mut app, event)?;
    }

    Ok(())
}
