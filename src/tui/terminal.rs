//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::settings::Settings;
use crate::error::ExpenseError;
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
        let _ = restore_terminal_impl();
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
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
///
/// The first render cycle runs before the terminal is touched, so a storage
/// failure is reported on a normal screen. Later failures restore the
/// terminal before being returned.
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let mut app = App::new(storage, settings);
    app.refresh()?;

    let mut terminal = init_terminal()?;
    info!("event=dashboard_start module=tui status=ok");

    let result = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal();

    finish_session(result, restored)
}

/// Combine the event loop outcome with terminal restoration
///
/// A loop error is returned in preference to a restore error; the restore
/// error is then only logged.
fn finish_session(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Ok(()), Ok(())) => {
            info!("event=dashboard_stop module=tui status=ok");
            Ok(())
        }
        (Ok(()), Err(e)) => {
            error!("event=terminal_restore module=tui status=error error={}", e);
            Err(e)
        }
        (Err(e), restored) => {
            if let Err(restore_err) = restored {
                error!(
                    "event=terminal_restore module=tui status=error error={}",
                    restore_err
                );
            }
            error!("event=dashboard_stop module=tui status=error error={}", e);
            Err(e)
        }
    }
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(app.settings.tick_rate_ms));

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events
            .next()
            .map_err(|_| ExpenseError::Tui("terminal event stream closed".into()))?;
        handle_event(app, event)?;
    }

    Ok(())
}
