//! Event handler for the dashboard
//!
//! Routes key events to app actions. A refresh runs a full render cycle and
//! its error is returned to the caller untouched.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::ExpenseResult;

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> ExpenseResult<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> ExpenseResult<()> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('r') | KeyCode::F(5) => app.refresh()?,
        KeyCode::Tab => app.toggle_panel_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        _ => {}
    }

    Ok(())
}
