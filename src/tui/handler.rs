//! Event handler for the TUI
//!
//! Routes keyboard events into field edits, focus moves, the analysis
//! toggle, and shutdown. Every content edit triggers a full recompute.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Focus movement
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),

        // Analysis panel
        KeyCode::Enter => app.toggle_report(),

        // Cursor movement within the focused field
        KeyCode::Left => app.focused_input().move_left(),
        KeyCode::Right => app.focused_input().move_right(),
        KeyCode::Home => app.focused_input().move_start(),
        KeyCode::End => app.focused_input().move_end(),

        // Content edits; each one reruns the full compute pass
        KeyCode::Backspace => {
            app.focused_input().backspace();
            app.recompute();
        }
        KeyCode::Delete => {
            app.focused_input().delete();
            app.recompute();
        }
        KeyCode::Char(c) if c.is_ascii() && !c.is_control() => {
            app.focused_input().insert(c);
            app.recompute();
        }

        _ => {}
    }

    Ok(())
}
