//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: an open dialog takes every key, then the screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, DashboardTab, Screen};
use super::event::Event;
use super::views::{banking, login};

/// Lines moved by PageUp/PageDown in the history
const PAGE: usize = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases as well
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    if key.code == KeyCode::F(1) {
        app.open_dialog(ActiveDialog::Help);
        return Ok(());
    }

    match app.screen {
        Screen::Login => login::handle_key(app, key),
        Screen::Dashboard => handle_dashboard_key(app, key),
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog() {
        Some(ActiveDialog::Help) => {
            // Close help on any key
            app.close_dialog();
        }
        Some(ActiveDialog::Message(_)) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        Some(ActiveDialog::Error(_)) => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.close_dialog(),
            KeyCode::Char('d') => app.show_error_details = !app.show_error_details,
            _ => {}
        },
        None => {}
    }
}

/// Handle keys on the dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.next_tab(),
            KeyCode::Char('p') => app.prev_tab(),
            KeyCode::Char('l') => app.logout(),
            _ => {}
        }
        return;
    }

    match app.active_tab {
        DashboardTab::Banking => banking::handle_key(app, key),
        DashboardTab::Transactions => handle_transactions_key(app, key),
        DashboardTab::Summary => match key.code {
            KeyCode::Left => app.prev_summary_view(),
            KeyCode::Right => app.next_summary_view(),
            _ => {}
        },
    }
}

fn handle_transactions_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),
        KeyCode::Home => app.history_scroll = 0,
        KeyCode::End => app.scroll_down(usize::MAX / 2),
        _ => {}
    }
}
