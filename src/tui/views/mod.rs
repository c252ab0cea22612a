//! TUI Views module
//!
//! The login screen, the dashboard with its three tabs, and the status bar.
//! Dialogs are drawn last, over everything else.

pub mod banking;
pub mod dashboard;
pub mod login;
pub mod status_bar;
pub mod summary;
pub mod transactions;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Screen};
use super::dialogs;
use super::layout::{DashboardLayout, LoginLayout};
use super::widgets::{error_dialog_area, message_dialog_area, ErrorDialog, MessageDialog};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => {
            let layout = LoginLayout::new(frame.area());
            login::render(frame, app, layout.form);
            status_bar::render(frame, app, layout.status_bar);
        }
        Screen::Dashboard => {
            let layout = DashboardLayout::new(frame.area());
            dashboard::render(frame, app, layout.header, layout.tabs, layout.content);
            status_bar::render(frame, app, layout.status_bar);
        }
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog() {
        Some(ActiveDialog::Help) => {
            dialogs::help::render(frame, app);
        }
        Some(ActiveDialog::Message(message)) => {
            let area = message_dialog_area(frame.area());
            frame.render_widget(MessageDialog::new(message), area);
        }
        Some(ActiveDialog::Error(info)) => {
            let area = error_dialog_area(frame.area());
            frame.render_widget(
                ErrorDialog::new(info).with_technical(app.show_error_details),
                area,
            );
        }
        None => {}
    }
}
