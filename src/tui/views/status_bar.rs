//! Status bar view
//!
//! Shows the signed-in user, the last status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    match &app.current_user {
        Some(user) => spans.push(Span::styled(
            format!(" {} ", user),
            Style::default().fg(Color::Cyan),
        )),
        None => spans.push(Span::styled(
            " Not signed in ",
            Style::default().fg(Color::DarkGray),
        )),
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.screen {
        Screen::Login => " Esc:Quit  F1:Help ",
        Screen::Dashboard => " ^N/^P:Tabs  ^L:Logout  ^Q:Quit  F1:Help ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
