//! Transactions tab
//!
//! Scrollable log of the signed-in account, oldest first. Inflows are
//! shown in green.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::NO_TRANSACTIONS;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let settings = app.settings;
    let entries = app
        .current_account()
        .map(|a| a.transactions.as_slice())
        .unwrap_or_default();

    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::styled(
            NO_TRANSACTIONS,
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        entries
            .iter()
            .map(|entry| {
                let color = if entry.is_inflow() {
                    Color::Green
                } else {
                    Color::White
                };
                Line::styled(
                    entry.render(&settings.currency_symbol, &settings.timestamp_format),
                    Style::default().fg(color),
                )
            })
            .collect()
    };

    let scroll = app.history_scroll.min(lines.len().saturating_sub(1));
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" Transaction History ({}) ", entries.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, area);
}
