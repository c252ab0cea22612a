//! Dashboard screen
//!
//! Welcome header with the current balance, the tab bar, and the content
//! of the active tab.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::tui::app::{App, DashboardTab};

use super::{banking, summary, transactions};

/// Render the header, tab bar and active tab
pub fn render(frame: &mut Frame, app: &App, header: Rect, tabs: Rect, content: Rect) {
    render_header(frame, app, header);
    render_tabs(frame, app, tabs);

    match app.active_tab {
        DashboardTab::Banking => banking::render(frame, app, content),
        DashboardTab::Transactions => transactions::render(frame, app, content),
        DashboardTab::Summary => summary::render(frame, app, content),
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if let Some(account) = app.current_account() {
        let balance_color = if account.balance.is_negative() {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::styled(
            format!(" Welcome, {}! ", account.username),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("│ "));
        spans.push(Span::styled("Balance: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            account
                .balance
                .format_with_symbol(&app.settings.currency_symbol),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ));
        if account.is_over_limit() {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                "Over limit",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Sonova Bank ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}
