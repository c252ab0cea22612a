//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, DashboardTab, Screen};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Ctrl+Q", "Quit application"),
        key_line("F1", "Show/hide help"),
        key_line("Tab", "Next field"),
        key_line("Shift+Tab", "Previous field"),
        key_line("Enter", "Submit"),
        Line::from(""),
    ];

    match app.screen {
        Screen::Login => {
            lines.push(section("Login"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Log in, or create the account"));
            lines.push(key_line("Esc", "Quit"));
        }
        Screen::Dashboard => {
            lines.push(section("Dashboard"));
            lines.push(Line::from(""));
            lines.push(key_line("Ctrl+N", "Next tab"));
            lines.push(key_line("Ctrl+P", "Previous tab"));
            lines.push(key_line("Ctrl+L", "Log out"));
            lines.push(Line::from(""));

            match app.active_tab {
                DashboardTab::Banking => {
                    lines.push(section("Banking"));
                    lines.push(Line::from(""));
                    lines.push(key_line("Enter", "Submit the focused form"));
                    lines.push(key_line("←/→", "Change expense category"));
                    lines.push(key_line("0", "As a limit, clears it"));
                }
                DashboardTab::Transactions => {
                    lines.push(section("Transactions"));
                    lines.push(Line::from(""));
                    lines.push(key_line("↑/↓", "Scroll one entry"));
                    lines.push(key_line("PgUp/PgDn", "Scroll one page"));
                    lines.push(key_line("Home/End", "Oldest/newest entries"));
                }
                DashboardTab::Summary => {
                    lines.push(section("Summary & Analysis"));
                    lines.push(Line::from(""));
                    lines.push(key_line("←/→", "Switch chart or overview"));
                }
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(key_line("d", "Toggle details in error dialogs"));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
