//! Summary & Analysis tab
//!
//! Three sub-views selected with Left/Right: the expense pie chart, the
//! balance history line chart, and a textual overview.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_summary;
use crate::models::Account;
use crate::reports::{AccountSummary, BalanceTrend, ExpenseBreakdown};
use crate::tui::app::{App, SummaryView};
use crate::tui::layout::SummaryLayout;
use crate::tui::widgets::charts::{render_balance_chart, render_pie_chart};

pub const NO_EXPENSES: &str = "No expenses to display";
pub const NO_BALANCE_HISTORY: &str = "No balance history available";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SummaryLayout::new(area);
    render_selector(frame, app.summary_view, layout.selector);

    let Some(account) = app.current_account() else {
        return;
    };
    let symbol = app.settings.currency_symbol.as_str();
    let title = app.summary_view.title();

    match app.summary_view {
        SummaryView::ExpensePie => {
            let breakdown = ExpenseBreakdown::from_summary(&account.expense_summary);
            if breakdown.is_empty() {
                render_placeholder(frame, layout.body, title, NO_EXPENSES);
            } else {
                render_pie_chart(frame, layout.body, title, &breakdown, symbol);
            }
        }
        SummaryView::BalanceHistory => {
            match BalanceTrend::from_history(&account.balance_history) {
                Some(trend) => render_balance_chart(frame, layout.body, title, &trend, symbol),
                None => render_placeholder(frame, layout.body, title, NO_BALANCE_HISTORY),
            }
        }
        SummaryView::Overview => render_overview(frame, account, symbol, layout.body),
    }
}

fn render_selector(frame: &mut Frame, active: SummaryView, area: Rect) {
    let mut spans = vec![Span::styled("◀ ", Style::default().fg(Color::DarkGray))];
    for (i, view) in SummaryView::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *view == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(view.title(), style));
    }
    spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_overview(frame: &mut Frame, account: &Account, symbol: &str, area: Rect) {
    let summary = AccountSummary::generate(account);
    let over_limit = summary.is_over_limit();

    let lines: Vec<Line> = format_summary(&summary, symbol)
        .lines()
        .map(|line| {
            if over_limit && line.starts_with("You've exceeded") {
                Line::styled(
                    line.to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            } else {
                Line::raw(line.to_string())
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Overview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, area);
}
