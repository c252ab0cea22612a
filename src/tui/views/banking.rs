//! Banking tab
//!
//! Four forms on one page: add funds, send a payment, record an expense and
//! set the monthly limit. Enter submits the form that holds the focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ExpenseCategory;
use crate::tui::app::App;
use crate::tui::widgets::TextInput;

/// Which field is focused on the banking page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BankingField {
    #[default]
    FundsAmount,
    Recipient,
    SendAmount,
    ExpenseAmount,
    ExpenseCategory,
    LimitAmount,
}

impl BankingField {
    pub const ALL: [BankingField; 6] = [
        Self::FundsAmount,
        Self::Recipient,
        Self::SendAmount,
        Self::ExpenseAmount,
        Self::ExpenseCategory,
        Self::LimitAmount,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The action submitted by Enter on this field
    pub fn action(self) -> BankingAction {
        match self {
            Self::FundsAmount => BankingAction::AddFunds,
            Self::Recipient | Self::SendAmount => BankingAction::SendPayment,
            Self::ExpenseAmount | Self::ExpenseCategory => BankingAction::AddExpense,
            Self::LimitAmount => BankingAction::SetLimit,
        }
    }
}

/// Form sections of the banking page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankingAction {
    AddFunds,
    SendPayment,
    AddExpense,
    SetLimit,
}

/// State for the banking forms
#[derive(Debug, Clone)]
pub struct BankingFormState {
    pub focused_field: BankingField,
    pub funds_amount: TextInput,
    pub recipient: TextInput,
    pub send_amount: TextInput,
    pub expense_amount: TextInput,
    pub category: ExpenseCategory,
    pub limit_amount: TextInput,
}

impl Default for BankingFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BankingFormState {
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: BankingField::FundsAmount,
            funds_amount: TextInput::new().label("Amount").placeholder("e.g. 100.00"),
            recipient: TextInput::new()
                .label("Recipient")
                .placeholder("Username"),
            send_amount: TextInput::new().label("Amount").placeholder("e.g. 25.00"),
            expense_amount: TextInput::new().label("Amount").placeholder("e.g. 12.50"),
            category: ExpenseCategory::default(),
            limit_amount: TextInput::new()
                .label("Limit")
                .placeholder("0 clears the limit"),
        };
        state.set_focus(BankingField::FundsAmount);
        state
    }

    /// Clear every field and focus the first one
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_focus(&mut self, field: BankingField) {
        self.focused_field = field;
        self.funds_amount.focused = field == BankingField::FundsAmount;
        self.recipient.focused = field == BankingField::Recipient;
        self.send_amount.focused = field == BankingField::SendAmount;
        self.expense_amount.focused = field == BankingField::ExpenseAmount;
        self.limit_amount.focused = field == BankingField::LimitAmount;
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// The text input holding the focus; the category selector has none
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            BankingField::FundsAmount => Some(&mut self.funds_amount),
            BankingField::Recipient => Some(&mut self.recipient),
            BankingField::SendAmount => Some(&mut self.send_amount),
            BankingField::ExpenseAmount => Some(&mut self.expense_amount),
            BankingField::ExpenseCategory => None,
            BankingField::LimitAmount => Some(&mut self.limit_amount),
        }
    }
}

/// Render the banking page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = split_columns(rows[0]);
    let bottom = split_columns(rows[1]);

    let form = &app.banking_form;
    let focus = form.focused_field.action();
    let limit_line = match app.current_account().and_then(|a| a.monthly_limit) {
        Some(limit) => format!(
            "Current limit: {}",
            limit.format_with_symbol(&app.settings.currency_symbol)
        ),
        None => "No limit set".to_string(),
    };

    render_section(
        frame,
        top[0],
        " Add Funds ",
        focus == BankingAction::AddFunds,
        &[&form.funds_amount],
        None,
        "Add",
    );
    render_section(
        frame,
        top[1],
        " Send Payment ",
        focus == BankingAction::SendPayment,
        &[&form.recipient, &form.send_amount],
        None,
        "Send",
    );
    render_section(
        frame,
        bottom[0],
        " Add Expense ",
        focus == BankingAction::AddExpense,
        &[&form.expense_amount],
        Some(category_line(
            form.category,
            form.focused_field == BankingField::ExpenseCategory,
        )),
        "Record",
    );
    render_section(
        frame,
        bottom[1],
        " Monthly Limit ",
        focus == BankingAction::SetLimit,
        &[&form.limit_amount],
        Some(Line::from(Span::styled(
            limit_line,
            Style::default().fg(Color::DarkGray),
        ))),
        "Set",
    );
}

fn split_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn category_line(category: ExpenseCategory, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("< {} >", category), style),
    ])
}

fn render_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    active: bool,
    inputs: &[&TextInput],
    extra: Option<Line<'static>>,
    verb: &str,
) {
    let border = if active { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); inputs.len()];
    if extra.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints(constraints)
        .split(inner);

    for (input, chunk) in inputs.iter().zip(chunks.iter()) {
        frame.render_widget(*input, *chunk);
    }
    if let Some(line) = extra {
        frame.render_widget(Paragraph::new(line), chunks[inputs.len()]);
    }

    if active {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(format!(" {}", verb)),
        ]));
        frame.render_widget(hint, chunks[chunks.len() - 1]);
    }
}

/// Handle a key on the banking page
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.banking_form;

    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => app.submit_banking(),
        KeyCode::Left if form.focused_field == BankingField::ExpenseCategory => {
            form.category = form.category.prev();
        }
        KeyCode::Right if form.focused_field == BankingField::ExpenseCategory => {
            form.category = form.category.next();
        }
        _ => {
            if let Some(input) = form.focused_input() {
                input.handle_key(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_actions() {
        assert_eq!(BankingField::FundsAmount.action(), BankingAction::AddFunds);
        assert_eq!(BankingField::Recipient.action(), BankingAction::SendPayment);
        assert_eq!(BankingField::SendAmount.action(), BankingAction::SendPayment);
        assert_eq!(
            BankingField::ExpenseCategory.action(),
            BankingAction::AddExpense
        );
        assert_eq!(BankingField::LimitAmount.action(), BankingAction::SetLimit);
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(BankingField::LimitAmount.next(), BankingField::FundsAmount);
        assert_eq!(BankingField::FundsAmount.prev(), BankingField::LimitAmount);
    }

    #[test]
    fn test_focus_is_exclusive() {
        let mut form = BankingFormState::new();
        form.set_focus(BankingField::SendAmount);
        assert!(form.send_amount.focused);
        assert!(!form.funds_amount.focused);
        assert!(!form.recipient.focused);

        form.set_focus(BankingField::ExpenseCategory);
        assert!(form.focused_input().is_none());
    }
}
