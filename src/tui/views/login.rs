//! Login screen
//!
//! Username and PIN form. Unknown usernames are registered on first login
//! when auto-registration is enabled.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::widgets::TextInput;

/// Which field is focused on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Pin,
}

impl LoginField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Pin,
            Self::Pin => Self::Username,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// State for the login form
#[derive(Debug, Clone)]
pub struct LoginFormState {
    pub focused_field: LoginField,
    pub username: TextInput,
    pub pin: TextInput,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            focused_field: LoginField::Username,
            username: TextInput::new()
                .label("Username")
                .placeholder("Enter your username")
                .focused(true),
            pin: TextInput::new()
                .label("PIN     ")
                .placeholder("Enter your PIN")
                .masked(),
        }
    }

    /// Clear both fields and focus the username
    pub fn reset(&mut self) {
        self.username.clear();
        self.pin.clear();
        self.set_focus(LoginField::Username);
    }

    pub fn set_focus(&mut self, field: LoginField) {
        self.focused_field = field;
        self.username.focused = field == LoginField::Username;
        self.pin.focused = field == LoginField::Pin;
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            LoginField::Username => &mut self.username,
            LoginField::Pin => &mut self.pin,
        }
    }
}

/// Render the login form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Sonova Bank ")
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(1), // Username
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // PIN
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    let greeting = Paragraph::new(Line::from(Span::styled(
        "Sign in or create a wallet",
        Style::default().fg(Color::White),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(greeting, chunks[0]);

    frame.render_widget(&app.login_form.username, chunks[1]);
    frame.render_widget(&app.login_form.pin, chunks[3]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Log in  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[5]);
}

/// Handle a key on the login screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.login_form;

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => {
            // Enter on the username moves on to the PIN first
            if form.focused_field == LoginField::Username && form.pin.is_empty() {
                form.next_field();
            } else {
                app.submit_login();
            }
        }
        _ => {
            form.focused_input().handle_key(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        let mut form = LoginFormState::new();
        assert!(form.username.focused);
        form.next_field();
        assert_eq!(form.focused_field, LoginField::Pin);
        assert!(form.pin.focused);
        assert!(!form.username.focused);
        form.next_field();
        assert_eq!(form.focused_field, LoginField::Username);
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = LoginFormState::new();
        form.username.insert('a');
        form.next_field();
        form.pin.insert('1');
        form.reset();
        assert!(form.username.is_empty());
        assert!(form.pin.is_empty());
        assert_eq!(form.focused_field, LoginField::Username);
    }
}
