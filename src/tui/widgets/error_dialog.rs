//! Error dialog widget
//!
//! Displays detailed error information with recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::{AuthFailure, WalletError};

/// An error dialog with details and suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
    /// Technical details (for advanced users)
    pub technical: Option<String>,
}

impl ErrorInfo {
    /// Create error info from a WalletError
    pub fn from_error(error: &WalletError) -> Self {
        let (title, details, suggestions, technical) = match error {
            WalletError::InvalidInput(msg) => (
                "Invalid Input".to_string(),
                msg.clone(),
                vec!["Enter a positive amount such as 25 or 12.50".to_string()],
                None,
            ),
            WalletError::InsufficientFunds { needed, available } => (
                "Insufficient Funds".to_string(),
                format!("Not enough balance: need {}, have {}", needed, available),
                vec![
                    "Add funds from the Banking tab".to_string(),
                    "Enter a smaller amount".to_string(),
                ],
                None,
            ),
            WalletError::UnknownRecipient(name) => (
                "Recipient Not Found".to_string(),
                format!("No account named '{}'", name),
                vec![
                    "Check the spelling of the username".to_string(),
                    "The recipient must have logged in at least once".to_string(),
                ],
                None,
            ),
            WalletError::AuthenticationFailure(reason) => (
                "Login Failed".to_string(),
                reason.to_string(),
                match reason {
                    AuthFailure::MissingField => vec!["Enter both a username and a PIN".to_string()],
                    AuthFailure::IncorrectPin => vec![
                        "Check the PIN and try again".to_string(),
                        "Usernames are case-sensitive".to_string(),
                    ],
                    AuthFailure::UnknownUser => vec![
                        "Check the spelling of the username".to_string(),
                        "Enable auto_register in config.json to create accounts at login"
                            .to_string(),
                    ],
                },
                None,
            ),
            WalletError::NotFound {
                entity_type,
                identifier,
            } => (
                format!("{} Not Found", entity_type),
                format!(
                    "Could not find {} with identifier '{}'",
                    entity_type.to_lowercase(),
                    identifier
                ),
                vec!["Log out and sign in again".to_string()],
                None,
            ),
            WalletError::Duplicate {
                entity_type,
                identifier,
            } => (
                format!("Duplicate {}", entity_type),
                format!("{} '{}' already exists", entity_type, identifier),
                vec!["Use a different name".to_string()],
                None,
            ),
            WalletError::NotSignedIn => (
                "Not Signed In".to_string(),
                "Sign in before using the wallet".to_string(),
                vec!["Log in from the login screen".to_string()],
                None,
            ),
            WalletError::Config(msg) => (
                "Configuration Error".to_string(),
                msg.clone(),
                vec![
                    "Check your settings file for syntax errors".to_string(),
                    "Run 'sonova config --init' to write a default configuration".to_string(),
                ],
                None,
            ),
            WalletError::Io(msg) => (
                "I/O Error".to_string(),
                msg.clone(),
                vec!["Check that you have write permissions to the config directory".to_string()],
                None,
            ),
            WalletError::Json(msg) => (
                "Data Error".to_string(),
                format!("Failed to read or write data: {}", msg),
                vec!["Check the file for syntax errors".to_string()],
                Some(msg.clone()),
            ),
            WalletError::Credential(msg) => (
                "Credential Error".to_string(),
                msg.clone(),
                vec!["Check the pin_hashing values in config.json".to_string()],
                Some(msg.clone()),
            ),
            WalletError::Replay(msg) => (
                "Replay Error".to_string(),
                msg.clone(),
                vec!["Check the CSV columns: action,username,pin,recipient,amount,category".to_string()],
                None,
            ),
            WalletError::Tui(msg) => (
                "Interface Error".to_string(),
                msg.clone(),
                vec!["Try resizing your terminal window".to_string()],
                None,
            ),
        };

        Self {
            title,
            details,
            suggestions,
            technical,
        }
    }

    /// Create a simple error info
    pub fn simple(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            suggestions: vec![],
            technical: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
    show_technical: bool,
}

impl<'a> ErrorDialog<'a> {
    /// Create a new error dialog widget
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self {
            error,
            show_technical: false,
        }
    }

    /// Show technical details
    pub fn with_technical(mut self, show: bool) -> Self {
        self.show_technical = show;
        self
    }
}

impl<'a> Widget for ErrorDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        // Calculate layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        let details_text = match (&self.error.technical, self.show_technical) {
            (Some(technical), true) => format!("{}\n{}", self.error.details, technical),
            _ => self.error.details.clone(),
        };
        let details = Paragraph::new(details_text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        details.render(chunks[0], buf);

        // Render suggestions
        if !self.error.suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];

            for suggestion in &self.error.suggestions {
                lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::raw(suggestion.as_str()),
                ]));
            }

            let suggestions = Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            suggestions.render(chunks[1], buf);
        }

        // Render close hint
        let close_hint = Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        close_hint.render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80);
    let height = (parent.height * 50 / 100).clamp(10, 20);

    let width = width.min(parent.width);
    let height = height.min(parent.height);
    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
