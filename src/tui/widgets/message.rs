//! Message dialog widget
//!
//! Modal info, success and warning messages. The dialog stays up until
//! the user dismisses it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
}

impl MessageKind {
    /// Get the color for this message type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }

    /// Get the icon/prefix for this message type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
        }
    }
}

/// A modal message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(kind: MessageKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            kind,
        }
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, title, text)
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, title, text)
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, title, text)
    }
}

/// Widget for rendering a message dialog
pub struct MessageDialog<'a> {
    message: &'a Message,
}

impl<'a> MessageDialog<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }
}

impl<'a> Widget for MessageDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.message.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", self.message.kind.icon(), self.message.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        Paragraph::new(self.message.text.as_str())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        Paragraph::new("Press Enter to continue")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

/// Calculate the area for a message dialog (centered in parent)
pub fn message_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 60 / 100).clamp(30.min(parent.width), 70.min(parent.width));
    let height = 7.min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let m = Message::success("Success", "$10.00 added to your wallet.");
        assert_eq!(m.kind, MessageKind::Success);
        assert_eq!(m.title, "Success");
    }

    #[test]
    fn test_message_colors() {
        assert_eq!(MessageKind::Info.color(), Color::Blue);
        assert_eq!(MessageKind::Success.color(), Color::Green);
        assert_eq!(MessageKind::Warning.color(), Color::Yellow);
    }

    #[test]
    fn test_render_message() {
        let message = Message::warning("Limit Exceeded", "You've exceeded your spending limit!");
        let area = Rect::new(0, 0, 50, 7);
        let mut buf = Buffer::empty(area);
        MessageDialog::new(&message).render(area, &mut buf);

        let rendered: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("Limit Exceeded"));
        assert!(rendered.contains("Press Enter to continue"));
    }

    #[test]
    fn test_area_fits_small_parent() {
        let area = message_dialog_area(Rect::new(0, 0, 20, 5));
        assert!(area.width <= 20 && area.height <= 5);
    }
}
