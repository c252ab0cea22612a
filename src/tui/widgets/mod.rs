//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod charts;
pub mod error_dialog;
pub mod input;
pub mod message;

// Re-export commonly used widgets
pub use error_dialog::{error_dialog_area, ErrorDialog, ErrorInfo};
pub use input::TextInput;
pub use message::{message_dialog_area, Message, MessageDialog, MessageKind};
