//! Dialog modules for the TUI
//!
//! Message and error dialogs are plain widgets; the help overlay depends
//! on the screen it is opened from.

pub mod help;
