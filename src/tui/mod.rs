//! Terminal User Interface module
//!
//! A ratatui front end over the wallet services: a login screen, then a
//! dashboard with Banking, Transactions and Summary & Analysis tabs.
//! Action outcomes appear as modal dialogs.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
