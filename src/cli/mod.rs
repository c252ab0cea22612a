//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod replay;

pub use replay::{handle_replay_command, run_replay, ReplayAction, ReplayReport, ReplaySession, RowOutcome};
