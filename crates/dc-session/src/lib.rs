//! # dc-session: theme state and its command surface
//!
//! [`ThemeHistory`] owns the current primary/complementary pair and a bounded
//! undo/redo log. [`command`] layers a small line-oriented language on top of
//! it so a session can be driven from a terminal or a script.

pub mod command;
pub mod history;

pub use command::{Command, CommandResult, execute, parse_command, run_line};
pub use history::{
    DEFAULT_COMPLEMENTARY, DEFAULT_PRIMARY, HistoryEntry, MAX_HISTORY_SIZE, ThemeHistory,
};
