//! Terminal User Interface module
//!
//! A single-screen interactive calculator built on ratatui: edit a field,
//! watch the summary, loan panel, and breakdown chart update on every
//! keystroke, and generate the narrative analysis on demand.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
