//! Prompt Studio: a single-page AI chat prototype.
//!
//! Model selection, a prompt editor with templates, a parameters panel and a
//! transcript view. Replies are simulated; nothing is persisted.
pub mod api;
pub mod catalog;
pub mod config;
pub mod lifecycle;
pub mod state;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
