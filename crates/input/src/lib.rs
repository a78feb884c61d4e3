//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::QuizAction`]s and
//! click positions; turning a click into an action needs the screen layout
//! and is done by the view.

pub mod map;

pub use tui_quiz_types as types;

pub use map::{click_position, handle_key_event, should_quit};
