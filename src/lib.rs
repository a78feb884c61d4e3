//! TUI Quiz (workspace facade crate).
//!
//! This package exposes `tui_quiz::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_quiz_core as core;
pub use tui_quiz_engine as engine;
pub use tui_quiz_input as input;
pub use tui_quiz_term as term;
pub use tui_quiz_types as types;
