//! Terminal quiz renderer.
//!
//! Renders the quiz into a simple framebuffer that is diffed and flushed to
//! the terminal, instead of going through a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Measure text by display width so Japanese text lines up
//! - Map the logical effects canvas onto any terminal size

pub mod fb;
pub mod quiz_view;
pub mod renderer;
pub mod wrap;

pub use tui_quiz_core as core;
pub use tui_quiz_types as types;

pub use fb::{text_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{project, Effects, QuizLayout, QuizView, Rect, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use wrap::wrap_text;
