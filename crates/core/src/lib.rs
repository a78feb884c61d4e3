//! Core quiz logic module - pure, deterministic, and testable
//!
//! This crate contains the quiz rules, state management, and the particle
//! simulation. It has **no dependencies** on terminals, audio, or clocks:
//! time is passed in as milliseconds and randomness comes from an injected
//! [`RandomSource`], which makes it:
//!
//! - **Deterministic**: Same seed produces identical sessions and effects
//! - **Testable**: Scripted random sources can pin exact outcomes
//! - **Portable**: Can drive a terminal, a GUI, or a headless test
//!
//! # Module Structure
//!
//! - [`bank`]: Quiz items and the built-in question bank (JSON loading too)
//! - [`rng`]: `RandomSource` trait and the seeded LCG
//! - [`session`]: Random selection of the questions for one playthrough
//! - [`game_state`]: The Answering / Feedback / Finished state machine
//! - [`result`]: Score bands and their end-screen themes
//! - [`particles`]: Celebration bursts and the results-screen flourish
//!
//! # Example
//!
//! ```
//! use tui_quiz_core::{GameState, QuestionBank, QuizEvent};
//! use tui_quiz_core::types::{Phase, QuizAction};
//!
//! let mut game = GameState::new(QuestionBank::builtin(), 12345);
//!
//! let side = game.correct_side();
//! assert_eq!(
//!     game.apply_action(QuizAction::Select(side)),
//!     Some(QuizEvent::Answered { correct: true })
//! );
//! assert_eq!(game.phase(), Phase::Feedback);
//! assert_eq!(game.score(), 1);
//!
//! game.apply_action(QuizAction::Advance);
//! assert_eq!(game.current_index(), 1);
//! ```

pub mod bank;
pub mod game_state;
pub mod particles;
pub mod result;
pub mod rng;
pub mod session;

pub use tui_quiz_types as types;

// Re-export commonly used types for convenience
pub use bank::{BankError, QuestionBank, QuizItem};
pub use game_state::{Feedback, GameState, QuizEvent};
pub use particles::{Bounds, Celebration, Dot, Flourish, Particle, ParticleSystem, Star};
pub use result::{classify, percentage, theme, BandTheme};
pub use rng::{RandomSource, SimpleRng};
pub use session::Session;
