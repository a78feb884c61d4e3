//! Quiz engine: glue between the pure core and the outside world.
//!
//! - [`app`]: `QuizApp`, which routes state-machine events to particle
//!   effects and sounds
//! - [`audio`]: the optional `AudioSink` capability (terminal bell, or sine
//!   tones with the `audio` feature)
//! - [`config`]: environment-based runtime configuration

pub mod app;
pub mod audio;
pub mod config;

pub use tui_quiz_core as core;
pub use tui_quiz_types as types;

pub use app::QuizApp;
pub use audio::{open_sink, AudioSink, SoundMode, TerminalBell, Tone};
pub use config::{load_bank_file, AppConfig, ConfigError};
