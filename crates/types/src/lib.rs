//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Canvas
//!
//! Particles and flourish shapes live on a fixed logical canvas of
//! 800x600 units. Renderers project that canvas onto whatever surface they
//! draw to.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELEBRATION_MS` | 3000 | Lifetime of a celebration burst |
//! | `CELEBRATION_TEXT_MS` | 2000 | How long the pulsing text is shown |
//! | `TONE_MS` | 500 | Length of an answer tone |
//!
//! # Examples
//!
//! ```
//! use tui_quiz_types::{Side, CANVAS_WIDTH, SESSION_LEN};
//!
//! assert_eq!(Side::Left.other(), Side::Right);
//! assert_eq!(CANVAS_WIDTH, 800.0);
//! assert_eq!(SESSION_LEN, 5);
//! ```

/// Logical canvas width.
pub const CANVAS_WIDTH: f32 = 800.0;

/// Logical canvas height.
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Questions per session.
pub const SESSION_LEN: usize = 5;

/// Default frame cap.
pub const TARGET_FPS: u32 = 60;

/// Particles spawned by one celebration burst.
pub const CELEBRATION_PARTICLES: usize = 100;

/// Celebration burst lifetime.
pub const CELEBRATION_MS: u64 = 3000;

/// The pulsing text is only shown during the first part of the burst.
pub const CELEBRATION_TEXT_MS: u64 = 2000;

/// Period divisor for the text pulse: `scale = 1 + amp * |sin(elapsed / period)|`.
pub const CELEBRATION_PULSE_PERIOD_MS: f32 = 200.0;

/// Amplitude of the text pulse.
pub const CELEBRATION_PULSE_AMPLITUDE: f32 = 0.2;

/// Particle size range (inclusive, canvas units).
pub const PARTICLE_MIN_SIZE: u8 = 5;
pub const PARTICLE_MAX_SIZE: u8 = 15;

/// Maximum absolute particle speed per axis (canvas units per step).
pub const PARTICLE_MAX_SPEED: f32 = 3.0;

/// Results-screen flourish dot count and radius range.
pub const FLOURISH_DOTS: usize = 50;
pub const FLOURISH_DOT_MIN: u8 = 3;
pub const FLOURISH_DOT_MAX: u8 = 8;

/// Results-screen flourish star count, size range and edge inset.
pub const FLOURISH_STARS: usize = 20;
pub const FLOURISH_STAR_MIN: u8 = 10;
pub const FLOURISH_STAR_MAX: u8 = 20;
pub const FLOURISH_STAR_MARGIN: f32 = 50.0;

/// Vertices of a flourish star (alternating outer/inner).
pub const STAR_POINTS: usize = 10;

/// Answer tones.
pub const CORRECT_TONE_HZ: f32 = 880.0;
pub const INCORRECT_TONE_HZ: f32 = 220.0;
pub const TONE_MS: u64 = 500;
pub const TONE_AMPLITUDE: f32 = 0.5;

/// Result band thresholds in percent (inclusive).
pub const EXCELLENT_PERCENT: usize = 80;
pub const GOOD_PERCENT: usize = 60;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const GREEN: Rgb = Rgb::new(50, 205, 50);
pub const RED: Rgb = Rgb::new(255, 99, 71);
pub const BLUE: Rgb = Rgb::new(70, 130, 180);
pub const LIGHT_BLUE: Rgb = Rgb::new(173, 216, 230);
pub const GRAY: Rgb = Rgb::new(220, 220, 220);
pub const LIGHT_GREEN: Rgb = Rgb::new(230, 255, 230);
pub const LIGHT_RED: Rgb = Rgb::new(255, 230, 230);
pub const GOLD: Rgb = Rgb::new(255, 215, 0);
pub const HOT_PINK: Rgb = Rgb::new(255, 105, 180);
pub const INDIGO: Rgb = Rgb::new(75, 0, 130);
pub const LIGHT_GOLD: Rgb = Rgb::new(255, 250, 205);
pub const LAVENDER: Rgb = Rgb::new(230, 230, 250);
pub const ALICE_BLUE: Rgb = Rgb::new(240, 248, 255);

/// Colors a celebration particle can take.
pub const CELEBRATION_PALETTE: [Rgb; 4] = [GOLD, GREEN, BLUE, HOT_PINK];

/// Which of the two on-screen answer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Quiz state machine phase.
///
/// - **Answering**: both options are shown and clickable
/// - **Feedback**: the answer was judged; only "next" is accepted
/// - **Finished**: final score screen; only restart (or quit) is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Answering,
    Feedback,
    Finished,
}

/// Actions that drive the quiz state machine.
///
/// Pointer clicks and keys are mapped to these by the input layer; the state
/// machine ignores actions that do not apply to the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Pick one of the two displayed options
    Select(Side),
    /// Move from feedback to the next question
    Advance,
    /// Start a new session from the results screen
    Restart,
}

/// End-of-session score bracket.
///
/// - **Excellent**: 80% or more
/// - **Good**: 60% or more
/// - **Encouragement**: everything below
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultBand {
    Excellent,
    Good,
    Encouragement,
}

impl ResultBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultBand::Excellent => "excellent",
            ResultBand::Good => "good",
            ResultBand::Encouragement => "encouragement",
        }
    }
}
