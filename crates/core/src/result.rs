//! Result classification - end-of-session score bands and their themes
//!
//! Classification is pure and uses integer arithmetic so the inclusive
//! boundaries (exactly 60% and 80%) never suffer from float rounding.

use crate::types::{
    ResultBand, ALICE_BLUE, BLUE, EXCELLENT_PERCENT, GOLD, GOOD_PERCENT, INDIGO, LAVENDER,
    LIGHT_GOLD, Rgb,
};

/// Presentation attached to a result band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandTheme {
    pub background: Rgb,
    /// Used for the final score and both messages.
    pub accent: Rgb,
    pub message_ja: &'static str,
    pub message_en: &'static str,
    /// Whether the results screen shows the dot/star flourish.
    pub flourish: bool,
}

/// Classify `score` out of `total` into a result band.
///
/// A zero-length session has no meaningful percentage and classifies as
/// [`ResultBand::Encouragement`].
///
/// ```
/// use tui_quiz_core::classify;
/// use tui_quiz_core::types::ResultBand;
///
/// assert_eq!(classify(4, 5), ResultBand::Excellent);
/// assert_eq!(classify(3, 5), ResultBand::Good);
/// assert_eq!(classify(2, 5), ResultBand::Encouragement);
/// ```
pub fn classify(score: usize, total: usize) -> ResultBand {
    if total == 0 {
        return ResultBand::Encouragement;
    }
    let scaled = score.saturating_mul(100);
    if scaled >= EXCELLENT_PERCENT.saturating_mul(total) {
        ResultBand::Excellent
    } else if scaled >= GOOD_PERCENT.saturating_mul(total) {
        ResultBand::Good
    } else {
        ResultBand::Encouragement
    }
}

/// Whole-number percentage (rounded down), 0 for an empty session.
pub fn percentage(score: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    score.saturating_mul(100) / total
}

pub fn theme(band: ResultBand) -> BandTheme {
    match band {
        ResultBand::Excellent => BandTheme {
            background: LIGHT_GOLD,
            accent: GOLD,
            message_ja: "素晴らしい! あなたはAWSマスターです!",
            message_en: "Excellent! You're an AWS master!",
            flourish: true,
        },
        ResultBand::Good => BandTheme {
            background: LAVENDER,
            accent: INDIGO,
            message_ja: "よくできました! AWSサービスをよく知っていますね!",
            message_en: "Good job! You know your AWS services well!",
            flourish: false,
        },
        ResultBand::Encouragement => BandTheme {
            background: ALICE_BLUE,
            accent: BLUE,
            message_ja: "頑張って! もっと勉強すればAWSマスターになれます!",
            message_en: "Keep learning! You'll master AWS services soon!",
            flourish: false,
        },
    }
}
