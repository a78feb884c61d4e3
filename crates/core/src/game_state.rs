//! Game state module - the quiz state machine
//!
//! Phases flow `Answering -> Feedback -> Answering ... -> Finished`, and
//! `Finished -> Answering` only on an explicit restart. Every transition goes
//! through [`GameState::apply_action`]; actions that do not apply to the
//! current phase are ignored and return `None`.

use crate::bank::{QuestionBank, QuizItem};
use crate::result::classify;
use crate::rng::{RandomSource, SimpleRng};
use crate::session::Session;
use crate::types::{Phase, QuizAction, ResultBand, Side, SESSION_LEN};

/// The judged answer for the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub chosen: Side,
    pub explanation: String,
}

/// What a successful transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    /// Answering -> Feedback.
    Answered { correct: bool },
    /// Feedback -> Answering, now showing question `index`.
    NextQuestion { index: usize },
    /// Feedback -> Finished (or an empty session at start/restart).
    Finished { band: ResultBand },
    /// Finished -> Answering with a fresh session.
    Restarted { round: u32 },
}

/// Complete quiz state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    bank: QuestionBank,
    session_len: usize,
    rng: R,
    session: Session,
    current_index: usize,
    score: usize,
    phase: Phase,
    left_is_correct: bool,
    feedback: Option<Feedback>,
    /// Monotonic round id (increments on restart).
    round: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game over `bank` with the default session length and a seeded LCG.
    pub fn new(bank: QuestionBank, seed: u32) -> Self {
        Self::with_rng(bank, SESSION_LEN, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing `session_len` questions per session from `bank`.
    pub fn with_rng(bank: QuestionBank, session_len: usize, mut rng: R) -> Self {
        let session = Session::select(&bank, session_len, &mut rng);
        let mut state = Self {
            bank,
            session_len,
            rng,
            session,
            current_index: 0,
            score: 0,
            phase: Phase::Answering,
            left_is_correct: true,
            feedback: None,
            round: 0,
        };
        state.enter_question();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.session.len()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The question being answered or reviewed; `None` once finished.
    pub fn current_item(&self) -> Option<&QuizItem> {
        if self.phase == Phase::Finished {
            return None;
        }
        self.session.get(self.current_index)
    }

    pub fn left_is_correct(&self) -> bool {
        self.left_is_correct
    }

    pub fn correct_side(&self) -> Side {
        if self.left_is_correct {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Text of the option shown on `side` for the current question.
    pub fn option_text(&self, side: Side) -> Option<&str> {
        let item = self.current_item()?;
        if side == self.correct_side() {
            Some(item.correct.as_str())
        } else {
            Some(item.incorrect.as_str())
        }
    }

    /// Result band of the finished session.
    pub fn result_band(&self) -> Option<ResultBand> {
        if self.phase == Phase::Finished {
            Some(classify(self.score, self.session.len()))
        } else {
            None
        }
    }

    /// Apply an action, returning the event if a transition happened.
    pub fn apply_action(&mut self, action: QuizAction) -> Option<QuizEvent> {
        match (self.phase, action) {
            (Phase::Answering, QuizAction::Select(side)) => Some(self.answer(side)),
            (Phase::Feedback, QuizAction::Advance) => Some(self.advance()),
            (Phase::Finished, QuizAction::Restart) => Some(self.restart()),
            _ => None,
        }
    }

    fn answer(&mut self, side: Side) -> QuizEvent {
        let correct = side == self.correct_side();
        if correct {
            self.score += 1;
        }
        let explanation = self
            .current_item()
            .map(|item| item.explanation.clone())
            .unwrap_or_default();
        self.feedback = Some(Feedback {
            correct,
            chosen: side,
            explanation,
        });
        self.phase = Phase::Feedback;
        QuizEvent::Answered { correct }
    }

    fn advance(&mut self) -> QuizEvent {
        self.feedback = None;
        self.current_index += 1;
        self.phase = Phase::Answering;
        self.enter_question()
    }

    fn restart(&mut self) -> QuizEvent {
        self.session = Session::select(&self.bank, self.session_len, &mut self.rng);
        self.current_index = 0;
        self.score = 0;
        self.feedback = None;
        self.phase = Phase::Answering;
        self.round = self.round.wrapping_add(1);
        match self.enter_question() {
            QuizEvent::NextQuestion { .. } => QuizEvent::Restarted { round: self.round },
            finished => finished,
        }
    }

    /// Set up the question at `current_index`, or finish when past the end.
    fn enter_question(&mut self) -> QuizEvent {
        if self.current_index >= self.session.len() {
            self.current_index = self.session.len();
            self.phase = Phase::Finished;
            return QuizEvent::Finished {
                band: classify(self.score, self.session.len()),
            };
        }
        self.left_is_correct = self.rng.coin();
        QuizEvent::NextQuestion {
            index: self.current_index,
        }
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(QuestionBank::builtin(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_correctly(state: &mut GameState) -> Option<QuizEvent> {
        let side = state.correct_side();
        state.apply_action(QuizAction::Select(side))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::default();
        assert_eq!(state.phase(), Phase::Answering);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.total(), SESSION_LEN);
        assert_eq!(state.round(), 0);
        assert!(state.feedback().is_none());
        assert!(state.current_item().is_some());
    }

    #[test]
    fn test_option_text_matches_side() {
        let state = GameState::default();
        let item = state.current_item().unwrap().clone();
        let correct = state.correct_side();
        assert_eq!(state.option_text(correct), Some(item.correct.as_str()));
        assert_eq!(
            state.option_text(correct.other()),
            Some(item.incorrect.as_str())
        );
    }

    #[test]
    fn test_correct_answer() {
        let mut state = GameState::default();
        let event = answer_correctly(&mut state);
        assert_eq!(event, Some(QuizEvent::Answered { correct: true }));
        assert_eq!(state.phase(), Phase::Feedback);
        assert_eq!(state.score(), 1);
        let fb = state.feedback().unwrap();
        assert!(fb.correct);
        assert_eq!(fb.explanation, state.current_item().unwrap().explanation);
    }

    #[test]
    fn test_incorrect_answer() {
        let mut state = GameState::default();
        let wrong = state.correct_side().other();
        let event = state.apply_action(QuizAction::Select(wrong));
        assert_eq!(event, Some(QuizEvent::Answered { correct: false }));
        assert_eq!(state.score(), 0);
        assert!(!state.feedback().unwrap().correct);
        assert_eq!(state.feedback().unwrap().chosen, wrong);
    }

    #[test]
    fn test_clicks_ignored_during_feedback() {
        let mut state = GameState::default();
        answer_correctly(&mut state);
        assert_eq!(state.apply_action(QuizAction::Select(Side::Left)), None);
        assert_eq!(state.apply_action(QuizAction::Select(Side::Right)), None);
        assert_eq!(state.apply_action(QuizAction::Restart), None);
        assert_eq!(state.score(), 1);
        assert_eq!(state.phase(), Phase::Feedback);
    }

    #[test]
    fn test_advance_only_from_feedback() {
        let mut state = GameState::default();
        assert_eq!(state.apply_action(QuizAction::Advance), None);
        assert_eq!(state.current_index(), 0);

        answer_correctly(&mut state);
        let event = state.apply_action(QuizAction::Advance);
        assert_eq!(event, Some(QuizEvent::NextQuestion { index: 1 }));
        assert_eq!(state.phase(), Phase::Answering);
        assert!(state.feedback().is_none());
    }

    #[test]
    fn test_finish_after_last_question() {
        let mut state = GameState::default();
        for i in 0..SESSION_LEN {
            answer_correctly(&mut state);
            let event = state.apply_action(QuizAction::Advance).unwrap();
            if i + 1 < SESSION_LEN {
                assert_eq!(event, QuizEvent::NextQuestion { index: i + 1 });
            } else {
                assert_eq!(
                    event,
                    QuizEvent::Finished {
                        band: ResultBand::Excellent
                    }
                );
            }
        }
        assert!(state.is_finished());
        assert_eq!(state.current_index(), SESSION_LEN);
        assert!(state.current_item().is_none());
        assert_eq!(state.option_text(Side::Left), None);
        assert_eq!(state.result_band(), Some(ResultBand::Excellent));
    }

    #[test]
    fn test_restart_resets() {
        let mut state = GameState::default();
        for _ in 0..SESSION_LEN {
            answer_correctly(&mut state);
            state.apply_action(QuizAction::Advance);
        }
        assert_eq!(
            state.apply_action(QuizAction::Restart),
            Some(QuizEvent::Restarted { round: 1 })
        );
        assert_eq!(state.phase(), Phase::Answering);
        assert_eq!(state.score(), 0);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.round(), 1);
        assert_eq!(state.total(), SESSION_LEN);
    }

    #[test]
    fn test_empty_session_starts_finished() {
        let state = GameState::with_rng(QuestionBank::builtin(), 0, SimpleRng::new(1));
        assert!(state.is_finished());
        assert_eq!(state.result_band(), Some(ResultBand::Encouragement));
    }
}
