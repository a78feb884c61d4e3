//! QuizApp - ties the state machine to effects and sound.
//!
//! The frame loop calls, in order: [`QuizApp::handle`] for each input
//! action, [`QuizApp::update`] once, then renders from the accessors. Time is
//! always passed in as milliseconds on a monotonic clock.

use crate::audio::{AudioSink, Tone};
use crate::core::{
    theme, Bounds, Flourish, GameState, ParticleSystem, QuestionBank, QuizEvent, RandomSource,
    SimpleRng,
};
use crate::types::{Phase, QuizAction};

pub struct QuizApp<R: RandomSource = SimpleRng> {
    state: GameState<R>,
    particles: ParticleSystem,
    /// Separate stream so effects never perturb session/option draws.
    fx_rng: R,
    audio: Option<Box<dyn AudioSink>>,
}

impl QuizApp<SimpleRng> {
    /// Seeded app over `bank`.
    pub fn seeded(bank: QuestionBank, session_len: usize, seed: u32) -> Self {
        let state = GameState::with_rng(bank, session_len, SimpleRng::new(seed));
        let fx_seed = seed.rotate_left(16) ^ 0x9E37_79B9;
        Self::new(state, SimpleRng::new(fx_seed))
    }
}

impl<R: RandomSource> QuizApp<R> {
    pub fn new(state: GameState<R>, fx_rng: R) -> Self {
        let shortfall = state.session().shortfall();
        if shortfall > 0 {
            log::warn!(
                "question bank has {} items; session is {} short of {}",
                state.bank().len(),
                shortfall,
                state.session().requested()
            );
        }
        Self {
            state,
            particles: ParticleSystem::new(Bounds::default()),
            fx_rng,
            audio: None,
        }
    }

    pub fn with_audio(mut self, audio: Option<Box<dyn AudioSink>>) -> Self {
        self.audio = audio;
        self
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Apply an input action at `now_ms` and run its side effects.
    pub fn handle(&mut self, action: QuizAction, now_ms: u64) -> Option<QuizEvent> {
        let event = self.state.apply_action(action)?;
        match event {
            QuizEvent::Answered { correct: true } => {
                log::debug!(
                    "question {} answered correctly (score {})",
                    self.state.current_index() + 1,
                    self.state.score()
                );
                self.particles.trigger(&mut self.fx_rng, now_ms);
                self.play(Tone::Correct);
            }
            QuizEvent::Answered { correct: false } => {
                log::debug!(
                    "question {} answered incorrectly",
                    self.state.current_index() + 1
                );
                self.particles.clear();
                self.play(Tone::Incorrect);
            }
            QuizEvent::NextQuestion { index } => {
                log::debug!("showing question {}/{}", index + 1, self.state.total());
                self.particles.clear();
            }
            QuizEvent::Finished { band } => {
                log::info!(
                    "session finished: {}/{} ({})",
                    self.state.score(),
                    self.state.total(),
                    band.as_str()
                );
                self.particles.clear();
            }
            QuizEvent::Restarted { round } => {
                log::info!("restarted (round {})", round);
                self.particles.clear();
            }
        }
        Some(event)
    }

    /// Advance animations to `now_ms`.
    pub fn update(&mut self, now_ms: u64) {
        self.particles.update(now_ms);
    }

    /// Scale of the celebration text while it is visible.
    pub fn celebration_text_scale(&self, now_ms: u64) -> Option<f32> {
        self.particles.text_scale(now_ms)
    }

    /// A fresh results flourish when the finished session earned one.
    pub fn flourish(&mut self) -> Option<Flourish> {
        if self.state.phase() != Phase::Finished {
            return None;
        }
        let band = self.state.result_band()?;
        if !theme(band).flourish {
            return None;
        }
        Some(Flourish::generate(&mut self.fx_rng, self.particles.bounds()))
    }

    fn play(&mut self, tone: Tone) {
        if let Some(audio) = self.audio.as_mut() {
            audio.play(tone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CELEBRATION_MS, SESSION_LEN};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<Tone>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, tone: Tone) {
            self.0.borrow_mut().push(tone);
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    fn app() -> QuizApp {
        QuizApp::seeded(QuestionBank::builtin(), SESSION_LEN, 7)
    }

    #[test]
    fn correct_answer_spawns_celebration_and_tone() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut app = app().with_audio(Some(Box::new(Recorder(played.clone()))));
        let side = app.state().correct_side();
        app.handle(QuizAction::Select(side), 100);
        assert!(app.particles().is_active());
        assert_eq!(app.particles().celebration().unwrap().spawn_ms(), 100);
        assert_eq!(*played.borrow(), vec![Tone::Correct]);
    }

    #[test]
    fn wrong_answer_has_no_celebration() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut app = app().with_audio(Some(Box::new(Recorder(played.clone()))));
        let side = app.state().correct_side().other();
        app.handle(QuizAction::Select(side), 100);
        assert!(!app.particles().is_active());
        assert_eq!(*played.borrow(), vec![Tone::Incorrect]);
    }

    #[test]
    fn works_without_audio() {
        let mut app = app();
        assert!(!app.has_audio());
        let side = app.state().correct_side();
        assert!(app.handle(QuizAction::Select(side), 0).is_some());
    }

    #[test]
    fn celebration_expires_by_time() {
        let mut app = app();
        let side = app.state().correct_side();
        app.handle(QuizAction::Select(side), 1_000);
        app.update(1_000 + CELEBRATION_MS - 1);
        assert!(app.particles().is_active());
        app.update(1_000 + CELEBRATION_MS);
        assert!(!app.particles().is_active());
    }

    #[test]
    fn advancing_clears_celebration() {
        let mut app = app();
        let side = app.state().correct_side();
        app.handle(QuizAction::Select(side), 0);
        app.handle(QuizAction::Advance, 10);
        assert!(!app.particles().is_active());
    }

    #[test]
    fn flourish_only_for_excellent_results() {
        let mut perfect = app();
        assert!(perfect.flourish().is_none());
        for _ in 0..SESSION_LEN {
            let side = perfect.state().correct_side();
            perfect.handle(QuizAction::Select(side), 0);
            perfect.handle(QuizAction::Advance, 0);
        }
        assert!(perfect.flourish().is_some());

        let mut poor = app();
        for _ in 0..SESSION_LEN {
            let side = poor.state().correct_side().other();
            poor.handle(QuizAction::Select(side), 0);
            poor.handle(QuizAction::Advance, 0);
        }
        assert!(poor.state().is_finished());
        assert!(poor.flourish().is_none());
    }

    #[test]
    fn ignored_actions_have_no_effects() {
        let mut app = app();
        assert_eq!(app.handle(QuizAction::Advance, 0), None);
        assert_eq!(app.handle(QuizAction::Restart, 0), None);
        assert!(!app.particles().is_active());
    }
}
