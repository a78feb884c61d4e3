//! Session selection - the questions for one playthrough
//!
//! A session is drawn from the bank without replacement: item indices are
//! shuffled with [`RandomSource::shuffle`] and the first `count` are kept, so
//! both the subset and its order are random. A bank smaller than the requested count yields every item
//! (in random order) instead of failing.

use crate::bank::{QuestionBank, QuizItem};
use crate::rng::RandomSource;

/// The ordered questions for one game run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    items: Vec<QuizItem>,
    requested: usize,
}

impl Session {
    /// Draw `count` distinct items from `bank`, clamped to the bank size.
    pub fn select<R: RandomSource>(bank: &QuestionBank, count: usize, rng: &mut R) -> Self {
        let n = bank.len();
        let take = count.min(n);

        let mut indices: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut indices);

        let items = indices[..take]
            .iter()
            .filter_map(|&i| bank.get(i).cloned())
            .collect();

        Self {
            items,
            requested: count,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuizItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// How many items were asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// How many requested items the bank could not supply.
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.items.len())
    }
}
