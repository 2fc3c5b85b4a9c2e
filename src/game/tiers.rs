use std::collections::VecDeque;

use super::round::{AnswerOutcome, RoundError, RoundState, RoundSummary};
use crate::models::QuizItem;

/// A named batch of items played as one round.
#[derive(Clone, Debug)]
pub struct Tier {
    pub label: String,
    pub pool: Vec<QuizItem>,
}

impl Tier {
    pub fn new(label: impl Into<String>, pool: Vec<QuizItem>) -> Self {
        Self {
            label: label.into(),
            pool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierOutcome {
    pub answer: AnswerOutcome,
    pub tier_complete: bool,
    pub game_complete: bool,
}

/// Rounds played back to back. Finishing one tier moves to the next; the game
/// ends when the queue runs dry.
#[derive(Clone, Debug)]
pub struct TierQueue {
    finished: Vec<(String, RoundState)>,
    current_label: String,
    current: RoundState,
    upcoming: VecDeque<Tier>,
}

impl TierQueue {
    pub fn new(tiers: impl IntoIterator<Item = Tier>) -> Self {
        let mut upcoming: VecDeque<Tier> = tiers.into_iter().collect();
        let first = upcoming
            .pop_front()
            .unwrap_or_else(|| Tier::new(String::new(), Vec::new()));

        let mut queue = Self {
            finished: Vec::new(),
            current_label: first.label,
            current: RoundState::start(first.pool),
            upcoming,
        };
        queue.skip_empty_tiers();
        queue
    }

    /// A queue with a single unnamed round.
    pub fn single(pool: Vec<QuizItem>) -> Self {
        Self::new([Tier::new(String::new(), pool)])
    }

    pub fn current(&self) -> &RoundState {
        &self.current
    }

    pub fn current_label(&self) -> &str {
        &self.current_label
    }

    /// 1-based number of the tier being played.
    pub fn tier_number(&self) -> usize {
        self.finished.len() + 1
    }

    pub fn tier_count(&self) -> usize {
        self.finished.len() + 1 + self.upcoming.len()
    }

    pub fn has_next_tier(&self) -> bool {
        !self.upcoming.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_complete() && !self.has_next_tier()
    }

    /// Moves to the next tier once the current one is done.
    pub fn advance(&mut self) -> bool {
        if !self.current.is_complete() {
            return false;
        }
        let Some(next) = self.upcoming.pop_front() else {
            return false;
        };

        let done = std::mem::replace(&mut self.current, RoundState::start(next.pool));
        let label = std::mem::replace(&mut self.current_label, next.label);
        self.finished.push((label, done));
        tracing::debug!("advanced to tier {}", self.current_label);
        true
    }

    pub fn submit_guess(&mut self, guess_is_ai: bool) -> Result<TierOutcome, RoundError> {
        let answer = self.current.submit_guess(guess_is_ai)?;
        let tier_complete = answer.round_complete;
        if tier_complete {
            self.advance();
            self.skip_empty_tiers();
        }

        Ok(TierOutcome {
            answer,
            tier_complete,
            game_complete: self.is_complete(),
        })
    }

    pub fn score(&self) -> u32 {
        self.rounds().map(RoundState::score).sum()
    }

    pub fn total(&self) -> usize {
        self.rounds().map(RoundState::total).sum::<usize>()
            + self.upcoming.iter().map(|tier| tier.pool.len()).sum::<usize>()
    }

    /// Every item of every tier in play order.
    pub fn item_ids(&self) -> Vec<u32> {
        self.rounds()
            .flat_map(|round| round.pool().iter())
            .chain(self.upcoming.iter().flat_map(|tier| tier.pool.iter()))
            .map(|item| item.id)
            .collect()
    }

    /// Summary across all tiers played so far.
    pub fn summarize(&self) -> RoundSummary {
        let results = self
            .rounds()
            .flat_map(|round| round.results().iter().cloned())
            .collect();
        RoundSummary::from_results(self.total(), results)
    }

    fn rounds(&self) -> impl Iterator<Item = &RoundState> {
        self.finished
            .iter()
            .map(|(_, round)| round)
            .chain(std::iter::once(&self.current))
    }

    fn skip_empty_tiers(&mut self) {
        while self.current.total() == 0 && self.advance() {}
    }
}
