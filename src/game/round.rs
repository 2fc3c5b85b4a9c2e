use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Difficulty, QuizItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("the round is already complete")]
    AlreadyComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResult {
    pub item: QuizItem,
    #[serde(rename = "guessIsAI")]
    pub guess_is_ai: bool,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub round_complete: bool,
}

/// One play-through over a fixed pool.
#[derive(Clone, Debug)]
pub struct RoundState {
    pool: Vec<QuizItem>,
    position: usize,
    score: u32,
    results: Vec<GuessResult>,
}

impl RoundState {
    pub fn start(pool: Vec<QuizItem>) -> Self {
        Self {
            pool,
            position: 0,
            score: 0,
            results: Vec::new(),
        }
    }

    pub fn pool(&self) -> &[QuizItem] {
        &self.pool
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.pool.len()
    }

    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    pub fn current(&self) -> Option<&QuizItem> {
        self.pool.get(self.position)
    }

    pub fn is_complete(&self) -> bool {
        self.position == self.pool.len()
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else {
            Phase::InProgress
        }
    }

    /// Answers the current item. Answers are final.
    pub fn submit_guess(&mut self, guess_is_ai: bool) -> Result<AnswerOutcome, RoundError> {
        let item = self.current().ok_or(RoundError::AlreadyComplete)?.clone();
        let correct = item.is_ai == guess_is_ai;

        if correct {
            self.score += 1;
        }
        self.results.push(GuessResult {
            item,
            guess_is_ai,
            correct,
        });
        self.position += 1;

        Ok(AnswerOutcome {
            correct,
            round_complete: self.is_complete(),
        })
    }

    pub fn summarize(&self) -> RoundSummary {
        RoundSummary::from_results(self.total(), self.results.clone())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Accuracy {
    pub correct: u32,
    pub attempted: u32,
}

impl Accuracy {
    pub fn percent(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            f64::from(self.correct) * 100.0 / f64::from(self.attempted)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub score: u32,
    pub total: usize,
    pub per_difficulty: BTreeMap<Difficulty, Accuracy>,
    pub results: Vec<GuessResult>,
}

impl RoundSummary {
    pub fn from_results(total: usize, results: Vec<GuessResult>) -> Self {
        let mut per_difficulty: BTreeMap<Difficulty, Accuracy> = BTreeMap::new();
        let mut score = 0;

        for result in &results {
            if result.correct {
                score += 1;
            }
            if let Some(difficulty) = result.item.difficulty {
                let bucket = per_difficulty.entry(difficulty).or_default();
                bucket.attempted += 1;
                if result.correct {
                    bucket.correct += 1;
                }
            }
        }

        Self {
            score,
            total,
            per_difficulty,
            results,
        }
    }

    pub fn accuracy(&self) -> Accuracy {
        Accuracy {
            correct: self.score,
            attempted: self.total as u32,
        }
    }

    pub fn difficulty_accuracy(&self, difficulty: Difficulty) -> Accuracy {
        self.per_difficulty
            .get(&difficulty)
            .copied()
            .unwrap_or_default()
    }
}
