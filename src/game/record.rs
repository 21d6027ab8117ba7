//! Per-turn narration data and the finished game record

use crate::core::{Code, Feedback};

/// One guess and what it revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    /// Largest bag this guess could have left
    pub worst_case: usize,
    /// Candidates left after applying the real feedback
    pub remaining: usize,
}

/// Immutable record of a completed game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    played: Vec<Code>,
    turns: Vec<Turn>,
    turn_count: usize,
    answer: Code,
}

impl GameRecord {
    pub(crate) const fn new(
        played: Vec<Code>,
        turns: Vec<Turn>,
        turn_count: usize,
        answer: Code,
    ) -> Self {
        Self {
            played,
            turns,
            turn_count,
            answer,
        }
    }

    /// Every selected guess followed by the final code
    ///
    /// The final code is listed even when the last guess already was the
    /// answer.
    #[must_use]
    pub fn played(&self) -> &[Code] {
        &self.played
    }

    /// Selector-chosen guesses with their feedback
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn answer(&self) -> &Code {
        &self.answer
    }

    /// One plus the number of selected guesses
    #[must_use]
    pub const fn turn_count(&self) -> usize {
        self.turn_count
    }
}
