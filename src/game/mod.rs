//! Playing games against a hidden answer
//!
//! A game starts with every code as a candidate, asks the solver for the
//! minimax guess, applies the true feedback and repeats until one code is
//! left.

mod record;
mod session;

pub use record::{GameRecord, Turn};
pub use session::{Game, GameState, play};

use crate::core::{Code, Feedback};
use std::fmt;

/// Error type for games that cannot be completed
///
/// Apart from `AnswerNotInSpace`, every variant is an internal invariant
/// violation: a bug in feedback evaluation or partitioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    AnswerNotInSpace(Code),
    EmptyBag,
    NoGuess,
    FeedbackMissing { guess: Code, feedback: Feedback },
    TurnBudgetExceeded(usize),
    WrongSolution { expected: Code, found: Code },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnswerNotInSpace(code) => {
                write!(f, "Answer {code} does not belong to this code space")
            }
            Self::EmptyBag => write!(f, "Internal error: candidate bag became empty"),
            Self::NoGuess => write!(f, "Internal error: no guess available"),
            Self::FeedbackMissing { guess, feedback } => write!(
                f,
                "Internal error: feedback ({feedback}) for guess {guess} missing from partition"
            ),
            Self::TurnBudgetExceeded(turns) => {
                write!(f, "Internal error: game not solved within {turns} turns")
            }
            Self::WrongSolution { expected, found } => {
                write!(f, "Internal error: settled on {found} but the answer is {expected}")
            }
        }
    }
}

impl std::error::Error for SolveError {}
