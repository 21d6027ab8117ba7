//! Single game command
//!
//! Plays one game against a chosen or random answer.

use crate::core::Code;
use crate::game::{GameRecord, play};
use crate::solver::Solver;
use crate::space::CodeSpace;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for playing a game
pub struct PlayConfig {
    /// Answer to play against; random when `None`
    pub answer: Option<String>,
    /// Seed for random answer selection
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn random(seed: Option<u64>) -> Self {
        Self { answer: None, seed }
    }

    #[must_use]
    pub const fn fixed(answer: String) -> Self {
        Self {
            answer: Some(answer),
            seed: None,
        }
    }
}

/// Random generator, reproducible when a seed is given
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

/// Pick the answer for a game
///
/// # Errors
///
/// Returns an error if the given answer cannot be parsed for this space.
pub fn choose_answer<'a>(space: &'a CodeSpace, config: &PlayConfig) -> Result<&'a Code, String> {
    match &config.answer {
        Some(text) => {
            let code = Code::parse(text, space.config())
                .map_err(|e| format!("Invalid answer '{text}': {e}"))?;
            space
                .lookup(&code)
                .ok_or_else(|| format!("Answer {code} is not in the code space"))
        }
        None => Ok(space.choose_random(&mut seeded_rng(config.seed))),
    }
}

/// Play one game
///
/// # Errors
///
/// Returns an error if:
/// - The answer is invalid for the configured colours and pegs
/// - The solver breaks an internal invariant
pub fn run_play(config: &PlayConfig, solver: &Solver) -> Result<GameRecord, String> {
    let answer = choose_answer(solver.space(), config)?;
    log::info!("playing against {answer}");

    play(solver, answer).map_err(|e| e.to_string())
}
