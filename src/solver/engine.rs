//! Main Mastermind solver interface

use super::evaluator::Evaluator;
use super::minimax::{Partition, partition_bag, select_best_guess};
use super::strategy::GuessPool;
use crate::core::Code;
use crate::space::CodeSpace;
use std::sync::OnceLock;

/// Main Mastermind solver
///
/// Coordinates guess selection over a code space. The solver holds no
/// per-game state, so one solver can drive any number of games.
pub struct Solver<'a> {
    space: &'a CodeSpace,
    evaluator: Evaluator,
    pool: GuessPool,
    opening: OnceLock<Option<(usize, usize)>>,
}

impl<'a> Solver<'a> {
    /// Create a new solver with an automatically sized feedback cache
    #[must_use]
    pub fn new(space: &'a CodeSpace, pool: GuessPool) -> Self {
        Self::with_evaluator(space, pool, Evaluator::for_space(space))
    }

    /// Create a solver that uses the given evaluator
    #[must_use]
    pub const fn with_evaluator(space: &'a CodeSpace, pool: GuessPool, evaluator: Evaluator) -> Self {
        Self {
            space,
            evaluator,
            pool,
            opening: OnceLock::new(),
        }
    }

    #[must_use]
    pub const fn space(&self) -> &'a CodeSpace {
        self.space
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    #[must_use]
    pub const fn pool(&self) -> GuessPool {
        self.pool
    }

    /// Get the best guess for the given bag and its worst-case score
    ///
    /// Returns `None` only if there is nothing to guess from. The guess for
    /// the untouched full space is the same in every game, so it is
    /// computed once and reused.
    pub fn best_guess(&self, bag: &[&'a Code]) -> Option<(&'a Code, usize)> {
        if self.is_full_space(bag) {
            let (index, score) = (*self.opening.get_or_init(|| {
                let everything = self.space.all();
                let opening = self.select(&everything);
                if let Some((guess, score)) = opening {
                    log::debug!("opening guess {guess} (worst case {score})");
                }
                opening.map(|(guess, score)| (guess.index(), score))
            }))?;
            return self.space.get(index).map(|guess| (guess, score));
        }

        self.select(bag)
    }

    /// True only for the space's own codes, in canonical order
    fn is_full_space(&self, bag: &[&Code]) -> bool {
        bag.len() == self.space.len()
            && bag
                .iter()
                .zip(self.space.codes())
                .all(|(&member, code)| std::ptr::eq(member, code))
    }

    fn select(&self, bag: &[&'a Code]) -> Option<(&'a Code, usize)> {
        match self.pool {
            GuessPool::FullSpace => {
                let everything = self.space.all();
                select_best_guess(&self.evaluator, &everything, bag)
            }
            GuessPool::Bag => select_best_guess(&self.evaluator, bag, bag),
        }
    }

    /// Split a bag by the feedback each member gives against `guess`
    #[must_use]
    pub fn partition(&self, bag: &[&'a Code], guess: &Code) -> Partition<'a> {
        partition_bag(&self.evaluator, bag, guess)
    }
}
