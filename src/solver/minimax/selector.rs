//! Minimax-based guess selection
//!
//! Always selects the guess that minimizes the worst-case remaining bag.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use crate::solver::Evaluator;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the guess with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties go to the guess that
/// sorts first in the canonical code order; candidates are scored in
/// parallel but the reduction is a total order on `(score, code)`, so the
/// result never depends on scheduling.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::GameConfig;
/// use mastermind_minimax::space::CodeSpace;
/// use mastermind_minimax::solver::Evaluator;
/// use mastermind_minimax::solver::minimax::select_best_guess;
///
/// let space = CodeSpace::new(GameConfig::default());
/// let evaluator = Evaluator::for_space(&space);
/// let everything = space.all();
///
/// let (best, worst_case) = select_best_guess(&evaluator, &everything, &everything).unwrap();
/// assert_eq!(best.symbols(), &[0, 0, 1, 1]);
/// assert_eq!(worst_case, 256);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    evaluator: &Evaluator,
    guess_pool: &[&'a Code],
    bag: &[&Code],
) -> Option<(&'a Code, usize)> {
    guess_pool
        .par_iter()
        .map(|&guess| (calculate_max_remaining(evaluator, guess, bag), guess))
        .min()
        .map(|(max_remaining, guess)| (guess, max_remaining))
}
