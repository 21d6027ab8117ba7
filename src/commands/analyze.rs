//! Guess analysis command
//!
//! Shows how a guess splits the full code space.

use crate::core::{Code, Feedback};
use crate::solver::Solver;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub total_candidates: usize,
    /// Cell size for every feedback the guess can produce
    pub cells: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    /// The minimax opening for comparison
    pub best_guess: String,
    pub best_worst_case: usize,
}

/// Analyze how a guess partitions the full code space
///
/// # Errors
///
/// Returns an error if the guess is not a valid code for the configuration.
pub fn analyze_guess(guess: &str, solver: &Solver) -> Result<AnalysisResult, String> {
    let space = solver.space();
    let code =
        Code::parse(guess, space.config()).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;

    let everything = space.all();
    let partition = solver.partition(&everything, &code);
    let cells: Vec<(Feedback, usize)> = partition
        .cells()
        .into_iter()
        .map(|(feedback, members)| (feedback, members.len()))
        .collect();
    let worst_case = cells.iter().map(|&(_, size)| size).max().unwrap_or(0);

    let (best, best_worst_case) = solver
        .best_guess(&everything)
        .ok_or_else(|| "No guess available".to_string())?;

    Ok(AnalysisResult {
        guess: code.to_string(),
        total_candidates: everything.len(),
        cells,
        worst_case,
        best_guess: best.to_string(),
        best_worst_case,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::solver::GuessPool;
    use crate::space::CodeSpace;

    #[test]
    fn analyze_knuth_opening() {
        let space = CodeSpace::new(GameConfig::default());
        let solver = Solver::new(&space, GuessPool::FullSpace);

        let result = analyze_guess("0011", &solver).unwrap();

        assert_eq!(result.guess, "[0, 0, 1, 1]");
        assert_eq!(result.total_candidates, 1296);
        assert_eq!(result.worst_case, 256);
        assert_eq!(result.best_worst_case, 256);
        assert_eq!(result.best_guess, "[0, 0, 1, 1]");
        assert_eq!(result.cells.iter().map(|&(_, n)| n).sum::<usize>(), 1296);
    }

    #[test]
    fn cells_sorted_by_feedback() {
        let space = CodeSpace::new(GameConfig::new(3, 3).unwrap());
        let solver = Solver::new(&space, GuessPool::FullSpace);

        let result = analyze_guess("012", &solver).unwrap();
        assert!(result.cells.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert!(result.worst_case >= result.best_worst_case);
    }

    #[test]
    fn monochrome_guess_is_worse() {
        let space = CodeSpace::new(GameConfig::default());
        let solver = Solver::new(&space, GuessPool::FullSpace);

        let result = analyze_guess("0000", &solver).unwrap();
        assert!(result.worst_case > result.best_worst_case);
        // Five cells: 0..=4 exact matches, never misplaced
        assert_eq!(result.cells.len(), 5);
        assert!(result.cells.iter().all(|(feedback, _)| feedback.misplaced() == 0));
    }

    #[test]
    fn invalid_guess_returns_error() {
        let space = CodeSpace::new(GameConfig::default());
        let solver = Solver::new(&space, GuessPool::FullSpace);
        assert!(analyze_guess("00", &solver).is_err());
    }
}
