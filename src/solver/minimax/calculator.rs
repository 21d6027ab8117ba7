//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and a bag of candidate answers, groups the bag by the
//! feedback each answer would produce and measures the largest group.

use crate::core::{Code, Feedback};
use crate::solver::Evaluator;
use rustc_hash::FxHashMap;

/// A bag split by the feedback each member produces against one guess
#[derive(Debug, Clone, Default)]
pub struct Partition<'a> {
    cells: FxHashMap<Feedback, Vec<&'a Code>>,
}

impl<'a> Partition<'a> {
    /// Codes that would produce `feedback`, in bag order
    #[must_use]
    pub fn cell(&self, feedback: Feedback) -> Option<&[&'a Code]> {
        self.cells.get(&feedback).map(Vec::as_slice)
    }

    /// Take ownership of one cell, dropping the rest
    #[must_use]
    pub fn into_cell(mut self, feedback: Feedback) -> Option<Vec<&'a Code>> {
        self.cells.remove(&feedback)
    }

    /// All non-empty cells, ordered by feedback
    #[must_use]
    pub fn cells(&self) -> Vec<(Feedback, &[&'a Code])> {
        let mut cells: Vec<_> = self
            .cells
            .iter()
            .map(|(&feedback, codes)| (feedback, codes.as_slice()))
            .collect();
        cells.sort_by_key(|&(feedback, _)| feedback);
        cells
    }

    /// Number of distinct feedback signals
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total number of codes across all cells
    #[must_use]
    pub fn total(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }
}

/// Group every code in `bag` by the feedback it gives against `guess`
///
/// Each code lands in exactly one cell and cells keep bag order.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::GameConfig;
/// use mastermind_minimax::space::CodeSpace;
/// use mastermind_minimax::solver::Evaluator;
/// use mastermind_minimax::solver::minimax::{partition_bag, partition_score};
///
/// let space = CodeSpace::new(GameConfig::default());
/// let evaluator = Evaluator::for_space(&space);
/// let bag = space.all();
///
/// let partition = partition_bag(&evaluator, &bag, &space.codes()[7]);
/// assert_eq!(partition.total(), 1296);
/// assert!(partition_score(&partition) < 1296);
/// ```
#[must_use]
pub fn partition_bag<'a>(evaluator: &Evaluator, bag: &[&'a Code], guess: &Code) -> Partition<'a> {
    let mut cells: FxHashMap<Feedback, Vec<&'a Code>> = FxHashMap::default();

    for &answer in bag {
        cells
            .entry(evaluator.evaluate(answer, guess))
            .or_default()
            .push(answer);
    }

    Partition { cells }
}

/// Worst case of a partition: the size of its largest cell
///
/// An empty partition scores 0.
#[must_use]
pub fn partition_score(partition: &Partition) -> usize {
    partition.cells.values().map(Vec::len).max().unwrap_or(0)
}

/// Calculate the maximum remaining candidates for a guess
///
/// Same value as `partition_score(&partition_bag(..))`, but only counts
/// cell sizes instead of collecting them. This is the selector's hot loop.
#[must_use]
pub fn calculate_max_remaining(evaluator: &Evaluator, guess: &Code, bag: &[&Code]) -> usize {
    let pegs = guess.pegs();
    let mut counts = vec![0usize; Feedback::slots(pegs)];

    for &answer in bag {
        counts[evaluator.evaluate(answer, guess).slot(pegs)] += 1;
    }

    counts.into_iter().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::space::CodeSpace;

    fn classic() -> (CodeSpace, Evaluator) {
        let space = CodeSpace::new(GameConfig::default());
        let evaluator = Evaluator::for_space(&space);
        (space, evaluator)
    }

    fn code(space: &CodeSpace, symbols: &[u8]) -> Code {
        Code::new(symbols, space.config()).unwrap()
    }

    #[test]
    fn partition_covers_bag_exactly() {
        let (space, evaluator) = classic();
        let bag = space.all();
        let guess = code(&space, &[0, 0, 1, 1]);

        let partition = partition_bag(&evaluator, &bag, &guess);
        assert_eq!(partition.total(), bag.len());

        // Pairwise disjoint: every code appears in exactly one cell
        let mut seen = vec![0usize; space.len()];
        for (feedback, cell) in partition.cells() {
            for &member in cell {
                seen[member.index()] += 1;
                assert_eq!(Feedback::calculate(member, &guess), feedback);
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn cells_preserve_bag_order() {
        let (space, evaluator) = classic();
        let bag = space.all();
        let partition = partition_bag(&evaluator, &bag, &code(&space, &[1, 2, 3, 4]));

        for (_, cell) in partition.cells() {
            assert!(cell.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn classic_opening_worst_case() {
        // Knuth's 1122-style opening leaves at most 256 codes
        let (space, evaluator) = classic();
        let bag = space.all();
        let partition = partition_bag(&evaluator, &bag, &code(&space, &[0, 0, 1, 1]));

        assert_eq!(partition_score(&partition), 256);
    }

    #[test]
    fn uninformative_partition_scores_bag_size() {
        // In a one-colour game every code gives the same feedback
        let space = CodeSpace::new(GameConfig::new(1, 3).unwrap());
        let evaluator = Evaluator::for_space(&space);
        let bag = space.all();

        let partition = partition_bag(&evaluator, &bag, &space.codes()[0]);
        assert_eq!(partition.len(), 1);
        assert_eq!(partition_score(&partition), bag.len());
    }

    #[test]
    fn empty_bag() {
        let (space, evaluator) = classic();
        let partition = partition_bag(&evaluator, &[], &space.codes()[0]);

        assert!(partition.is_empty());
        assert_eq!(partition_score(&partition), 0);
        assert_eq!(calculate_max_remaining(&evaluator, &space.codes()[0], &[]), 0);
    }

    #[test]
    fn counting_matches_partition_score() {
        let space = CodeSpace::new(GameConfig::new(4, 3).unwrap());
        let evaluator = Evaluator::for_space(&space);
        let bag: Vec<&Code> = space.codes().iter().step_by(3).collect();

        for guess in space.codes() {
            let partition = partition_bag(&evaluator, &bag, guess);
            assert_eq!(
                calculate_max_remaining(&evaluator, guess, &bag),
                partition_score(&partition)
            );
        }
    }

    #[test]
    fn into_cell_takes_matching_codes() {
        let (space, evaluator) = classic();
        let bag = space.all();
        let answer = code(&space, &[1, 1, 3, 2]);
        let guess = code(&space, &[0, 0, 1, 1]);
        let feedback = Feedback::calculate(&answer, &guess);

        let partition = partition_bag(&evaluator, &bag, &guess);
        let expected = partition.cell(feedback).map(<[_]>::len);
        let cell = partition.into_cell(feedback).unwrap();

        assert_eq!(Some(cell.len()), expected);
        assert_eq!(cell.len(), 96);
        assert!(cell.contains(&&answer));
    }

    #[test]
    fn missing_cell_is_none() {
        let (space, evaluator) = classic();
        let guess = code(&space, &[0, 0, 0, 0]);
        let bag = vec![&space.codes()[0]];

        let partition = partition_bag(&evaluator, &bag, &guess);
        assert!(partition.cell(Feedback::new(0, 0)).is_none());
        assert!(partition.into_cell(Feedback::new(1, 1)).is_none());
    }
}
