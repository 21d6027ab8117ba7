//! Game loop: narrow the bag one minimax guess at a time

use super::SolveError;
use super::record::{GameRecord, Turn};
use crate::core::Code;
use crate::solver::Solver;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// More than one candidate remains
    InProgress,
    /// The bag holds exactly the answer
    Solved,
}

/// A game against a fixed hidden answer
pub struct Game<'s, 'a> {
    solver: &'s Solver<'a>,
    answer: &'a Code,
    bag: Vec<&'a Code>,
    played: Vec<Code>,
    turns: Vec<Turn>,
    turn_count: usize,
    max_turns: usize,
    state: GameState,
}

impl<'s, 'a> Game<'s, 'a> {
    /// Start a game against `answer`
    ///
    /// The bag starts as the full code space. The turn budget is the size
    /// of the space, which no correct game can exhaust.
    ///
    /// # Errors
    /// Returns `SolveError::AnswerNotInSpace` if `answer` doesn't belong to
    /// the solver's code space.
    pub fn new(solver: &'s Solver<'a>, answer: &Code) -> Result<Self, SolveError> {
        let space = solver.space();
        let answer = space
            .lookup(answer)
            .ok_or_else(|| SolveError::AnswerNotInSpace(answer.clone()))?;

        let mut game = Self {
            solver,
            answer,
            bag: space.all(),
            played: Vec::new(),
            turns: Vec::new(),
            turn_count: 1,
            max_turns: space.len(),
            state: GameState::InProgress,
        };
        game.settle();
        Ok(game)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Codes still consistent with every feedback so far
    #[must_use]
    pub fn bag(&self) -> &[&'a Code] {
        &self.bag
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Starts at 1 and goes up by one per guess
    #[must_use]
    pub const fn turn_count(&self) -> usize {
        self.turn_count
    }

    #[must_use]
    pub const fn answer(&self) -> &'a Code {
        self.answer
    }

    #[must_use]
    pub const fn solver(&self) -> &'s Solver<'a> {
        self.solver
    }

    /// Play one turn
    ///
    /// Does nothing once the game is solved.
    ///
    /// # Errors
    /// Any error here means the evaluator or partitioner broke an
    /// invariant; the game must not continue.
    pub fn step(&mut self) -> Result<GameState, SolveError> {
        if self.state == GameState::Solved {
            return Ok(GameState::Solved);
        }
        if self.bag.is_empty() {
            return Err(SolveError::EmptyBag);
        }
        if self.turns.len() >= self.max_turns {
            return Err(SolveError::TurnBudgetExceeded(self.max_turns));
        }

        let (guess, worst_case) = self.solver.best_guess(&self.bag).ok_or(SolveError::NoGuess)?;
        let feedback = self.solver.evaluator().evaluate(self.answer, guess);

        let bag = self
            .solver
            .partition(&self.bag, guess)
            .into_cell(feedback)
            .ok_or_else(|| SolveError::FeedbackMissing {
                guess: guess.clone(),
                feedback,
            })?;

        log::debug!(
            "turn {}: {guess} -> {feedback}, {} of {} candidates left (worst case {worst_case})",
            self.turns.len() + 1,
            bag.len(),
            self.bag.len(),
        );

        self.bag = bag;
        self.turn_count += 1;
        self.played.push(guess.clone());
        self.turns.push(Turn {
            guess: guess.clone(),
            feedback,
            worst_case,
            remaining: self.bag.len(),
        });
        self.settle();

        Ok(self.state)
    }

    /// Mark the game solved once one candidate remains
    ///
    /// The last candidate is always appended to `played`, even when the
    /// previous guess already was that code.
    fn settle(&mut self) {
        if self.state == GameState::Solved || self.bag.len() != 1 {
            return;
        }

        self.played.push(self.bag[0].clone());
        self.state = GameState::Solved;
    }

    /// Play until solved and return the record
    ///
    /// # Errors
    /// Propagates the first invariant violation, and reports
    /// `SolveError::WrongSolution` if the game settles on a code other than
    /// the answer.
    pub fn finish(mut self) -> Result<GameRecord, SolveError> {
        while self.step()? == GameState::InProgress {}

        let last = self.bag[0];
        if last != self.answer {
            return Err(SolveError::WrongSolution {
                expected: self.answer.clone(),
                found: last.clone(),
            });
        }

        log::info!(
            "solved {} in {} moves",
            self.answer,
            self.turn_count
        );

        Ok(GameRecord::new(
            self.played,
            self.turns,
            self.turn_count,
            self.answer.clone(),
        ))
    }
}

/// Play a full game against `answer`
///
/// # Errors
/// See `Game::new` and `Game::finish`.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Code, GameConfig};
/// use mastermind_minimax::game::play;
/// use mastermind_minimax::solver::{GuessPool, Solver};
/// use mastermind_minimax::space::CodeSpace;
///
/// let space = CodeSpace::new(GameConfig::new(3, 3).unwrap());
/// let solver = Solver::new(&space, GuessPool::FullSpace);
/// let answer = Code::new([2, 0, 1], space.config()).unwrap();
///
/// let record = play(&solver, &answer).unwrap();
/// assert_eq!(record.played().last(), Some(&answer));
/// ```
pub fn play(solver: &Solver, answer: &Code) -> Result<GameRecord, SolveError> {
    Game::new(solver, answer)?.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, GameConfig};
    use crate::solver::GuessPool;
    use crate::space::CodeSpace;

    fn code(space: &CodeSpace, symbols: &[u8]) -> Code {
        Code::new(symbols, space.config()).unwrap()
    }

    #[test]
    fn new_game_starts_in_progress() {
        let space = CodeSpace::new(GameConfig::new(3, 2).unwrap());
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let game = Game::new(&solver, &code(&space, &[1, 2])).unwrap();

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.bag().len(), 9);
        assert!(game.turns().is_empty());
    }

    #[test]
    fn single_code_space_is_solved_immediately() {
        let space = CodeSpace::new(GameConfig::new(1, 4).unwrap());
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let answer = code(&space, &[0, 0, 0, 0]);

        let game = Game::new(&solver, &answer).unwrap();
        assert_eq!(game.state(), GameState::Solved);

        let record = game.finish().unwrap();
        assert_eq!(record.played(), &[answer]);
        assert_eq!(record.turn_count(), 1);
        assert!(record.turns().is_empty());
    }

    #[test]
    fn bag_shrinks_every_turn() {
        let space = CodeSpace::new(GameConfig::default());
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let mut game = Game::new(&solver, &code(&space, &[5, 5, 5, 5])).unwrap();

        let mut previous = game.bag().len();
        while game.step().unwrap() == GameState::InProgress {
            assert!(game.bag().len() < previous);
            assert!(game.bag().contains(&game.answer()));
            previous = game.bag().len();
        }
        assert_eq!(game.bag().len(), 1);
    }

    #[test]
    fn step_after_solved_is_a_no_op() {
        let space = CodeSpace::new(GameConfig::new(2, 2).unwrap());
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let mut game = Game::new(&solver, &code(&space, &[1, 0])).unwrap();

        while game.step().unwrap() == GameState::InProgress {}
        let turns = game.turns().len();

        assert_eq!(game.step().unwrap(), GameState::Solved);
        assert_eq!(game.turns().len(), turns);
    }

    #[test]
    fn two_by_two_known_game() {
        let space = CodeSpace::new(GameConfig::new(2, 2).unwrap());
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let answer = code(&space, &[1, 0]);

        let record = play(&solver, &answer).unwrap();
        let played: Vec<&[u8]> = record.played().iter().map(Code::symbols).collect();
        assert_eq!(played, vec![&[0u8, 0][..], &[0, 1][..], &[1, 0][..]]);
        assert_eq!(record.turns()[0].feedback, Feedback::new(1, 1));
        assert_eq!(record.turns()[1].feedback, Feedback::new(0, 2));
    }

    #[test]
    fn lucky_opening_is_played_again_as_final_code() {
        let space = CodeSpace::new(GameConfig::default());
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let answer = code(&space, &[0, 0, 1, 1]);

        let record = play(&solver, &answer).unwrap();
        assert_eq!(record.played(), &[answer.clone(), answer.clone()]);
        assert_eq!(record.turn_count(), 2);
        assert_eq!(record.turns().len(), 1);
        assert!(record.turns()[0].feedback.is_perfect(4));
    }

    #[test]
    fn turn_count_is_one_more_than_guesses() {
        let space = CodeSpace::new(GameConfig::new(3, 3).unwrap());
        let solver = Solver::new(&space, GuessPool::FullSpace);

        for answer in space.codes() {
            let record = play(&solver, answer).unwrap();
            assert_eq!(record.turn_count(), record.turns().len() + 1);
            assert_eq!(record.played().len(), record.turns().len() + 1);
        }
    }

    #[test]
    fn foreign_answer_is_rejected() {
        let space = CodeSpace::new(GameConfig::new(2, 2).unwrap());
        let solver = Solver::new(&space, GuessPool::FullSpace);
        let foreign = Code::new([0, 0, 0], &GameConfig::new(2, 3).unwrap()).unwrap();

        assert!(matches!(
            Game::new(&solver, &foreign),
            Err(SolveError::AnswerNotInSpace(_))
        ));
    }

    #[test]
    fn every_answer_in_small_space_is_solved() {
        let space = CodeSpace::new(GameConfig::new(3, 3).unwrap());
        let solver = Solver::new(&space, GuessPool::FullSpace);

        for answer in space.codes() {
            let record = play(&solver, answer).unwrap();
            assert_eq!(record.played().last(), Some(answer));
            assert!(record.turn_count() <= space.len());
        }
    }
}
