// End-to-end tests: code space -> solver -> game loop -> record

use mastermind_minimax::core::{Code, ConfigError, Feedback, GameConfig};
use mastermind_minimax::game::{Game, GameState, play};
use mastermind_minimax::solver::{GuessPool, Solver};
use mastermind_minimax::space::CodeSpace;
use std::collections::HashMap;

fn symbols(codes: &[Code]) -> Vec<Vec<u8>> {
    codes.iter().map(|c| c.symbols().to_vec()).collect()
}

/// Smallest worst case over every possible guess, and the first guess reaching it
fn brute_force_best<'a>(space: &'a CodeSpace, bag: &[&Code]) -> (&'a Code, usize) {
    let mut best: Option<(&Code, usize)> = None;
    for guess in space.codes() {
        let mut counts: HashMap<Feedback, usize> = HashMap::new();
        for &candidate in bag {
            *counts.entry(Feedback::calculate(candidate, guess)).or_default() += 1;
        }
        let worst = counts.values().copied().max().unwrap_or(0);
        if best.is_none_or(|(_, score)| worst < score) {
            best = Some((guess, worst));
        }
    }
    best.unwrap()
}

#[test]
fn test_known_game_for_classic_board() {
    let config = GameConfig::default();
    let space = CodeSpace::new(config);
    let solver = Solver::new(&space, GuessPool::FullSpace);
    let answer = Code::parse("1,1,3,2", &config).unwrap();

    let record = play(&solver, &answer).unwrap();

    assert_eq!(
        symbols(record.played()),
        vec![vec![0, 0, 1, 1], vec![1, 2, 3, 3], vec![0, 0, 0, 3], vec![1, 1, 3, 2]]
    );

    let feedbacks: Vec<Feedback> = record.turns().iter().map(|t| t.feedback).collect();
    assert_eq!(
        feedbacks,
        vec![Feedback::new(0, 2), Feedback::new(2, 3), Feedback::new(0, 1)]
    );

    let remaining: Vec<usize> = record.turns().iter().map(|t| t.remaining).collect();
    assert_eq!(remaining, vec![96, 4, 1]);

    assert_eq!(record.turns()[0].worst_case, 256);
    assert_eq!(record.turns()[1].worst_case, 18);
    assert_eq!(record.turn_count(), 4);
}

#[test]
fn test_games_are_reproducible() {
    let config = GameConfig::default();
    let space = CodeSpace::new(config);
    let answer = Code::parse("5041", &config).unwrap();

    let first = play(&Solver::new(&space, GuessPool::FullSpace), &answer).unwrap();
    let second = play(&Solver::new(&space, GuessPool::FullSpace), &answer).unwrap();

    assert_eq!(first, second);
}

fn assert_minimax_optimal(colors: usize, pegs: usize) {
    let space = CodeSpace::new(GameConfig::new(colors, pegs).unwrap());
    let solver = Solver::new(&space, GuessPool::FullSpace);

    for answer in space.codes() {
        let mut game = Game::new(&solver, answer).unwrap();
        while game.state() == GameState::InProgress {
            let bag: Vec<&Code> = game.bag().to_vec();
            let (expected_guess, expected_worst) = brute_force_best(&space, &bag);

            game.step().unwrap();

            let turn = game.turns().last().unwrap();
            assert_eq!(turn.worst_case, expected_worst, "answer {answer}");
            assert_eq!(&turn.guess, expected_guess, "answer {answer}");
            assert!(game.bag().contains(&answer));
        }

        let record = game.finish().unwrap();
        assert_eq!(record.played().last(), Some(answer));
    }
}

#[test]
fn test_brute_force_optimality_two_by_two() {
    assert_minimax_optimal(2, 2);
}

#[test]
fn test_brute_force_optimality_three_by_two() {
    assert_minimax_optimal(3, 2);
}

#[test]
fn test_turns_stay_within_space_size() {
    let space = CodeSpace::new(GameConfig::new(3, 3).unwrap());
    let solver = Solver::new(&space, GuessPool::FullSpace);

    for answer in space.codes() {
        let record = play(&solver, answer).unwrap();
        assert!(record.turn_count() >= 1);
        assert!(record.turn_count() <= space.len());
        assert_eq!(record.turn_count(), record.turns().len() + 1);
    }
}

#[test]
fn test_bag_pool_still_finds_answer() {
    let space = CodeSpace::new(GameConfig::new(4, 3).unwrap());
    let solver = Solver::new(&space, GuessPool::Bag);

    for answer in space.codes() {
        let record = play(&solver, answer).unwrap();
        assert_eq!(record.played().last(), Some(answer));
        for turn in record.turns() {
            assert!(turn.remaining >= 1);
        }
    }
}

#[test]
fn test_degenerate_dimensions_are_rejected() {
    assert_eq!(GameConfig::new(0, 4), Err(ConfigError::NoColors));
    assert_eq!(GameConfig::new(6, 0), Err(ConfigError::NoPegs));
}

#[test]
fn test_answer_from_another_board_is_rejected() {
    let small = CodeSpace::new(GameConfig::new(2, 2).unwrap());
    let solver = Solver::new(&small, GuessPool::FullSpace);
    let foreign = Code::parse("0123", &GameConfig::default()).unwrap();

    assert!(play(&solver, &foreign).is_err());
}

#[test]
fn test_lucky_opening_lists_final_code_and_counts_it() {
    let config = GameConfig::default();
    let space = CodeSpace::new(config);
    let solver = Solver::new(&space, GuessPool::FullSpace);
    let answer = Code::parse("0011", &config).unwrap();

    let record = play(&solver, &answer).unwrap();

    assert_eq!(symbols(record.played()), vec![vec![0, 0, 1, 1], vec![0, 0, 1, 1]]);
    assert_eq!(record.turns().len(), 1);
    assert_eq!(record.turn_count(), 2);
}
