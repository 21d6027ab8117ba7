//! Mastermind Minimax
//!
//! An exhaustive minimax Mastermind solver: every turn it plays the guess
//! whose worst feedback leaves the fewest candidate answers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_minimax::core::{Code, GameConfig};
//! use mastermind_minimax::game::play;
//! use mastermind_minimax::solver::{GuessPool, Solver};
//! use mastermind_minimax::space::CodeSpace;
//!
//! let config = GameConfig::default();
//! let space = CodeSpace::new(config);
//! let solver = Solver::new(&space, GuessPool::FullSpace);
//!
//! let answer = Code::parse("1132", &config).unwrap();
//! let record = play(&solver, &answer).unwrap();
//! println!("Solved in {} moves", record.turn_count());
//! ```

// Core domain types
pub mod core;

// Enumerated code space
pub mod space;

// Solving algorithms
pub mod solver;

// Game loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
