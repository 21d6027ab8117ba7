//! Minimax-based Mastermind solver
//!
//! Implements worst-case minimization: partition the bag by feedback, score
//! a partition by its largest cell, pick the guess with the smallest score.

mod calculator;
mod selector;

pub use calculator::{Partition, calculate_max_remaining, partition_bag, partition_score};
pub use selector::select_best_guess;
