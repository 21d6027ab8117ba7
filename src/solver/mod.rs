//! Mastermind solving algorithms
//!
//! Feedback evaluation, bag partitioning and minimax guess selection.

mod engine;
mod evaluator;
pub mod minimax;
pub mod strategy;

pub use engine::Solver;
pub use evaluator::{CachePolicy, DENSE_CACHE_LIMIT, Evaluator};
pub use strategy::GuessPool;
