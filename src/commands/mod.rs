//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use play::{PlayConfig, choose_answer, run_play, seeded_rng};
