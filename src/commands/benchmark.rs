//! Benchmark command
//!
//! Plays many games and reports turn-count statistics.

use super::play::seeded_rng;
use crate::core::Code;
use crate::game::{SolveError, play};
use crate::solver::Solver;
use crate::space::CodeSpace;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: BTreeMap<usize, usize>,
    /// First answer that needed `max_turns`
    pub worst_answer: Option<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` answers uniformly at random, with replacement
#[must_use]
pub fn sample_answers(space: &CodeSpace, count: usize, seed: Option<u64>) -> Vec<&Code> {
    let mut rng = seeded_rng(seed);
    (0..count).map(|_| space.choose_random(&mut rng)).collect()
}

/// Play one game per answer and collect statistics
///
/// # Errors
///
/// Returns the first game's error if the solver breaks an invariant.
pub fn run_benchmark(
    solver: &Solver,
    answers: &[&Code],
    show_progress: bool,
) -> Result<BenchmarkResult, SolveError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut worst_answer = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for (idx, &answer) in answers.iter().enumerate() {
        let record = play(solver, answer)?;
        let turns = record.turn_count();

        total_turns += turns;
        min_turns = min_turns.min(turns);
        if turns > max_turns {
            max_turns = turns;
            worst_answer = Some((answer.to_string(), turns));
        }
        *distribution.entry(turns).or_insert(0) += 1;

        if idx % 10 == 0 {
            pb.set_message(format!("Avg: {:.3}", total_turns as f64 / (idx + 1) as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_games = answers.len();
    let (average_turns, min_turns) = if total_games == 0 {
        (0.0, 0)
    } else {
        (total_turns as f64 / total_games as f64, min_turns)
    };

    log::info!("benchmark: {total_games} games, mean {average_turns:.3} turns");

    Ok(BenchmarkResult {
        total_games,
        total_turns,
        average_turns,
        min_turns,
        max_turns,
        distribution,
        worst_answer,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
