//! Feedback evaluation with an owned memo table
//!
//! Selection evaluates the same (answer, guess) pairs over and over, within
//! a turn and across turns. The evaluator owns a dense table with one slot
//! per ordered code pair, filled lazily. Slots are atomics so rayon workers
//! can share one evaluator: a slot only ever holds the empty marker or the
//! single correct value, so racing writers store the same thing.

use crate::core::{Code, Feedback, GameConfig};
use crate::space::CodeSpace;
use std::sync::atomic::{AtomicU16, Ordering};

/// Largest table `CachePolicy::Auto` will allocate (2 bytes per slot)
///
/// 2^24 slots covers spaces of up to 4,096 codes in 32 MiB.
pub const DENSE_CACHE_LIMIT: usize = 1 << 24;

/// How the evaluator memoises feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Dense table when it fits under `DENSE_CACHE_LIMIT`, otherwise none
    #[default]
    Auto,
    /// Always allocate the `|space|²` table
    Dense,
    /// Compute every evaluation from scratch
    Disabled,
}

/// Feedback evaluator for one code space
pub struct Evaluator {
    config: GameConfig,
    size: usize,
    table: Option<Box<[AtomicU16]>>,
}

impl Evaluator {
    /// Create an evaluator for the codes of `config`
    #[must_use]
    pub fn new(config: GameConfig, policy: CachePolicy) -> Self {
        let size = config.code_space_size();
        let slots = size.saturating_mul(size);
        let dense = match policy {
            CachePolicy::Auto => slots <= DENSE_CACHE_LIMIT,
            CachePolicy::Dense => true,
            CachePolicy::Disabled => false,
        };

        let table = dense.then(|| (0..slots).map(|_| AtomicU16::new(0)).collect());

        log::debug!(
            "feedback evaluator for {config} ({size} codes): {}",
            if dense { "dense cache" } else { "uncached" }
        );

        Self {
            config,
            size,
            table,
        }
    }

    /// Evaluator sized for `space` with the automatic policy
    #[must_use]
    pub fn for_space(space: &CodeSpace) -> Self {
        Self::new(*space.config(), CachePolicy::Auto)
    }

    /// Feedback for `guess` against `answer`
    ///
    /// Always equal to `Feedback::calculate(answer, guess)`. Codes built
    /// for a different configuration bypass the table.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Feedback, GameConfig};
    /// use mastermind_minimax::solver::{CachePolicy, Evaluator};
    ///
    /// let config = GameConfig::default();
    /// let evaluator = Evaluator::new(config, CachePolicy::Dense);
    /// let answer = Code::new([1, 1, 3, 2], &config).unwrap();
    /// let guess = Code::new([1, 0, 2, 2], &config).unwrap();
    ///
    /// assert_eq!(evaluator.evaluate(&answer, &guess), Feedback::new(2, 2));
    /// assert_eq!(evaluator.cached_entries(), 1);
    /// ```
    #[inline]
    pub fn evaluate(&self, answer: &Code, guess: &Code) -> Feedback {
        let Some(table) = &self.table else {
            return Feedback::calculate(answer, guess);
        };

        if !answer.fits(&self.config) || !guess.fits(&self.config) {
            return Feedback::calculate(answer, guess);
        }

        let slot = &table[answer.index() * self.size + guess.index()];
        if let Some(feedback) = Feedback::decode(slot.load(Ordering::Relaxed)) {
            return feedback;
        }

        let feedback = Feedback::calculate(answer, guess);
        slot.store(feedback.encode(), Ordering::Relaxed);
        feedback
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether results are memoised
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        self.table.is_some()
    }

    /// Number of populated cache slots
    #[must_use]
    pub fn cached_entries(&self) -> usize {
        self.table.as_ref().map_or(0, |table| {
            table
                .iter()
                .filter(|slot| slot.load(Ordering::Relaxed) != 0)
                .count()
        })
    }
}
