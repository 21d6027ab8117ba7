//! The code space: every possible code for a configuration
//!
//! Materialised once and enumerated in canonical (lexicographic) order so
//! that tie-breaking between equally good guesses is reproducible.

use crate::core::{Code, GameConfig};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// All `colors^pegs` codes in canonical order
#[derive(Debug, Clone)]
pub struct CodeSpace {
    config: GameConfig,
    codes: Vec<Code>,
}

impl CodeSpace {
    /// Enumerate every code for `config`
    ///
    /// Codes come out in the same order as a cartesian product of
    /// `0..colors` repeated `pegs` times.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::GameConfig;
    /// use mastermind_minimax::space::CodeSpace;
    ///
    /// let space = CodeSpace::new(GameConfig::new(2, 2).unwrap());
    /// let codes: Vec<_> = space.codes().iter().map(|c| c.symbols().to_vec()).collect();
    /// assert_eq!(codes, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    /// ```
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let codes = (0..config.code_space_size())
            .map(|index| Code::from_index(index, &config))
            .collect();

        Self { config, codes }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All codes, in canonical order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Get the code with the given canonical rank
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Code> {
        self.codes.get(index)
    }

    /// Find this space's instance of a code
    ///
    /// Returns `None` if the code doesn't belong to this configuration.
    #[must_use]
    pub fn lookup(&self, code: &Code) -> Option<&Code> {
        self.codes.get(code.index()).filter(|&found| found == code)
    }

    /// A bag holding every code, in canonical order
    #[must_use]
    pub fn all(&self) -> Vec<&Code> {
        self.codes.iter().collect()
    }

    /// Pick a code uniformly at random
    ///
    /// # Panics
    /// Never panics: a validated configuration has at least one code.
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Code {
        self.codes
            .choose(rng)
            .expect("a validated configuration has at least one code")
    }
}
