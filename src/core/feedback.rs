//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair (exact matches, colour matches):
//! - exact matches count positions where guess and answer agree
//! - colour matches count, per colour, `min(count in answer, count in guess)`
//!   summed over all colours, so they include the exact matches
//!
//! `0 <= exact <= colors <= pegs` always holds.

use super::Code;
use std::fmt;

/// Feedback signal for a guess against an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    colors: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `exact > colors`
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, colors: u8) -> Self {
        debug_assert!(exact <= colors, "exact matches cannot exceed colour matches");
        Self { exact, colors }
    }

    /// The all-correct feedback for a game with `pegs` positions
    #[inline]
    #[must_use]
    pub const fn perfect(pegs: usize) -> Self {
        Self::new(pegs as u8, pegs as u8)
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Feedback, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let answer = Code::new([1, 1, 3, 2], &config).unwrap();
    /// let guess = Code::new([1, 0, 2, 2], &config).unwrap();
    ///
    /// // 2 exact and 0 additional colour matches
    /// let feedback = Feedback::calculate(&answer, &guess);
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.misplaced(), 0);
    /// ```
    #[must_use]
    pub fn calculate(answer: &Code, guess: &Code) -> Self {
        debug_assert_eq!(answer.pegs(), guess.pegs(), "codes must have equal length");

        let exact = answer
            .symbols()
            .iter()
            .zip(guess.symbols())
            .filter(|(a, g)| a == g)
            .count();

        let colors: usize = answer
            .histogram()
            .iter()
            .zip(guess.histogram())
            .map(|(&a, &g)| usize::from(a.min(g)))
            .sum();

        Self::new(exact as u8, colors as u8)
    }

    /// Number of pegs with the right colour in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of colour matches, including exact matches
    #[inline]
    #[must_use]
    pub const fn color_matches(self) -> u8 {
        self.colors
    }

    /// Number of pegs with the right colour in the wrong position
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.colors - self.exact
    }

    /// Check if this is a fully correct guess
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, pegs: usize) -> bool {
        self.exact as usize == pegs
    }

    /// Dense index of this feedback in a table of `slots(pegs)` entries
    #[inline]
    #[must_use]
    pub const fn slot(self, pegs: usize) -> usize {
        self.exact as usize * (pegs + 1) + self.colors as usize
    }

    /// Size of a table indexed by `slot`
    #[inline]
    #[must_use]
    pub const fn slots(pegs: usize) -> usize {
        (pegs + 1) * (pegs + 1)
    }

    /// Pack into a non-zero `u16` (zero marks an empty cache slot)
    #[inline]
    pub(crate) const fn encode(self) -> u16 {
        (((self.exact as u16) << 8) | self.colors as u16) + 1
    }

    /// Inverse of `encode`; `None` for the empty marker
    #[inline]
    pub(crate) const fn decode(raw: u16) -> Option<Self> {
        if raw == 0 {
            return None;
        }
        let packed = raw - 1;
        Some(Self::new((packed >> 8) as u8, (packed & 0xff) as u8))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} colour", self.exact, self.misplaced())
    }
}
