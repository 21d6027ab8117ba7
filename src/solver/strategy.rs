//! Guess pool selection
//!
//! The minimax selector is always the same; what varies is which codes it
//! may consider as guesses on each turn.

use std::fmt;

/// Which codes are eligible as guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Every code in the space, including ones already ruled out
    ///
    /// Ruled-out codes can still split the bag better than any candidate,
    /// so this is the exhaustive (and default) behaviour.
    #[default]
    FullSpace,
    /// Only codes still in the bag
    ///
    /// Cheaper per turn but may need more turns. Opt-in.
    Bag,
}

impl GuessPool {
    /// Create a pool from its name
    ///
    /// Supported names: "full", "full-space", "bag". Returns `None` for
    /// anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" | "full-space" => Some(Self::FullSpace),
            "bag" => Some(Self::Bag),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullSpace => "full",
            Self::Bag => "bag",
        }
    }
}

impl fmt::Display for GuessPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
