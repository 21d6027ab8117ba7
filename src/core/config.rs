//! Game configuration: number of colours and peg positions
//!
//! Both knobs are validated once, up front. Everything downstream (code
//! enumeration, feedback tables, the guess selector) reads them from a
//! `GameConfig` instead of hardcoding the classic 6 colours / 4 pegs.

use std::fmt;

/// Number of colours in the classic game
pub const DEFAULT_COLORS: usize = 6;

/// Number of peg positions in the classic game
pub const DEFAULT_PEGS: usize = 4;

/// Largest supported alphabet
pub const MAX_COLORS: usize = 16;

/// Largest supported code length
pub const MAX_PEGS: usize = 8;

/// Largest supported code space (`colors^pegs`)
///
/// Selection costs `|space| × |bag|` evaluations per turn and the dense
/// feedback cache holds `|space|²` entries. The classic game has 1,296
/// codes; spaces beyond a few thousand codes are still correct but slow
/// (8 colours × 5 pegs = 32,768 codes is roughly a billion evaluations for
/// the opening move alone).
pub const MAX_CODE_SPACE: usize = 1 << 16;

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoColors,
    NoPegs,
    TooManyColors(usize),
    TooManyPegs(usize),
    CodeSpaceTooLarge { colors: usize, pegs: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColors => write!(f, "Number of colours must be positive"),
            Self::NoPegs => write!(f, "Number of pegs must be positive"),
            Self::TooManyColors(colors) => {
                write!(f, "At most {MAX_COLORS} colours are supported, got {colors}")
            }
            Self::TooManyPegs(pegs) => {
                write!(f, "At most {MAX_PEGS} pegs are supported, got {pegs}")
            }
            Self::CodeSpaceTooLarge { colors, pegs } => write!(
                f,
                "{colors} colours × {pegs} pegs exceeds the {MAX_CODE_SPACE} code limit"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated game dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    colors: usize,
    pegs: usize,
}

impl GameConfig {
    /// Create a configuration, rejecting empty or oversized games
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero, exceeds its
    /// maximum, or the resulting code space exceeds `MAX_CODE_SPACE`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4).unwrap();
    /// assert_eq!(config.code_space_size(), 1296);
    ///
    /// assert!(GameConfig::new(0, 4).is_err());
    /// ```
    pub fn new(colors: usize, pegs: usize) -> Result<Self, ConfigError> {
        if colors == 0 {
            return Err(ConfigError::NoColors);
        }
        if pegs == 0 {
            return Err(ConfigError::NoPegs);
        }
        if colors > MAX_COLORS {
            return Err(ConfigError::TooManyColors(colors));
        }
        if pegs > MAX_PEGS {
            return Err(ConfigError::TooManyPegs(pegs));
        }

        // pegs <= 8 so the exponent always fits in a u32
        match colors.checked_pow(pegs as u32) {
            Some(size) if size <= MAX_CODE_SPACE => Ok(Self { colors, pegs }),
            _ => Err(ConfigError::CodeSpaceTooLarge { colors, pegs }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> usize {
        self.pegs
    }

    /// Number of distinct codes, `colors^pegs`
    #[must_use]
    pub fn code_space_size(&self) -> usize {
        self.colors.pow(self.pegs as u32)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            pegs: DEFAULT_PEGS,
        }
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} colours × {} pegs", self.colors, self.pegs)
    }
}
