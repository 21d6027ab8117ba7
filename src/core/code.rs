//! Mastermind code representation
//!
//! A Code stores its peg colours along with a per-colour histogram for
//! feedback calculation and its rank in the canonical code ordering.

use super::GameConfig;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A fixed-length sequence of coloured pegs
///
/// Equality, hashing and ordering only look at the pegs. Ordering is
/// lexicographic over colour indices, which is also the order in which
/// `CodeSpace` enumerates codes.
#[derive(Debug, Clone)]
pub struct Code {
    symbols: Box<[u8]>,
    histogram: Box<[u8]>,
    index: usize,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    WrongLength { expected: usize, got: usize },
    ColorOutOfRange { color: usize, colors: usize },
    InvalidSymbol(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, got } => {
                write!(f, "Code must have exactly {expected} pegs, got {got}")
            }
            Self::ColorOutOfRange { color, colors } => {
                write!(f, "Colour {color} is out of range (0..{colors})")
            }
            Self::InvalidSymbol(symbol) => write!(f, "Invalid peg '{symbol}'"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from colour indices
    ///
    /// # Errors
    /// Returns `CodeError` if the length doesn't match the configured peg
    /// count or a colour is outside `0..colors`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let code = Code::new([1, 1, 3, 2], &config).unwrap();
    /// assert_eq!(code.symbols(), &[1, 1, 3, 2]);
    ///
    /// assert!(Code::new([1, 1, 3], &config).is_err());
    /// assert!(Code::new([1, 1, 3, 6], &config).is_err());
    /// ```
    pub fn new(symbols: impl AsRef<[u8]>, config: &GameConfig) -> Result<Self, CodeError> {
        let symbols = symbols.as_ref();

        if symbols.len() != config.pegs() {
            return Err(CodeError::WrongLength {
                expected: config.pegs(),
                got: symbols.len(),
            });
        }

        if let Some(&color) = symbols
            .iter()
            .find(|&&color| usize::from(color) >= config.colors())
        {
            return Err(CodeError::ColorOutOfRange {
                color: usize::from(color),
                colors: config.colors(),
            });
        }

        Ok(Self::from_valid(symbols.into(), config.colors()))
    }

    /// Decode the code with the given canonical rank
    ///
    /// The last peg is the least significant digit, so ranks follow the
    /// lexicographic order of the pegs.
    pub(crate) fn from_index(index: usize, config: &GameConfig) -> Self {
        let colors = config.colors();
        let mut symbols = vec![0u8; config.pegs()];
        let mut rest = index;

        for slot in symbols.iter_mut().rev() {
            *slot = (rest % colors) as u8;
            rest /= colors;
        }

        Self::from_valid(symbols.into_boxed_slice(), colors)
    }

    fn from_valid(symbols: Box<[u8]>, colors: usize) -> Self {
        let mut histogram = vec![0u8; colors];
        for &color in symbols.iter() {
            histogram[usize::from(color)] += 1;
        }

        let index = symbols
            .iter()
            .fold(0usize, |acc, &color| acc * colors + usize::from(color));

        Self {
            symbols,
            histogram: histogram.into_boxed_slice(),
            index,
        }
    }

    /// Parse a code from text
    ///
    /// Accepts compact digits (`1132`), comma-separated colours (`1,1,3,2`)
    /// and the display form (`[1, 1, 3, 2]`). Compact form only works for
    /// single-digit colours.
    ///
    /// # Errors
    /// Returns `CodeError` for unparseable pegs or codes that don't fit the
    /// configuration.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let a = Code::parse("1132", &config).unwrap();
    /// let b = Code::parse("[1, 1, 3, 2]", &config).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, CodeError> {
        let trimmed = text
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim();

        let symbols: Vec<u8> = if trimmed.contains(',') {
            trimmed
                .split(',')
                .map(|part| {
                    let part = part.trim();
                    part.parse::<u8>()
                        .map_err(|_| CodeError::InvalidSymbol(part.to_string()))
                })
                .collect::<Result<_, _>>()?
        } else {
            trimmed
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    c.to_digit(10)
                        .map(|digit| digit as u8)
                        .ok_or_else(|| CodeError::InvalidSymbol(c.to_string()))
                })
                .collect::<Result<_, _>>()?
        };

        Self::new(symbols, config)
    }

    /// Get the peg colours
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> usize {
        self.symbols.len()
    }

    /// Rank of this code in the canonical ordering
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Count of each colour, indexed by colour
    #[inline]
    pub(crate) fn histogram(&self) -> &[u8] {
        &self.histogram
    }

    /// Whether this code was built for `config`
    #[inline]
    pub(crate) fn fits(&self, config: &GameConfig) -> bool {
        self.pegs() == config.pegs() && self.histogram.len() == config.colors()
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Code {}

impl Hash for Code {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl PartialOrd for Code {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Code {
    fn cmp(&self, other: &Self) -> Ordering {
        self.symbols.cmp(&other.symbols)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, color) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{color}")?;
        }
        write!(f, "]")
    }
}
