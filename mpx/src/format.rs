use crate::constants::DEFAULT_DIGITS;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Conversion character of the generated specifier.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// `g`: fixed or scientific, whichever is shorter. Trailing zeros are removed.
    General,
    /// `e`: one digit before the point, then an exponent.
    Scientific,
    /// `f`: plain decimal with the requested digits after the point.
    Fixed,
}

impl Notation {
    pub(crate) fn conversion(self) -> char {
        match self {
            Notation::General => 'g',
            Notation::Scientific => 'e',
            Notation::Fixed => 'f',
        }
    }
}

impl Default for Notation {
    fn default() -> Notation {
        Notation::General
    }
}

/// Rounding mode MPFR applies while producing digits.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum Round {
    /// Round to nearest, ties to even. Left implicit in the specifier.
    Nearest,
    /// `Z`
    TowardZero,
    /// `U`
    Up,
    /// `D`
    Down,
    /// `Y`
    AwayFromZero,
}

impl Round {
    pub(crate) fn flag(self) -> Option<char> {
        match self {
            Round::Nearest => None,
            Round::TowardZero => Some('Z'),
            Round::Up => Some('U'),
            Round::Down => Some('D'),
            Round::AwayFromZero => Some('Y'),
        }
    }
}

impl Default for Round {
    fn default() -> Round {
        Round::Nearest
    }
}

/// Trait that abstracts over [`FormatOptions`] and a bare digit count.
///
/// A bare `u32` means "that many significant digits, general notation,
/// round to nearest", which is the `%.<digits>Rg` specifier.
///
/// [`FormatOptions`]: struct.FormatOptions.html
pub trait Format {
    /// Returns the number of significant digits (or digits after the point for
    /// [`Notation::Fixed`]).
    fn digits(&self) -> u32;
    /// Returns the conversion to use.
    fn notation(&self) -> Notation;
    /// Returns the rounding mode to use.
    fn round(&self) -> Round;
}

impl Format for u32 {
    fn digits(&self) -> u32 {
        *self
    }

    fn notation(&self) -> Notation {
        Notation::General
    }

    fn round(&self) -> Round {
        Round::Nearest
    }
}

/// Settings for a single formatting call.
///
/// # Example
/// ```
/// use mpx::{FormatOptions, Notation, Round};
///
/// let options = FormatOptions::new()
///     .with_digits(10)
///     .with_notation(Notation::Scientific)
///     .with_round(Round::TowardZero);
/// assert_eq!(options.specifier().unwrap().as_str(), "%.10RZe");
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    digits: u32,
    notation: Notation,
    round: Round,
}

impl FormatOptions {
    /// Constructs options with six digits, general notation and round to nearest.
    pub fn new() -> FormatOptions {
        FormatOptions::default()
    }

    /// Sets the digit count.
    pub fn with_digits(mut self, digits: u32) -> FormatOptions {
        self.digits = digits;
        self
    }

    /// Sets the notation.
    pub fn with_notation(mut self, notation: Notation) -> FormatOptions {
        self.notation = notation;
        self
    }

    /// Sets the rounding mode.
    pub fn with_round(mut self, round: Round) -> FormatOptions {
        self.round = round;
        self
    }

    /// Builds the specifier these options describe.
    pub fn specifier(&self) -> Result<crate::Specifier, crate::Error> {
        crate::Specifier::new(self)
    }
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions {
            digits: DEFAULT_DIGITS,
            notation: Notation::General,
            round: Round::Nearest,
        }
    }
}

impl Format for FormatOptions {
    fn digits(&self) -> u32 {
        self.digits
    }

    fn notation(&self) -> Notation {
        self.notation
    }

    fn round(&self) -> Round {
        self.round
    }
}

impl<F: Format + ?Sized> Format for &F {
    fn digits(&self) -> u32 {
        (**self).digits()
    }

    fn notation(&self) -> Notation {
        (**self).notation()
    }

    fn round(&self) -> Round {
        (**self).round()
    }
}
