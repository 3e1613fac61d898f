use thiserror::Error;

/// This crate's error type.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum Error {
    /// Digit count that does not fit in a format specifier.
    #[error("digit count {0} is outside 0..={max}", max = crate::MAX_DIGITS)]
    InvalidDigits(i64),

    /// Precision outside the range MPFR supports.
    #[error("precision {0} is outside the range supported by MPFR")]
    InvalidPrecision(u32),

    /// Text MPFR could not read as a base-10 number.
    #[error("could not parse {0:?} as a number")]
    Parse(String),

    /// Input string contained a NUL byte.
    #[error("string contains an interior NUL byte")]
    InteriorNul,

    /// Negative return code from `mpfr_snprintf`.
    #[error("mpfr_snprintf failed with code {0}")]
    Library(i32),
}
