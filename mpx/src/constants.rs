// Want this to be as large as the longest specifier `Specifier` can produce,
// which is currently "%.99RYg" (7 bytes) plus its NUL terminator.
pub(crate) const SPEC_BUF_LEN: usize = 32;

// Room for "%.99Rg" output: sign, 99 digits, point and an exponent of any
// width MPFR supports, plus the NUL terminator.
pub(crate) const BUFFER_LEN: usize = 128;

/// Largest digit count accepted when building a specifier.
pub const MAX_DIGITS: u32 = 99;

/// Digit count used by `FormatOptions::default()`, same as printf's `%g`.
pub const DEFAULT_DIGITS: u32 = 6;

/// Significant digits used by `Display` when no precision is given.
pub const DISPLAY_DIGITS: u32 = 32;

/// Mantissa bits used when no precision is given.
pub const DEFAULT_PREC: u32 = 128;

pub(crate) const NAN: &str = "NaN";
pub(crate) const INFINITY: &str = "inf";
pub(crate) const NEG_INFINITY: &str = "-inf";
