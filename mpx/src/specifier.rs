use core::fmt::{self, Write};

use arrayvec::ArrayString;
use libc::c_char;

use crate::constants::{MAX_DIGITS, SPEC_BUF_LEN};
use crate::error::Error;
use crate::format::{Format, Notation, Round};

/// A NUL-terminated MPFR conversion specifier such as `%.5Rg`, built on the stack.
///
/// Names exactly one conversion, so the variadic call it is used with takes
/// exactly one `mpfr_t` argument.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Specifier {
    // includes the trailing NUL
    inner: ArrayString<SPEC_BUF_LEN>,
}

impl Specifier {
    /// Builds the specifier for the given [`Format`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigits`] if the digit count is above [`MAX_DIGITS`].
    ///
    /// [`Format`]: trait.Format.html
    /// [`Error::InvalidDigits`]: enum.Error.html#variant.InvalidDigits
    /// [`MAX_DIGITS`]: constant.MAX_DIGITS.html
    pub fn new<F>(format: &F) -> Result<Specifier, Error>
    where
        F: Format + ?Sized,
    {
        Specifier::build(format.digits(), format.notation(), format.round())
    }

    /// Builds `%.<digits>Rg`.
    pub fn general(digits: u32) -> Result<Specifier, Error> {
        Specifier::build(digits, Notation::General, Round::Nearest)
    }

    fn build(digits: u32, notation: Notation, round: Round) -> Result<Specifier, Error> {
        if digits > MAX_DIGITS {
            log::debug!("rejecting digit count {} (max {})", digits, MAX_DIGITS);
            return Err(Error::InvalidDigits(i64::from(digits)));
        }

        let mut inner = ArrayString::<SPEC_BUF_LEN>::new();
        write_spec(&mut inner, digits, notation, round)
            .map_err(|_| Error::InvalidDigits(i64::from(digits)))?;

        let spec = Specifier { inner };
        log::trace!("built specifier {:?}", spec.as_str());
        Ok(spec)
    }

    /// Returns the specifier without its NUL terminator.
    pub fn as_str(&self) -> &str {
        &self.inner[..self.inner.len() - 1]
    }

    /// Returns a pointer to the NUL-terminated specifier, valid while `self` is.
    pub fn as_ptr(&self) -> *const c_char {
        self.inner.as_ptr() as *const c_char
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn write_spec<W: Write>(w: &mut W, digits: u32, notation: Notation, round: Round) -> fmt::Result {
    write!(w, "%.{}R", digits)?;
    if let Some(flag) = round.flag() {
        w.write_char(flag)?;
    }
    w.write_char(notation.conversion())?;
    w.write_char('\0')
}
