use core::fmt;

use crate::constants::{DISPLAY_DIGITS, MAX_DIGITS};
use crate::error::Error;
use crate::float::MpFloat;

/// A complex number stored as two [`MpFloat`] parts of equal precision.
///
/// # Example
/// ```
/// use mpx::MpComplex;
///
/// let z = MpComplex::parse("1.5", "-0.25", 64).unwrap();
/// assert_eq!(z.to_f64_pair(), (1.5, -0.25));
/// assert_eq!(z.to_string(), "1.5-0.25i");
/// ```
///
/// [`MpFloat`]: struct.MpFloat.html
#[derive(Clone, Debug, PartialEq)]
pub struct MpComplex {
    real: MpFloat,
    imag: MpFloat,
}

impl MpComplex {
    /// Constructs `0+0i` with `prec` bits per part.
    pub fn with_prec(prec: u32) -> Result<MpComplex, Error> {
        Ok(MpComplex {
            real: MpFloat::with_prec(prec)?,
            imag: MpFloat::with_prec(prec)?,
        })
    }

    /// Constructs `re+im*i` from two `f64`s.
    pub fn new(re: f64, im: f64, prec: u32) -> Result<MpComplex, Error> {
        let mut z = MpComplex::with_prec(prec)?;
        z.set(re, im);
        Ok(z)
    }

    /// Parses both parts from base-10 strings.
    pub fn parse(re: &str, im: &str, prec: u32) -> Result<MpComplex, Error> {
        let mut z = MpComplex::with_prec(prec)?;
        z.set_str(re, im)?;
        Ok(z)
    }

    /// Real part.
    pub fn real(&self) -> &MpFloat {
        &self.real
    }

    /// Imaginary part.
    pub fn imag(&self) -> &MpFloat {
        &self.imag
    }

    /// Mutable access to both parts.
    pub fn parts_mut(&mut self) -> (&mut MpFloat, &mut MpFloat) {
        (&mut self.real, &mut self.imag)
    }

    /// Precision of each part in bits.
    pub fn prec(&self) -> u32 {
        self.real.prec()
    }

    /// Sets both parts from `f64`s.
    pub fn set(&mut self, re: f64, im: f64) {
        self.real.set_f64(re);
        self.imag.set_f64(im);
    }

    /// Sets both parts from strings. If either fails to parse, neither part changes.
    pub fn set_str(&mut self, re: &str, im: &str) -> Result<(), Error> {
        let mut real = self.real.clone();
        let mut imag = self.imag.clone();
        real.set_str(re)?;
        imag.set_str(im)?;
        self.real = real;
        self.imag = imag;
        Ok(())
    }

    /// Copies the given parts, rounding to this value's precision.
    pub fn set_parts(&mut self, re: &MpFloat, im: &MpFloat) {
        self.real.assign(re);
        self.imag.assign(im);
    }

    /// Deep copy of `other` into `self`.
    pub fn assign(&mut self, other: &MpComplex) {
        self.set_parts(&other.real, &other.imag);
    }

    /// Returns both parts rounded to `f64`.
    pub fn to_f64_pair(&self) -> (f64, f64) {
        (self.real.to_f64(), self.imag.to_f64())
    }
}

impl Default for MpComplex {
    fn default() -> MpComplex {
        MpComplex {
            real: MpFloat::new(),
            imag: MpFloat::new(),
        }
    }
}

impl From<(f64, f64)> for MpComplex {
    fn from((re, im): (f64, f64)) -> MpComplex {
        let mut z = MpComplex::default();
        z.set(re, im);
        z
    }
}

impl fmt::Display for MpComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f
            .precision()
            .map(|p| p.min(MAX_DIGITS as usize))
            .unwrap_or(DISPLAY_DIGITS as usize);

        write!(f, "{:.*}", digits, self.real)?;
        if self.imag.is_sign_negative() && !self.imag.is_nan() {
            write!(f, "-{:.*}i", digits, -1.0 * &self.imag)
        } else {
            write!(f, "+{:.*}i", digits, self.imag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_are_independent() {
        let z = MpComplex::new(3.0, 4.0, 80).unwrap();
        assert_eq!(z.real().to_f64(), 3.0);
        assert_eq!(z.imag().to_f64(), 4.0);
        assert_eq!(z.prec(), 80);
    }

    #[test]
    fn test_set_str_is_atomic() {
        let mut z = MpComplex::from((1.0, 2.0));
        assert!(z.set_str("5", "x").is_err());
        assert_eq!(z.to_f64_pair(), (1.0, 2.0));
    }

    #[test]
    fn test_assign_rounds_to_own_prec() {
        let wide = MpComplex::parse("0.1", "0.2", 256).unwrap();
        let mut narrow = MpComplex::with_prec(24).unwrap();
        narrow.assign(&wide);
        assert_eq!(narrow.prec(), 24);
        assert_eq!(narrow.to_f64_pair(), (0.1f32 as f64, 0.2f32 as f64));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.3}", MpComplex::from((1.0, 2.0))), "1+2i");
        assert_eq!(format!("{:.3}", MpComplex::from((0.5, -0.125))), "0.5-0.125i");
        assert_eq!(format!("{:.3}", MpComplex::from((-1.0, 0.0))), "-1+0i");
    }
}
