use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;
use std::ffi::{CStr, CString};

use gmp_mpfr_sys::mpfr::{self, mpfr_t, prec_t, rnd_t};

use crate::buffer::Buffer;
use crate::constants::{DEFAULT_PREC, DISPLAY_DIGITS, INFINITY, MAX_DIGITS, NAN, NEG_INFINITY};
use crate::decimal;
use crate::error::Error;
use crate::to_formatted_string::ToFormattedString;

/// An owned MPFR floating-point number with a fixed precision.
///
/// Every operation rounds to nearest. Results of arithmetic take the
/// precision of the left operand.
///
/// # Example
/// ```
/// use mpx::MpFloat;
///
/// let third = MpFloat::from(1.0) / MpFloat::from(3.0);
/// assert_eq!(format!("{:.5}", third), "0.33333");
/// assert_eq!(third.to_string_digits(4), "0.3333");
/// ```
pub struct MpFloat {
    inner: mpfr_t,
}

// The limbs are owned by `inner` and never shared.
unsafe impl Send for MpFloat {}
unsafe impl Sync for MpFloat {}

pub(crate) fn check_prec(prec: u32) -> Result<prec_t, Error> {
    if i64::from(prec) < mpfr::PREC_MIN as i64 || i64::from(prec) > mpfr::PREC_MAX as i64 {
        log::debug!("rejecting precision {}", prec);
        return Err(Error::InvalidPrecision(prec));
    }
    Ok(prec as prec_t)
}

impl MpFloat {
    /// Constructs zero with 128 bits of precision.
    pub fn new() -> MpFloat {
        MpFloat::zeroed(DEFAULT_PREC as prec_t)
    }

    /// Constructs zero with `prec` bits of precision.
    pub fn with_prec(prec: u32) -> Result<MpFloat, Error> {
        Ok(MpFloat::zeroed(check_prec(prec)?))
    }

    /// Parses a base-10 number such as `"1.5"`, `"-2e-30"`, `"inf"` or `"nan"`.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if MPFR does not accept the whole string,
    /// [`Error::InteriorNul`] if it contains a NUL byte and
    /// [`Error::InvalidPrecision`] for an unsupported `prec`.
    ///
    /// [`Error::Parse`]: enum.Error.html#variant.Parse
    /// [`Error::InteriorNul`]: enum.Error.html#variant.InteriorNul
    /// [`Error::InvalidPrecision`]: enum.Error.html#variant.InvalidPrecision
    pub fn parse(s: &str, prec: u32) -> Result<MpFloat, Error> {
        let mut f = MpFloat::with_prec(prec)?;
        f.set_str(s)?;
        Ok(f)
    }

    /// Constructs a value from an `f64`, rounded to `prec` bits.
    pub fn from_f64(value: f64, prec: u32) -> Result<MpFloat, Error> {
        let mut f = MpFloat::with_prec(prec)?;
        f.set_f64(value);
        Ok(f)
    }

    pub(crate) fn zeroed(prec: prec_t) -> MpFloat {
        unsafe {
            let mut raw = MaybeUninit::uninit();
            mpfr::init2(raw.as_mut_ptr(), prec);
            mpfr::set_zero(raw.as_mut_ptr(), 0);
            MpFloat {
                inner: raw.assume_init(),
            }
        }
    }

    pub(crate) fn same_prec(&self) -> MpFloat {
        MpFloat::zeroed(unsafe { mpfr::get_prec(self.as_raw()) })
    }

    /// Sets the value from a base-10 string. On error `self` is left unchanged.
    pub fn set_str(&mut self, s: &str) -> Result<(), Error> {
        let c_str = CString::new(s).map_err(|_| Error::InteriorNul)?;
        let mut parsed = self.same_prec();
        let ret = unsafe { mpfr::set_str(parsed.as_raw_mut(), c_str.as_ptr(), 10, rnd_t::RNDN) };
        if ret != 0 {
            return Err(Error::Parse(s.to_owned()));
        }
        core::mem::swap(self, &mut parsed);
        Ok(())
    }

    /// Sets the value from an `f64`.
    pub fn set_f64(&mut self, value: f64) {
        unsafe {
            mpfr::set_d(self.as_raw_mut(), value, rnd_t::RNDN);
        }
    }

    /// Copies `other` into `self`, rounding to `self`'s precision.
    pub fn assign(&mut self, other: &MpFloat) {
        unsafe {
            mpfr::set(self.as_raw_mut(), other.as_raw(), rnd_t::RNDN);
        }
    }

    /// Returns the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        unsafe { mpfr::get_d(self.as_raw(), rnd_t::RNDN) }
    }

    /// Returns the precision in bits.
    pub fn prec(&self) -> u32 {
        unsafe { mpfr::get_prec(self.as_raw()) as u32 }
    }

    /// Returns `true` for NaN.
    pub fn is_nan(&self) -> bool {
        unsafe { mpfr::nan_p(self.as_raw()) != 0 }
    }

    /// Returns `true` for positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        unsafe { mpfr::inf_p(self.as_raw()) != 0 }
    }

    /// Returns `true` for positive or negative zero.
    pub fn is_zero(&self) -> bool {
        unsafe { mpfr::zero_p(self.as_raw()) != 0 }
    }

    /// Returns `true` if the sign bit is set, including for `-0` and NaN with a negative sign.
    pub fn is_sign_negative(&self) -> bool {
        unsafe { mpfr::signbit(self.as_raw()) != 0 }
    }

    /// Square root.
    pub fn sqrt(&self) -> MpFloat {
        let mut res = self.same_prec();
        unsafe {
            mpfr::sqrt(res.as_raw_mut(), self.as_raw(), rnd_t::RNDN);
        }
        res
    }

    /// `self * self`.
    pub fn square(&self) -> MpFloat {
        let mut res = self.same_prec();
        unsafe {
            mpfr::sqr(res.as_raw_mut(), self.as_raw(), rnd_t::RNDN);
        }
        res
    }

    /// Natural logarithm.
    pub fn ln(&self) -> MpFloat {
        let mut res = self.same_prec();
        unsafe {
            mpfr::log(res.as_raw_mut(), self.as_raw(), rnd_t::RNDN);
        }
        res
    }

    /// Renders the value in plain decimal with up to `digits` significant
    /// digits, without exponent and without trailing zeros.
    ///
    /// `digits == 0` asks MPFR for as many digits as needed to read the
    /// value back exactly.
    ///
    /// ```
    /// use mpx::MpFloat;
    ///
    /// let f = MpFloat::parse("-0.000125", 64).unwrap();
    /// assert_eq!(f.to_string_digits(10), "-0.000125");
    /// let f = MpFloat::parse("1.5e6", 64).unwrap();
    /// assert_eq!(f.to_string_digits(3), "1500000");
    /// ```
    pub fn to_string_digits(&self, digits: usize) -> String {
        if self.is_nan() {
            return NAN.to_owned();
        }
        if self.is_infinite() {
            let s = if self.is_sign_negative() {
                NEG_INFINITY
            } else {
                INFINITY
            };
            return s.to_owned();
        }
        if self.is_zero() {
            return "0".to_owned();
        }

        let mut exp: mpfr::exp_t = 0;
        unsafe {
            let s = mpfr::get_str(
                ptr::null_mut(),
                &mut exp,
                10,
                digits,
                self.as_raw(),
                rnd_t::RNDN,
            );
            if s.is_null() {
                return NAN.to_owned();
            }
            let raw = CStr::from_ptr(s).to_string_lossy().into_owned();
            mpfr::free_str(s);
            decimal::place_point(&raw, exp as i64)
        }
    }

    /// Returns a pointer to the underlying `mpfr_t`.
    pub fn as_raw(&self) -> *const mpfr_t {
        &self.inner
    }

    /// Returns a mutable pointer to the underlying `mpfr_t`.
    pub fn as_raw_mut(&mut self) -> *mut mpfr_t {
        &mut self.inner
    }
}

impl Default for MpFloat {
    fn default() -> MpFloat {
        MpFloat::new()
    }
}

impl Clone for MpFloat {
    fn clone(&self) -> MpFloat {
        let mut copy = self.same_prec();
        copy.assign(self);
        copy
    }
}

impl Drop for MpFloat {
    fn drop(&mut self) {
        unsafe {
            mpfr::clear(self.as_raw_mut());
        }
    }
}

impl From<f64> for MpFloat {
    fn from(value: f64) -> MpFloat {
        let mut f = MpFloat::new();
        f.set_f64(value);
        f
    }
}

impl From<&MpFloat> for f64 {
    fn from(value: &MpFloat) -> f64 {
        value.to_f64()
    }
}

impl fmt::Display for MpFloat {
    /// General notation via `mpfr_snprintf`. The formatter's precision is the
    /// number of significant digits (32 if absent, at most 99).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f
            .precision()
            .map(|p| p.min(MAX_DIGITS as usize) as u32)
            .unwrap_or(DISPLAY_DIGITS);

        let mut buf = Buffer::new();
        buf.write_formatted(self, &digits).map_err(|_| fmt::Error)?;
        if !buf.is_truncated() {
            return f.write_str(buf.as_str());
        }
        let s = self.to_formatted_string(&digits).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl fmt::Debug for MpFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MpFloat")
            .field("prec", &self.prec())
            .field("value", &format_args!("{}", self))
            .finish()
    }
}
