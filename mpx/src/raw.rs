//! Unsafe functions that mirror the C shim's API.
//!
//! These take a raw destination pointer and capacity and hand them to
//! `mpfr_snprintf` untouched. Prefer [`format`] and [`Buffer`] unless the
//! destination memory comes from elsewhere.
//!
//! [`format`]: ../fn.format.html
//! [`Buffer`]: ../struct.Buffer.html

use gmp_mpfr_sys::mpfr::{self, mpfr_t};
use libc::{c_char, c_int};

use crate::error::Error;
use crate::format::Format;
use crate::specifier::Specifier;

/// Writes `value` to `buffer` with `digits` significant digits in general
/// notation (`%.<digits>Rg`) and returns the number of characters the full
/// rendering needs, not counting the NUL terminator.
///
/// At most `capacity` bytes are written, the last of which is always a NUL
/// (unless `capacity` is zero). A return value of `capacity` or more means the
/// output was truncated.
///
/// With `digits == 0` MPFR follows C's `%g` and prints one significant digit.
///
/// # Errors
///
/// [`Error::InvalidDigits`] if `digits` is negative or above [`MAX_DIGITS`];
/// nothing is written in that case. [`Error::Library`] if MPFR reports a
/// failure.
///
/// # Safety
///
/// `buffer` must be valid for writes of `capacity` bytes (it may be null when
/// `capacity` is zero) and `value` must point to an initialized `mpfr_t` that
/// stays alive for the duration of the call.
///
/// # Example
///
/// ```
/// use gmp_mpfr_sys::mpfr;
/// use std::mem::MaybeUninit;
///
/// unsafe {
///     let mut third = MaybeUninit::uninit();
///     let third = third.as_mut_ptr();
///     mpfr::init2(third, 128);
///     mpfr::set_ui(third, 1, mpfr::rnd_t::RNDN);
///     mpfr::div_ui(third, third, 3, mpfr::rnd_t::RNDN);
///
///     let mut buffer = [0u8; 32];
///     let len = mpx::raw::format(buffer.as_mut_ptr(), 32, 5, third).unwrap();
///     assert_eq!(&buffer[..len as usize], b"0.33333");
///
///     mpfr::clear(third);
/// }
/// ```
///
/// [`Error::InvalidDigits`]: ../enum.Error.html#variant.InvalidDigits
/// [`Error::Library`]: ../enum.Error.html#variant.Library
/// [`MAX_DIGITS`]: ../constant.MAX_DIGITS.html
pub unsafe fn format(
    buffer: *mut u8,
    capacity: usize,
    digits: c_int,
    value: *const mpfr_t,
) -> Result<c_int, Error> {
    if digits < 0 {
        log::debug!("rejecting negative digit count {}", digits);
        return Err(Error::InvalidDigits(i64::from(digits)));
    }
    let spec = Specifier::general(digits as u32)?;
    snprintf(buffer, capacity, &spec, value)
}

/// Same as [`format`], with notation and rounding taken from `format`.
///
/// # Safety
///
/// Same requirements as [`format`].
///
/// [`format`]: fn.format.html
pub unsafe fn format_with<F>(
    buffer: *mut u8,
    capacity: usize,
    format: &F,
    value: *const mpfr_t,
) -> Result<c_int, Error>
where
    F: Format + ?Sized,
{
    let spec = Specifier::new(format)?;
    snprintf(buffer, capacity, &spec, value)
}

/// Calls `mpfr_snprintf` with `spec` and exactly one value argument.
///
/// # Safety
///
/// Same requirements as [`format`].
///
/// [`format`]: fn.format.html
pub unsafe fn snprintf(
    buffer: *mut u8,
    capacity: usize,
    spec: &Specifier,
    value: *const mpfr_t,
) -> Result<c_int, Error> {
    let n = mpfr::snprintf(buffer as *mut c_char, capacity, spec.as_ptr(), value);
    if n < 0 {
        return Err(Error::Library(n));
    }
    if capacity > 0 && n as usize >= capacity {
        log::debug!(
            "output of {} truncated: needs {} bytes, capacity {}",
            spec,
            n as usize + 1,
            capacity
        );
    }
    Ok(n)
}
