use crate::as_mpfr::AsMpfr;
use crate::error::Error;
use crate::format::Format;
use crate::raw;
use crate::specifier::Specifier;

/// Writes `value` into `buf` with `digits` significant digits in general
/// notation (`%.<digits>Rg`).
///
/// The capacity is `buf.len()`. The output is NUL-terminated and truncated
/// to fit. Returns the length the full output needs, without the NUL, so a
/// result `>= buf.len()` means truncation.
///
/// # Example
/// ```
/// use mpx::MpFloat;
///
/// let third = MpFloat::from(1.0) / MpFloat::from(3.0);
///
/// let mut buf = [0u8; 32];
/// let n = mpx::format(&mut buf, 5, &third).unwrap();
/// assert_eq!(&buf[..n], b"0.33333");
/// assert_eq!(buf[n], 0);
///
/// let mut small = [0u8; 4];
/// assert_eq!(mpx::format(&mut small, 5, &third).unwrap(), 7);
/// assert_eq!(&small, b"0.3\0");
/// ```
pub fn format<V>(buf: &mut [u8], digits: u32, value: &V) -> Result<usize, Error>
where
    V: AsMpfr + ?Sized,
{
    format_with(buf, value, &digits)
}

/// Same as [`format`] with notation and rounding taken from `format`.
///
/// [`format`]: fn.format.html
pub fn format_with<V, F>(buf: &mut [u8], value: &V, format: &F) -> Result<usize, Error>
where
    V: AsMpfr + ?Sized,
    F: Format + ?Sized,
{
    let spec = Specifier::new(format)?;
    let n = unsafe { raw::snprintf(buf.as_mut_ptr(), buf.len(), &spec, value.as_raw())? };
    Ok(n as usize)
}

/// Returns how many bytes of a `needed`-byte rendering were stored in a
/// buffer of `capacity` bytes, not counting the NUL terminator.
pub fn stored_len(needed: usize, capacity: usize) -> usize {
    needed.min(capacity.saturating_sub(1))
}
