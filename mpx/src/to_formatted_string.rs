use core::ptr;

use crate::as_mpfr::AsMpfr;
use crate::error::Error;
use crate::format::Format;
use crate::raw;
use crate::specifier::Specifier;

/// Trait that provides a method for turning MPFR values into heap-allocated,
/// never-truncated strings.
///
/// The output is measured with a zero-capacity call first, then written
/// into an exactly-sized allocation.
///
/// # Example
/// ```
/// use mpx::{FormatOptions, MpFloat, Notation, ToFormattedString};
///
/// let f = MpFloat::parse("1e40", 256).unwrap();
/// let options = FormatOptions::new().with_digits(2).with_notation(Notation::Fixed);
/// let s = f.to_formatted_string(&options).unwrap();
/// assert_eq!(s, "10000000000000000000000000000000000000000.00");
/// ```
pub trait ToFormattedString: AsMpfr {
    /// Returns the rendering of `self` described by `format`.
    fn to_formatted_string<F>(&self, format: &F) -> Result<String, Error>
    where
        F: Format + ?Sized,
    {
        let spec = Specifier::new(format)?;
        let value = self.as_raw();

        let needed = unsafe { raw::snprintf(ptr::null_mut(), 0, &spec, value)? } as usize;
        let mut buf = vec![0u8; needed + 1];
        let written = unsafe { raw::snprintf(buf.as_mut_ptr(), buf.len(), &spec, value)? } as usize;
        buf.truncate(written.min(needed));

        Ok(String::from_utf8(buf)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }
}

impl<T> ToFormattedString for T where T: AsMpfr + ?Sized {}
