use core::fmt;
use core::str;

use crate::as_mpfr::AsMpfr;
use crate::constants::BUFFER_LEN;
use crate::error::Error;
use crate::format::Format;
use crate::raw;
use crate::specifier::Specifier;

/// <b><u>A key type</u></b>. Represents a stack-allocated buffer you can use to get a
/// formatted `&str` without heap allocation.
///
/// Any general or scientific rendering fits. A fixed-notation rendering of a
/// very large value may not; check [`is_truncated`] or use
/// [`ToFormattedString`] instead.
///
/// # Example
/// ```
/// use mpx::{Buffer, MpFloat};
///
/// let third = MpFloat::from(1.0) / MpFloat::from(3.0);
///
/// // Create a stack-allocated buffer...
/// let mut buf = Buffer::new();
///
/// // Write "0.33333" into the buffer...
/// buf.write_formatted(&third, &5).unwrap();
///
/// // Get a view into the buffer as a &str...
/// assert_eq!(buf.as_str(), "0.33333");
/// ```
///
/// [`is_truncated`]: struct.Buffer.html#method.is_truncated
/// [`ToFormattedString`]: trait.ToFormattedString.html
#[derive(Copy, Clone)]
pub struct Buffer {
    inner: [u8; BUFFER_LEN],
    len: usize,
    needed: usize,
}

impl Buffer {
    /// Constructs a new, stack-allocated buffer.
    #[inline(always)]
    pub fn new() -> Buffer {
        Buffer {
            inner: [0; BUFFER_LEN],
            len: 0,
            needed: 0,
        }
    }

    /// Returns a `&[u8]` view into the buffer, without the NUL terminator.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[..self.len]
    }

    /// Returns a `&str` view into the buffer.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Returns `true` if the buffer is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length (in bytes) of the buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the length the last rendering needed, which exceeds
    /// [`len`] when the output was truncated.
    ///
    /// [`len`]: struct.Buffer.html#method.len
    #[inline(always)]
    pub fn needed(&self) -> usize {
        self.needed
    }

    /// Returns `true` if the last rendering did not fit.
    #[inline(always)]
    pub fn is_truncated(&self) -> bool {
        self.needed > self.len
    }

    /// Formats `value` into the buffer, replacing its contents, and returns
    /// the untruncated length.
    pub fn write_formatted<V, F>(&mut self, value: &V, format: &F) -> Result<usize, Error>
    where
        V: AsMpfr + ?Sized,
        F: Format + ?Sized,
    {
        let spec = Specifier::new(format)?;
        let n = unsafe { raw::snprintf(self.inner.as_mut_ptr(), BUFFER_LEN, &spec, value.as_raw())? };
        let n = n as usize;

        let stored = n.min(BUFFER_LEN - 1);
        self.len = match str::from_utf8(&self.inner[..stored]) {
            Ok(_) => stored,
            // truncation split a multi-byte decimal point
            Err(e) => e.valid_up_to(),
        };
        self.needed = n;
        Ok(n)
    }
}

impl Default for Buffer {
    /// Same as the [`new`] method.
    ///
    /// [`new`]: struct.Buffer.html#method.new
    #[inline(always)]
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Buffer {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
