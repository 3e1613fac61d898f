/*!
[![Crates.io](https://img.shields.io/crates/v/mpx.svg)](https://crates.io/crates/mpx)
[![Documentation](https://docs.rs/mpx/badge.svg)](https://docs.rs/mpx/)

A Rust crate for arbitrary-precision floating-point numbers backed by
[MPFR], and for rendering them as text through MPFR's own bounded,
printf-style formatter.

# Formatting

Every rendering goes through one call to `mpfr_snprintf` with a specifier
naming exactly one conversion, such as `%.5Rg`. The specifier is built on the
stack and the digit count is checked against [`MAX_DIGITS`] first, so an
oversized request is an error rather than a malformed specifier.

```rust
use mpx::{Buffer, MpFloat, ToFormattedString};

let third = MpFloat::from(1.0) / MpFloat::from(3.0);

// Into a caller-owned slice (NUL-terminated, truncated to fit)...
let mut bytes = [0u8; 32];
let n = mpx::format(&mut bytes, 5, &third).unwrap();
assert_eq!(&bytes[..n], b"0.33333");

// Into a stack-allocated Buffer...
let mut buf = Buffer::new();
buf.write_formatted(&third, &5).unwrap();
assert_eq!(buf.as_str(), "0.33333");

// Into a String that is never truncated...
assert_eq!(third.to_formatted_string(&5).unwrap(), "0.33333");

// Or through Display, where the precision is the digit count.
assert_eq!(format!("{:.5}", third), "0.33333");
```

Notation and rounding are chosen with [`FormatOptions`]:

```rust
use mpx::{FormatOptions, MpFloat, Notation, Round, ToFormattedString};

let x = MpFloat::parse("2.71828", 64).unwrap();
let options = FormatOptions::new()
    .with_digits(3)
    .with_notation(Notation::Scientific)
    .with_round(Round::Down);
assert_eq!(x.to_formatted_string(&options).unwrap(), "2.718e+00");
```

A bare `u32` passed where a [`Format`] is expected means "that many
significant digits, general notation, round to nearest".

# Zero digits

A digit count of `0` follows C's `%g`: it is treated as one significant digit.

# Truncation

Truncation is never an error. All entry points return the length the full
rendering needs; when that is at least the capacity, the output was cut.

# Raw API

[`raw::format`] takes a destination pointer, a capacity, a C `int` digit count
and a `*const mpfr_t`, for callers whose memory does not come from Rust.

# Extra features

| Available features  | What to put in your `Cargo.toml`                              |
| :------------------ | :------------------------------------------------------------ |
| `with-serde`        | `mpx = { version = "0.1", features = ["with-serde"] }`        |
| `use-system-libs`   | `mpx = { version = "0.1", features = ["use-system-libs"] }`   |

`with-serde` derives `Serialize` and `Deserialize` for [`FormatOptions`],
[`Notation`] and [`Round`]. `use-system-libs` links the system GMP and MPFR
instead of building them.

[MPFR]: https://www.mpfr.org/
[`MAX_DIGITS`]: constant.MAX_DIGITS.html
[`FormatOptions`]: struct.FormatOptions.html
[`Format`]: trait.Format.html
[`Notation`]: enum.Notation.html
[`Round`]: enum.Round.html
[`raw::format`]: raw/fn.format.html
*/

#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]
#![doc(html_root_url = "https://docs.rs/mpx/0.1.0")]

mod as_mpfr;
mod buffer;
mod complex;
mod constants;
mod decimal;
mod error;
mod float;
mod format;
mod impls;
pub mod raw;
mod specifier;
mod to_formatted_string;
mod write;

pub use crate::as_mpfr::AsMpfr;
pub use crate::buffer::Buffer;
pub use crate::complex::MpComplex;
pub use crate::constants::{DEFAULT_DIGITS, DEFAULT_PREC, DISPLAY_DIGITS, MAX_DIGITS};
pub use crate::error::Error;
pub use crate::float::MpFloat;
pub use crate::format::{Format, FormatOptions, Notation, Round};
pub use crate::specifier::Specifier;
pub use crate::to_formatted_string::ToFormattedString;
pub use crate::write::{format, format_with, stored_len};

/// Re-export of the MPFR bindings this crate is built on.
pub use gmp_mpfr_sys::mpfr;
