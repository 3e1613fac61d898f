#![allow(dead_code)]

use lazy_static::lazy_static;
use mpx::MpFloat;

lazy_static! {
    pub static ref THIRD: MpFloat = MpFloat::from(1.0) / MpFloat::from(3.0);
    pub static ref TWO_THIRDS: MpFloat = MpFloat::from(2.0) / MpFloat::from(3.0);
    pub static ref ZERO: MpFloat = MpFloat::new();
}

pub fn parse(s: &str) -> MpFloat {
    MpFloat::parse(s, 1024).unwrap()
}

// Reads the NUL-terminated prefix of `buf`.
pub fn c_str(buf: &[u8]) -> &str {
    let end = buf.iter().position(|b| *b == 0).expect("missing NUL terminator");
    std::str::from_utf8(&buf[..end]).unwrap()
}
