use core::cmp::Ordering;

use gmp_mpfr_sys::mpfr;

use crate::MpFloat;

// NaN compares unequal to everything and is unordered.

impl PartialEq for MpFloat {
    fn eq(&self, other: &MpFloat) -> bool {
        unsafe { mpfr::equal_p(self.as_raw(), other.as_raw()) != 0 }
    }
}

impl PartialOrd for MpFloat {
    fn partial_cmp(&self, other: &MpFloat) -> Option<Ordering> {
        unsafe {
            if mpfr::unordered_p(self.as_raw(), other.as_raw()) != 0 {
                return None;
            }
            Some(mpfr::cmp(self.as_raw(), other.as_raw()).cmp(&0))
        }
    }
}

impl PartialEq<f64> for MpFloat {
    fn eq(&self, other: &f64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f64> for MpFloat {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(unsafe { mpfr::cmp_d(self.as_raw(), *other) }.cmp(&0))
    }
}

impl PartialEq<MpFloat> for f64 {
    fn eq(&self, other: &MpFloat) -> bool {
        other == self
    }
}

impl PartialOrd<MpFloat> for f64 {
    fn partial_cmp(&self, other: &MpFloat) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}
