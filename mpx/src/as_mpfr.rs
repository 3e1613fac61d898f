use gmp_mpfr_sys::mpfr::mpfr_t;

/// A value that can be handed to MPFR's formatter.
///
/// This trait is sealed and cannot be implemented for types outside of mpx.
pub trait AsMpfr: private::Sealed {
    /// Returns a pointer to the underlying initialized `mpfr_t`, valid while `self` is borrowed.
    fn as_raw(&self) -> *const mpfr_t;
}

impl AsMpfr for mpfr_t {
    fn as_raw(&self) -> *const mpfr_t {
        self
    }
}

impl AsMpfr for crate::MpFloat {
    fn as_raw(&self) -> *const mpfr_t {
        crate::MpFloat::as_raw(self)
    }
}

// Seal to prevent downstream implementations of the AsMpfr trait.
mod private {
    pub trait Sealed {}

    impl Sealed for gmp_mpfr_sys::mpfr::mpfr_t {}
    impl Sealed for crate::MpFloat {}
}
