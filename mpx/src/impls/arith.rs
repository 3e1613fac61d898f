use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use gmp_mpfr_sys::mpfr::{self, rnd_t};

use crate::MpFloat;

// MPFR allows the destination to alias either operand, so the assigning
// forms write straight into `self`.
macro_rules! impl_arith {
    ($($Op:ident $op:ident $OpAssign:ident $op_assign:ident => $mpfr:ident, $mpfr_d:ident, $d_mpfr:ident);* $(;)?) => {$(
        impl<'a, 'b> $Op<&'b MpFloat> for &'a MpFloat {
            type Output = MpFloat;

            fn $op(self, rhs: &'b MpFloat) -> MpFloat {
                let mut res = self.same_prec();
                unsafe {
                    mpfr::$mpfr(res.as_raw_mut(), self.as_raw(), rhs.as_raw(), rnd_t::RNDN);
                }
                res
            }
        }

        impl<'b> $Op<&'b MpFloat> for MpFloat {
            type Output = MpFloat;

            fn $op(mut self, rhs: &'b MpFloat) -> MpFloat {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<MpFloat> for MpFloat {
            type Output = MpFloat;

            fn $op(mut self, rhs: MpFloat) -> MpFloat {
                self.$op_assign(&rhs);
                self
            }
        }

        impl<'a> $Op<f64> for &'a MpFloat {
            type Output = MpFloat;

            fn $op(self, rhs: f64) -> MpFloat {
                let mut res = self.same_prec();
                unsafe {
                    mpfr::$mpfr_d(res.as_raw_mut(), self.as_raw(), rhs, rnd_t::RNDN);
                }
                res
            }
        }

        impl $Op<f64> for MpFloat {
            type Output = MpFloat;

            fn $op(mut self, rhs: f64) -> MpFloat {
                self.$op_assign(rhs);
                self
            }
        }

        impl<'b> $Op<&'b MpFloat> for f64 {
            type Output = MpFloat;

            fn $op(self, rhs: &'b MpFloat) -> MpFloat {
                let mut res = rhs.same_prec();
                unsafe {
                    $d_mpfr!(res.as_raw_mut(), self, rhs.as_raw());
                }
                res
            }
        }

        impl $Op<MpFloat> for f64 {
            type Output = MpFloat;

            fn $op(self, rhs: MpFloat) -> MpFloat {
                self.$op(&rhs)
            }
        }

        impl<'b> $OpAssign<&'b MpFloat> for MpFloat {
            fn $op_assign(&mut self, rhs: &'b MpFloat) {
                unsafe {
                    mpfr::$mpfr(self.as_raw_mut(), self.as_raw(), rhs.as_raw(), rnd_t::RNDN);
                }
            }
        }

        impl $OpAssign<MpFloat> for MpFloat {
            fn $op_assign(&mut self, rhs: MpFloat) {
                self.$op_assign(&rhs);
            }
        }

        impl $OpAssign<f64> for MpFloat {
            fn $op_assign(&mut self, rhs: f64) {
                unsafe {
                    mpfr::$mpfr_d(self.as_raw_mut(), self.as_raw(), rhs, rnd_t::RNDN);
                }
            }
        }
    )*};
}

// `f64 op MpFloat`. Addition and multiplication commute; subtraction and
// division have dedicated MPFR entry points.
macro_rules! d_add {
    ($rop:expr, $d:expr, $op:expr) => {
        mpfr::add_d($rop, $op, $d, rnd_t::RNDN)
    };
}
macro_rules! d_sub {
    ($rop:expr, $d:expr, $op:expr) => {
        mpfr::d_sub($rop, $d, $op, rnd_t::RNDN)
    };
}
macro_rules! d_mul {
    ($rop:expr, $d:expr, $op:expr) => {
        mpfr::mul_d($rop, $op, $d, rnd_t::RNDN)
    };
}
macro_rules! d_div {
    ($rop:expr, $d:expr, $op:expr) => {
        mpfr::d_div($rop, $d, $op, rnd_t::RNDN)
    };
}

impl_arith!(
    Add add AddAssign add_assign => add, add_d, d_add;
    Sub sub SubAssign sub_assign => sub, sub_d, d_sub;
    Mul mul MulAssign mul_assign => mul, mul_d, d_mul;
    Div div DivAssign div_assign => div, div_d, d_div;
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_operands() {
        let a = MpFloat::from(6.0);
        let b = MpFloat::from(1.5);

        assert_eq!((&a + &b).to_f64(), 7.5);
        assert_eq!((&a - &b).to_f64(), 4.5);
        assert_eq!((&a * &b).to_f64(), 9.0);
        assert_eq!((&a / &b).to_f64(), 4.0);

        assert_eq!((&a + 1.0).to_f64(), 7.0);
        assert_eq!((&a - 1.0).to_f64(), 5.0);
        assert_eq!((&a * 0.5).to_f64(), 3.0);
        assert_eq!((&a / 4.0).to_f64(), 1.5);

        assert_eq!((1.0 + &a).to_f64(), 7.0);
        assert_eq!((1.0 - &a).to_f64(), -5.0);
        assert_eq!((2.0 * &a).to_f64(), 12.0);
        assert_eq!((3.0 / &a).to_f64(), 0.5);
    }

    #[test]
    fn test_assign_in_place() {
        let mut x = MpFloat::from(10.0);
        x += &MpFloat::from(5.0);
        x -= 3.0;
        x *= MpFloat::from(2.0);
        x /= 8.0;
        assert_eq!(x.to_f64(), 3.0);
    }

    #[test]
    fn test_result_takes_left_precision() {
        let a = MpFloat::from_f64(1.0, 300).unwrap();
        let b = MpFloat::from_f64(3.0, 53).unwrap();
        assert_eq!((&a / &b).prec(), 300);
        assert_eq!((&b / &a).prec(), 53);
        assert_eq!((1.0 / &a).prec(), 300);
    }
}
