use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use super::Complex;

// Binary operators delegate to the named methods so `a * b` and
// `a.times(&b)` are bit-identical.
macro_rules! impl_binop {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $method:ident) => {
        impl $trait for Complex {
            type Output = Complex;
            #[inline]
            fn $fn(self, rhs: Complex) -> Complex {
                self.$method(&rhs)
            }
        }

        impl $trait<Complex> for &Complex {
            type Output = Complex;
            #[inline]
            fn $fn(self, rhs: Complex) -> Complex {
                self.$method(&rhs)
            }
        }

        impl $trait<&Complex> for Complex {
            type Output = Complex;
            #[inline]
            fn $fn(self, rhs: &Complex) -> Complex {
                self.$method(rhs)
            }
        }

        impl $trait<&Complex> for &Complex {
            type Output = Complex;
            #[inline]
            fn $fn(self, rhs: &Complex) -> Complex {
                self.$method(rhs)
            }
        }

        impl $assign_trait for Complex {
            #[inline]
            fn $assign_fn(&mut self, rhs: Complex) {
                *self = self.$method(&rhs);
            }
        }

        impl $assign_trait<&Complex> for Complex {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Complex) {
                *self = self.$method(rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign, plus);
impl_binop!(Sub, sub, SubAssign, sub_assign, minus);
impl_binop!(Mul, mul, MulAssign, mul_assign, times);
impl_binop!(Div, div, DivAssign, div_assign, divided_by);

// ── Real scalars ─────────────────────────────────────────────────────

impl Mul<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: f64) -> Complex {
        self.scale(rhs)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        rhs.scale(self)
    }
}

impl MulAssign<f64> for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.scale(rhs);
    }
}

impl Div<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn div(self, rhs: f64) -> Complex {
        self.divided_by_real(rhs)
    }
}

impl DivAssign<f64> for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = self.divided_by_real(rhs);
    }
}

// ── Negation ─────────────────────────────────────────────────────────

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.real(), -self.imag())
    }
}

impl Neg for &Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        (*self).neg()
    }
}

// ── num-traits identities ────────────────────────────────────────────

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Complex::ZERO
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Complex::ONE
    }
}

impl core::iter::Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc.plus(&z))
    }
}

impl core::iter::Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc.times(&z))
    }
}
