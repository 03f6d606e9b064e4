#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

#[cfg(feature = "alloc")]
use core::f64::consts::TAU;

use num_traits::Float;

use super::Complex;
#[cfg(feature = "alloc")]
use super::ComplexError;

// ── Integer powers ───────────────────────────────────────────────────

impl Complex {
    /// Integer power by binary exponentiation.
    ///
    /// `z.pow(0)` is `ONE` for every `z`, zero included. Negative exponents
    /// return `ONE / z.pow(-n)`, so `ZERO.pow(-1)` is non-finite.
    ///
    /// ```
    /// use fxmath::Complex;
    /// assert_eq!(Complex::new(2.0, 0.0).pow(10), Complex::new(1024.0, 0.0));
    /// assert_eq!(Complex::ZERO.pow(0), Complex::ONE);
    /// ```
    pub fn pow(&self, n: i32) -> Self {
        if n < 0 {
            Self::ONE.divided_by(&self.pow_unsigned(n.unsigned_abs()))
        } else {
            self.pow_unsigned(n as u32)
        }
    }

    // Recursion depth is bounded by the bit width of `n`.
    fn pow_unsigned(&self, n: u32) -> Self {
        match n {
            0 => Self::ONE,
            1 => *self,
            _ => {
                let half = self.pow_unsigned(n / 2);
                let squared = half.times(&half);
                if n % 2 == 0 {
                    squared
                } else {
                    squared.times(self)
                }
            }
        }
    }
}

// ── Roots ────────────────────────────────────────────────────────────

impl Complex {
    /// Principal square root: modulus `sqrt(|z|)`, argument `arg(z) / 2`.
    #[inline]
    pub fn sqrt(&self) -> Self {
        Self::from_polar(Float::sqrt(self.abs()), self.arg() / 2.0)
    }

    /// Both square roots, principal first.
    ///
    /// ```
    /// use fxmath::Complex;
    /// let [p, q] = Complex::new(4.0, 0.0).sqrts();
    /// assert_eq!(p, Complex::new(2.0, 0.0));
    /// assert_eq!(q, Complex::new(-2.0, -0.0));
    /// ```
    #[inline]
    pub fn sqrts(&self) -> [Self; 2] {
        let principal = self.sqrt();
        [principal, principal.scale(-1.0)]
    }

    /// Principal n-th root: modulus `|z|^(1/n)`, argument `arg(z) / n`.
    ///
    /// Negative `n` falls out of the formula. `n = 0` yields non-finite parts.
    #[inline]
    pub fn nth_root(&self, n: i32) -> Self {
        let n = f64::from(n);
        Self::from_polar(Float::powf(self.abs(), 1.0 / n), self.arg() / n)
    }

    /// All `n` n-th roots, principal first, in order of increasing argument.
    ///
    /// Only the principal root and the primitive root of unity
    /// `ω = e^(2πi/n)` are evaluated trigonometrically. The remaining roots
    /// are filled by two walks: upward from index 1 by multiplying with `ω`,
    /// and downward from index `n - 1` by multiplying with `conj(ω)`. Each
    /// walk stops when it reaches a slot the other one has already filled.
    ///
    /// Returns [`ComplexError::InvalidArgument`] for `n = 0`.
    ///
    /// ```
    /// use fxmath::Complex;
    /// let roots = Complex::ONE.nth_roots(4).unwrap();
    /// assert_eq!(roots.len(), 4);
    /// assert!((roots[1] - Complex::I).abs() < 1e-15);
    /// ```
    #[cfg(feature = "alloc")]
    pub fn nth_roots(&self, n: usize) -> Result<Vec<Self>, ComplexError> {
        if n == 0 {
            return Err(ComplexError::InvalidArgument);
        }
        let order = i32::try_from(n).map_err(|_| ComplexError::InvalidArgument)?;

        let mut roots = vec![Self::ZERO; n];
        let mut filled = vec![false; n];
        roots[0] = self.nth_root(order);
        filled[0] = true;

        let omega = Self::from_polar(1.0, TAU / n as f64);
        let omega_conj = omega.conjugate();

        for i in 1..n {
            if filled[i] {
                break;
            }
            roots[i] = roots[i - 1].times(&omega);
            filled[i] = true;

            let j = n - i;
            if filled[j] {
                break;
            }
            roots[j] = roots[(j + 1) % n].times(&omega_conj);
            filled[j] = true;
        }

        Ok(roots)
    }
}
