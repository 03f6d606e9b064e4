use core::f64::consts::{PI, TAU};

use num_traits::Float;

use super::Complex;

/// Upper bound on the ±2π fix-up steps that follow the coarse branch shift.
const BRANCH_FIXUP_STEPS: usize = 4;

// ── Exponential and hyperbolic ───────────────────────────────────────

impl Complex {
    /// `e^z = e^x (cos y + i sin y)`.
    #[inline]
    pub fn exp(&self) -> Self {
        Self::from_polar(Float::exp(self.real()), self.imag())
    }

    /// `(e^z + e^-z) / 2`.
    pub fn cosh(&self) -> Self {
        let e = self.exp();
        e.plus(&e.inverse()).divided_by_real(2.0)
    }

    /// `(e^z - e^-z) / 2`.
    pub fn sinh(&self) -> Self {
        let e = self.exp();
        e.minus(&e.inverse()).divided_by_real(2.0)
    }

    pub fn tanh(&self) -> Self {
        self.sinh().divided_by(&self.cosh())
    }

    pub fn sech(&self) -> Self {
        self.cosh().inverse()
    }

    pub fn cosech(&self) -> Self {
        self.sinh().inverse()
    }

    pub fn coth(&self) -> Self {
        self.cosh().divided_by(&self.sinh())
    }
}

// ── Trigonometric ────────────────────────────────────────────────────

impl Complex {
    /// `cos z = cosh(iz)`.
    pub fn cos(&self) -> Self {
        self.times(&Self::I).cosh()
    }

    /// `sin z = sinh(iz) / i`.
    pub fn sin(&self) -> Self {
        self.times(&Self::I).sinh().divided_by(&Self::I)
    }

    pub fn tan(&self) -> Self {
        self.sin().divided_by(&self.cos())
    }

    pub fn cot(&self) -> Self {
        self.cos().divided_by(&self.sin())
    }

    pub fn cosec(&self) -> Self {
        Self::ONE.divided_by(&self.sin())
    }

    pub fn sec(&self) -> Self {
        Self::ONE.divided_by(&self.cos())
    }
}

// ── Logarithm ────────────────────────────────────────────────────────

impl Complex {
    /// Natural logarithm on the branch centred at argument 0.
    ///
    /// Same as `self.log_branch(0.0)`: the imaginary part lies in `(-π, π]`.
    #[inline]
    pub fn log(&self) -> Self {
        self.log_branch(0.0)
    }

    /// Natural logarithm on the branch centred at `suggested_arg`.
    ///
    /// The logarithm is multivalued: `ln|z| + i(arg z + 2πk)` for every
    /// integer `k`. This picks the `k` that puts the imaginary part in
    /// `(suggested_arg - π, suggested_arg + π]`. Other branches differ by
    /// multiples of `2πi`.
    ///
    /// A non-finite `suggested_arg` gives a NaN imaginary part.
    ///
    /// ```
    /// use fxmath::Complex;
    /// use core::f64::consts::PI;
    ///
    /// let z = Complex::new(-1.0, 0.0);
    /// assert_eq!(z.log().imag(), PI);
    /// assert!((z.log_branch(-PI).imag() + PI).abs() < 1e-15);
    /// ```
    pub fn log_branch(&self, suggested_arg: f64) -> Self {
        Self::new(
            Float::ln(self.abs()),
            branch_arg(self.arg(), suggested_arg),
        )
    }
}

/// Move `arg` by whole turns into `(center - π, center + π]`.
fn branch_arg(arg: f64, center: f64) -> f64 {
    if !center.is_finite() {
        return f64::NAN;
    }

    let lo = center - PI;
    let hi = center + PI;
    if arg > lo && arg <= hi {
        return arg;
    }

    // Coarse shift by the nearest whole number of turns, then settle the
    // rounding at the interval edges with a bounded number of steps.
    let turns = Float::round((center - arg) / TAU);
    let mut arg = arg + turns * TAU;
    for _ in 0..BRANCH_FIXUP_STEPS {
        if arg <= lo {
            arg += TAU;
        } else if arg > hi {
            arg -= TAU;
        } else {
            break;
        }
    }
    arg
}
