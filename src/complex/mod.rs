//! Complex numbers over `f64`.
//!
//! [`Complex`] is a plain `Copy` value: every operation returns a new value and
//! nothing is ever mutated in place (the `*Assign` operators rebind). Floating
//! point faults are not errors here. Dividing by zero, raising zero to a
//! negative power, or taking a zeroth root all produce `±∞`/NaN components,
//! which keeps every operation total.
//!
//! The only fallible operation is [`Complex::nth_roots`], which rejects a root
//! count of zero.
//!
//! ```
//! use fxmath::Complex;
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.abs(), 5.0);
//! assert_eq!(z.conjugate(), Complex::new(3.0, -4.0));
//! assert_eq!(Complex::new(2.0, -3.0).to_string(), "2-i*3");
//! ```

mod ops;
mod roots;
mod transcendental;


use core::fmt;

use num_traits::Float;

/// Errors from complex-number operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexError {
    /// An integer argument is outside the operation's domain
    /// (e.g. asking for zero n-th roots).
    InvalidArgument,
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ComplexError {}

/// Complex number `x + iy` with `f64` parts.
///
/// Equality is exact equality of both parts; there is no built-in tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    x: f64,
    y: f64,
}

// ── Constructors ─────────────────────────────────────────────────────

impl Complex {
    /// `0 + 0i`.
    pub const ZERO: Complex = Complex { x: 0.0, y: 0.0 };
    /// `1 + 0i`.
    pub const ONE: Complex = Complex { x: 1.0, y: 0.0 };
    /// The imaginary unit `0 + 1i`.
    pub const I: Complex = Complex { x: 0.0, y: 1.0 };

    /// Create from real and imaginary parts.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create from modulus `r` and argument `theta` (radians).
    ///
    /// ```
    /// use fxmath::Complex;
    /// let z = Complex::from_polar(2.0, 0.0);
    /// assert_eq!(z, Complex::new(2.0, 0.0));
    /// ```
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        let (s, c) = Float::sin_cos(theta);
        Self { x: r * c, y: r * s }
    }

    /// Real part.
    #[inline]
    pub const fn real(&self) -> f64 {
        self.x
    }

    /// Imaginary part.
    #[inline]
    pub const fn imag(&self) -> f64 {
        self.y
    }
}

// ── Arithmetic ───────────────────────────────────────────────────────

impl Complex {
    #[inline]
    pub fn plus(&self, rhs: &Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }

    #[inline]
    pub fn minus(&self, rhs: &Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }

    #[inline]
    pub fn times(&self, rhs: &Self) -> Self {
        Self::new(
            self.x * rhs.x - self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
        )
    }

    /// Multiply both parts by a real scalar.
    #[inline]
    pub fn scale(&self, d: f64) -> Self {
        Self::new(self.x * d, self.y * d)
    }

    /// `self * conj(rhs) * (1 / |rhs|²)`.
    ///
    /// A zero divisor gives non-finite parts rather than a panic.
    ///
    /// ```
    /// use fxmath::Complex;
    /// let q = Complex::new(1.0, 1.0).divided_by(&Complex::ZERO);
    /// assert!(!q.is_finite());
    /// ```
    #[inline]
    pub fn divided_by(&self, rhs: &Self) -> Self {
        self.times(&rhs.conjugate()).scale(1.0 / rhs.norm())
    }

    /// Divide both parts by a real scalar.
    #[inline]
    pub fn divided_by_real(&self, d: f64) -> Self {
        Self::new(self.x / d, self.y / d)
    }

    /// Conjugate: `(x, -y)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Multiplicative inverse `1 / self`.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::ONE.divided_by(self)
    }

    /// Squared modulus `x² + y²`.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Modulus `sqrt(x² + y²)`.
    #[inline]
    pub fn abs(&self) -> f64 {
        Float::sqrt(self.norm())
    }

    /// Argument in `(-π, π]`, following `atan2`.
    #[inline]
    pub fn arg(&self) -> f64 {
        Float::atan2(self.y, self.x)
    }

    /// Both parts finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Either part NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<f64> for Complex {
    #[inline]
    fn from(x: f64) -> Self {
        Self::new(x, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(z: Complex) -> Self {
        (z.x, z.y)
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.y == 0.0 {
            write!(f, "{}", self.x)
        } else if self.x == 0.0 {
            write!(f, "{}*i", self.y)
        } else if self.y > 0.0 {
            write!(f, "{}+i*{}", self.x, self.y)
        } else {
            write!(f, "{}-i*{}", self.x, -self.y)
        }
    }
}
