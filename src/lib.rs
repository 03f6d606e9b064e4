//! # fxmath
//!
//! Complex numbers with symmetric n-th root extraction and branch-selectable
//! logarithms, plus an owned dense matrix for sample grids. no-std
//! compatible; the matrix needs `alloc`.
//!
//! ## Quick start
//!
//! ```
//! use fxmath::Complex;
//! use core::f64::consts::PI;
//!
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.abs(), 5.0);
//!
//! // The four fourth roots of unity, principal first.
//! let roots = Complex::ONE.nth_roots(4).unwrap();
//! assert!((roots[2] - Complex::new(-1.0, 0.0)).abs() < 1e-15);
//!
//! // Pick the logarithm branch centred on 2π instead of 0.
//! let l = Complex::new(-1.0, 0.0).log_branch(2.0 * PI);
//! assert!((l.imag() - 3.0 * PI).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`complex`] — [`Complex`] value type: arithmetic (methods and operators),
//!   polar form, integer powers by binary exponentiation, principal and
//!   all-n n-th roots, `exp`, hyperbolic and trigonometric functions, and
//!   `log` with caller-chosen branch. Floating point faults propagate as
//!   `±∞`/NaN instead of errors.
//!
//! - [`dense`] — Heap-allocated `DenseMatrix<T>` with runtime dimensions,
//!   row-major `Vec<T>` storage and bounds-checked `(row, col)` indexing.
//!   Plain text reader/writer with the `std` feature.
//!
//! - [`samples`] — Power-of-two length rounding and zero-padding of sample
//!   rows.
//!
//! - [`traits`] — [`Scalar`] element bound and [`MatrixRef`] / [`MatrixMut`]
//!   grid access.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Hardware FPU via system libm, text I/O, `std::error::Error` |
//! | `alloc` | via std | `DenseMatrix`, sample helpers, `Complex::nth_roots` |
//!
//! Without `std`, float intrinsics come from the pure-Rust `libm` backend of
//! `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod complex;
#[cfg(feature = "alloc")]
pub mod dense;
#[cfg(feature = "alloc")]
pub mod samples;
pub mod traits;

pub use complex::{Complex, ComplexError};
#[cfg(feature = "alloc")]
pub use dense::{DenseMatrix, MatrixError};
#[cfg(feature = "alloc")]
pub use samples::SampleError;
pub use traits::{MatrixMut, MatrixRef, Scalar};
