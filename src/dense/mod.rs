//! Owned, heap-allocated matrix with runtime dimensions.

#[cfg(feature = "std")]
mod io;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Errors from building or reading a [`DenseMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Element count does not match `nrows * ncols`.
    LengthMismatch { expected: usize, got: usize },
    /// The header line is missing its row or column count.
    InvalidHeader,
    /// Input ended before every row was read.
    UnexpectedEof,
    /// A data line has fewer than `ncols` values.
    MissingValue { row: usize, col: usize },
    /// A value could not be parsed.
    ParseValue { row: usize, col: usize },
    /// The underlying reader or writer failed.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "expected {expected} elements, got {got}")
            }
            Self::InvalidHeader => write!(f, "invalid matrix header"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::MissingValue { row, col } => write!(f, "missing value at ({row}, {col})"),
            Self::ParseValue { row, col } => write!(f, "unparseable value at ({row}, {col})"),
            #[cfg(feature = "std")]
            Self::Io(kind) => write!(f, "i/o error: {kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for MatrixError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.kind())
    }
}

/// Dense `nrows x ncols` matrix.
///
/// Row-major `Vec<T>` storage: element `(i, j)` lives at `i * ncols + j`, so
/// each row is a contiguous slice. Indexing checks the row and the column
/// separately, so an overlong column never reads into the next row.
///
/// # Examples
///
/// ```
/// use fxmath::DenseMatrix;
///
/// let a = DenseMatrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(a[(1, 0)], 4.0);
/// assert_eq!(a.row(0), &[1.0, 2.0, 3.0]);
/// assert_eq!(a.get(0, 3), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use fxmath::DenseMatrix;
    /// let m = DenseMatrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create a matrix with every element set to `value`.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a flat row-major slice.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Fallible [`from_rows`](Self::from_rows).
    ///
    /// ```
    /// use fxmath::DenseMatrix;
    /// use fxmath::dense::MatrixError;
    ///
    /// let err = DenseMatrix::try_from_rows(2, 2, &[1.0_f64, 2.0, 3.0]).unwrap_err();
    /// assert_eq!(err, MatrixError::LengthMismatch { expected: 4, got: 3 });
    /// ```
    pub fn try_from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self, MatrixError> {
        if row_major.len() != nrows * ncols {
            return Err(MatrixError::LengthMismatch {
                expected: nrows * ncols,
                got: row_major.len(),
            });
        }
        Ok(Self::from_rows(nrows, ncols, row_major))
    }
}

impl<T> DenseMatrix<T> {
    /// Take ownership of a row-major `Vec<T>`.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use fxmath::DenseMatrix;
    /// let m = DenseMatrix::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
    /// assert_eq!(m[(1, 0)], 2.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Underlying row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Underlying row-major storage, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row `i` as a contiguous slice. Panics if `i >= nrows`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {i} out of range for {} rows", self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row `i` as a mutable slice. Panics if `i >= nrows`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.nrows, "row {i} out of range for {} rows", self.nrows);
        let n = self.ncols;
        &mut self.data[i * n..(i + 1) * n]
    }

    /// Element at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.nrows && col < self.ncols {
            self.data.get(row * self.ncols + col)
        } else {
            None
        }
    }

    /// Mutable element at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.nrows && col < self.ncols {
            self.data.get_mut(row * self.ncols + col)
        } else {
            None
        }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use fxmath::{Complex, DenseMatrix};
    /// let m = DenseMatrix::from_rows(1, 2, &[1.0, -4.0]);
    /// let z = m.map(|x: f64| Complex::from(x).sqrt());
    /// assert_eq!(z[(0, 0)], Complex::ONE);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DenseMatrix<U>
    where
        T: Copy,
    {
        DenseMatrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.nrows,
            self.ncols,
        );
        row * self.ncols + col
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DenseMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self[(row, col)]
    }
}

impl<T> MatrixMut<T> for DenseMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let k = self.offset(row, col);
        &mut self.data[k]
    }
}
