//! Helpers for rows of samples stored in a [`DenseMatrix`].
//!
//! Each matrix row is one trace of samples. Transform code usually wants
//! power-of-two lengths, so traces are zero-padded on the right.

use core::fmt;

use log::trace;

use crate::dense::DenseMatrix;
use crate::traits::Scalar;

/// Errors from the sample helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// A length of zero has no power-of-two ceiling.
    ZeroLength,
    /// The next power of two does not fit in `usize`.
    Overflow,
    /// The requested length is not longer than the current row length.
    NoRoomForPadding { ncols: usize, length: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "length must be at least 1"),
            Self::Overflow => write!(f, "next power of two overflows usize"),
            Self::NoRoomForPadding { ncols, length } => {
                write!(f, "no room for padding: {ncols} columns, requested {length}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SampleError {}

/// Smallest power of two `>= x`.
///
/// ```
/// use fxmath::samples::next_pow2;
/// assert_eq!(next_pow2(1), Ok(1));
/// assert_eq!(next_pow2(5), Ok(8));
/// assert_eq!(next_pow2(64), Ok(64));
/// ```
pub fn next_pow2(x: usize) -> Result<usize, SampleError> {
    if x == 0 {
        return Err(SampleError::ZeroLength);
    }
    x.checked_next_power_of_two().ok_or(SampleError::Overflow)
}

/// Copy `source` into a wider matrix, zero-filling columns `ncols..length`.
///
/// `length` must be strictly greater than `source.ncols()`.
///
/// ```
/// use fxmath::DenseMatrix;
/// use fxmath::samples::pad_samples;
///
/// let m = DenseMatrix::from_rows(1, 3, &[1.0, 2.0, 3.0]);
/// let p = pad_samples(&m, 4).unwrap();
/// assert_eq!(p.row(0), &[1.0, 2.0, 3.0, 0.0]);
/// ```
pub fn pad_samples<T: Scalar>(
    source: &DenseMatrix<T>,
    length: usize,
) -> Result<DenseMatrix<T>, SampleError> {
    let ncols = source.ncols();
    if length <= ncols {
        return Err(SampleError::NoRoomForPadding { ncols, length });
    }
    trace!("padding {} rows from {ncols} to {length} samples", source.nrows());

    let mut result = DenseMatrix::zeros(source.nrows(), length);
    for i in 0..source.nrows() {
        result.row_mut(i)[..ncols].copy_from_slice(source.row(i));
    }
    Ok(result)
}

/// Pad every row up to the next power of two.
///
/// Rows that already have a power-of-two length come back unchanged.
pub fn pad_to_pow2<T: Scalar>(source: &DenseMatrix<T>) -> Result<DenseMatrix<T>, SampleError> {
    let length = next_pow2(source.ncols())?;
    if length == source.ncols() {
        return Ok(source.clone());
    }
    pad_samples(source, length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_pow2_values() {
        assert_eq!(next_pow2(1), Ok(1));
        assert_eq!(next_pow2(2), Ok(2));
        assert_eq!(next_pow2(3), Ok(4));
        assert_eq!(next_pow2(1000), Ok(1024));
        assert_eq!(next_pow2(1 << 20), Ok(1 << 20));
        assert_eq!(next_pow2((1 << 20) + 1), Ok(1 << 21));
    }

    #[test]
    fn next_pow2_errors() {
        assert_eq!(next_pow2(0), Err(SampleError::ZeroLength));
        assert_eq!(next_pow2(usize::MAX), Err(SampleError::Overflow));
    }

    #[test]
    fn pad_keeps_prefix_and_zero_fills() {
        let m = DenseMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let p = pad_samples(&m, 5).unwrap();
        assert_eq!(p.nrows(), 2);
        assert_eq!(p.ncols(), 5);
        assert_eq!(p.row(0), &[1.0, 2.0, 3.0, 0.0, 0.0]);
        assert_eq!(p.row(1), &[4.0, 5.0, 6.0, 0.0, 0.0]);
    }

    #[test]
    fn pad_requires_room() {
        let m = DenseMatrix::from_rows(1, 3, &[1, 2, 3]);
        assert_eq!(
            pad_samples(&m, 3).unwrap_err(),
            SampleError::NoRoomForPadding { ncols: 3, length: 3 }
        );
        assert!(pad_samples(&m, 2).is_err());
    }

    #[test]
    fn pad_empty_rows() {
        let m = DenseMatrix::<f64>::zeros(0, 3);
        let p = pad_samples(&m, 8).unwrap();
        assert_eq!((p.nrows(), p.ncols()), (0, 8));
    }

    #[test]
    fn pad_to_pow2_widths() {
        let m = DenseMatrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
        let p = pad_to_pow2(&m).unwrap();
        assert_eq!(p.ncols(), 4);
        assert_eq!(p.row(1), &[4, 5, 6, 0]);

        let square = DenseMatrix::from_rows(1, 4, &[1, 2, 3, 4]);
        assert_eq!(pad_to_pow2(&square).unwrap(), square);

        let empty = DenseMatrix::<f64>::zeros(2, 0);
        assert_eq!(pad_to_pow2(&empty).unwrap_err(), SampleError::ZeroLength);
    }
}
