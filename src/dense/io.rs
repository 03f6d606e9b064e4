//! Plain text form of a [`DenseMatrix`].
//!
//! ```text
//! 2 3
//! 1 2 3
//! 4 5 6
//! ```
//!
//! The first non-blank line holds the row and column counts. Each of the next
//! `nrows` non-blank lines holds at least `ncols` whitespace-separated values.
//! Anything after the expected tokens on a line is ignored.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use super::{DenseMatrix, MatrixError};
use crate::traits::Scalar;

/// Upper bound on elements reserved before any value has been read.
const MAX_PREALLOC: usize = 4096;

impl<T: Scalar + FromStr> DenseMatrix<T> {
    /// Read a matrix in the plain text form.
    ///
    /// ```
    /// use fxmath::DenseMatrix;
    ///
    /// let text = "2 2\n1.5 -2\n3 4 # trailing note\n";
    /// let m = DenseMatrix::<f64>::read_from(text.as_bytes()).unwrap();
    /// assert_eq!(m[(0, 1)], -2.0);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, MatrixError> {
        let mut lines = reader.lines();
        let mut next_line = || -> Result<Option<String>, MatrixError> {
            for line in lines.by_ref() {
                let line = line?;
                if !line.trim().is_empty() {
                    return Ok(Some(line));
                }
            }
            Ok(None)
        };

        let header = next_line()?.ok_or(MatrixError::UnexpectedEof)?;
        let mut dims = header
            .split_whitespace()
            .map(|tok| tok.parse::<usize>().map_err(|_| MatrixError::InvalidHeader));
        let nrows = dims.next().ok_or(MatrixError::InvalidHeader)??;
        let ncols = dims.next().ok_or(MatrixError::InvalidHeader)??;
        let total = nrows.checked_mul(ncols).ok_or(MatrixError::InvalidHeader)?;
        debug!("reading {nrows}x{ncols} matrix");

        // The header is untrusted; grow with the values actually read.
        let mut data = Vec::with_capacity(total.min(MAX_PREALLOC));
        for row in 0..nrows {
            let line = next_line()?.ok_or(MatrixError::UnexpectedEof)?;
            let mut tokens = line.split_whitespace();
            for col in 0..ncols {
                let tok = tokens.next().ok_or(MatrixError::MissingValue { row, col })?;
                let value = tok
                    .parse::<T>()
                    .map_err(|_| MatrixError::ParseValue { row, col })?;
                data.push(value);
            }
        }

        Ok(Self::from_vec(nrows, ncols, data))
    }
}

impl<T: core::fmt::Display> DenseMatrix<T> {
    /// Write the matrix in the plain text form accepted by
    /// [`read_from`](DenseMatrix::read_from).
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), MatrixError> {
        writeln!(writer, "{} {}", self.nrows, self.ncols)?;
        for i in 0..self.nrows {
            let row = &self.data[i * self.ncols..(i + 1) * self.ncols];
            let mut first = true;
            for value in row {
                if first {
                    write!(writer, "{value}")?;
                    first = false;
                } else {
                    write!(writer, " {value}")?;
                }
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
