use core::fmt::Debug;
use num_traits::Zero;

/// Trait for types that can be stored in a [`DenseMatrix`](crate::DenseMatrix).
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, the integer types, and [`Complex`](crate::Complex).
pub trait Scalar: Copy + PartialEq + Debug + Zero {}

impl<T: Copy + PartialEq + Debug + Zero> Scalar for T {}

/// Read-only access to a rectangular grid addressed by `(row, col)`.
///
/// Lets code consume a matrix without depending on how it is stored.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    /// Element at `(row, col)`. Panics when either index is out of range.
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
