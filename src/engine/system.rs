use crate::errors::ShapeError;
use crate::matrix::Matrix;
use crate::numeric::snap_zero;

use std::ops::Range;

/// An `N x N` coefficient matrix together with its `N` constants.
///
/// This is the engine's private working copy.  Arithmetic row operations
/// keep full precision, except that any entry they write whose magnitude is
/// below epsilon becomes exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSystem {
    matrix: Matrix,
    vector: Vec<f64>,
}

impl AugmentedSystem {
    /// Copies the caller's data.  Nothing the engine does afterwards can
    /// reach the originals.
    pub fn from_parts(matrix: &[Vec<f64>], vector: &[f64]) -> Result<Self, ShapeError> {
        let matrix = Matrix::from_rows(matrix)?;
        if vector.len() != matrix.dim() {
            return Err(ShapeError::VectorLength { len: vector.len(), dim: matrix.dim() });
        }
        Ok(AugmentedSystem { matrix, vector: vector.to_vec() })
    }

    pub fn dim(&self) -> usize { self.matrix.dim() }
    pub fn matrix(&self) -> &Matrix { &self.matrix }
    pub fn vector(&self) -> &[f64] { &self.vector }

    #[inline]
    pub fn coeff(&self, row: usize, col: usize) -> f64 { self.matrix[(row, col)] }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.matrix.swap_rows(a, b);
        self.vector.swap(a, b);
    }

    /// `R_target -= factor * R_source`, restricted to `cols` of the matrix
    /// (the constant is always updated).
    pub fn subtract_row_multiple(&mut self, target: usize, source: usize, factor: f64, cols: Range<usize>) {
        assert_ne!(target, source);
        for c in cols {
            let value = self.matrix[(target, c)] - factor * self.matrix[(source, c)];
            self.matrix[(target, c)] = snap_zero(value);
        }
        let value = self.vector[target] - factor * self.vector[source];
        self.vector[target] = snap_zero(value);
    }

    /// `R_row /= divisor`, over the whole row and its constant.
    pub fn divide_row(&mut self, row: usize, divisor: f64) {
        for x in self.matrix.row_mut(row) {
            *x = snap_zero(*x / divisor);
        }
        self.vector[row] = snap_zero(self.vector[row] / divisor);
    }
}
