use crate::errors::ShapeError;
use std::ops::{Index, IndexMut};

/// Owned square matrix with C layout.
///
/// This is the elimination working buffer, so it only supports what row
/// reduction needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    data: Vec<f64>,
    // invariant: dim * dim == data.len()
    dim: usize,
}

pub type Rows<'a> = std::slice::Chunks<'a, f64>;

impl Matrix {
    fn from_row_major_data(dim: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), dim * dim);
        Matrix { data, dim }
    }

    pub fn identity(dim: usize) -> Self {
        let mut out = Matrix::from_row_major_data(dim, vec![0.0; dim * dim]);
        for i in 0..dim {
            out[(i, i)] = 1.0;
        }
        out
    }

    /// Copies a nested grid, checking that it is square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ShapeError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != dim {
                return Err(ShapeError::NotSquare { row, len: values.len(), dim });
            }
            data.extend_from_slice(values);
        }
        Ok(Matrix { data, dim })
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub fn dim(&self) -> usize { self.dim }

    // (chunks(0) panics, and a 0x0 matrix has no rows anyways)
    pub fn rows(&self) -> Rows { self.data.chunks(self.dim.max(1)) }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.dim..(r + 1) * self.dim]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [f64] {
        &mut self.data[r * self.dim..(r + 1) * self.dim]
    }

    pub fn diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.dim).map(move |i| self[(i, i)])
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(hi * self.dim);
        head[lo * self.dim..(lo + 1) * self.dim].swap_with_slice(&mut tail[..self.dim]);
    }

    /// `self * x`, accumulated in full precision.
    pub fn mul_vec(&self, x: &[f64]) -> Vec<f64> {
        assert_eq!(x.len(), self.dim);
        self.rows()
            .take(self.dim)
            .map(|row| row.iter().zip(x).map(|(a, b)| a * b).sum())
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &f64 { &self.data[r * self.dim + c] }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 { &mut self.data[r * self.dim + c] }
}
