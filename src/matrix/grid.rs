use std::ops::Index;

use rand::Rng;

use crate::error::{ContentionError, Result};
use crate::matrix::naive_ijk::matmul_naive_ijk;

/// Row-major matrix of `i64` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// A `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Wraps row-major `data`.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "expected {}x{}={} elements",
            rows,
            cols,
            rows * cols
        );
        Self { rows, cols, data }
    }

    /// Fills a `rows × cols` matrix with integers drawn uniformly from `0..=9`.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| rng.gen_range(0..=9)).collect();
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data
    }

    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Reference product computed on the calling thread.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(ContentionError::DimensionMismatch {
                left: self.cols,
                right: rhs.rows,
            });
        }
        let mut out = Matrix::zeros(self.rows, rhs.cols);
        matmul_naive_ijk(
            &self.data,
            &rhs.data,
            &mut out.data,
            self.rows,
            self.cols,
            rhs.cols,
        );
        Ok(out)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds", i, j);
        &self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_cells_are_single_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(17, 23, &mut rng);

        assert_eq!(m.as_slice().len(), 17 * 23);
        assert!(m.as_slice().iter().all(|&v| (0..=9).contains(&v)));
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let a = Matrix::random(8, 8, &mut StdRng::seed_from_u64(42));
        let b = Matrix::random(8, 8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_multiply_rejects_mismatched_inner() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(4, 2);
        assert!(matches!(
            a.multiply(&b),
            Err(ContentionError::DimensionMismatch { left: 3, right: 4 })
        ));
    }

    #[test]
    fn test_index_and_row() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.row(0), &[1, 2, 3]);
    }
}
