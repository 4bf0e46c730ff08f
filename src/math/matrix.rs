use rand::Rng;

use crate::error::{NetError, Result};
use crate::math::vector::check_len;

/// Dense row-major matrix of `f64`.
///
/// A weight matrix has shape `inputs × outputs`, so a forward step is the
/// row vector of inputs times the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Entries drawn uniformly from [-1, 1).
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Builds a matrix from rows. Rows must be non-empty and of equal length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(NetError::ShapeMismatch {
                what: "matrix rows",
                got: 0,
                expected: 1,
            });
        }
        for row in &data {
            check_len("matrix row", row, cols)?;
        }

        Ok(Matrix { rows, cols, data })
    }

    /// Outer product `u ⊗ v`, shape `u.len() × v.len()`.
    pub fn outer(u: &[f64], v: &[f64]) -> Matrix {
        Matrix {
            rows: u.len(),
            cols: v.len(),
            data: u
                .iter()
                .map(|&a| v.iter().map(|&b| a * b).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row]
    }

    /// Row vector times matrix: `v · self`, with `v.len() == rows`.
    pub fn vec_mul(&self, v: &[f64]) -> Result<Vec<f64>> {
        check_len("row vector times matrix", v, self.rows)?;

        let mut res = vec![0.0; self.cols];
        for (row, &x) in self.data.iter().zip(v) {
            for (acc, &w) in res.iter_mut().zip(row) {
                *acc += x * w;
            }
        }

        Ok(res)
    }

    /// Matrix times column vector: `self · v`, with `v.len() == cols`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        check_len("matrix times column vector", v, self.cols)?;

        Ok(self
            .data
            .iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect())
    }

    /// `self += alpha * other`, in place.
    pub fn scaled_add(&mut self, alpha: f64, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(NetError::ShapeMismatch {
                what: "matrix addition",
                got: other.rows * other.cols,
                expected: self.rows * self.cols,
            });
        }

        for (row, other_row) in self.data.iter_mut().zip(&other.data) {
            for (x, &y) in row.iter_mut().zip(other_row) {
                *x += alpha * y;
            }
        }

        Ok(())
    }
}
