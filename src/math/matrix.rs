use rand::Rng;
use serde::{Serialize, Deserialize};

/// Dense row-major matrix. `data[i][j]` is row `i`, column `j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Independent uniform samples in `[-0.5, 0.5)`.
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() - 0.5;
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }

    /// Row vector times matrix: `out[j] = Σ_i v[i] * self[i][j]`.
    ///
    /// # Panics
    /// Panics if `v.len() != self.rows`.
    pub fn left_mul(&self, v: &[f64]) -> Vec<f64> {
        if v.len() != self.rows {
            panic!("Matrices are of incorrect sizes: vector of {} against {} rows", v.len(), self.rows)
        }

        let mut res = vec![0.0; self.cols];
        for j in 0..self.cols {
            let mut sum = 0.0;
            for i in 0..self.rows {
                sum += v[i] * self.data[i][j];
            }
            res[j] = sum;
        }
        res
    }

    /// Matrix times column vector: `out[i] = Σ_j self[i][j] * v[j]`.
    /// Carries a delta back through the weights that produced it.
    ///
    /// # Panics
    /// Panics if `v.len() != self.cols`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        if v.len() != self.cols {
            panic!("Matrices are of incorrect sizes: vector of {} against {} cols", v.len(), self.cols)
        }

        self.data.iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect()
    }

    /// Online update `w[i][j] -= lr * delta[j] * upstream[i]`, returned as a new matrix.
    pub fn outer_step(&self, upstream: &[f64], delta: &[f64], lr: f64) -> Matrix {
        if upstream.len() != self.rows || delta.len() != self.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = self.clone();
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] -= lr * delta[j] * upstream[i];
            }
        }
        res
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
