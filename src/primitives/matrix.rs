//! Matrix type for 2D numeric data.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows shown before the renderer truncates vertically.
const MAX_ROWS_SHOWN: usize = 10;
/// Columns shown before the renderer truncates horizontally.
const MAX_COLS_SHOWN: usize = 8;

/// A 2D matrix of `f64` values (row-major storage).
///
/// The buffer is a single owned contiguous `Vec` indexed by
/// `row * cols + col`. Operations borrow their inputs and return fresh
/// matrices; nothing is ever mutated in place except through [`Matrix::set`]
/// and [`Matrix::release`].
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)
///     .expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix of zeros.
    ///
    /// Construction is all-or-nothing: on failure no storage is retained.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimensions`] if either dimension is
    /// zero, and [`MatrizError::AllocationFailure`] if the element buffer
    /// cannot be obtained.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrizError::AllocationFailure { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrizError::AllocationFailure { rows, cols })?;
        data.resize(len, 0.0);
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a flat row-major slice.
    ///
    /// The slice must hold at least `rows * cols` values; element `[i][j]`
    /// is taken from `data[i * cols + j]`. Trailing extra values are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NullData`] if the slice is empty or shorter
    /// than `rows * cols`, [`MatrizError::InvalidDimensions`] if either
    /// dimension is zero, and [`MatrizError::AllocationFailure`] if the
    /// buffer cannot be obtained.
    pub fn from_slice(data: &[f64], rows: usize, cols: usize) -> Result<Self> {
        if data.is_empty() {
            return Err(MatrizError::NullData {
                needed: rows.saturating_mul(cols),
                got: 0,
            });
        }
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrizError::AllocationFailure { rows, cols })?;
        if data.len() < len {
            return Err(MatrizError::NullData {
                needed: len,
                got: data.len(),
            });
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| MatrizError::AllocationFailure { rows, cols })?;
        buf.extend_from_slice(&data[..len]);
        Ok(Self {
            data: buf,
            rows,
            cols,
        })
    }

    /// Returns the empty sentinel: zero rows, zero columns, no buffer.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Drops the backing buffer and resets the receiver to the empty
    /// sentinel.
    ///
    /// Idempotent: releasing an already-empty matrix does nothing. The
    /// receiver itself is reset, so stale descriptors cannot survive the
    /// call.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    /// Returns true for the empty sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0 || self.data.is_empty()
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{}x{}", self.rows, self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each output element is accumulated over increasing `k` into a single
    /// sum starting at `0.0`, so the floating-point rounding of a given
    /// product is reproducible across runs.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IncompatibleShapes`] if `self.n_cols()` does
    /// not equal `other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::IncompatibleShapes {
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Renders the matrix as console text.
    ///
    /// Elements are printed to two decimal places, right-aligned to width 6,
    /// space-separated, one bracketed row per line. Matrices wider than 8
    /// columns or taller than 10 rows are truncated to the first 10x8
    /// window: the middle shown row and column are replaced by ellipsis
    /// markers, an ellipsis row follows the shown rows, and a summary line
    /// reports true versus shown dimensions. The empty sentinel renders as
    /// `[Empty matrix]`. Truncation never touches the underlying data.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "[Empty matrix]\n".to_string();
        }

        let truncated = self.rows > MAX_ROWS_SHOWN || self.cols > MAX_COLS_SHOWN;
        let rows_shown = self.rows.min(MAX_ROWS_SHOWN);
        let cols_shown = self.cols.min(MAX_COLS_SHOWN);

        let mut out = String::new();
        for i in 0..rows_shown {
            // Middle shown row stands in for the skipped rows.
            if truncated && self.rows > MAX_ROWS_SHOWN && i == MAX_ROWS_SHOWN / 2 {
                out.push_str("[...");
                for _ in 0..cols_shown.saturating_sub(2) {
                    out.push_str("      ");
                }
                out.push_str("...]\n");
                continue;
            }

            out.push('[');
            for j in 0..cols_shown {
                // Middle shown column stands in for the skipped columns.
                if truncated && self.cols > MAX_COLS_SHOWN && j == MAX_COLS_SHOWN / 2 {
                    out.push_str(" ... ");
                    continue;
                }
                out.push_str(&format!("{:>6.2}", self.get(i, j)));
                if j < cols_shown - 1 {
                    out.push(' ');
                }
            }
            out.push(']');
            if truncated && self.cols > MAX_COLS_SHOWN {
                out.push_str(" ...");
            }
            out.push('\n');
        }

        if truncated && self.rows > MAX_ROWS_SHOWN {
            out.push_str("[...");
            for _ in 0..cols_shown {
                out.push_str(" ... ");
            }
            out.push_str("...]\n");
        }

        if truncated {
            out.push_str(&format!(
                "Matrix {}×{} (showing first {}×{})\n",
                self.rows, self.cols, rows_shown, cols_shown
            ));
        }

        out
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
