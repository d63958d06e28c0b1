//! Dense row-major matrix storage.
//!
//! A [`Matrix`] owns an [`Array2`] whose shape is fixed at construction. The
//! storage is never handed out mutably, so any number of workers may read it
//! at once during a multiply call.

use std::fmt;

use ndarray::Array2;
use num::Float;

use crate::error::{invalid_argument, Result};

/// An immutable `rows x cols` matrix of floating-point values.
///
/// # Examples
///
/// ```rust,ignore
/// use vecmat::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.multiply_by_vector_left(&[1.0, 1.0], 2)?, vec![4.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    data: Array2<T>,
}

impl<T: Float> Matrix<T> {
    /// Wraps an existing array. The array type already guarantees every row
    /// has the same length, so nothing else is checked.
    pub fn new(data: Array2<T>) -> Self {
        Matrix { data }
    }

    /// Builds a matrix from a list of rows.
    ///
    /// An empty list yields a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`crate::VecmatError::InvalidArgument`] if the rows do not all
    /// have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(invalid_argument(format!(
                "row {} has {} elements, expected {}",
                index,
                row.len(),
                n_cols
            )));
        }

        let flat: Vec<T> = rows.into_iter().flatten().collect();
        Self::from_shape_vec(n_rows, n_cols, flat)
    }

    /// Builds a matrix from row-major flat data.
    ///
    /// # Errors
    ///
    /// Returns [`crate::VecmatError::InvalidArgument`] if
    /// `data.len() != rows * cols`.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = data.len();
        Array2::from_shape_vec((rows, cols), data)
            .map(Matrix::new)
            .map_err(|e| {
                invalid_argument(format!(
                    "cannot shape {} values into a {}x{} matrix: {}",
                    len, rows, cols, e
                ))
            })
    }

    /// Number of rows (R).
    #[inline]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns (C).
    #[inline]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.data.get((row, col)).copied()
    }

    /// Borrows the underlying storage.
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }
}

impl<T: Float + fmt::Display> Matrix<T> {
    /// Writes the matrix to stdout, one row per line.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl<T: Float> From<Array2<T>> for Matrix<T> {
    fn from(data: Array2<T>) -> Self {
        Matrix::new(data)
    }
}

/// Space-separated values, one row per line.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
