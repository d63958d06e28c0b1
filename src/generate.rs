//! Random demo and test data.
//!
//! Entries are whole numbers drawn uniformly from `0..=10`, which keeps
//! printed output short and products exact in floating point.

use ndarray::Array2;
use num::Float;
use rand::Rng;

use crate::matrix::Matrix;

/// Largest value an entry can take.
pub const MAX_ENTRY: u8 = 10;

#[inline(always)]
fn entry<T: Float + From<u8>, R: Rng>(rng: &mut R) -> T {
    <T as From<u8>>::from(rng.random_range(0..=MAX_ENTRY))
}

/// Generates a `rows x cols` matrix using the thread-local RNG.
pub fn generate<T: Float + From<u8>>(rows: usize, cols: usize) -> Matrix<T> {
    generate_with(&mut rand::rng(), rows, cols)
}

/// Generates a `rows x cols` matrix from `rng`.
pub fn generate_with<T: Float + From<u8>, R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
) -> Matrix<T> {
    Matrix::new(Array2::from_shape_simple_fn((rows, cols), || entry(rng)))
}

/// Generates a vector of `size` entries using the thread-local RNG.
pub fn generate_vector<T: Float + From<u8>>(size: usize) -> Vec<T> {
    generate_vector_with(&mut rand::rng(), size)
}

/// Generates a vector of `size` entries from `rng`.
pub fn generate_vector_with<T: Float + From<u8>, R: Rng>(
    rng: &mut R,
    size: usize,
) -> Vec<T> {
    (0..size).map(|_| entry(rng)).collect()
}
