//! `vecmat` - row-vector by matrix multiplication across worker threads.
//!
//! This crate provides:
//! - A dense, immutable [`Matrix`] backed by `ndarray`
//! - Left multiplication `v * M` with the output columns split round-robin
//!   across a caller-chosen number of Rayon worker threads
//! - The [`StridedPartition`] that decides which worker owns which column
//! - Random integer-valued matrices and vectors for demos and tests
//!
//! ```rust,ignore
//! use vecmat::{generate, generate_vector, Matrix};
//!
//! let m: Matrix<f64> = generate(6, 6);
//! let v: Vec<f64> = generate_vector(6);
//! let sequential = m.multiply_by_vector_left(&v, 1)?;
//! let parallel = m.multiply_by_vector_left(&v, 4)?;
//! assert_eq!(sequential, parallel);
//! ```

pub mod error;
pub mod generate;
pub mod matrix;
pub mod multiply;
pub mod partition;
pub mod utils;

pub use error::{Result, VecmatError};
pub use generate::{generate, generate_vector, generate_vector_with, generate_with};
pub use matrix::Matrix;
pub use multiply::multiply;
pub use partition::StridedPartition;
