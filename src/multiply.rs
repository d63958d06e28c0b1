//! Left multiplication `v * M` split across worker threads.
//!
//! Parallelism strategy:
//! - The `C` output columns are split with a [`StridedPartition`]: worker `k`
//!   owns columns `k, k + w, k + 2w, ...`. Uneven splits cost at most one
//!   column of imbalance.
//! - A dedicated Rayon pool is built for the call and dropped when it returns.
//!   Only workers that own at least one column get a thread, so the pool has
//!   `min(w, C)` threads (at least one). One task per such worker is spawned
//!   into a scope; the end of the scope is the join barrier.
//! - Each task gets shared borrows of the matrix and vector and an exclusive
//!   lane holding only its own columns, so no locks or atomics are needed.
//!   Lanes are scattered into the result once every task has finished.
//!
//! ```text
//! C = 7, w = 3
//!   worker 0 -> lane [r0, r3, r6]
//!   worker 1 -> lane [r1, r4]
//!   worker 2 -> lane [r2, r5]
//! ```

use log::{debug, trace};
use ndarray::Array2;
use num::Float;
use rayon::ThreadPoolBuilder;

use crate::{
    error::{invalid_argument, thread_pool_error, Result},
    matrix::Matrix,
    partition::StridedPartition,
};

impl<T: Float + Send + Sync> Matrix<T> {
    /// Computes `vector * self`, splitting the columns across `worker_count`
    /// worker threads.
    ///
    /// `result[j] = sum over i of vector[i] * self[i][j]`, for `j` in
    /// `0..self.cols()`. The call blocks until every worker has finished and
    /// returns a freshly allocated vector of length `self.cols()`.
    ///
    /// A `worker_count` of 1 runs the whole product on a single worker and is
    /// equivalent to the sequential definition. Workers beyond `self.cols()`
    /// own no columns, so no thread or lane is created for them.
    ///
    /// # Errors
    ///
    /// - [`crate::VecmatError::InvalidArgument`] if `vector.len() != self.rows()`
    ///   or `worker_count == 0`. Nothing is computed in either case.
    /// - [`crate::VecmatError::ThreadPool`] if the worker threads cannot be
    ///   started.
    pub fn multiply_by_vector_left(&self, vector: &[T], worker_count: usize) -> Result<Vec<T>> {
        if vector.len() != self.rows() {
            return Err(invalid_argument(format!(
                "vector length must equal matrix row count (vector has {} elements, matrix has {} rows)",
                vector.len(),
                self.rows()
            )));
        }

        let partition = StridedPartition::new(self.cols(), worker_count)?;

        // Workers at or past `cols()` own nothing; the stride stays `worker_count`.
        let active = worker_count.min(self.cols()).max(1);

        debug!(
            "multiplying {}x{} matrix from the left with {} workers ({} active)",
            self.rows(),
            self.cols(),
            worker_count,
            active
        );

        let pool = ThreadPoolBuilder::new()
            .num_threads(active)
            .thread_name(|i| format!("vecmat-worker-{i}"))
            .build()
            .map_err(|e| thread_pool_error(active, e.to_string()))?;

        let mut lanes: Vec<Vec<T>> = (0..active)
            .map(|worker| vec![T::zero(); partition.lane_len(worker)])
            .collect();

        let data = self.as_array();
        pool.scope(|s| {
            for (worker, lane) in lanes.iter_mut().enumerate() {
                s.spawn(move |_| {
                    accumulate_lane(data, vector, &partition, worker, lane);
                    trace!("worker {} finished {} columns", worker, lane.len());
                });
            }
        });

        let mut result = vec![T::zero(); self.cols()];
        for (worker, lane) in lanes.into_iter().enumerate() {
            for (slot, value) in lane.into_iter().enumerate() {
                result[partition.column_at(worker, slot)] = value;
            }
        }

        Ok(result)
    }
}

/// Fills `lane` with the dot products for the columns `worker` owns.
///
/// Each column uses a single accumulator and scans the rows in order.
#[inline(always)]
fn accumulate_lane<T: Float>(
    matrix: &Array2<T>,
    vector: &[T],
    partition: &StridedPartition,
    worker: usize,
    lane: &mut [T],
) {
    for (out, col) in lane.iter_mut().zip(partition.columns(worker)) {
        *out = vector
            .iter()
            .zip(matrix.column(col))
            .fold(T::zero(), |sum, (&v, &m)| sum + v * m);
    }
}

/// Computes `vector * matrix` with `worker_count` workers.
///
/// Free-function form of [`Matrix::multiply_by_vector_left`].
pub fn multiply<T: Float + Send + Sync>(
    matrix: &Matrix<T>,
    vector: &[T],
    worker_count: usize,
) -> Result<Vec<T>> {
    matrix.multiply_by_vector_left(vector, worker_count)
}
