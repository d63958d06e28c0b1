//! Round-robin assignment of output columns to workers.
//!
//! Worker `k` of `w` owns columns `k, k + w, k + 2w, ...` below `len`. The
//! assignment is fixed before any worker starts, which is what lets every
//! worker write its own lane without synchronisation.

use crate::error::{invalid_argument, Result};

/// Strided split of `len` column indices across `workers` workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StridedPartition {
    len: usize,
    workers: usize,
}

impl StridedPartition {
    /// Creates a partition of `0..len` over `workers` workers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::VecmatError::InvalidArgument`] when `workers` is zero.
    pub fn new(len: usize, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(invalid_argument("worker count must be at least 1"));
        }
        Ok(StridedPartition { len, workers })
    }

    /// Columns owned by `worker`, in ascending order.
    ///
    /// Yields nothing for a `worker` at or past the worker count.
    pub fn columns(&self, worker: usize) -> impl Iterator<Item = usize> {
        let start = if worker < self.workers { worker } else { self.len };
        (start..self.len).step_by(self.workers)
    }

    /// Number of columns owned by `worker`.
    pub fn lane_len(&self, worker: usize) -> usize {
        if worker >= self.workers || worker >= self.len {
            return 0;
        }
        (self.len - worker).div_ceil(self.workers)
    }

    /// Worker that owns `column`.
    #[inline(always)]
    pub fn owner(&self, column: usize) -> usize {
        column % self.workers
    }

    /// Column stored at position `slot` of `worker`'s lane.
    #[inline(always)]
    pub fn column_at(&self, worker: usize, slot: usize) -> usize {
        worker + slot * self.workers
    }
}
