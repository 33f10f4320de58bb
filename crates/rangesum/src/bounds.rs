//! Bound checks for 0-based inclusive indices

use crate::error::{Error, Result};

/// Reject `index` unless `index < len`.
pub fn ensure_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Reject `[start, end]` unless `start <= end < len`.
///
/// The ordering check runs first, so `(5, 2)` on a short array reports
/// `InvalidRange` rather than an out-of-range start.
pub fn ensure_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    ensure_index(end, len)
}
