//! # rangesum
//!
//! Mutable integer arrays with range-sum queries.
//!
//! ## Contents
//! - **IndexedRangeSum**: 1-based prefix-sum tree, O(log n) update and query
//! - **NonCachedArray**: direct-summation baseline for differential testing
//! - **RangeSumArray**: the query/update interface both arrays share
//!
//! External callers use 0-based inclusive bounds; only the tree itself is
//! 1-based.

#![warn(missing_docs)]

mod baseline;
mod bounds;
mod error;
mod tree;

pub use baseline::NonCachedArray;
pub use bounds::{ensure_index, ensure_range};
pub use error::{Error, Result};
pub use tree::IndexedRangeSum;

/// Query/update interface shared by the cached and uncached arrays.
///
/// All bounds are 0-based and inclusive.
pub trait RangeSumArray {
    /// Sum of the elements in `[start, end]`.
    fn range_sum(&mut self, start: usize, end: usize) -> Result<i64>;

    /// Set the element at `index` to `value`.
    fn update(&mut self, index: usize, value: i64) -> Result<()>;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the array has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
