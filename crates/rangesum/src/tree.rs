//! Prefix-sum tree (binary indexed tree)
//!
//! Positions are 1-based. Slot `i` of the accumulator buffer holds the sum of
//! the `lowbit(i)` elements ending at position `i`, so both update and prefix
//! query touch at most `log2(size) + 1` slots.
//!
//! Accumulators wrap modulo 2^64. Intermediate slots may wrap, but any sum
//! whose true value fits in `i64` comes out exact.

use tracing::debug;

use crate::error::{Error, Result};

/// Fixed-size prefix-sum tree with O(log n) point update and range query
#[derive(Debug, Clone)]
pub struct IndexedRangeSum {
    size: usize,
    /// `size + 1` slots; slot 0 is unused
    tree: Vec<i64>,
}

impl IndexedRangeSum {
    /// Create a tree of `size` zero-valued positions
    pub fn new(size: usize) -> Self {
        Self {
            size,
            tree: vec![0; size + 1],
        }
    }

    /// Seed the tree with `values`, one per position
    ///
    /// Each value is added through [`update`](Self::update), so building on a
    /// non-empty tree accumulates on top of its current contents.
    ///
    /// # Errors
    /// * `SizeMismatch` - `values.len()` differs from the tree size
    pub fn build(&mut self, values: &[i64]) -> Result<()> {
        if values.len() != self.size {
            return Err(Error::SizeMismatch {
                expected: self.size,
                actual: values.len(),
            });
        }

        for (i, &value) in values.iter().enumerate() {
            self.add(i + 1, value);
        }

        debug!(size = self.size, "built prefix-sum tree");
        Ok(())
    }

    /// Add `delta` to position `i` (1-based)
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `i` is 0 or greater than the tree size
    pub fn update(&mut self, i: usize, delta: i64) -> Result<()> {
        if i == 0 || i > self.size {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.size,
            });
        }
        self.add(i, delta);
        Ok(())
    }

    /// Sum of the first `i` positions; `query(0)` is 0
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `i` is greater than the tree size
    pub fn query(&self, i: usize) -> Result<i64> {
        if i > self.size {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.size,
            });
        }
        Ok(self.prefix(i))
    }

    /// Inclusive sum over positions `[l, r]` (1-based)
    ///
    /// # Errors
    /// * `InvalidRange` - `l > r`
    /// * `IndexOutOfRange` - `l` is 0 or `r` is greater than the tree size
    pub fn range_sum(&self, l: usize, r: usize) -> Result<i64> {
        if l > r {
            return Err(Error::InvalidRange { start: l, end: r });
        }
        if l == 0 {
            return Err(Error::IndexOutOfRange {
                index: l,
                len: self.size,
            });
        }
        Ok(self.query(r)?.wrapping_sub(self.prefix(l - 1)))
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree has no positions
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn add(&mut self, mut i: usize, delta: i64) {
        while i <= self.size {
            self.tree[i] = self.tree[i].wrapping_add(delta);
            i += lowbit(i);
        }
    }

    fn prefix(&self, mut i: usize) -> i64 {
        let mut sum: i64 = 0;
        while i > 0 {
            sum = sum.wrapping_add(self.tree[i]);
            i -= lowbit(i);
        }
        sum
    }
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(values: &[i64]) -> IndexedRangeSum {
        let mut tree = IndexedRangeSum::new(values.len());
        tree.build(values).unwrap();
        tree
    }

    #[test]
    fn test_prefix_query() {
        let tree = built(&[1, 2, 3, 4, 5]);

        assert_eq!(tree.query(0).unwrap(), 0);
        assert_eq!(tree.query(1).unwrap(), 1);
        assert_eq!(tree.query(3).unwrap(), 6);
        assert_eq!(tree.query(5).unwrap(), 15);
    }

    #[test]
    fn test_range_sum() {
        let tree = built(&[1, 2, 3, 4, 5]);

        assert_eq!(tree.range_sum(2, 4).unwrap(), 9);
        assert_eq!(tree.range_sum(1, 5).unwrap(), 15);
        assert_eq!(tree.range_sum(3, 3).unwrap(), 3);
    }

    #[test]
    fn test_update_propagates() {
        let mut tree = built(&[1, 2, 3, 4, 5]);

        tree.update(3, 7).unwrap(); // 3 -> 10

        assert_eq!(tree.range_sum(2, 4).unwrap(), 16);
        assert_eq!(tree.query(2).unwrap(), 3);
        assert_eq!(tree.query(5).unwrap(), 22);
    }

    #[test]
    fn test_negative_values() {
        let mut tree = built(&[-4, 6, -1, 0, 3, -8, 2]);

        assert_eq!(tree.query(7).unwrap(), -2);
        assert_eq!(tree.range_sum(2, 5).unwrap(), 8);

        tree.update(6, 8).unwrap();
        assert_eq!(tree.query(7).unwrap(), 6);
    }

    #[test]
    fn test_extreme_values() {
        // Slot 2 holds MAX + 1 internally
        let mut tree = built(&[1, 1]);
        tree.update(1, i64::MAX - 1).unwrap();

        assert_eq!(tree.range_sum(1, 1).unwrap(), i64::MAX);
        assert_eq!(tree.range_sum(2, 2).unwrap(), 1);

        let mut tree = built(&[i64::MAX, i64::MIN, i64::MAX, -1]);

        assert_eq!(tree.query(2).unwrap(), -1);
        assert_eq!(tree.range_sum(2, 3).unwrap(), -1);
        assert_eq!(tree.range_sum(3, 4).unwrap(), i64::MAX - 1);
        assert_eq!(tree.query(4).unwrap(), i64::MAX - 2);

        tree.update(2, i64::MAX).unwrap(); // MIN -> -1
        assert_eq!(tree.range_sum(2, 2).unwrap(), -1);
        assert_eq!(tree.range_sum(1, 2).unwrap(), i64::MAX - 1);
    }

    #[test]
    fn test_matches_naive_sums() {
        let values: Vec<i64> = (0..37).map(|i| (i * 7 % 11) - 5).collect();
        let tree = built(&values);

        for l in 1..=values.len() {
            for r in l..=values.len() {
                let expected: i64 = values[l - 1..r].iter().sum();
                assert_eq!(tree.range_sum(l, r).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_build_size_mismatch() {
        let mut tree = IndexedRangeSum::new(3);

        assert_eq!(
            tree.build(&[1, 2]),
            Err(Error::SizeMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(tree.query(3).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range() {
        let mut tree = built(&[1, 2, 3]);

        assert!(tree.update(0, 1).is_err());
        assert!(tree.update(4, 1).is_err());
        assert!(tree.query(4).is_err());
        assert!(tree.range_sum(0, 2).is_err());
        assert!(tree.range_sum(2, 4).is_err());
        assert_eq!(
            tree.range_sum(3, 2),
            Err(Error::InvalidRange { start: 3, end: 2 })
        );
        // Rejected updates leave the sums untouched
        assert_eq!(tree.query(3).unwrap(), 6);
    }

    #[test]
    fn test_empty_tree() {
        let mut tree = IndexedRangeSum::new(0);

        assert!(tree.is_empty());
        assert!(tree.build(&[]).is_ok());
        assert_eq!(tree.query(0).unwrap(), 0);
        assert!(tree.range_sum(1, 1).is_err());
    }
}
