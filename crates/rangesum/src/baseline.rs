//! Direct-summation array used as a reference for the cached array

use crate::bounds::{ensure_index, ensure_range};
use crate::error::Result;
use crate::RangeSumArray;

/// Plain array answering every range sum by summing the slice
///
/// O(n) per query, O(1) per update. No derived state, so it cannot go stale.
#[derive(Debug, Clone, Default)]
pub struct NonCachedArray {
    array: Vec<i64>,
}

impl NonCachedArray {
    /// Wrap an initial snapshot of values
    pub fn new(values: Vec<i64>) -> Self {
        Self { array: values }
    }

    /// Inclusive sum over `[start, end]` (0-based)
    ///
    /// Wraps like the prefix-sum tree, so the two agree on extreme values.
    pub fn range_sum(&self, start: usize, end: usize) -> Result<i64> {
        ensure_range(start, end, self.array.len())?;
        Ok(self.array[start..=end]
            .iter()
            .fold(0i64, |sum, &v| sum.wrapping_add(v)))
    }

    /// Set the element at `index` (0-based)
    pub fn update(&mut self, index: usize, value: i64) -> Result<()> {
        ensure_index(index, self.array.len())?;
        self.array[index] = value;
        Ok(())
    }

    /// Current value at `index`
    pub fn value(&self, index: usize) -> Result<i64> {
        ensure_index(index, self.array.len())?;
        Ok(self.array[index])
    }

    /// Copy of the current contents
    pub fn to_vec(&self) -> Vec<i64> {
        self.array.clone()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the array is empty
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }
}

impl RangeSumArray for NonCachedArray {
    fn range_sum(&mut self, start: usize, end: usize) -> Result<i64> {
        NonCachedArray::range_sum(self, start, end)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<()> {
        NonCachedArray::update(self, index, value)
    }

    fn len(&self) -> usize {
        self.array.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_baseline_sum_and_update() {
        let mut arr = NonCachedArray::new(vec![1, 2, 3, 4, 5]);

        assert_eq!(arr.range_sum(1, 3).unwrap(), 9);

        arr.update(2, 10).unwrap();
        assert_eq!(arr.range_sum(1, 3).unwrap(), 16);
        assert_eq!(arr.value(2).unwrap(), 10);
        assert_eq!(arr.to_vec(), vec![1, 2, 10, 4, 5]);
    }

    #[test]
    fn test_baseline_extreme_values() {
        let arr = NonCachedArray::new(vec![i64::MAX, 1, -1, i64::MIN]);

        assert_eq!(arr.range_sum(0, 2).unwrap(), i64::MAX);
        assert_eq!(arr.range_sum(0, 3).unwrap(), -1);
    }

    #[test]
    fn test_baseline_bounds() {
        let mut arr = NonCachedArray::new(vec![1, 2, 3]);

        assert_eq!(
            arr.range_sum(0, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            arr.range_sum(2, 1),
            Err(Error::InvalidRange { start: 2, end: 1 })
        );
        assert!(arr.update(3, 0).is_err());
        assert_eq!(arr.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_baseline_through_trait() {
        fn total<A: RangeSumArray>(arr: &mut A) -> i64 {
            let end = arr.len() - 1;
            arr.range_sum(0, end).unwrap()
        }

        let mut arr = NonCachedArray::new(vec![5, 5, 5, 5]);
        assert_eq!(total(&mut arr), 20);
        assert!(!RangeSumArray::is_empty(&arr));
    }
}
