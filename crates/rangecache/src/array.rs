//! CachedRangeArray: LRU-cached range sums over a prefix-sum tree

use rangesum::{ensure_index, ensure_range, IndexedRangeSum, RangeSumArray, Result};
use tracing::debug;

use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cache capacity used by [`CachedRangeArray::with_default_capacity`]
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Mutable integer array with cached range-sum queries
///
/// Every cached `(start, end)` entry equals the current sum of
/// `array[start..=end]`: updates drop each cached range that contains the
/// updated index before returning.
pub struct CachedRangeArray {
    /// Current values (0-based)
    array: Vec<i64>,

    /// Prefix-sum tree kept in lock-step with `array` (1-based)
    tree: IndexedRangeSum,

    /// Range sums keyed by inclusive 0-based bounds
    cache: LruCache<(usize, usize), i64>,

    /// Cache statistics
    stats: CacheStats,
}

impl CachedRangeArray {
    /// Create a cached array over an initial snapshot of values
    ///
    /// # Arguments
    /// * `values` - Initial array contents
    /// * `capacity` - Maximum number of cached range sums (0 disables caching)
    ///
    /// # Returns
    /// * `Result<CachedRangeArray>` - Array with its tree built
    pub fn new(values: Vec<i64>, capacity: usize) -> Result<Self> {
        let mut tree = IndexedRangeSum::new(values.len());
        tree.build(&values)?;

        debug!(len = values.len(), capacity, "created cached range array");

        Ok(Self {
            array: values,
            tree,
            cache: LruCache::new(capacity),
            stats: CacheStats::new(),
        })
    }

    /// Create a cached array with [`DEFAULT_CACHE_CAPACITY`]
    pub fn with_default_capacity(values: Vec<i64>) -> Result<Self> {
        Self::new(values, DEFAULT_CACHE_CAPACITY)
    }

    /// Inclusive sum over `[start, end]` (0-based), served from cache when possible
    ///
    /// # Errors
    /// * `InvalidRange` - `start > end`
    /// * `IndexOutOfRange` - `end` is past the last element
    pub fn range_sum_with_cache(&mut self, start: usize, end: usize) -> Result<i64> {
        ensure_range(start, end, self.array.len())?;

        let key = (start, end);
        if let Some(&sum) = self.cache.get(&key) {
            self.stats.record_hit();
            return Ok(sum);
        }

        // Cache miss - compute from the tree
        self.stats.record_miss();
        let sum = self.tree.range_sum(start + 1, end + 1)?;

        match self.cache.put(key, sum) {
            // Zero capacity hands the new entry straight back; nothing was stored
            Some((evicted, _)) if evicted == key => {}
            Some(_) => {
                self.stats.record_eviction();
                self.stats.record_insert();
            }
            None => self.stats.record_insert(),
        }

        Ok(sum)
    }

    /// Set `array[index] = value` and drop cached ranges containing `index`
    ///
    /// Invalidation runs even when the value is unchanged.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is past the last element; nothing changes
    pub fn update_with_cache(&mut self, index: usize, value: i64) -> Result<()> {
        ensure_index(index, self.array.len())?;

        // Wrapping keeps the tree exact for any sum that fits in i64
        let delta = value.wrapping_sub(self.array[index]);
        self.tree.update(index + 1, delta)?;
        self.array[index] = value;

        let removed = self.cache.invalidate_overlapping(index);
        self.stats.record_invalidations(removed);

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

    /// Cached sum for `[start, end]`, if present (recency unchanged)
    pub fn cached(&self, start: usize, end: usize) -> Option<i64> {
        self.cache.peek(&(start, end)).copied()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Clear the cache and its statistics (array and tree remain unchanged)
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.stats.reset();
        debug!("cleared range-sum cache");
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

impl RangeSumArray for CachedRangeArray {
    fn range_sum(&mut self, start: usize, end: usize) -> Result<i64> {
        self.range_sum_with_cache(start, end)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<()> {
        self.update_with_cache(index, value)
    }

    fn len(&self) -> usize {
        self.array.len()
    }
}
