//! # rangecache
//!
//! Range-sum array that serves repeated queries from a bounded LRU cache.
//!
//! ## Architecture
//! - **Prefix-sum tree**: O(log n) update and range query (from `rangesum`)
//! - **HashMap**: AHash index over cached ranges (O(1) lookup)
//! - **LRU List**: Doubly-linked list for eviction (O(1))
//! - **Invalidation**: every update drops the cached ranges containing the
//!   updated index, so a cached sum is never stale

#![warn(missing_docs)]

mod array;
mod lru;
mod stats;

pub use array::{CachedRangeArray, DEFAULT_CACHE_CAPACITY};
pub use lru::LruCache;
pub use rangesum::{Error, NonCachedArray, RangeSumArray, Result};
pub use stats::CacheStats;
