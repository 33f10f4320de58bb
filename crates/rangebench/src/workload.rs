//! Seeded random workloads of range queries and point updates

use rand::Rng;
use rangecache::{RangeSumArray, Result};

/// One step of a workload (0-based inclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Range-sum query over `[start, end]`
    Range { start: usize, end: usize },
    /// Point update setting `index` to `value`
    Update { index: usize, value: i64 },
}

/// Array of `size` values drawn uniformly from `1..=max_value`
pub fn generate_array<R: Rng>(rng: &mut R, size: usize, max_value: i64) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(1..=max_value)).collect()
}

/// `count` operations over an array of `size` elements
///
/// Each operation is a range query with probability `range_ratio`, otherwise
/// an update to a value in `1..=max_value`. Empty arrays get no operations.
pub fn generate_ops<R: Rng>(
    rng: &mut R,
    size: usize,
    count: usize,
    range_ratio: f64,
    max_value: i64,
) -> Vec<Op> {
    if size == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            if rng.gen_bool(range_ratio) {
                let start = rng.gen_range(0..size);
                let end = rng.gen_range(start..size);
                Op::Range { start, end }
            } else {
                Op::Update {
                    index: rng.gen_range(0..size),
                    value: rng.gen_range(1..=max_value),
                }
            }
        })
        .collect()
}

/// Apply `ops` in order, collecting every range-query result
pub fn run<A: RangeSumArray>(array: &mut A, ops: &[Op]) -> Result<Vec<i64>> {
    let mut results = Vec::new();
    for op in ops {
        match *op {
            Op::Range { start, end } => results.push(array.range_sum(start, end)?),
            Op::Update { index, value } => array.update(index, value)?,
        }
    }
    Ok(results)
}
