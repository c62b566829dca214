//! Instrumented algorithms for the complexity analyzer.
//!
//! Each algorithm returns the number of operations it performed instead
//! of its usual result, so callers can put measured counts next to the
//! theoretical growth curve.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One benchmark row: input size, wall time and counted operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub size: usize,
    pub time_ms: f64,
    pub operations: u64,
    /// Resident set size sampled after the run, when memory tracking is on.
    pub rss_kb: Option<u64>,
}

/// Bubble sort that counts every inner loop comparison. For a slice of
/// length n the count is always n*(n-1)/2, swaps or not.
pub fn bubble_sort(arr: &mut [i64]) -> u64 {
    let n = arr.len();
    let mut operations = 0;
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            operations += 1;
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
    operations
}

/// Binary search over a sorted slice, returning the probe count rather
/// than the position.
pub fn binary_search(arr: &[i64], target: i64) -> u64 {
    let mut operations = 0;
    let mut low = 0i64;
    let mut high = arr.len() as i64 - 1;

    while low <= high {
        operations += 1;
        let mid = low + (high - low) / 2;
        match arr[mid as usize].cmp(&target) {
            Ordering::Equal => break,
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }
    operations
}

/// Compact rendering for large operation counts.
pub fn humanize_ops(ops: u64) -> String {
    if ops >= 1_000_000 {
        format!("{:.2}M", ops as f64 / 1_000_000.0)
    } else if ops >= 1_000 {
        format!("{:.1}K", ops as f64 / 1_000.0)
    } else {
        ops.to_string()
    }
}
