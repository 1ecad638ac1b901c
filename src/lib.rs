//! listbench - micro-benchmark for in-place sorts of a doubly linked list
//!
//! Builds a circular, sentinel-headed list of keys from one of six
//! synthetic distributions, times a single in-place sort over it, counts
//! every comparator call the sort makes, and verifies the result is
//! non-decreasing. The sort routine and the ordering comparator sit behind
//! capability interfaces, so alternate algorithms or orderings can be
//! measured without touching the driver.

pub mod bench;
pub mod error;
pub mod list;
pub mod pattern;
pub mod rng;
pub mod sort;

// Re-export commonly used types
pub use bench::{RunRecord, Runner, CSV_HEADER};
pub use error::{BenchError, BenchResult};
pub use list::{Key, NodeList};
pub use pattern::{Pattern, DEFAULT_MODULUS};
pub use rng::{Xorshift64, DEFAULT_SEED};
pub use sort::{Comparator, CountingComparator, MergeSort, SortRoutine};

/// Run the full benchmark set: every distribution in driver order over the
/// default merge sort, sharing one generator seeded with the process
/// default.
///
/// # Example
/// ```
/// use listbench::run_benchmarks;
///
/// let records = run_benchmarks(100, 0).unwrap();
/// assert_eq!(records.len(), 6);
/// assert_eq!(records[0].pattern, "random");
/// ```
pub fn run_benchmarks(n: usize, param: u64) -> BenchResult<Vec<RunRecord>> {
    let mut runner = Runner::new(MergeSort);
    Pattern::ALL
        .iter()
        .map(|&pattern| runner.run(pattern, n, param))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_set_runs_in_driver_order() {
        let records = run_benchmarks(50, 0).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.pattern).collect();
        assert_eq!(
            names,
            vec![
                "random",
                "ascending",
                "descending",
                "organpipe",
                "sawtooth",
                "staggered"
            ]
        );
        assert!(records.iter().all(|r| r.n == 50));
    }

    #[test]
    fn boundary_sizes_complete_for_every_pattern() {
        for n in [0, 1, 2] {
            let records = run_benchmarks(n, 0).unwrap();
            assert_eq!(records.len(), 6);
        }
    }
}
