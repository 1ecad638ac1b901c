//! Benchmark driver: one Build → Sort → Verify → Report cycle per
//! distribution, strictly sequential, nothing retried.

use std::cmp::Ordering;
use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::error::{BenchError, BenchResult};
use crate::list::{Key, NodeList};
use crate::pattern::Pattern;
use crate::rng::{Xorshift64, DEFAULT_SEED};
use crate::sort::{CountingComparator, SortRoutine};

/// Header line for the CSV emitted on stdout.
pub const CSV_HEADER: &str = "pattern,n,time_ns,comparisons";

/// Measurement of a single run. Emitted as soon as the run finishes; the
/// driver keeps no history.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub pattern: &'static str,
    pub n: usize,
    pub time_ns: u64,
    pub comparisons: u64,
}

impl RunRecord {
    /// One data line matching [`CSV_HEADER`].
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.pattern, self.n, self.time_ns, self.comparisons
        )
    }
}

/// Drives a sort routine across distributions.
///
/// The runner owns the one generator instance of the process: seeded at
/// construction, advanced by every `random` draw, never reset, so later
/// runs continue the same stream.
#[derive(Debug)]
pub struct Runner<S> {
    sort: S,
    rng: Xorshift64,
}

impl<S: SortRoutine> Runner<S> {
    /// Runner over `sort`, seeded with the fixed process-default seed.
    pub fn new(sort: S) -> Self {
        Self::with_seed(sort, DEFAULT_SEED)
    }

    /// Runner over an arbitrary seed, for generator-dependent tests.
    pub fn with_seed(sort: S, seed: u64) -> Self {
        Self {
            sort,
            rng: Xorshift64::new(seed),
        }
    }

    /// One run with the natural key order.
    pub fn run(&mut self, pattern: Pattern, n: usize, param: u64) -> BenchResult<RunRecord> {
        self.run_with_order(pattern, n, param, |a: Key, b: Key| a.cmp(&b))
    }

    /// One run with a caller-supplied ordering test.
    ///
    /// Build fills the keys and assembles the list; Sort takes two
    /// monotonic clock snapshots around the single sort call, with a fresh
    /// probe created just before the first; Verify treats a non-sorted
    /// result as fatal for the whole sequence; Report returns the record.
    pub fn run_with_order<F>(
        &mut self,
        pattern: Pattern,
        n: usize,
        param: u64,
        order: F,
    ) -> BenchResult<RunRecord>
    where
        F: FnMut(Key, Key) -> Ordering,
    {
        let keys = pattern.fill(n, param, &mut self.rng);
        let mut list = NodeList::from_keys(&keys);
        debug!("{pattern}: assembled {n} nodes for '{}'", self.sort.name());

        let mut probe = CountingComparator::new(order);
        let started = Instant::now();
        self.sort.sort(&mut list, &mut probe);
        let elapsed = started.elapsed();

        if !list.is_sorted() {
            return Err(BenchError::VerifyFailed {
                pattern: pattern.name(),
                n,
            });
        }
        debug!(
            "{pattern}: {} comparisons in {} ns",
            probe.calls(),
            elapsed.as_nanos()
        );

        Ok(RunRecord {
            pattern: pattern.name(),
            n,
            time_ns: elapsed.as_nanos() as u64,
            comparisons: probe.calls(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::MergeSort;

    #[test]
    fn ascending_run_reports_its_pattern_and_size() {
        let mut runner = Runner::new(MergeSort);
        let record = runner.run(Pattern::Ascending, 5, 0).unwrap();

        assert_eq!(record.pattern, "ascending");
        assert_eq!(record.n, 5);
        assert!(record.comparisons >= 4);
    }

    #[test]
    fn csv_row_matches_the_header_schema() {
        let record = RunRecord {
            pattern: "sawtooth",
            n: 12,
            time_ns: 3400,
            comparisons: 31,
        };
        let row = record.csv_row();
        let fields: Vec<_> = row.split(',').collect();

        assert_eq!(fields.len(), CSV_HEADER.split(',').count());
        assert_eq!(fields, vec!["sawtooth", "12", "3400", "31"]);
    }

    #[test]
    fn empty_runs_cost_nothing_and_still_report() {
        let mut runner = Runner::new(MergeSort);
        for pattern in Pattern::ALL {
            let record = runner.run(pattern, 0, 0).unwrap();
            assert_eq!(record.n, 0);
            assert_eq!(record.comparisons, 0);
        }
    }

    #[test]
    fn a_lying_comparator_fails_verification() {
        let mut runner = Runner::new(MergeSort);
        let err = runner
            .run_with_order(Pattern::Ascending, 8, 0, |a: Key, b: Key| b.cmp(&a))
            .unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert!(format!("{err}").contains("ascending"));
    }

    #[test]
    fn equal_seeds_measure_equal_comparison_counts() {
        let mut a = Runner::with_seed(MergeSort, 11);
        let mut b = Runner::with_seed(MergeSort, 11);

        let ra = a.run(Pattern::Random, 200, 0).unwrap();
        let rb = b.run(Pattern::Random, 200, 0).unwrap();
        assert_eq!(ra.comparisons, rb.comparisons);
    }
}
