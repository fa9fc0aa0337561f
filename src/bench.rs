//! Map insertion/lookup benchmark.
//!
//! Times four phases against a [`SortableMap`]: repeated bulk insertion,
//! unsorted lookup, a full sort, and sorted lookup. Every lookup checks the
//! returned value, so the benchmark doubles as an integrity test of both
//! access paths.

use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    BENCH_MAX_EXPONENT, BENCH_MAX_REPS, BENCH_MIN_EXPONENT, BENCH_MIN_REPS,
    BENCH_PROGRESS_THRESHOLD,
};
use crate::map::{Pair, SortableMap};
use crate::timer::boot_nanoseconds;
use crate::{HarnessError, HarnessResult};

/// Validated benchmark parameters: `2^exponent` entries, `reps` insert passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchParams {
    exponent: u32,
    reps: u32,
}

impl BenchParams {
    /// `None` when either value is out of range.
    pub fn new(exponent: i64, reps: i64) -> Option<Self> {
        let exponent = u32::try_from(exponent).ok()?;
        let reps = u32::try_from(reps).ok()?;
        let valid = (BENCH_MIN_EXPONENT..=BENCH_MAX_EXPONENT).contains(&exponent)
            && (BENCH_MIN_REPS..=BENCH_MAX_REPS).contains(&reps);
        valid.then_some(Self { exponent, reps })
    }

    pub fn entries(&self) -> usize {
        1 << self.exponent
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }
}

/// Normalized timings of one run, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchReport {
    pub entries: usize,
    pub reps: u32,
    pub insert_ns: f64,
    pub find_ns: f64,
    pub sort_ns: f64,
    pub find_sorted_ns: f64,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "time_map_insertion: {} entries x {} reps", self.entries, self.reps)?;
        writeln!(f, "  insert:      {:10.3} ns/op", self.insert_ns)?;
        writeln!(f, "  find:        {:10.3} ns/op", self.find_ns)?;
        writeln!(f, "  sort_full:   {:10.3} ns/entry", self.sort_ns)?;
        write!(f, "  find_sorted: {:10.3} ns/op", self.find_sorted_ns)
    }
}

/// Prints a dot every `BENCH_PROGRESS_THRESHOLD` operations on large runs.
struct Progress {
    enabled: bool,
    count: usize,
}

impl Progress {
    fn new(entries: usize) -> Self {
        Self {
            enabled: entries >= BENCH_PROGRESS_THRESHOLD,
            count: 0,
        }
    }

    #[inline]
    fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        self.count += 1;
        if self.count % BENCH_PROGRESS_THRESHOLD == 0 {
            let mut out = io::stdout().lock();
            // cosmetic
            out.write_all(b".").ok();
            out.flush().ok();
        }
    }

    fn finish(&mut self) {
        if self.enabled && self.count >= BENCH_PROGRESS_THRESHOLD {
            println!();
        }
        self.count = 0;
    }
}

/// `entries` pairs with equal pseudo-random key and value.
pub fn generate_workload(entries: usize, seed: u64) -> Vec<Pair> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..entries)
        .map(|_| {
            let key: u64 = rng.random();
            Pair::new(key, key)
        })
        .collect()
}

fn per_op(elapsed_ns: u64, ops: u64) -> f64 {
    elapsed_ns as f64 / ops.max(1) as f64
}

fn check(phase: &'static str, key: u64, found: Option<&Pair>) -> HarnessResult<()> {
    match found {
        Some(pair) if pair.value == key => Ok(()),
        other => Err(HarnessError::Integrity {
            phase,
            key,
            found: other.map(|pair| pair.value),
        }
        .into()),
    }
}

/// Run the four benchmark phases on a freshly allocated `M`.
pub fn time_map_insertion<M: SortableMap>(params: BenchParams, seed: u64) -> HarnessResult<BenchReport> {
    let n = params.entries();
    let reps = params.reps();
    info!("time_map_insertion: n = {}, reps = {}, seed = {}", n, reps, seed);

    let workload = generate_workload(n, seed);
    let mut map = M::with_capacity(n);
    let mut progress = Progress::new(n);

    let start = boot_nanoseconds();
    for _ in 0..reps {
        map.clear();
        for pair in &workload {
            if !map.insert(*pair) {
                return Err(HarnessError::Integrity {
                    phase: "insert",
                    key: pair.key,
                    found: None,
                }
                .into());
            }
            progress.tick();
        }
    }
    let insert_ns = per_op(boot_nanoseconds() - start, n as u64 * reps as u64);
    progress.finish();

    let start = boot_nanoseconds();
    for pair in &workload {
        check("find", pair.key, black_box(map.find(pair.key)))?;
        progress.tick();
    }
    let find_ns = per_op(boot_nanoseconds() - start, n as u64);
    progress.finish();

    let start = boot_nanoseconds();
    map.sort_full();
    let sort_ns = per_op(boot_nanoseconds() - start, n as u64);

    let start = boot_nanoseconds();
    for pair in &workload {
        check("find_sorted", pair.key, black_box(map.find_sorted(pair.key)))?;
        progress.tick();
    }
    let find_sorted_ns = per_op(boot_nanoseconds() - start, n as u64);
    progress.finish();

    debug!("time_map_insertion: {} entries held after sort", map.len());

    Ok(BenchReport {
        entries: n,
        reps,
        insert_ns,
        find_ns,
        sort_ns,
        find_sorted_ns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind_of;
    use crate::map::Map;

    #[test]
    fn test_params_outside_range_are_rejected() {
        assert!(BenchParams::new(0, 1).is_none());
        assert!(BenchParams::new(31, 1).is_none());
        assert!(BenchParams::new(4, 0).is_none());
        assert!(BenchParams::new(4, 1001).is_none());
        assert!(BenchParams::new(-3, 5).is_none());
        let params = BenchParams::new(30, 1000).unwrap();
        assert_eq!(params.entries(), 1 << 30);
    }

    #[test]
    fn test_workload_is_reproducible() {
        let a = generate_workload(64, 9);
        assert_eq!(a, generate_workload(64, 9));
        assert!(a.iter().all(|pair| pair.key == pair.value));
    }

    #[test]
    fn test_run_reports_every_phase() {
        let params = BenchParams::new(10, 3).unwrap();
        let report = time_map_insertion::<Map>(params, 1).unwrap();
        assert_eq!(report.entries, 1024);
        assert_eq!(report.reps, 3);
        for timing in [report.insert_ns, report.find_ns, report.sort_ns, report.find_sorted_ns] {
            assert!(timing.is_finite() && timing >= 0.0);
        }
    }

    /// Loses every entry on sort.
    struct ForgetfulMap(Map);

    impl SortableMap for ForgetfulMap {
        fn with_capacity(capacity: usize) -> Self {
            ForgetfulMap(Map::with_capacity(capacity))
        }
        fn capacity(&self) -> usize {
            self.0.capacity()
        }
        fn len(&self) -> usize {
            self.0.len()
        }
        fn clear(&mut self) {
            self.0.clear()
        }
        fn insert(&mut self, pair: Pair) -> bool {
            self.0.insert(pair)
        }
        fn find(&self, key: u64) -> Option<&Pair> {
            self.0.find(key)
        }
        fn sort_full(&mut self) {
            self.0.clear()
        }
        fn find_sorted(&self, key: u64) -> Option<&Pair> {
            self.0.find_sorted(key)
        }
    }

    #[test]
    fn test_broken_sort_is_an_integrity_failure() {
        let params = BenchParams::new(4, 1).unwrap();
        let err = time_map_insertion::<ForgetfulMap>(params, 2).unwrap_err();
        assert!(matches!(
            kind_of(&err),
            Some(HarnessError::Integrity { phase: "find_sorted", .. })
        ));
    }

    #[test]
    fn test_progress_only_ticks_on_large_runs() {
        let mut small = Progress::new(BENCH_PROGRESS_THRESHOLD - 1);
        for _ in 0..BENCH_PROGRESS_THRESHOLD {
            small.tick();
        }
        assert_eq!(small.count, 0);

        let mut large = Progress::new(BENCH_PROGRESS_THRESHOLD);
        for _ in 0..BENCH_PROGRESS_THRESHOLD {
            large.tick();
        }
        assert_eq!(large.count, BENCH_PROGRESS_THRESHOLD);
        large.finish();
        assert_eq!(large.count, 0);
    }
}
