//! Fibonacci workloads.
//!
//! Both variants use `fib(0) = fib(1) = 1`. A negative index is a
//! precondition failure, a result that does not fit in a `u64` is an
//! overflow, and every call counts against a step budget so a runaway
//! computation stops instead of spinning.

use crate::config::{FIB_MAX_INDEX, FIB_STEP_LIMIT};
use crate::map::{Map, Pair, SortableMap};
use crate::{HarnessError, HarnessResult};

/// Counts recursive calls and fails once the budget is spent.
pub struct StepGuard {
    steps: u64,
    limit: u64,
}

impl StepGuard {
    pub fn new(limit: u64) -> Self {
        Self { steps: 0, limit }
    }

    fn step(&mut self) -> HarnessResult<()> {
        self.steps += 1;
        if self.steps > self.limit {
            return Err(HarnessError::StepLimit { limit: self.limit }.into());
        }
        Ok(())
    }
}

fn check_index(n: i64) -> HarnessResult<u64> {
    if n < 0 {
        return Err(HarnessError::Precondition(format!("fib index {n} is negative")).into());
    }
    if n > FIB_MAX_INDEX {
        return Err(HarnessError::Overflow(format!("fib({n}) does not fit in 64 bits")).into());
    }
    Ok(n as u64)
}

fn add(a: u64, b: u64, n: u64) -> HarnessResult<u64> {
    a.checked_add(b)
        .ok_or_else(|| HarnessError::Overflow(format!("fib({n}) wrapped around")).into())
}

/// Naive recursive Fibonacci.
pub fn fib(n: i64) -> HarnessResult<u64> {
    fib_with_limit(n, FIB_STEP_LIMIT)
}

pub fn fib_with_limit(n: i64, step_limit: u64) -> HarnessResult<u64> {
    let n = check_index(n)?;
    let mut guard = StepGuard::new(step_limit);
    fib_naive(n, &mut guard)
}

fn fib_naive(n: u64, guard: &mut StepGuard) -> HarnessResult<u64> {
    guard.step()?;
    if n < 2 {
        return Ok(1);
    }
    let a = fib_naive(n - 1, guard)?;
    let b = fib_naive(n - 2, guard)?;
    add(a, b, n)
}

/// Memoized Fibonacci backed by a fixed-capacity [`Map`].
///
/// The table only grows. Once it is full, new results are still returned
/// but not cached.
pub struct FibMemo {
    table: Map,
    step_limit: u64,
    hits: u64,
    misses: u64,
    rejected: u64,
}

impl FibMemo {
    pub fn new(capacity: usize, step_limit: u64) -> Self {
        Self {
            table: Map::with_capacity(capacity),
            step_limit,
            hits: 0,
            misses: 0,
            rejected: 0,
        }
    }

    pub fn fib(&mut self, n: i64) -> HarnessResult<u64> {
        let n = check_index(n)?;
        let mut guard = StepGuard::new(self.step_limit);
        self.fib_cached(n, &mut guard)
    }

    fn fib_cached(&mut self, n: u64, guard: &mut StepGuard) -> HarnessResult<u64> {
        guard.step()?;
        if n < 2 {
            return Ok(1);
        }
        if let Some(pair) = self.table.find(n) {
            self.hits += 1;
            trace!("fib_map: hit fib({}) = {}", n, pair.value);
            return Ok(pair.value);
        }

        self.misses += 1;
        let a = self.fib_cached(n - 1, guard)?;
        let b = self.fib_cached(n - 2, guard)?;
        let value = add(a, b, n)?;

        if self.table.insert(Pair::new(n, value)) {
            debug!("fib_map: cached fib({}) = {}", n, value);
        } else {
            self.rejected += 1;
            warn!(
                "fib_map: memo table full ({} entries), fib({}) not cached",
                self.table.capacity(),
                n
            );
        }
        Ok(value)
    }

    /// Lookups answered from the table.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Values that had to be computed by recursion.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Computed values that did not fit in the table.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind_of;

    #[test]
    fn test_base_cases_and_small_values() {
        assert_eq!(fib(0).unwrap(), 1);
        assert_eq!(fib(1).unwrap(), 1);
        assert_eq!(fib(10).unwrap(), 89);
    }

    #[test]
    fn test_largest_index_fits() {
        let mut memo = FibMemo::new(128, FIB_STEP_LIMIT);
        assert_eq!(memo.fib(92).unwrap(), 12_200_160_415_121_876_738);
        let err = memo.fib(93).unwrap_err();
        assert!(matches!(kind_of(&err), Some(HarnessError::Overflow(_))));
    }

    #[test]
    fn test_negative_index_is_precondition_failure() {
        let err = fib(-1).unwrap_err();
        assert!(matches!(kind_of(&err), Some(HarnessError::Precondition(_))));
        let err = FibMemo::new(8, FIB_STEP_LIMIT).fib(-1).unwrap_err();
        assert!(matches!(kind_of(&err), Some(HarnessError::Precondition(_))));
    }

    #[test]
    fn test_step_limit_stops_runaway_recursion() {
        let err = fib_with_limit(25, 1_000).unwrap_err();
        assert!(matches!(
            kind_of(&err),
            Some(HarnessError::StepLimit { limit: 1_000 })
        ));
    }

    #[test]
    fn test_full_table_still_returns_values() {
        let mut memo = FibMemo::new(3, FIB_STEP_LIMIT);
        assert_eq!(memo.fib(20).unwrap(), fib(20).unwrap());
        assert_eq!(memo.len(), 3);
        assert!(memo.rejected() > 0);
    }
}
