//! Harness self-tests, runnable with `-test [filter]`.

use unittest::TestSuite;

mod merge;

/// Every registered suite, in run order.
pub static SUITES: &[TestSuite] = &[
    TestSuite::new("merge", merge::MERGE_TESTS),
    TestSuite::new("map", map::MAP_TESTS),
    TestSuite::new("fib", fib::FIB_TESTS),
    TestSuite::new("dispatch", dispatch::DISPATCH_TESTS),
];
