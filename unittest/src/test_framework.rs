//! Test descriptors, statistics and the runner that drives them.
//!
//! Tests are plain functions returning [`TestResult`]. The assertion macros
//! exported here log the failing expression and return `TestResult::Failed`
//! from the enclosing test, so a failed check never unwinds.

use std::panic::{self, AssertUnwindSafe};

use super::test_framework_basic::TestResult;

// Test statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub ignored: usize,
}

impl TestStats {
    pub const fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            ignored: 0,
        }
    }

    pub fn add_result(&mut self, result: TestResult) {
        self.total += 1;
        match result {
            TestResult::Ok => self.passed += 1,
            TestResult::Failed => self.failed += 1,
            TestResult::Ignored => self.ignored += 1,
        }
    }
}

impl Default for TestStats {
    fn default() -> Self {
        Self::new()
    }
}

// Testable trait
pub trait Testable {
    fn run(&self) -> TestResult;
    fn name(&self) -> &'static str;
}

// Test descriptor structure
#[derive(Clone, Copy)]
pub struct TestDescriptor {
    pub name: &'static str,
    pub module: &'static str,
    pub test_fn: fn() -> TestResult,
    pub should_panic: bool,
    pub ignore: bool,
}

impl TestDescriptor {
    pub const fn new(
        name: &'static str,
        module: &'static str,
        test_fn: fn() -> TestResult,
        should_panic: bool,
        ignore: bool,
    ) -> Self {
        Self {
            name,
            module,
            test_fn,
            should_panic,
            ignore,
        }
    }

    pub fn module(&self) -> &'static str {
        self.module
    }
}

impl Testable for TestDescriptor {
    fn run(&self) -> TestResult {
        if self.ignore {
            return TestResult::Ignored;
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(self.test_fn));
        match (outcome, self.should_panic) {
            (Ok(TestResult::Ok), true) => {
                error!("test {} was expected to panic", self.name);
                TestResult::Failed
            }
            (Ok(result), _) => result,
            (Err(_), true) => TestResult::Ok,
            (Err(_), false) => TestResult::Failed,
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// A named group of tests.
#[derive(Clone, Copy)]
pub struct TestSuite {
    pub name: &'static str,
    pub tests: &'static [TestDescriptor],
}

impl TestSuite {
    pub const fn new(name: &'static str, tests: &'static [TestDescriptor]) -> Self {
        Self { name, tests }
    }

    /// A test is selected when the filter is empty or is a prefix of either
    /// the suite name or the test name.
    pub fn selects(&self, filter: &str, test: &TestDescriptor) -> bool {
        filter.is_empty() || self.name.starts_with(filter) || test.name.starts_with(filter)
    }
}

// Test runner
pub struct TestRunner {
    stats: TestStats,
}

impl TestRunner {
    pub const fn new() -> Self {
        Self {
            stats: TestStats::new(),
        }
    }

    pub fn run_test(&mut self, test: &TestDescriptor) -> TestResult {
        self.print_message(&format!(
            "  Running test: {}:{}",
            test.module(),
            test.name()
        ));

        let result = test.run();

        let verdict = match result {
            TestResult::Ok => "OK",
            TestResult::Failed => "FAILED",
            TestResult::Ignored => "IGNORED",
        };
        let line = format!("    Test {} ... {}", test.name(), verdict);
        if result.is_failed() {
            self.print_error(&line);
        } else {
            self.print_message(&line);
        }

        self.stats.add_result(result);

        result
    }

    /// Run every test of `suite` selected by `filter`.
    ///
    /// Returns the statistics of this suite only; the runner keeps a running
    /// total across calls.
    pub fn run_suite(&mut self, suite: &TestSuite, filter: &str) -> TestStats {
        let before = self.stats;

        let selected: Vec<&TestDescriptor> = suite
            .tests
            .iter()
            .filter(|test| suite.selects(filter, test))
            .collect();
        if selected.is_empty() {
            return TestStats::new();
        }

        self.print_message("--------------------------------");
        self.print_message(&format!("Starting unit tests [{}]...", suite.name));

        for test in selected {
            self.run_test(test);
        }

        let suite_stats = TestStats {
            total: self.stats.total - before.total,
            passed: self.stats.passed - before.passed,
            failed: self.stats.failed - before.failed,
            ignored: self.stats.ignored - before.ignored,
        };
        suite_stats
    }

    pub fn print_final_stats(&self) {
        self.print_message(&format!(
            "  >>> Test results: {} passed, {} failed, {} ignored, {} total",
            self.stats.passed, self.stats.failed, self.stats.ignored, self.stats.total
        ));

        if self.stats.failed > 0 {
            self.print_error("  >>> This tests FAILED!");
        } else {
            self.print_message("  >>> This tests PASSED!");
        }
    }

    fn print_message(&self, msg: &str) {
        warn!("{}", msg);
    }

    fn print_error(&self, msg: &str) {
        error!("{}", msg);
    }

    pub fn get_stats(&self) -> TestStats {
        self.stats
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

// Basic assertion macros
#[macro_export]
macro_rules! assert_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left != *right {
                    $crate::__log::error!(
                        "assert_eq! failed: {} ({:?}) == {} ({:?})",
                        stringify!($left),
                        left,
                        stringify!($right),
                        right
                    );
                    return $crate::TestResult::Failed;
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left != *right {
                    $crate::__log::error!(
                        "assert_eq! failed: {} ({:?}) == {} ({:?}): {}",
                        stringify!($left),
                        left,
                        stringify!($right),
                        right,
                        format_args!($($arg)+)
                    );
                    return $crate::TestResult::Failed;
                }
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ne {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left == *right {
                    $crate::__log::error!(
                        "assert_ne! failed: {} ({:?}) != {} ({:?})",
                        stringify!($left),
                        left,
                        stringify!($right),
                        right
                    );
                    return $crate::TestResult::Failed;
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left == *right {
                    $crate::__log::error!(
                        "assert_ne! failed: {} ({:?}) != {} ({:?}): {}",
                        stringify!($left),
                        left,
                        stringify!($right),
                        right,
                        format_args!($($arg)+)
                    );
                    return $crate::TestResult::Failed;
                }
            }
        }
    };
}

#[macro_export]
macro_rules! assert {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::__log::error!("assert! failed: {}", stringify!($cond));
            return $crate::TestResult::Failed;
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::__log::error!(
                "assert! failed: {}: {}",
                stringify!($cond),
                format_args!($($arg)+)
            );
            return $crate::TestResult::Failed;
        }
    };
}

/// Declare a static suite from `#[def_test]` descriptors.
#[macro_export]
macro_rules! tests_name {
    ($suite_name:ident; $($test_name:ident),* $(,)?) => {
        pub static $suite_name: &[$crate::TestDescriptor] = &[$($test_name,)*];
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() -> TestResult {
        TestResult::Ok
    }

    fn failing() -> TestResult {
        crate::assert_eq!(1 + 1, 3);
        TestResult::Ok
    }

    fn panicking() -> TestResult {
        panic!("boom");
    }

    static SAMPLE: &[TestDescriptor] = &[
        TestDescriptor::new("alpha_passes", "sample", passing, false, false),
        TestDescriptor::new("alpha_fails", "sample", failing, false, false),
        TestDescriptor::new("beta_panics", "sample", panicking, true, false),
        TestDescriptor::new("beta_skipped", "sample", failing, false, true),
    ];

    #[test]
    fn test_runner_counts_every_outcome() {
        let mut runner = TestRunner::new();
        let stats = runner.run_suite(&TestSuite::new("sample", SAMPLE), "");
        std::assert_eq!(stats.total, 4);
        std::assert_eq!(stats.passed, 2);
        std::assert_eq!(stats.failed, 1);
        std::assert_eq!(stats.ignored, 1);
    }

    #[test]
    fn test_filter_selects_by_prefix() {
        let mut runner = TestRunner::new();
        let suite = TestSuite::new("sample", SAMPLE);
        let stats = runner.run_suite(&suite, "beta");
        std::assert_eq!(stats.total, 2);
        std::assert_eq!(stats.failed, 0);

        let stats = runner.run_suite(&suite, "gamma");
        std::assert_eq!(stats.total, 0);

        let stats = runner.run_suite(&suite, "sam");
        std::assert_eq!(stats.total, 4);
    }

    #[test]
    fn test_unexpected_panic_fails() {
        let desc = TestDescriptor::new("panics", "sample", panicking, false, false);
        std::assert_eq!(desc.run(), TestResult::Failed);
    }
}
