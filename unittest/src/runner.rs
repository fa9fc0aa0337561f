//! Test selection and runner entry points.
//!
//! Suites are registered explicitly by the crate that owns the tests and
//! handed to [`test_run`] together with a name filter.

use crate::test_framework::{TestRunner, TestStats, TestSuite};

/// Run every registered test selected by `filter`.
///
/// An empty filter selects everything. Otherwise a test runs when the filter
/// is a prefix of its name or of its suite's name. Progress and the final
/// summary go to the log.
///
/// # Example
/// ```rust,ignore
/// let stats = unittest::test_run("merge", SUITES);
/// assert_eq!(stats.failed, 0);
/// ```
pub fn test_run(filter: &str, suites: &[TestSuite]) -> TestStats {
    let mut runner = TestRunner::new();
    for suite in suites {
        runner.run_suite(suite, filter);
    }

    let stats = runner.get_stats();
    if stats.total == 0 {
        warn!("================================");
        warn!("No tests match `{}`", filter);
        warn!("================================");
        return stats;
    }

    runner.print_final_stats();
    stats
}
