//! Named-test registry and runner.
//!
//! Tests are declared with `#[def_test]`, collected into static suites by the
//! crate that owns them, and run with [`test_run`].

#[macro_use]
extern crate log;

pub mod runner;
pub mod test_framework;
pub mod test_framework_basic;

// Re-export the def_test macro from unittest-macros crate
pub use unittest_macros::def_test;

// Re-export commonly used types
pub use test_framework::{TestDescriptor, TestRunner, TestStats, TestSuite, Testable};
pub use test_framework_basic::TestResult;

// Re-export the test runner function
pub use runner::test_run;

// Path the exported assert macros log through.
#[doc(hidden)]
pub mod __log {
    pub use ::log::*;
}
