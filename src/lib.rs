//! Startle - command-driven harness for a fixed-capacity integer map.
//!
//! The binary takes `-command arg...` groups on its command line and runs
//! each through a prefix-matching dispatcher. Commands exercise the map
//! (insert/find/sort benchmark), two Fibonacci workloads, the in-memory log,
//! and the registered self-tests.

#[macro_use]
extern crate log;

pub mod bench;
pub mod config;
pub mod console;
pub mod error;
pub mod fib;
pub mod map;
pub mod session;
pub mod tests;
pub mod timer;
pub mod user;

pub use error::{HarnessError, HarnessResult};
