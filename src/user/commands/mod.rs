//! Command implementations.
//!
//! Each command is defined in its own module file.

pub mod bench;
pub mod fib;
pub mod help;
pub mod log;
pub mod watch;

// Re-export command instances for registry
pub use bench::TIME_MAP_INSERTION;
pub use fib::{FIB, FIB_MAP};
pub use help::HELP;
pub use self::log::LOG;
pub use test::TEST;
pub use watch::WATCH;
