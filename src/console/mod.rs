//! Console module - logging facilities.
//!
//! The harness keeps its log in memory. It is printed on request by the
//! `log` command and flushed by the top-level error boundary.

pub mod logger;
pub mod ring;

pub use logger::init as init_logger;
pub use logger::{entries_with_tag, print_all, print_tagged, set_log_watch, watch_hits};
pub use ring::{LogEntry, LogRing, Tag};
