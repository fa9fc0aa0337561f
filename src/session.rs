//! State shared by the commands of one process invocation.

use crate::config::HarnessConfig;
use crate::fib::FibMemo;

/// Owns the configuration and the Fibonacci memo table.
///
/// Commands receive it by `&mut`, so the memo table grows across the
/// commands of a single run and never outlives the process.
pub struct Session {
    pub config: HarnessConfig,
    pub memo: FibMemo,
}

impl Session {
    pub fn new(config: HarnessConfig) -> Self {
        let memo = FibMemo::new(config.memo_capacity, config.step_limit);
        Self { config, memo }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(HarnessConfig::default())
    }
}
