//! Monotonic time since process start.

use std::time::Instant;

use lazy_static::lazy_static;

pub const NANOS_PER_SEC: u64 = 1_000_000_000;

lazy_static! {
    static ref BOOT: Instant = Instant::now();
}

/// Pin the start instant. Called once from `main`; later calls are no-ops.
pub fn init_early() {
    lazy_static::initialize(&BOOT);
}

/// Nanoseconds elapsed since the process started.
pub fn boot_nanoseconds() -> u64 {
    BOOT.elapsed().as_nanos() as u64
}
