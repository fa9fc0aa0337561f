//! Logger implementation for the log crate.
//!
//! Every record lands in the in-memory [`LogRing`]. Records at or above the
//! configured echo level are also written to stderr as they happen.

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};

use super::ring::{LogEntry, LogRing, Tag};
use crate::config::{DEFAULT_LOG_CAPACITY, HarnessConfig};
use crate::error::HarnessError;
use crate::{HarnessResult, timer};

pub struct RingLogger {
    ring: Mutex<LogRing>,
    echo: AtomicUsize,
}

lazy_static! {
    static ref LOGGER: RingLogger = RingLogger::new(DEFAULT_LOG_CAPACITY);
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
    BrightMagenta = 95,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

const COLOR_RESET: &str = "\u{1B}[0m";

impl RingLogger {
    fn new(capacity: usize) -> Self {
        Self {
            ring: Mutex::new(LogRing::new(capacity)),
            echo: AtomicUsize::new(LevelFilter::Off as usize),
        }
    }

    fn ring(&self) -> MutexGuard<'_, LogRing> {
        // A panic while holding the lock leaves the ring intact.
        self.ring.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn echoes(&self, level: Level) -> bool {
        level as usize <= self.echo.load(Ordering::Relaxed)
    }
}

impl Log for RingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let entry = LogEntry {
            nanos: timer::boot_nanoseconds(),
            level: record.level(),
            tag: Tag::for_site(file, line),
            file: file.to_string(),
            line,
            message: record.args().to_string(),
        };

        if self.echoes(entry.level) {
            let color = match entry.level {
                Level::Error => ColorCode::Red,
                Level::Warn => ColorCode::Yellow,
                Level::Info => ColorCode::Green,
                Level::Debug => ColorCode::Cyan,
                Level::Trace => ColorCode::BrightBlack,
            };
            eprintln!(
                "[{:.5} #{} {}:{}] {color}{}{COLOR_RESET}",
                entry.nanos as f64 / timer::NANOS_PER_SEC as f64,
                entry.tag,
                entry.file,
                entry.line,
                entry.message
            );
        }

        let mut ring = self.ring();
        let notice = ring.is_watched(entry.tag).then(|| {
            format!(
                "{}watch: #{} hit at {}:{}: {}{COLOR_RESET}",
                ColorCode::BrightMagenta,
                entry.tag,
                entry.file,
                entry.line,
                entry.message
            )
        });
        ring.push(entry);
        drop(ring);

        if let Some(notice) = notice {
            eprintln!("{notice}");
        }
    }

    fn flush(&self) {}
}

/// Initialize the logger.
pub fn init(config: &HarnessConfig) -> HarnessResult<()> {
    let echo = config.echo_level();
    LOGGER.ring().set_capacity(config.log_capacity);
    LOGGER.echo.store(echo as usize, Ordering::Relaxed);

    log::set_logger(&*LOGGER).map_err(|_| HarnessError::LoggerInitFailed)?;
    // The ring keeps debug records even when nothing is echoed.
    log::set_max_level(echo.max(LevelFilter::Debug));
    Ok(())
}

/// Print every retained entry to stdout, oldest first.
pub fn print_all() -> usize {
    let ring = LOGGER.ring();
    if ring.dropped() > 0 {
        println!("({} older entries dropped)", ring.dropped());
    }
    for entry in ring.entries() {
        println!("{entry}");
    }
    ring.len()
}

/// Print the retained entries carrying `tag`.
pub fn print_tagged(tag: Tag) -> usize {
    let entries = entries_with_tag(tag);
    for entry in &entries {
        println!("{entry}");
    }
    entries.len()
}

pub fn entries_with_tag(tag: Tag) -> Vec<LogEntry> {
    LOGGER.ring().with_tag(tag)
}

/// Arm or disarm the watch on `tag`.
pub fn set_log_watch(tag: Tag, flag: bool) {
    LOGGER.ring().set_watch(tag, flag);
}

pub fn watch_hits() -> u64 {
    LOGGER.ring().watch_hits()
}
