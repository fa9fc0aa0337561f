//! Harness configuration.
//!
//! Compile-time constants live at the top. Tunables are read from a TOML
//! file when one is present, and the `LOG` environment variable overrides
//! the log level.

use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::Context;
use log::LevelFilter;
use serde::Deserialize;

use crate::{HarnessError, HarnessResult};

/// Marker that opens a command on the command line.
pub const COMMAND_PREFIX: char = '-';
/// Arguments collected per command; later ones are dropped.
pub const MAX_COMMAND_ARGS: usize = 4;

pub const FIB_STEP_LIMIT: u64 = 10_000_000;
/// Largest index whose Fibonacci number fits in a `u64`.
pub const FIB_MAX_INDEX: i64 = 92;
pub const DEFAULT_MEMO_CAPACITY: usize = 1024;

pub const BENCH_MIN_EXPONENT: u32 = 1;
pub const BENCH_MAX_EXPONENT: u32 = 30;
pub const BENCH_MIN_REPS: u32 = 1;
pub const BENCH_MAX_REPS: u32 = 1000;
/// Workloads of at least this many entries print progress dots.
pub const BENCH_PROGRESS_THRESHOLD: usize = 1 << 20;

pub const MERGE_TEST_SIZE: usize = 32;
pub const MERGE_TEST_ROUNDS: u64 = 10_000;

pub const LOG_TAG_WIDTH: usize = 4;
pub const DEFAULT_LOG_CAPACITY: usize = 4096;

pub const CONFIG_FILE: &str = "startle.toml";
pub const CONFIG_ENV: &str = "STARTLE_CONFIG";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessConfig {
    pub log_level: String,
    pub log_capacity: usize,
    pub memo_capacity: usize,
    pub step_limit: u64,
    pub bench_seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            log_level: "off".into(),
            log_capacity: DEFAULT_LOG_CAPACITY,
            memo_capacity: DEFAULT_MEMO_CAPACITY,
            step_limit: FIB_STEP_LIMIT,
            bench_seed: None,
        }
    }
}

impl HarnessConfig {
    /// Load from `$STARTLE_CONFIG`, else `./startle.toml`, else defaults.
    pub fn load() -> HarnessResult<Self> {
        let mut config = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        if let Some(level) = env::var("LOG").ok().filter(|level| !level.is_empty()) {
            parse_level(&level).context("LOG environment variable")?;
            config.log_level = level;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> HarnessResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(HarnessError::from)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> HarnessResult<Self> {
        let config: HarnessConfig = toml::from_str(content).map_err(HarnessError::from)?;
        parse_level(&config.log_level)?;
        Ok(config)
    }

    /// Level at which records are echoed to stderr as they happen.
    ///
    /// Loaded configs are validated; a hand-built one with an unknown level
    /// echoes nothing.
    pub fn echo_level(&self) -> LevelFilter {
        parse_level(&self.log_level).unwrap_or(LevelFilter::Off)
    }
}

/// Level names as `log` spells them, in any case.
fn parse_level(text: &str) -> Result<LevelFilter, HarnessError> {
    text.trim()
        .parse()
        .map_err(|_| HarnessError::LogLevel(text.to_string()))
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(CONFIG_FILE);
    local.exists().then_some(local)
}
