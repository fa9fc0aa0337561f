//! Unified error types for the harness.
//!
//! Every fallible operation returns [`HarnessResult<T>`], an alias for
//! `anyhow::Result<T>`. Failures that must be told apart at the process
//! boundary are raised as a [`HarnessError`] and may be wrapped in any
//! amount of context on the way up.
//!
//! ## Usage Examples
//!
//! Raising a classified error:
//! ```ignore
//! return Err(HarnessError::Precondition(format!("fib index {n} is negative")).into());
//! ```
//!
//! Adding context:
//! ```ignore
//! memo.fib(n).with_context(|| format!("fib_map({n})"))?;
//! ```

/// Result type alias using anyhow::Error.
pub type HarnessResult<T> = anyhow::Result<T>;

#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    #[error("unexpected: {0}")]
    Unexpected(String),
    #[error("precondition failed: {0}")]
    Precondition(String),
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
    #[error("step limit of {limit} exceeded")]
    StepLimit { limit: u64 },
    #[error("map integrity check failed during {phase}: key {key} -> {found:?}")]
    Integrity {
        phase: &'static str,
        key: u64,
        found: Option<u64>,
    },
    #[error("{failed} of {total} tests failed")]
    TestsFailed { failed: usize, total: usize },
    #[error("logger init failed")]
    LoggerInitFailed,
    #[error("config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("config: unknown log level `{0}`")]
    LogLevel(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Numeric kind of the error; the process exits with its negation.
    pub fn code(&self) -> i32 {
        match self {
            HarnessError::Unexpected(_) | HarnessError::LoggerInitFailed => 1,
            HarnessError::Precondition(_) => 2,
            HarnessError::Overflow(_) => 3,
            HarnessError::StepLimit { .. } => 4,
            HarnessError::Integrity { .. } => 5,
            HarnessError::TestsFailed { .. } => 6,
            HarnessError::Config(_) | HarnessError::LogLevel(_) => 7,
            HarnessError::Io(_) => 8,
        }
    }
}

/// Find the first classified error in the chain.
pub fn kind_of(err: &anyhow::Error) -> Option<&HarnessError> {
    err.chain().find_map(|cause| cause.downcast_ref::<HarnessError>())
}

/// Process exit code for an error that reached the top-level boundary.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    -kind_of(err).map_or(1, HarnessError::code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_sees_through_context() {
        let err: anyhow::Error = Err::<(), _>(HarnessError::Overflow("fib(93)".into()))
            .context("fib_map 93")
            .unwrap_err();
        assert_eq!(exit_code(&err), -3);
        assert!(matches!(kind_of(&err), Some(HarnessError::Overflow(_))));
    }

    #[test]
    fn test_unclassified_error_is_unexpected() {
        let err = anyhow::anyhow!("something else");
        assert!(kind_of(&err).is_none());
        assert_eq!(exit_code(&err), -1);
    }
}
