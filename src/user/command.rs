//! Command trait and context definitions.

use std::num::ParseIntError;

use crate::HarnessResult;
use crate::config::MAX_COMMAND_ARGS;
use crate::session::Session;

/// Arguments of one command, borrowed from the process argument list.
///
/// Holds at most [`MAX_COMMAND_ARGS`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args<'a> {
    args: Vec<&'a str>,
}

impl<'a> Args<'a> {
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Build from a slice, keeping only the first `MAX_COMMAND_ARGS`.
    pub fn from_slice(args: &[&'a str]) -> Self {
        let mut out = Self::new();
        for arg in args {
            out.push(arg);
        }
        out
    }

    /// Append an argument. Returns `false` (and drops it) when full.
    pub fn push(&mut self, arg: &'a str) -> bool {
        if self.args.len() >= MAX_COMMAND_ARGS {
            return false;
        }
        self.args.push(arg);
        true
    }

    /// Get argument at index (0 is first argument after command name).
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    /// Argument at `index` parsed as a signed integer.
    pub fn integer(&self, index: usize) -> Option<Result<i64, ParseIntError>> {
        self.get(index).map(|arg| arg.trim().parse())
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Iterate over arguments.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.args.iter().copied()
    }
}

/// Command execution context.
pub struct CommandContext<'a> {
    /// The name the user typed, possibly an abbreviation.
    pub command: &'a str,
    /// Collected arguments (excluding the command name).
    pub args: Args<'a>,
    pub session: &'a mut Session,
}

/// Trait for implementing commands.
///
/// Commands are registered statically and looked up by name prefix.
pub trait Command: Sync {
    /// Full command name.
    fn name(&self) -> &'static str;

    /// Short description (shown in help list).
    fn description(&self) -> &'static str;

    /// Detailed usage information (shown in `help <command>`).
    fn usage(&self) -> &'static str {
        self.description()
    }

    /// Command category for grouping in help.
    fn category(&self) -> &'static str {
        "general"
    }

    /// Execute the command with the given context.
    ///
    /// `ctx.args` may be empty; commands treat that as valid input.
    fn execute(&self, ctx: &mut CommandContext<'_>) -> HarnessResult<()>;
}
