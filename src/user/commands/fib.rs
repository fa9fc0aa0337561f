//! Fibonacci commands - naive and memoized.

use anyhow::Context;

use crate::HarnessResult;
use crate::user::{Command, CommandContext};

/// Naive Fibonacci command instance.
pub static FIB: FibCommand = FibCommand;

/// Memoized Fibonacci command instance.
pub static FIB_MAP: FibMapCommand = FibMapCommand;

pub struct FibCommand;

pub struct FibMapCommand;

/// The index argument, or `None` when the command should do nothing.
fn index_arg(ctx: &CommandContext<'_>, usage: &str) -> Option<i64> {
    match ctx.args.integer(0)? {
        Ok(n) => Some(n),
        Err(err) => {
            println!("{}: {}", ctx.command, err);
            println!("{}", usage);
            None
        }
    }
}

impl Command for FibCommand {
    fn name(&self) -> &'static str {
        "fib"
    }

    fn description(&self) -> &'static str {
        "calculate fibonacci number"
    }

    fn usage(&self) -> &'static str {
        "Usage: -fib <n>\n\
         \n\
         Computes the nth Fibonacci number (fib(0) = fib(1) = 1) by plain\n\
         recursion. Large n trips the step limit."
    }

    fn category(&self) -> &'static str {
        "workload"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> HarnessResult<()> {
        let Some(n) = index_arg(ctx, self.usage()) else {
            return Ok(());
        };
        let step_limit = ctx.session.config.step_limit;
        let result =
            crate::fib::fib_with_limit(n, step_limit).with_context(|| format!("fib({n})"))?;
        println!("fib({}) = {}", n, result);
        Ok(())
    }
}

impl Command for FibMapCommand {
    fn name(&self) -> &'static str {
        "fib_map"
    }

    fn description(&self) -> &'static str {
        "calculate fibonacci number using a map"
    }

    fn usage(&self) -> &'static str {
        "Usage: -fib_map <n>\n\
         \n\
         Computes the nth Fibonacci number, caching intermediate results\n\
         in a map that persists for the rest of the run."
    }

    fn category(&self) -> &'static str {
        "workload"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> HarnessResult<()> {
        let Some(n) = index_arg(ctx, self.usage()) else {
            return Ok(());
        };
        let result = ctx
            .session
            .memo
            .fib(n)
            .with_context(|| format!("fib_map({n})"))?;
        println!("fib_map({}) = {}", n, result);
        Ok(())
    }
}
