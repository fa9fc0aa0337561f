//! Benchmark command - time the map's insert, find and sort paths.

use crate::HarnessResult;
use crate::bench::{BenchParams, time_map_insertion};
use crate::map::Map;
use crate::user::{Command, CommandContext};

/// Benchmark command instance.
pub static TIME_MAP_INSERTION: TimeMapInsertionCommand = TimeMapInsertionCommand;

/// Benchmark command implementation.
pub struct TimeMapInsertionCommand;

impl Command for TimeMapInsertionCommand {
    fn name(&self) -> &'static str {
        "time_map_insertion"
    }

    fn description(&self) -> &'static str {
        "measure time to insert, find and sort 2^x map entries"
    }

    fn usage(&self) -> &'static str {
        "Usage: -time_map_insertion <x> <reps>\n\
         \n\
         Inserts 2^x random entries reps times, then times unsorted\n\
         lookup, a full sort and sorted lookup. Requires 1 <= x <= 30\n\
         and 1 <= reps <= 1000; other values do nothing."
    }

    fn category(&self) -> &'static str {
        "workload"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> HarnessResult<()> {
        let (Some(x), Some(reps)) = (ctx.args.integer(0), ctx.args.integer(1)) else {
            return Ok(());
        };
        let (Ok(x), Ok(reps)) = (x, reps) else {
            println!("{}", self.usage());
            return Ok(());
        };
        let Some(params) = BenchParams::new(x, reps) else {
            debug!("time_map_insertion: ignoring x = {}, reps = {}", x, reps);
            return Ok(());
        };

        let seed = ctx.session.config.bench_seed.unwrap_or_else(rand::random);
        let report = time_map_insertion::<Map>(params, seed)?;
        println!("{report}");
        Ok(())
    }
}
