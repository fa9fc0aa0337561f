//! Watch command - flag log entries carrying a tag as they are written.

use crate::HarnessResult;
use crate::config::LOG_TAG_WIDTH;
use crate::console::{self, Tag};
use crate::user::{Command, CommandContext};

/// Watch command instance.
pub static WATCH: WatchCommand = WatchCommand;

/// Watch command implementation.
pub struct WatchCommand;

impl Command for WatchCommand {
    fn name(&self) -> &'static str {
        "watch"
    }

    fn description(&self) -> &'static str {
        "report when a log entry with the given tag is written"
    }

    fn usage(&self) -> &'static str {
        "Usage: -watch <tag> [off]\n\
         \n\
         Arms a watch on a log tag; every later entry with that tag is\n\
         announced on stderr. `off` disarms it. Tags are shown by -log."
    }

    fn category(&self) -> &'static str {
        "debug"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> HarnessResult<()> {
        let Some(text) = ctx.args.get(0) else {
            println!("{}", self.usage());
            return Ok(());
        };
        let Some(tag) = Tag::parse(text) else {
            println!(
                "watch: invalid tag `{}`: expected {} characters, a lowercase letter followed by lowercase letters or digits",
                text, LOG_TAG_WIDTH
            );
            return Ok(());
        };

        let flag = ctx.args.get(1) != Some("off");
        console::set_log_watch(tag, flag);
        info!("watch #{} {}", tag, if flag { "armed" } else { "disarmed" });
        Ok(())
    }
}
