//! Log command - print the in-memory log.

use crate::HarnessResult;
use crate::console::{self, Tag};
use crate::user::{Command, CommandContext};

/// Log command instance.
pub static LOG: LogCommand = LogCommand;

/// Log command implementation.
pub struct LogCommand;

impl Command for LogCommand {
    fn name(&self) -> &'static str {
        "log"
    }

    fn description(&self) -> &'static str {
        "print the log"
    }

    fn usage(&self) -> &'static str {
        "Usage: -log [tag]\n\
         \n\
         Without arguments: prints every retained log entry.\n\
         With a tag: prints only the entries carrying that tag."
    }

    fn category(&self) -> &'static str {
        "debug"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> HarnessResult<()> {
        match ctx.args.get(0) {
            None => {
                console::print_all();
            }
            Some(text) => match Tag::parse(text) {
                Some(tag) => {
                    if console::print_tagged(tag) == 0 {
                        println!("No entries tagged #{}.", tag);
                    }
                }
                None => println!("log: `{}` is not a valid tag", text),
            },
        }
        Ok(())
    }
}
