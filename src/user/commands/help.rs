//! Help command - displays available commands and their usage.

use crate::HarnessResult;
use crate::user::{Command, CommandContext};

/// Help command instance.
pub static HELP: HelpCommand = HelpCommand;

/// Help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "show available commands or help for a specific command"
    }

    fn usage(&self) -> &'static str {
        "Usage: -help [command]\n\
         \n\
         Without arguments: lists all available commands.\n\
         With a command name or prefix: shows detailed help for that command."
    }

    fn category(&self) -> &'static str {
        "general"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> HarnessResult<()> {
        match ctx.args.get(0) {
            Some(name) => show_command_help(name),
            None => show_all_commands(),
        }
        Ok(())
    }
}

fn show_command_help(name: &str) {
    match crate::user::registry::find_command(name) {
        Some(cmd) => {
            println!("Command: -{}", cmd.name());
            println!("{}", cmd.usage());
        }
        None => {
            println!("Unknown command: {}", name);
            println!("Type '-help' to see available commands.");
        }
    }
}

fn show_all_commands() {
    println!("Available commands:\n");

    let commands = crate::user::registry::all_commands();

    // Collect unique categories
    let mut categories: Vec<&'static str> = Vec::new();
    for cmd in commands {
        let cat = cmd.category();
        if !categories.contains(&cat) {
            categories.push(cat);
        }
    }

    // Sort categories (general first, then alphabetically)
    categories.sort_by(|a, b| match (*a == "general", *b == "general") {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.cmp(b),
    });

    for category in categories {
        println!("[{}]", category);
        for cmd in commands.iter().filter(|cmd| cmd.category() == category) {
            println!("  -{:20} {}", cmd.name(), cmd.description());
        }
        println!();
    }

    println!("Commands may be abbreviated; the first match in table order runs.");
    println!("Type '-help <command>' for detailed usage.");
}
