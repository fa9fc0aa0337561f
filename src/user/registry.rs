//! Command registry - static command table and prefix dispatch.

use anyhow::Context;

use crate::HarnessResult;
use crate::session::Session;
use crate::user::command::{Args, Command, CommandContext};
use crate::user::commands;

/// Static array of all registered commands.
///
/// Order matters: a name that prefixes several entries runs the first one.
/// `fib` must stay ahead of `fib_map` and `test` ahead of
/// `time_map_insertion`.
static COMMANDS: &[&dyn Command] = &[
    &commands::TEST,
    &commands::LOG,
    &commands::WATCH,
    &commands::FIB,
    &commands::FIB_MAP,
    &commands::TIME_MAP_INSERTION,
    &commands::HELP,
];

/// Whether `name` selects the entry called `entry`.
///
/// `name` must be a non-empty byte prefix of `entry`; equal names are the
/// exact-match case.
pub fn name_matches(entry: &str, name: &str) -> bool {
    !name.is_empty() && entry.as_bytes().starts_with(name.as_bytes())
}

/// First entry of `table` selected by `name`.
pub fn find_command_in(
    table: &[&'static dyn Command],
    name: &str,
) -> Option<&'static dyn Command> {
    table
        .iter()
        .copied()
        .find(|cmd| name_matches(cmd.name(), name))
}

/// Find a registered command by name or prefix.
pub fn find_command(name: &str) -> Option<&'static dyn Command> {
    find_command_in(COMMANDS, name)
}

/// Get all registered commands.
pub fn all_commands() -> &'static [&'static dyn Command] {
    COMMANDS
}

/// Run the first entry of `table` selected by `name`.
///
/// Returns `Ok(false)` without doing anything when no entry matches. Errors
/// from the command propagate with the command name as context.
pub fn dispatch_in(
    table: &[&'static dyn Command],
    name: &str,
    args: Args<'_>,
    session: &mut Session,
) -> HarnessResult<bool> {
    let Some(cmd) = find_command_in(table, name) else {
        return Ok(false);
    };
    if cmd.name() != name {
        debug!("`{}` resolved to `{}`", name, cmd.name());
    }

    let mut ctx = CommandContext {
        command: name,
        args,
        session,
    };
    cmd.execute(&mut ctx)
        .with_context(|| format!("command `{}`", cmd.name()))?;
    Ok(true)
}

/// Run the registered command selected by `name`.
pub fn dispatch(name: &str, args: Args<'_>, session: &mut Session) -> HarnessResult<bool> {
    dispatch_in(COMMANDS, name, args, session)
}
