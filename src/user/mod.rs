//! Command system - registry, dispatcher and command-line front end.
//!
//! # Architecture
//!
//! - `command.rs` - Defines the `Command` trait and execution context
//! - `registry.rs` - Static command table and prefix dispatch
//! - `frontend.rs` - Splits process arguments into command invocations
//! - `commands/` - Individual command implementations
//!
//! # Adding a New Command
//!
//! 1. Create a new file in `commands/` (e.g., `commands/mycommand.rs`)
//! 2. Define a struct and implement the `Command` trait
//! 3. Export a static instance: `pub static MYCOMMAND: MyCommand = MyCommand;`
//! 4. Add to `commands/mod.rs`: `pub mod mycommand;` and `pub use mycommand::MYCOMMAND;`
//! 5. Register in `registry.rs` COMMANDS array: `&commands::MYCOMMAND,`
//!
//! Dispatch matches prefixes in table order, so where a new command goes in
//! the table decides which abbreviations it wins.

pub mod command;
pub mod commands;
pub mod frontend;
pub mod registry;

pub use command::{Args, Command, CommandContext};
pub use frontend::{Invocation, Invocations, invocations, run};
pub use registry::{dispatch, find_command};
