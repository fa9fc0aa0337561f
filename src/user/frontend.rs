//! Command-line front end.
//!
//! Process arguments are scanned left to right. A token starting with
//! [`COMMAND_PREFIX`] opens a new command (the marker is stripped) and closes
//! the one before it; other tokens become arguments of the open command, up
//! to [`MAX_COMMAND_ARGS`]. Empty tokens are skipped. Tokens seen before the
//! first command, such as the program name, belong to no command.

use crate::HarnessResult;
use crate::config::{COMMAND_PREFIX, MAX_COMMAND_ARGS};
use crate::session::Session;
use crate::user::command::Args;
use crate::user::registry;

/// One command name with its collected arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: Args<'a>,
}

/// Iterator over the invocations in an argument list, in order.
pub struct Invocations<'a> {
    tokens: std::slice::Iter<'a, String>,
    open: Option<Invocation<'a>>,
}

impl<'a> Iterator for Invocations<'a> {
    type Item = Invocation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for token in self.tokens.by_ref() {
            if token.is_empty() {
                continue;
            }
            if let Some(name) = token.strip_prefix(COMMAND_PREFIX) {
                let next = Invocation {
                    name,
                    args: Args::new(),
                };
                if let Some(done) = self.open.replace(next) {
                    return Some(done);
                }
            } else if let Some(open) = self.open.as_mut() {
                if !open.args.push(token) {
                    debug!(
                        "-{}: dropping argument `{}` beyond the first {}",
                        open.name, token, MAX_COMMAND_ARGS
                    );
                }
            }
        }
        self.open.take()
    }
}

/// Split `tokens` into command invocations.
pub fn invocations(tokens: &[String]) -> Invocations<'_> {
    Invocations {
        tokens: tokens.iter(),
        open: None,
    }
}

/// Dispatch every invocation in `tokens`, in order.
///
/// Unknown names are reported and skipped. The first command error stops
/// the run and is returned; later invocations are not executed.
pub fn run(tokens: &[String], session: &mut Session) -> HarnessResult<()> {
    for invocation in invocations(tokens) {
        let name = invocation.name;
        if !registry::dispatch(name, invocation.args, session)? {
            warn!("unknown command `{}`", name);
            println!("Unknown command: {}", name);
            println!("Type '-help' to see available commands.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn collect(list: &[&str]) -> Vec<(String, Vec<String>)> {
        let tokens = tokens(list);
        invocations(&tokens)
            .map(|inv| {
                (
                    inv.name.to_string(),
                    inv.args.iter().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    fn owned(name: &str, args: &[&str]) -> (String, Vec<String>) {
        (name.to_string(), args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_groups_in_order() {
        assert_eq!(
            collect(&["-a", "x", "y", "-b", "z"]),
            [owned("a", &["x", "y"]), owned("b", &["z"])]
        );
    }

    #[test]
    fn test_program_name_and_empty_tokens_are_ignored() {
        assert_eq!(
            collect(&["./startle", "", "-fib", "", "10", "-log"]),
            [owned("fib", &["10"]), owned("log", &[])]
        );
        assert!(collect(&["./startle", "stray"]).is_empty());
        assert!(collect(&[]).is_empty());
    }

    #[test]
    fn test_arguments_beyond_bound_are_dropped() {
        assert_eq!(
            collect(&["-a", "1", "2", "3", "4", "5", "6", "-b"]),
            [owned("a", &["1", "2", "3", "4"]), owned("b", &[])]
        );
    }

    #[test]
    fn test_bare_marker_opens_empty_name() {
        assert_eq!(collect(&["-", "x"]), [owned("", &["x"])]);
    }

    #[test]
    fn test_run_skips_unknown_and_stops_on_error() {
        let mut session = Session::default();
        assert!(run(&tokens(&["prog", "-nope", "-fib_map", "10"]), &mut session).is_ok());
        assert_eq!(session.memo.len(), 9);

        let err = run(&tokens(&["prog", "-fib_map", "93", "-fib_map", "20"]), &mut session);
        assert!(err.is_err());
        // fib_map 20 never ran.
        assert_eq!(session.memo.len(), 9);
    }

    #[test]
    fn test_negative_looking_argument_opens_a_command() {
        assert_eq!(
            collect(&["-fib", "-1"]),
            [owned("fib", &[]), owned("1", &[])]
        );
    }
}
