//! Runs the harness self-tests under `cargo test`.

use startle::session::Session;
use startle::tests::SUITES;
use startle::user;

#[test]
fn registered_suites_pass() {
    let stats = unittest::test_run("", SUITES);
    assert!(stats.total > 0);
    assert_eq!(stats.failed, 0, "{stats:?}");
}

#[test]
fn filter_selects_one_suite() {
    let all: usize = SUITES.iter().map(|suite| suite.tests.len()).sum();
    let stats = unittest::test_run("dispatch", SUITES);
    assert!(stats.total > 0 && stats.total < all);
    assert_eq!(stats.failed, 0);
}

#[test]
fn test_command_runs_through_the_dispatcher() {
    let args: Vec<String> = ["startle", "-te", "fib_known"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut session = Session::default();
    assert!(user::run(&args, &mut session).is_ok());
}

#[test]
fn fib_map_commands_share_the_memo_table() {
    let args: Vec<String> = ["startle", "-fib_map", "30", "-fib_m", "30", "-fib", "12"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut session = Session::default();
    user::run(&args, &mut session).unwrap();
    assert_eq!(session.memo.misses(), 29);
    assert_eq!(session.memo.hits(), 28);
}

#[test]
fn invalid_benchmark_parameters_do_nothing() {
    let args: Vec<String> = ["startle", "-time_map_insertion", "0", "5", "-time", "4", "5000"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut session = Session::default();
    assert!(user::run(&args, &mut session).is_ok());
}
