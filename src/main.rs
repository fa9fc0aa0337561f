//! Startle - main entry point.

use std::env;
use std::process::exit;

use startle::config::HarnessConfig;
use startle::session::Session;
use startle::{HarnessResult, console, error, timer, user};

fn try_main(args: &[String]) -> HarnessResult<()> {
    let config = HarnessConfig::load()?;
    console::init_logger(&config)?;
    log::debug!("config: {:?}", config);

    let mut session = Session::new(config);
    user::run(args, &mut session)
}

fn main() {
    timer::init_early();

    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if let Err(e) = try_main(&args) {
        log::error!("{:#}", e);
        console::print_all();
        eprintln!("error: {:#}", e);
        exit(error::exit_code(&e));
    }
}
