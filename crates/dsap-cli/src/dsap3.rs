//! Highest-ability wizard team CLI
//!
//! Usage: dsap3 <-r|-m|-i> <filename>
//! Example: dsap3 --memoized guild.txt
//!
//! Prints the answer without a trailing newline. Set `RUST_LOG=debug` to
//! see which strategy ran and how long it took.

use dsap_solvers::app::runner::{WizardTeam, report, run};
use std::env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = run::<WizardTeam>(&args);

    match report::<WizardTeam>(&result, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
