//! Largest empty square CLI
//!
//! Usage: dsap1 <-r|-m|-i> <filename>
//! Example: dsap1 --memoized matrix.txt
//!
//! The recursive strategy is exponential; use it on small matrices only.
//!
//! Prints the answer without a trailing newline. Set `RUST_LOG=debug` to
//! see which strategy ran and how long it took.

use dsap_solvers::app::runner::{EmptySquare, report, run};
use std::env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = run::<EmptySquare>(&args);

    match report::<EmptySquare>(&result, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
