//! Maximum sandwiches deliverable CLI
//!
//! Usage: dsap4 <-r|-m|-i> <filename>
//! Example: dsap4 --memoized deliveries.txt
//!
//! Prints the answer without a trailing newline.

use dsap_solvers::app::runner::{SandwichDelivery, report, run};
use std::env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = run::<SandwichDelivery>(&args);

    match report::<SandwichDelivery>(&result, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
