//! Binary entrypoint for the `clientid` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match clientid::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
