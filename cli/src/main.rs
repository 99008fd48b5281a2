//! `protrans` entrypoint.

use std::io::Write;

use clap::Parser;
use protrans_cli::cli::Cli;
use protrans_cli::commands::run;
use protrans_cli::error::Result;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let exit_code = exit_code_for_run_result(run(&cli, &mut stdout), &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            if writeln!(stderr, "error: {err}").is_err() {
                // Nowhere left to report the failure.
            }
            1
        }
    }
}
