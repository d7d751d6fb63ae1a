//! `mdsweep` binary entry point.

use clap::Parser;
use mdsweep_cli::CliArgs;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match mdsweep_cli::app::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mdsweep: {err}");
            ExitCode::FAILURE
        }
    }
}
