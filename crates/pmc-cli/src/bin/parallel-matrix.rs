use std::io;
use std::process::ExitCode;

use clap::Parser;
use pmc_cli::logging::setup_tracing;
use pmc_cli::{run, Cli};
use pmc_matrix::OsThreadSpawner;
use tracing::error;

fn main() -> ExitCode {
    setup_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, OsThreadSpawner, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
