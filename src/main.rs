use clap::Parser;
use std::process::ExitCode;
use trierouter::cli::{run_cli, Cli};
use trierouter::otel::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Warning: {e}");
    }

    let mut stdout = std::io::stdout().lock();
    match run_cli(&cli, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
