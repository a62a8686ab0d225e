use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tyres_cli::args::CliArgs;
use tyres_cli::driver;

fn main() -> Result<ExitCode> {
    tyres::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let outcome = driver::run(&args)?;

    let stdout = std::io::stdout();
    driver::write_reports(&mut stdout.lock(), &outcome.reports, args.pretty)?;

    if outcome.failures == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
