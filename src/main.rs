mod cli;
mod config;
mod terminal;

use std::panic;
use std::process::ExitCode;
use std::thread;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use cli::Cli;
use config::MetadataConfig;
use filter_resampler::{run, Outcome, ResampleError};
use terminal::TerminalCollaborator;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    // Panics are logged as internal errors instead of the default backtrace.
    panic::set_hook(Box::new(|info| log::error!("internal error: {info}")));

    exit_code(panic::catch_unwind(|| try_main(cli)))
}

fn exit_code(result: thread::Result<Result<Outcome>>) -> ExitCode {
    match result {
        Ok(Ok(Outcome::Written(_))) => ExitCode::SUCCESS,
        Ok(Ok(Outcome::Cancelled)) => {
            eprintln!("Cancelled: nothing written.");
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            // Conversion failures were already shown by the collaborator.
            if e.downcast_ref::<ResampleError>().is_none() {
                log::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
        Err(_) => {
            eprintln!("Internal error: the conversion was aborted, nothing written.");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<Outcome> {
    let metadata = MetadataConfig::from_cli(&cli)?;
    let mut collab = TerminalCollaborator::from_cli(cli, metadata);
    Ok(run(&mut collab)?)
}
