//! formkit CLI - main entry point.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod definition;

use commands::{Cli, Commands};

/// Process exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const INVALID: u8 = 1;
    pub const ERROR: u8 = 2;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log = formkit_log::Config::from_env();
    if let Some(level) = &cli.log_level {
        log = log.with_level(level.clone());
    }
    if let Err(e) = formkit_log::init_with(log) {
        eprintln!("error: {e}");
        return ExitCode::from(ExitCodes::ERROR);
    }

    let result = match &cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Fields(args) => commands::fields::execute(args),
    };

    match result {
        Ok(true) => ExitCode::from(ExitCodes::SUCCESS),
        Ok(false) => ExitCode::from(ExitCodes::INVALID),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(ExitCodes::ERROR)
        }
    }
}
