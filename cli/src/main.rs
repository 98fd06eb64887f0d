//! `jarvi-otp`: derive or check a one-time passcode from the shell.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use jarvi_core::OtpService;
use jarvi_shared::AppConfig;

mod command;
mod logging;

use command::{execute, read_token, Command, USAGE};

/// Placeholder argument meaning "read the token from stdin"
const STDIN_TOKEN: &str = "-";

fn main() -> ExitCode {
    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, event = "command_failed", "Command failed");
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    if command == Command::Help {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    }

    let config = AppConfig::load().context("failed to load configuration")?;
    logging::init(&config.logging)?;

    tracing::info!(
        environment = %config.environment,
        min_token_length = config.otp.token.min_length,
        "Starting jarvi-otp"
    );

    let command = if command.token() == Some(STDIN_TOKEN) {
        command.with_token(read_token(io::stdin().lock())?)
    } else {
        command
    };

    let service = OtpService::new(config.otp);
    let outcome = execute(&service, &command, &mut io::stdout().lock())?;
    Ok(outcome.into())
}
